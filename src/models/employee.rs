//! Employee snapshot model and related types.
//!
//! The engine never persists employees; it consumes a fully-hydrated
//! snapshot (balances, records, payroll history loaded) provided by the
//! employee store and emits mutation intents against the other stores.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{PayrollRecord, VacationBalance, VacationRecord};

/// The authorization role attached to an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeRole {
    /// Regular employee with no HR privileges.
    Employee,
    /// HR staff.
    Hr,
    /// Senior HR staff; receives submission notifications.
    SeniorHr,
}

impl EmployeeRole {
    /// The snake_case name used in configuration and diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Hr => "hr",
            Self::SeniorHr => "senior_hr",
        }
    }
}

/// A read-only employee snapshot with its owned collections loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Notification address.
    pub email: String,
    /// Free-text position title (e.g., "Backend Developer").
    pub position: String,
    /// Authorization role.
    pub role: EmployeeRole,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
    /// False once the employee has left the company.
    pub is_active: bool,
    /// Yearly vacation balances, one per anniversary year.
    #[serde(default)]
    pub vacation_balances: Vec<VacationBalance>,
    /// All vacation records, any status.
    #[serde(default)]
    pub vacation_records: Vec<VacationRecord>,
    /// Payroll history.
    #[serde(default)]
    pub payroll_records: Vec<PayrollRecord>,
}

impl Employee {
    /// The current balance: the one with the greatest year, if any.
    pub fn current_balance(&self) -> Option<&VacationBalance> {
        self.vacation_balances.iter().max_by_key(|b| b.year)
    }

    /// The most recent vacation record by end date, if any.
    pub fn last_vacation(&self) -> Option<&VacationRecord> {
        self.vacation_records.iter().max_by_key(|r| r.end_date)
    }

    /// Returns true if a balance for the given year already exists.
    pub fn has_balance_for_year(&self, year: i32) -> bool {
        self.vacation_balances.iter().any(|b| b.year == year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{VacationStatus, VacationType};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_balance(year: i32) -> VacationBalance {
        VacationBalance {
            id: format!("bal_{year}"),
            employee_id: "emp_001".to_string(),
            year,
            total_days: 24,
            used_days: 0,
            bonus_days: 0,
            period_start: date(year, 2, 1),
            period_end: date(year + 1, 1, 31),
        }
    }

    fn make_record(id: &str, end: NaiveDate) -> VacationRecord {
        VacationRecord {
            id: id.to_string(),
            employee_id: "emp_001".to_string(),
            start_date: end - chrono::Days::new(2),
            end_date: end,
            vacation_type: VacationType::Paid,
            status: VacationStatus::Finished,
            payment_amount: None,
            manager_comment: None,
        }
    }

    fn make_employee() -> Employee {
        Employee {
            id: "emp_001".to_string(),
            name: "Alex Morgan".to_string(),
            email: "alex.morgan@example.com".to_string(),
            position: "Backend Developer".to_string(),
            role: EmployeeRole::Employee,
            hire_date: date(2020, 2, 1),
            is_active: true,
            vacation_balances: vec![],
            vacation_records: vec![],
            payroll_records: vec![],
        }
    }

    #[test]
    fn test_current_balance_picks_greatest_year() {
        let mut employee = make_employee();
        employee.vacation_balances = vec![make_balance(2024), make_balance(2026), make_balance(2025)];
        assert_eq!(employee.current_balance().unwrap().year, 2026);
    }

    #[test]
    fn test_current_balance_none_without_balances() {
        let employee = make_employee();
        assert!(employee.current_balance().is_none());
    }

    #[test]
    fn test_last_vacation_picks_latest_end_date() {
        let mut employee = make_employee();
        employee.vacation_records = vec![
            make_record("vac_a", date(2025, 6, 10)),
            make_record("vac_b", date(2025, 11, 3)),
            make_record("vac_c", date(2025, 8, 20)),
        ];
        assert_eq!(employee.last_vacation().unwrap().id, "vac_b");
    }

    #[test]
    fn test_has_balance_for_year() {
        let mut employee = make_employee();
        employee.vacation_balances = vec![make_balance(2025)];
        assert!(employee.has_balance_for_year(2025));
        assert!(!employee.has_balance_for_year(2026));
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(
            serde_json::to_string(&EmployeeRole::SeniorHr).unwrap(),
            "\"senior_hr\""
        );
        assert_eq!(
            serde_json::to_string(&EmployeeRole::Employee).unwrap(),
            "\"employee\""
        );
    }

    #[test]
    fn test_deserialize_employee_with_default_collections() {
        let json = r#"{
            "id": "emp_002",
            "name": "Robin Li",
            "email": "robin.li@example.com",
            "position": "QA Engineer",
            "role": "hr",
            "hire_date": "2023-06-01",
            "is_active": true
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.role, EmployeeRole::Hr);
        assert!(employee.vacation_balances.is_empty());
        assert!(employee.vacation_records.is_empty());
        assert!(employee.payroll_records.is_empty());
    }
}
