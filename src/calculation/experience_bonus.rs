//! Experience-bonus day calculation.

use chrono::{Datelike, NaiveDate};

use crate::config::VacationPolicy;
use crate::models::Employee;

/// Returns the extra entitled days granted for length of service.
///
/// Years of service are computed by calendar-year subtraction
/// (`today.year − hire.year`), not elapsed full years: an employee hired in
/// December steps up a tier on the following January 1st. This matches the
/// established payroll behavior and the tier thresholds in the policy.
///
/// # Examples
///
/// ```
/// use vacation_engine::calculation::bonus_days_by_experience;
/// use vacation_engine::config::VacationPolicy;
/// use vacation_engine::models::{Employee, EmployeeRole};
/// use chrono::NaiveDate;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Alex Morgan".to_string(),
///     email: "alex@example.com".to_string(),
///     position: "Developer".to_string(),
///     role: EmployeeRole::Employee,
///     hire_date: NaiveDate::from_ymd_opt(2014, 6, 1).unwrap(),
///     is_active: true,
///     vacation_balances: vec![],
///     vacation_records: vec![],
///     payroll_records: vec![],
/// };
/// let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
/// // 2026 − 2014 = 12 years → 5 bonus days
/// assert_eq!(bonus_days_by_experience(&employee, today, &VacationPolicy::default()), 5);
/// ```
pub fn bonus_days_by_experience(
    employee: &Employee,
    today: NaiveDate,
    policy: &VacationPolicy,
) -> i32 {
    let years = today.year() - employee.hire_date.year();
    policy.bonus_days_for_years(years)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmployeeRole;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn employee_hired(hire_date: NaiveDate) -> Employee {
        Employee {
            id: "emp_001".to_string(),
            name: "Alex Morgan".to_string(),
            email: "alex@example.com".to_string(),
            position: "Developer".to_string(),
            role: EmployeeRole::Employee,
            hire_date,
            is_active: true,
            vacation_balances: vec![],
            vacation_records: vec![],
            payroll_records: vec![],
        }
    }

    #[test]
    fn test_tier_boundaries() {
        let policy = VacationPolicy::default();
        let today = date(2026, 6, 15);
        assert_eq!(bonus_days_by_experience(&employee_hired(date(2006, 1, 1)), today, &policy), 10);
        assert_eq!(bonus_days_by_experience(&employee_hired(date(2011, 1, 1)), today, &policy), 7);
        assert_eq!(bonus_days_by_experience(&employee_hired(date(2016, 1, 1)), today, &policy), 5);
        assert_eq!(bonus_days_by_experience(&employee_hired(date(2021, 1, 1)), today, &policy), 3);
        assert_eq!(bonus_days_by_experience(&employee_hired(date(2022, 1, 1)), today, &policy), 0);
    }

    #[test]
    fn test_calendar_year_subtraction_ignores_hire_month() {
        let policy = VacationPolicy::default();
        // Hired December 2021, checked January 2026: 5 "years" despite only
        // a little over 4 elapsed years.
        let employee = employee_hired(date(2021, 12, 20));
        assert_eq!(
            bonus_days_by_experience(&employee, date(2026, 1, 2), &policy),
            3
        );
        // One day earlier, still 2025: 4 years, no bonus.
        assert_eq!(
            bonus_days_by_experience(&employee, date(2025, 12, 31), &policy),
            0
        );
    }

    #[test]
    fn test_new_hire_gets_no_bonus() {
        let policy = VacationPolicy::default();
        let employee = employee_hired(date(2026, 1, 10));
        assert_eq!(
            bonus_days_by_experience(&employee, date(2026, 6, 1), &policy),
            0
        );
    }
}
