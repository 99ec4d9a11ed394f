//! Vacation payment calculation based on average daily earnings.

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

use crate::config::VacationPolicy;
use crate::models::{Employee, VacationRequest, VacationStatus, VacationType};

use super::unpaid_leave_days;

/// Reasons the payment calculation can fail.
///
/// These are business outcomes, not infrastructure errors: the checker
/// turns them into an unavailable verdict with the same message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// The employee has no payroll history to average over.
    #[error("No payroll records found for payment calculation.")]
    NoPayrollRecords,
    /// Subtracting unpaid days left a non-positive earning period.
    #[error("Invalid corrected period for payment calculation.")]
    InvalidCorrectedPeriod,
}

/// The breakdown of a successful payment calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentCalculation {
    /// Net income summed over the selected payroll window.
    pub total_income: Decimal,
    /// Inclusive day span of the selected payroll window.
    pub period_days: i64,
    /// Unpaid-vacation days subtracted from the span.
    pub unpaid_days_subtracted: i64,
    /// `period_days − unpaid_days_subtracted`; always positive.
    pub corrected_days: i64,
    /// `total_income / corrected_days`, unrounded.
    pub average_daily_earnings: Decimal,
    /// Final payment: average daily earnings times the inclusive requested
    /// day count, rounded to 2 decimals half-away-from-zero.
    pub payment_amount: Decimal,
}

/// Computes the payment for a paid vacation request.
///
/// The calculation:
/// 1. takes the most recent payroll records (up to the policy window of 12)
///    ordered by period start descending;
/// 2. sums their net pay;
/// 3. measures the inclusive day span from the earliest selected period
///    start to the latest selected period end;
/// 4. when the employee's total unpaid leave in the current balance period
///    exceeds the policy threshold, subtracts the unpaid-vacation days of
///    finished unpaid records ending on or after that earliest start;
/// 5. divides income by the corrected day count to get average daily
///    earnings, then multiplies by the requested inclusive day count.
///
/// # Errors
///
/// Returns [`PaymentError::NoPayrollRecords`] when the employee has no
/// payroll history, and [`PaymentError::InvalidCorrectedPeriod`] when the
/// corrected day count is not positive.
pub fn calculate_payment_amount(
    request: &VacationRequest,
    employee: &Employee,
    policy: &VacationPolicy,
) -> Result<PaymentCalculation, PaymentError> {
    let mut payrolls: Vec<_> = employee.payroll_records.iter().collect();
    if payrolls.is_empty() {
        return Err(PaymentError::NoPayrollRecords);
    }
    payrolls.sort_by(|a, b| b.period_start.cmp(&a.period_start));
    let window = &payrolls[..payrolls.len().min(policy.payroll_window)];

    let total_income: Decimal = window.iter().map(|p| p.net_pay).sum();

    let Some(earliest_start) = window.iter().map(|p| p.period_start).min() else {
        return Err(PaymentError::NoPayrollRecords);
    };
    let Some(latest_end) = window.iter().map(|p| p.period_end).max() else {
        return Err(PaymentError::NoPayrollRecords);
    };
    let period_days = (latest_end - earliest_start).num_days() + 1;

    let total_unpaid = unpaid_leave_days(employee);
    let unpaid_days_subtracted = if total_unpaid > policy.unpaid_prorate_threshold {
        employee
            .vacation_records
            .iter()
            .filter(|record| {
                record.status == VacationStatus::Finished
                    && record.vacation_type == VacationType::Unpaid
                    && record.end_date >= earliest_start
            })
            .map(|record| record.days_count())
            .sum()
    } else {
        0
    };

    let corrected_days = period_days - unpaid_days_subtracted;
    if corrected_days <= 0 {
        return Err(PaymentError::InvalidCorrectedPeriod);
    }

    let average_daily_earnings = total_income / Decimal::from(corrected_days);
    let payment_amount = (average_daily_earnings * Decimal::from(request.days_count()))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    Ok(PaymentCalculation {
        total_income,
        period_days,
        unpaid_days_subtracted,
        corrected_days,
        average_daily_earnings,
        payment_amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmployeeRole, PayrollRecord, VacationBalance, VacationRecord};
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_employee() -> Employee {
        Employee {
            id: "emp_001".to_string(),
            name: "Alex Morgan".to_string(),
            email: "alex@example.com".to_string(),
            position: "Developer".to_string(),
            role: EmployeeRole::Employee,
            hire_date: date(2020, 2, 1),
            is_active: true,
            vacation_balances: vec![],
            vacation_records: vec![],
            payroll_records: vec![],
        }
    }

    fn add_payroll(employee: &mut Employee, start: NaiveDate, end: NaiveDate, net: &str) {
        let id = format!("pay_{start}");
        employee.payroll_records.push(PayrollRecord {
            id,
            employee_id: employee.id.clone(),
            period_start: start,
            period_end: end,
            net_pay: dec(net),
        });
    }

    fn paid_request(start: NaiveDate, end: NaiveDate) -> VacationRequest {
        VacationRequest {
            start_date: start,
            end_date: end,
            vacation_type: VacationType::Paid,
        }
    }

    #[test]
    fn test_no_payroll_records_fails() {
        let employee = make_employee();
        let request = paid_request(date(2026, 4, 1), date(2026, 4, 3));
        let result = calculate_payment_amount(&request, &employee, &VacationPolicy::default());
        assert_eq!(result, Err(PaymentError::NoPayrollRecords));
    }

    #[test]
    fn test_single_month_payroll() {
        let mut employee = make_employee();
        // 1000 over January 2026: 31 days → 32.2580…/day
        add_payroll(&mut employee, date(2026, 1, 1), date(2026, 1, 31), "1000");
        let request = paid_request(date(2026, 4, 1), date(2026, 4, 3));

        let calc =
            calculate_payment_amount(&request, &employee, &VacationPolicy::default()).unwrap();
        assert_eq!(calc.period_days, 31);
        assert_eq!(calc.corrected_days, 31);
        // 1000 / 31 * 3 = 96.774… → 96.77
        assert_eq!(calc.payment_amount, dec("96.77"));
    }

    #[test]
    fn test_window_takes_most_recent_twelve() {
        let mut employee = make_employee();
        // 14 monthly records of 100 each; only the 12 most recent count
        for month in 1..=12 {
            add_payroll(
                &mut employee,
                date(2025, month, 1),
                date(2025, month, 28),
                "100",
            );
        }
        add_payroll(&mut employee, date(2026, 1, 1), date(2026, 1, 31), "100");
        add_payroll(&mut employee, date(2026, 2, 1), date(2026, 2, 28), "100");
        let request = paid_request(date(2026, 5, 1), date(2026, 5, 1));

        let calc =
            calculate_payment_amount(&request, &employee, &VacationPolicy::default()).unwrap();
        assert_eq!(calc.total_income, dec("1200"));
        // Window spans 2025-03-01 .. 2026-02-28
        assert_eq!(calc.period_days, 365);
    }

    #[test]
    fn test_payment_scales_with_requested_days() {
        let mut employee = make_employee();
        add_payroll(&mut employee, date(2026, 1, 1), date(2026, 1, 31), "3100");
        // 3100 / 31 = exactly 100/day
        let one_day = paid_request(date(2026, 4, 1), date(2026, 4, 1));
        let five_days = paid_request(date(2026, 4, 1), date(2026, 4, 5));
        let policy = VacationPolicy::default();

        let calc_one = calculate_payment_amount(&one_day, &employee, &policy).unwrap();
        let calc_five = calculate_payment_amount(&five_days, &employee, &policy).unwrap();
        assert_eq!(calc_one.payment_amount, dec("100.00"));
        assert_eq!(calc_five.payment_amount, dec("500.00"));
    }

    #[test]
    fn test_unpaid_days_subtracted_above_threshold() {
        let mut employee = make_employee();
        employee.vacation_balances.push(VacationBalance {
            id: "bal_2026".to_string(),
            employee_id: employee.id.clone(),
            year: 2026,
            total_days: 24,
            used_days: 0,
            bonus_days: 0,
            period_start: date(2025, 12, 1),
            period_end: date(2026, 11, 30),
        });
        // 20 finished unpaid days inside the balance period, ending after
        // the payroll window start
        employee.vacation_records.push(VacationRecord {
            id: "vac_unpaid".to_string(),
            employee_id: employee.id.clone(),
            start_date: date(2026, 1, 5),
            end_date: date(2026, 1, 24),
            vacation_type: VacationType::Unpaid,
            status: VacationStatus::Finished,
            payment_amount: None,
            manager_comment: None,
        });
        add_payroll(&mut employee, date(2026, 1, 1), date(2026, 1, 31), "1100");
        let request = paid_request(date(2026, 5, 1), date(2026, 5, 1));

        let calc =
            calculate_payment_amount(&request, &employee, &VacationPolicy::default()).unwrap();
        assert_eq!(calc.unpaid_days_subtracted, 20);
        assert_eq!(calc.corrected_days, 11);
        // 1100 / 11 = 100/day
        assert_eq!(calc.payment_amount, dec("100.00"));
    }

    #[test]
    fn test_unpaid_days_below_threshold_not_subtracted() {
        let mut employee = make_employee();
        employee.vacation_balances.push(VacationBalance {
            id: "bal_2026".to_string(),
            employee_id: employee.id.clone(),
            year: 2026,
            total_days: 24,
            used_days: 0,
            bonus_days: 0,
            period_start: date(2025, 12, 1),
            period_end: date(2026, 11, 30),
        });
        // Only 10 unpaid days: below the threshold, nothing subtracted
        employee.vacation_records.push(VacationRecord {
            id: "vac_unpaid".to_string(),
            employee_id: employee.id.clone(),
            start_date: date(2026, 1, 5),
            end_date: date(2026, 1, 14),
            vacation_type: VacationType::Unpaid,
            status: VacationStatus::Finished,
            payment_amount: None,
            manager_comment: None,
        });
        add_payroll(&mut employee, date(2026, 1, 1), date(2026, 1, 31), "1000");
        let request = paid_request(date(2026, 5, 1), date(2026, 5, 1));

        let calc =
            calculate_payment_amount(&request, &employee, &VacationPolicy::default()).unwrap();
        assert_eq!(calc.unpaid_days_subtracted, 0);
        assert_eq!(calc.corrected_days, 31);
    }

    #[test]
    fn test_invalid_corrected_period() {
        let mut employee = make_employee();
        employee.vacation_balances.push(VacationBalance {
            id: "bal_2026".to_string(),
            employee_id: employee.id.clone(),
            year: 2026,
            total_days: 24,
            used_days: 0,
            bonus_days: 0,
            period_start: date(2025, 12, 1),
            period_end: date(2026, 11, 30),
        });
        // 31 unpaid days swallow the whole 31-day payroll span
        employee.vacation_records.push(VacationRecord {
            id: "vac_unpaid".to_string(),
            employee_id: employee.id.clone(),
            start_date: date(2026, 1, 1),
            end_date: date(2026, 1, 31),
            vacation_type: VacationType::Unpaid,
            status: VacationStatus::Finished,
            payment_amount: None,
            manager_comment: None,
        });
        add_payroll(&mut employee, date(2026, 1, 1), date(2026, 1, 31), "1000");
        let request = paid_request(date(2026, 5, 1), date(2026, 5, 1));

        let result = calculate_payment_amount(&request, &employee, &VacationPolicy::default());
        assert_eq!(result, Err(PaymentError::InvalidCorrectedPeriod));
    }

    #[test]
    fn test_error_messages() {
        assert!(
            PaymentError::NoPayrollRecords
                .to_string()
                .contains("No payroll")
        );
        assert!(
            PaymentError::InvalidCorrectedPeriod
                .to_string()
                .contains("Invalid corrected period")
        );
    }
}
