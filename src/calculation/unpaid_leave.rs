//! Unpaid-leave counting for the current balance period.

use crate::models::{Employee, VacationStatus, VacationType};

/// Counts the unpaid-leave days taken within the current balance period.
///
/// Only finished, unpaid vacation records whose span lies strictly within
/// the bounds of the employee's most-recent balance period are counted.
/// Returns 0 when the employee has no balance at all.
pub fn unpaid_leave_days(employee: &Employee) -> i64 {
    let Some(balance) = employee.current_balance() else {
        return 0;
    };

    employee
        .vacation_records
        .iter()
        .filter(|record| {
            record.status == VacationStatus::Finished
                && record.vacation_type == VacationType::Unpaid
                && balance.contains_strictly(record.start_date, record.end_date)
        })
        .map(|record| record.days_count())
        .sum()
}
