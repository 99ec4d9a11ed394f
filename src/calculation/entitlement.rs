//! Yearly entitlement calculation with unpaid-leave pro-rating.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::VacationPolicy;
use crate::models::Employee;

use super::{bonus_days_by_experience, unpaid_leave_days};

/// Days in the pro-rating year. The calculation always divides by 365,
/// leap years included.
const PRORATE_YEAR_DAYS: i64 = 365;

/// Computes the total entitled vacation days for the employee's next
/// balance year.
///
/// The entitlement is the policy base (24 by default) plus the experience
/// bonus. When the unpaid-leave days taken in the current balance period
/// exceed the policy threshold (15 by default), the total is pro-rated by
/// `(365 − unpaidDays) / 365` and rounded to the nearest integer,
/// half-away-from-zero.
pub fn entitlement_days(employee: &Employee, today: NaiveDate, policy: &VacationPolicy) -> i32 {
    let base = policy.base_entitlement_days + bonus_days_by_experience(employee, today, policy);
    let unpaid = unpaid_leave_days(employee);

    if unpaid <= policy.unpaid_prorate_threshold {
        return base;
    }

    let prorated = Decimal::from(base) * Decimal::from(PRORATE_YEAR_DAYS - unpaid)
        / Decimal::from(PRORATE_YEAR_DAYS);
    prorated
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i32()
        .unwrap_or(base)
}
