//! The ordered eligibility check pipeline.

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;

use crate::calculation::calculate_payment_amount;
use crate::config::VacationPolicy;
use crate::models::{Employee, VacationCheckResult, VacationRequest, VacationType};

/// The fixed message returned when every check passes.
pub const AVAILABLE_MESSAGE: &str = "Vacation request is valid and can be submitted.";

/// Everything a single check may look at.
struct CheckContext<'a> {
    request: &'a VacationRequest,
    employee: &'a Employee,
    today: NaiveDate,
    policy: &'a VacationPolicy,
}

/// A single eligibility check: `Some(message)` means failure.
type Check = fn(&CheckContext) -> Option<String>;

/// The pipeline, evaluated in order with short-circuit on first failure.
const CHECKS: &[Check] = &[
    check_lead_time,
    check_max_duration,
    check_minimum_tenure,
    check_overlap,
    check_cooldown,
    check_balance_sufficiency,
];

/// Validates a vacation request against an employee snapshot.
///
/// Runs the ordered checks (lead time, duration, tenure, overlap, cooldown,
/// and for paid requests balance sufficiency and payment calculation),
/// stopping at the first failure. Every failure yields an unavailable
/// result with a diagnostic message and a zero payment; a passing paid
/// request carries the computed payment amount.
///
/// The checker never errors for business outcomes. It assumes a fully
/// hydrated snapshot; loading it is the caller's job.
pub fn check_vacation(
    request: &VacationRequest,
    employee: &Employee,
    today: NaiveDate,
    policy: &VacationPolicy,
) -> VacationCheckResult {
    let ctx = CheckContext {
        request,
        employee,
        today,
        policy,
    };

    for check in CHECKS {
        if let Some(message) = check(&ctx) {
            return VacationCheckResult::unavailable(message);
        }
    }

    // Unpaid requests skip pricing entirely.
    if request.vacation_type == VacationType::Unpaid {
        return VacationCheckResult::available(AVAILABLE_MESSAGE, Decimal::ZERO);
    }

    match calculate_payment_amount(request, employee, policy) {
        Ok(calc) => VacationCheckResult::available(AVAILABLE_MESSAGE, calc.payment_amount),
        Err(err) => VacationCheckResult::unavailable(err.to_string()),
    }
}

/// The start date must be at least the policy lead time away from today.
fn check_lead_time(ctx: &CheckContext) -> Option<String> {
    let notice = (ctx.request.start_date - ctx.today).num_days();
    if notice < ctx.policy.min_lead_time_days {
        return Some(format!(
            "Vacation must be requested at least {} days in advance.",
            ctx.policy.min_lead_time_days
        ));
    }
    None
}

/// The duration cap uses the exclusive difference `end − start`, not the
/// inclusive day count used for balances. A 25-day stay (24-day difference)
/// therefore still passes.
fn check_max_duration(ctx: &CheckContext) -> Option<String> {
    let duration = (ctx.request.end_date - ctx.request.start_date).num_days();
    if duration > ctx.policy.max_duration_days {
        return Some(format!(
            "Vacation cannot be longer than {} days.",
            ctx.policy.max_duration_days
        ));
    }
    None
}

/// The employee must have been hired at least the policy tenure ago.
fn check_minimum_tenure(ctx: &CheckContext) -> Option<String> {
    let tenure_reached = ctx
        .employee
        .hire_date
        .checked_add_months(Months::new(ctx.policy.min_tenure_months))
        .map(|earliest| earliest <= ctx.today)
        .unwrap_or(false);
    if !tenure_reached {
        return Some(format!(
            "Employee must be employed for at least {} months before requesting vacation.",
            ctx.policy.min_tenure_months
        ));
    }
    None
}

/// The requested range must not intersect any existing record, inclusive
/// bounds. No status filter: rejected and cancelled records block too.
fn check_overlap(ctx: &CheckContext) -> Option<String> {
    let conflict = ctx
        .employee
        .vacation_records
        .iter()
        .find(|record| record.overlaps(ctx.request.start_date, ctx.request.end_date));
    conflict.map(|record| {
        format!(
            "Requested vacation overlaps an existing vacation from {} to {}.",
            record.start_date, record.end_date
        )
    })
}

/// Enough time must have passed since the end of the most recent vacation.
fn check_cooldown(ctx: &CheckContext) -> Option<String> {
    let last_end = ctx.employee.last_vacation()?.end_date;
    let blocked = last_end
        .checked_add_months(Months::new(ctx.policy.cooldown_months))
        .map(|until| until > ctx.today)
        .unwrap_or(true);
    if blocked {
        return Some(format!(
            "At least {} months must pass since the end of the previous vacation.",
            ctx.policy.cooldown_months
        ));
    }
    None
}

/// Paid requests must fit within the remaining days of the current balance.
/// A missing balance counts as zero available days.
fn check_balance_sufficiency(ctx: &CheckContext) -> Option<String> {
    if ctx.request.vacation_type == VacationType::Unpaid {
        return None;
    }
    let requested = ctx.request.days_count();
    let remaining = ctx
        .employee
        .current_balance()
        .map(|balance| i64::from(balance.remaining_days()))
        .unwrap_or(0);
    if requested > remaining {
        return Some(format!(
            "Requested {requested} days but only {remaining} days are available."
        ));
    }
    None
}
