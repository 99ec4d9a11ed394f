//! Calculation logic for the Vacation Engine.
//!
//! This module contains the pure functions behind vacation entitlements and
//! payments: experience-bonus lookup, unpaid-leave counting, yearly
//! entitlement with pro-rating, and the average-daily-earnings payment
//! calculation. Nothing here touches a store or performs I/O.

mod entitlement;
mod experience_bonus;
mod payment;
mod unpaid_leave;

pub use entitlement::entitlement_days;
pub use experience_bonus::bonus_days_by_experience;
pub use payment::{PaymentCalculation, PaymentError, calculate_payment_amount};
pub use unpaid_leave::unpaid_leave_days;
