//! Vacation eligibility checking.
//!
//! This module contains the stateless decision pipeline that validates a
//! vacation request against an employee snapshot and prices the vacation.
//! Checks run in a fixed order and short-circuit on the first failure; a
//! failing check is a value, never an error.

mod checks;

pub use checks::{AVAILABLE_MESSAGE, check_vacation};
