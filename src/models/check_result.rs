//! Eligibility check result model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The transient verdict produced by the eligibility checker.
///
/// Never persisted. A failing check is a value, not an error: every
/// business-rule violation yields `is_available == false` with a diagnostic
/// message and a zero payment amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VacationCheckResult {
    /// Whether the request may be submitted.
    pub is_available: bool,
    /// Human-readable verdict, suitable for showing to the requester.
    pub message: String,
    /// Computed payment for paid vacations; zero for unpaid or failed checks.
    pub payment_amount: Decimal,
}

impl VacationCheckResult {
    /// Builds a passing result with the given message and payment.
    pub fn available(message: impl Into<String>, payment_amount: Decimal) -> Self {
        Self {
            is_available: true,
            message: message.into(),
            payment_amount,
        }
    }

    /// Builds a failing result; the payment amount is always zero.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            is_available: false,
            message: message.into(),
            payment_amount: Decimal::ZERO,
        }
    }
}
