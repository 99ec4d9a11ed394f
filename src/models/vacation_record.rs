//! Vacation record model and related types.
//!
//! This module defines the [`VacationRecord`] struct, the [`VacationStatus`]
//! state machine, and the transient [`VacationRequest`] submitted by an
//! employee before a record exists.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Whether a vacation draws on the paid entitlement or is unpaid leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VacationType {
    /// Paid vacation, debited from the yearly balance with a payment amount.
    Paid,
    /// Unpaid leave, no balance debit and no payment.
    Unpaid,
}

/// The lifecycle status of a vacation record.
///
/// Valid transitions: `Pending → {Approved, Rejected, Cancelled}` and
/// `Approved → Finished` (via the auto-finish job once the end date has
/// passed). `Finished`, `Rejected` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VacationStatus {
    /// Submitted and awaiting an HR response.
    Pending,
    /// Approved by HR; days remain debited.
    Approved,
    /// Rejected by HR; days were credited back.
    Rejected,
    /// Cancelled by the employee; days were credited back.
    Cancelled,
    /// Past its end date, closed by the auto-finish job.
    Finished,
}

impl VacationStatus {
    /// Returns true if no further transition is allowed from this status.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Rejected | Self::Cancelled | Self::Finished)
    }

    /// Returns true if an HR response (approve/reject) is allowed.
    ///
    /// Only `Pending` records accept a response.
    pub fn accepts_response(self) -> bool {
        self == Self::Pending
    }
}

/// A stored vacation record belonging to one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VacationRecord {
    /// Unique identifier for the record.
    pub id: String,
    /// The employee this record belongs to.
    pub employee_id: String,
    /// First day of the vacation (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the vacation (inclusive). Always >= `start_date`.
    pub end_date: NaiveDate,
    /// Paid or unpaid.
    pub vacation_type: VacationType,
    /// Current lifecycle status.
    pub status: VacationStatus,
    /// Payment computed at submission time, if the vacation is paid.
    #[serde(default)]
    pub payment_amount: Option<Decimal>,
    /// Optional comment left by the responding manager.
    #[serde(default)]
    pub manager_comment: Option<String>,
}

impl VacationRecord {
    /// The inclusive number of vacation days covered by this record.
    ///
    /// A one-day vacation (start == end) counts as 1.
    pub fn days_count(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Returns true if this record intersects the given inclusive range.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.end_date && end >= self.start_date
    }
}

/// A vacation request as submitted by an employee, before any record exists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VacationRequest {
    /// Requested first day (inclusive).
    pub start_date: NaiveDate,
    /// Requested last day (inclusive).
    pub end_date: NaiveDate,
    /// Paid or unpaid.
    pub vacation_type: VacationType,
}

impl VacationRequest {
    /// The inclusive number of days requested.
    pub fn days_count(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Validates the internal consistency of the request.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRequest`] when the end date precedes
    /// the start date.
    pub fn validate(&self) -> EngineResult<()> {
        if self.end_date < self.start_date {
            return Err(EngineError::InvalidRequest {
                message: format!(
                    "end date {} is before start date {}",
                    self.end_date, self.start_date
                ),
            });
        }
        Ok(())
    }
}
