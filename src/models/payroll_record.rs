//! Payroll record model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One payroll period for one employee, used to derive average daily
/// earnings when pricing a paid vacation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Unique identifier for the payroll record.
    pub id: String,
    /// The employee this payroll belongs to.
    pub employee_id: String,
    /// First day of the pay period (inclusive).
    pub period_start: NaiveDate,
    /// Last day of the pay period (inclusive).
    pub period_end: NaiveDate,
    /// Net pay for the period.
    pub net_pay: Decimal,
}
