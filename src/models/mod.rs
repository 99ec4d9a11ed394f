//! Core data models for the Vacation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod check_result;
mod employee;
mod payroll_record;
mod vacation_balance;
mod vacation_record;

pub use check_result::VacationCheckResult;
pub use employee::{Employee, EmployeeRole};
pub use payroll_record::PayrollRecord;
pub use vacation_balance::VacationBalance;
pub use vacation_record::{VacationRecord, VacationRequest, VacationStatus, VacationType};
