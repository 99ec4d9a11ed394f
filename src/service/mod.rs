//! Orchestration services for the Vacation Engine.
//!
//! This module wires the pure checker/calculator onto the store contracts:
//! the balance service owns the yearly balance lifecycle, the record
//! service owns the request lifecycle (submission with compensating
//! rollback, HR response, auto-finish, deletion), and the compensation log
//! makes the rollback sequence an explicit, testable data structure.

mod balance;
mod record;
mod saga;

pub use balance::{BalanceQuery, VacationBalanceService};
pub use record::{HrDecision, VacationRecordService};
pub use saga::{CompensationLog, CompensationStep};
