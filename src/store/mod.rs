//! Collaborator contracts for the Vacation Engine.
//!
//! This module defines the storage abstraction traits that allow different
//! backends to be used interchangeably by the service layer, plus the cache
//! and outbound-notification contracts. The engine itself only ships
//! in-memory implementations; relational persistence and real email
//! delivery live outside the core.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{Employee, EmployeeRole, VacationBalance, VacationRecord, VacationStatus};

mod memory;

pub use memory::{
    InMemoryBalanceStore, InMemoryCache, InMemoryEmployeeStore, InMemoryRecordStore,
    LoggingNotificationSender,
};

/// Filter for paginated vacation-record queries.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    /// Restrict to one employee.
    pub employee_id: Option<String>,
    /// Restrict to one status.
    pub status: Option<VacationStatus>,
    /// Zero-based page index.
    pub page: usize,
    /// Page size; 0 means no pagination.
    pub per_page: usize,
}

/// Read access to employee snapshots.
///
/// The employee aggregate is owned externally; the engine reads hydrated
/// snapshots and never writes employees.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Fetches one employee by id, or `None` when absent.
    async fn get(&self, employee_id: &str) -> EngineResult<Option<Employee>>;

    /// Lists all active employees.
    async fn list_active(&self) -> EngineResult<Vec<Employee>>;

    /// Lists active employees holding the given role.
    async fn list_active_by_role(&self, role: EmployeeRole) -> EngineResult<Vec<Employee>>;
}

/// Persistence for vacation records.
#[async_trait]
pub trait VacationRecordStore: Send + Sync {
    /// Stores a new record and returns it as stored.
    async fn add(&self, record: VacationRecord) -> EngineResult<VacationRecord>;

    /// Fetches one record by id.
    async fn get(&self, record_id: &str) -> EngineResult<Option<VacationRecord>>;

    /// Replaces a stored record; returns `None` when it vanished.
    async fn update(&self, record: VacationRecord) -> EngineResult<Option<VacationRecord>>;

    /// Deletes a record; returns false when it did not exist.
    async fn delete(&self, record_id: &str) -> EngineResult<bool>;

    /// All records for one employee, any status.
    async fn list_for_employee(&self, employee_id: &str) -> EngineResult<Vec<VacationRecord>>;

    /// Approved records whose end date is strictly before `as_of`.
    async fn list_to_finish(&self, as_of: NaiveDate) -> EngineResult<Vec<VacationRecord>>;

    /// Records whose span intersects the inclusive range, for reporting.
    async fn list_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<VacationRecord>>;

    /// Paginated filtered query.
    async fn list_filtered(&self, filter: &RecordFilter) -> EngineResult<Vec<VacationRecord>>;
}

/// Persistence for vacation balances.
#[async_trait]
pub trait VacationBalanceStore: Send + Sync {
    /// Stores a new balance and returns it as stored.
    async fn add(&self, balance: VacationBalance) -> EngineResult<VacationBalance>;

    /// Fetches one balance by id.
    async fn get(&self, balance_id: &str) -> EngineResult<Option<VacationBalance>>;

    /// The employee's balance with the greatest year, if any.
    async fn get_latest_for_employee(
        &self,
        employee_id: &str,
    ) -> EngineResult<Option<VacationBalance>>;

    /// Replaces a stored balance; returns `None` when it vanished.
    async fn update(&self, balance: VacationBalance) -> EngineResult<Option<VacationBalance>>;

    /// All balances for one employee.
    async fn list_for_employee(&self, employee_id: &str) -> EngineResult<Vec<VacationBalance>>;

    /// True when a balance exists for the employee and year.
    async fn exists_for_year(&self, employee_id: &str, year: i32) -> EngineResult<bool>;
}

/// A string-keyed cache used to avoid redundant store reads.
///
/// Never authoritative: every mutation path invalidates, and a miss falls
/// through to the store.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Fetches a cached value.
    async fn get(&self, key: &str) -> Option<String>;

    /// Stores a value with a time-to-live.
    async fn set(&self, key: &str, value: String, ttl: Duration);

    /// Removes one key.
    async fn remove(&self, key: &str);

    /// Removes every key starting with the given prefix.
    async fn remove_by_prefix(&self, prefix: &str);
}

/// The payload of a submission notification, one per HR recipient.
#[derive(Debug, Clone, PartialEq)]
pub struct VacationNotification {
    /// The id of the newly created vacation record.
    pub vacation_id: String,
    /// The recipient's email address.
    pub recipient_email: String,
    /// The requesting employee's display name.
    pub employee_name: String,
    /// The computed payment, zero for unpaid leave.
    pub payment_amount: Decimal,
    /// First day of the vacation.
    pub from_date: NaiveDate,
    /// Last day of the vacation.
    pub to_date: NaiveDate,
}

/// Outbound notification delivery.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Delivers one submission notification.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::NotificationFailure`] when the
    /// transport fails; the orchestration treats any failure here as a
    /// trigger for the compensation path.
    async fn send_vacation_submitted(&self, notification: &VacationNotification)
    -> EngineResult<()>;
}
