//! In-memory implementations of the store contracts.
//!
//! These back the HTTP surface and the test suites. They take the place of
//! the relational store in deployments of the full HR backend; swapping
//! them out means implementing the traits in [`super`] against a database.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use tracing::info;

use crate::error::EngineResult;
use crate::models::{Employee, EmployeeRole, VacationBalance, VacationRecord, VacationStatus};

use super::{
    Cache, EmployeeStore, NotificationSender, RecordFilter, VacationBalanceStore,
    VacationNotification, VacationRecordStore,
};

/// Employee snapshots keyed by id.
#[derive(Default)]
pub struct InMemoryEmployeeStore {
    employees: RwLock<HashMap<String, Employee>>,
}

impl InMemoryEmployeeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an employee.
    pub async fn insert(&self, employee: Employee) {
        self.employees
            .write()
            .await
            .insert(employee.id.clone(), employee);
    }
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn get(&self, employee_id: &str) -> EngineResult<Option<Employee>> {
        Ok(self.employees.read().await.get(employee_id).cloned())
    }

    async fn list_active(&self) -> EngineResult<Vec<Employee>> {
        Ok(self
            .employees
            .read()
            .await
            .values()
            .filter(|e| e.is_active)
            .cloned()
            .collect())
    }

    async fn list_active_by_role(&self, role: EmployeeRole) -> EngineResult<Vec<Employee>> {
        Ok(self
            .employees
            .read()
            .await
            .values()
            .filter(|e| e.is_active && e.role == role)
            .cloned()
            .collect())
    }
}

/// Vacation records keyed by id.
#[derive(Default)]
pub struct InMemoryRecordStore {
    records: RwLock<HashMap<String, VacationRecord>>,
}

impl InMemoryRecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VacationRecordStore for InMemoryRecordStore {
    async fn add(&self, record: VacationRecord) -> EngineResult<VacationRecord> {
        self.records
            .write()
            .await
            .insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn get(&self, record_id: &str) -> EngineResult<Option<VacationRecord>> {
        Ok(self.records.read().await.get(record_id).cloned())
    }

    async fn update(&self, record: VacationRecord) -> EngineResult<Option<VacationRecord>> {
        let mut records = self.records.write().await;
        if !records.contains_key(&record.id) {
            return Ok(None);
        }
        records.insert(record.id.clone(), record.clone());
        Ok(Some(record))
    }

    async fn delete(&self, record_id: &str) -> EngineResult<bool> {
        Ok(self.records.write().await.remove(record_id).is_some())
    }

    async fn list_for_employee(&self, employee_id: &str) -> EngineResult<Vec<VacationRecord>> {
        let mut result: Vec<_> = self
            .records
            .read()
            .await
            .values()
            .filter(|r| r.employee_id == employee_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| a.start_date.cmp(&b.start_date));
        Ok(result)
    }

    async fn list_to_finish(&self, as_of: NaiveDate) -> EngineResult<Vec<VacationRecord>> {
        Ok(self
            .records
            .read()
            .await
            .values()
            .filter(|r| r.status == VacationStatus::Approved && r.end_date < as_of)
            .cloned()
            .collect())
    }

    async fn list_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<VacationRecord>> {
        let mut result: Vec<_> = self
            .records
            .read()
            .await
            .values()
            .filter(|r| r.overlaps(start, end))
            .cloned()
            .collect();
        result.sort_by(|a, b| a.start_date.cmp(&b.start_date));
        Ok(result)
    }

    async fn list_filtered(&self, filter: &RecordFilter) -> EngineResult<Vec<VacationRecord>> {
        let mut result: Vec<_> = self
            .records
            .read()
            .await
            .values()
            .filter(|r| {
                filter
                    .employee_id
                    .as_ref()
                    .is_none_or(|id| &r.employee_id == id)
                    && filter.status.is_none_or(|status| r.status == status)
            })
            .cloned()
            .collect();
        result.sort_by(|a, b| a.start_date.cmp(&b.start_date).then(a.id.cmp(&b.id)));
        if filter.per_page > 0 {
            result = result
                .into_iter()
                .skip(filter.page * filter.per_page)
                .take(filter.per_page)
                .collect();
        }
        Ok(result)
    }
}

/// Vacation balances keyed by id.
#[derive(Default)]
pub struct InMemoryBalanceStore {
    balances: RwLock<HashMap<String, VacationBalance>>,
}

impl InMemoryBalanceStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VacationBalanceStore for InMemoryBalanceStore {
    async fn add(&self, balance: VacationBalance) -> EngineResult<VacationBalance> {
        self.balances
            .write()
            .await
            .insert(balance.id.clone(), balance.clone());
        Ok(balance)
    }

    async fn get(&self, balance_id: &str) -> EngineResult<Option<VacationBalance>> {
        Ok(self.balances.read().await.get(balance_id).cloned())
    }

    async fn get_latest_for_employee(
        &self,
        employee_id: &str,
    ) -> EngineResult<Option<VacationBalance>> {
        Ok(self
            .balances
            .read()
            .await
            .values()
            .filter(|b| b.employee_id == employee_id)
            .max_by_key(|b| b.year)
            .cloned())
    }

    async fn update(&self, balance: VacationBalance) -> EngineResult<Option<VacationBalance>> {
        let mut balances = self.balances.write().await;
        if !balances.contains_key(&balance.id) {
            return Ok(None);
        }
        balances.insert(balance.id.clone(), balance.clone());
        Ok(Some(balance))
    }

    async fn list_for_employee(&self, employee_id: &str) -> EngineResult<Vec<VacationBalance>> {
        let mut result: Vec<_> = self
            .balances
            .read()
            .await
            .values()
            .filter(|b| b.employee_id == employee_id)
            .cloned()
            .collect();
        result.sort_by_key(|b| b.year);
        Ok(result)
    }

    async fn exists_for_year(&self, employee_id: &str, year: i32) -> EngineResult<bool> {
        Ok(self
            .balances
            .read()
            .await
            .values()
            .any(|b| b.employee_id == employee_id && b.year == year))
    }
}

/// A TTL cache over a plain map. Expired entries are dropped lazily on read.
#[derive(Default)]
pub struct InMemoryCache {
    entries: RwLock<HashMap<String, (String, Instant)>>,
}

impl InMemoryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Cache for InMemoryCache {
    async fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.read().await;
        match entries.get(key) {
            Some((value, expires)) if *expires > Instant::now() => Some(value.clone()),
            _ => None,
        }
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) {
        self.entries
            .write()
            .await
            .insert(key.to_string(), (value, Instant::now() + ttl));
    }

    async fn remove(&self, key: &str) {
        self.entries.write().await.remove(key);
    }

    async fn remove_by_prefix(&self, prefix: &str) {
        self.entries
            .write()
            .await
            .retain(|key, _| !key.starts_with(prefix));
    }
}

/// A notification sender that only logs.
///
/// Stands in for the external email transport when the engine runs without
/// one; deliveries always succeed.
#[derive(Default)]
pub struct LoggingNotificationSender;

impl LoggingNotificationSender {
    /// Creates the sender.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationSender for LoggingNotificationSender {
    async fn send_vacation_submitted(
        &self,
        notification: &VacationNotification,
    ) -> EngineResult<()> {
        info!(
            vacation_id = %notification.vacation_id,
            recipient = %notification.recipient_email,
            employee = %notification.employee_name,
            payment = %notification.payment_amount,
            from = %notification.from_date,
            to = %notification.to_date,
            "Vacation submission notification"
        );
        Ok(())
    }
}
