//! Application state for the Vacation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::VacationPolicy;
use crate::service::{VacationBalanceService, VacationRecordService};
use crate::store::{
    Cache, EmployeeStore, InMemoryBalanceStore, InMemoryCache, InMemoryEmployeeStore,
    InMemoryRecordStore, LoggingNotificationSender, NotificationSender, VacationBalanceStore,
    VacationRecordStore,
};

/// Shared application state.
///
/// Contains the services and policy shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    record_service: VacationRecordService,
    balance_service: VacationBalanceService,
    policy: Arc<VacationPolicy>,
}

impl AppState {
    /// Creates application state over the given collaborators.
    pub fn new(
        employees: Arc<dyn EmployeeStore>,
        records: Arc<dyn VacationRecordStore>,
        balances: Arc<dyn VacationBalanceStore>,
        cache: Arc<dyn Cache>,
        notifier: Arc<dyn NotificationSender>,
        policy: VacationPolicy,
    ) -> Self {
        let policy = Arc::new(policy);
        let balance_service = VacationBalanceService::new(
            balances,
            records.clone(),
            employees.clone(),
            cache.clone(),
            policy.clone(),
        );
        let record_service = VacationRecordService::new(
            records,
            employees,
            notifier,
            cache,
            balance_service.clone(),
            policy.clone(),
        );
        Self {
            record_service,
            balance_service,
            policy,
        }
    }

    /// Creates state backed entirely by in-memory stores and a logging
    /// notification sender.
    pub fn in_memory(policy: VacationPolicy) -> Self {
        Self::new(
            Arc::new(InMemoryEmployeeStore::new()),
            Arc::new(InMemoryRecordStore::new()),
            Arc::new(InMemoryBalanceStore::new()),
            Arc::new(InMemoryCache::new()),
            Arc::new(LoggingNotificationSender::new()),
            policy,
        )
    }

    /// The record orchestration service.
    pub fn record_service(&self) -> &VacationRecordService {
        &self.record_service
    }

    /// The balance lifecycle service.
    pub fn balance_service(&self) -> &VacationBalanceService {
        &self.balance_service
    }

    /// The loaded policy.
    pub fn policy(&self) -> &VacationPolicy {
        &self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_in_memory_state_carries_policy() {
        let state = AppState::in_memory(VacationPolicy::default());
        assert_eq!(state.policy().min_lead_time_days, 7);
    }
}
