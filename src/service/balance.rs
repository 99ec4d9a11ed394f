//! Vacation balance lifecycle service.
//!
//! Owns yearly balance records: anniversary auto-creation, the day-usage
//! debit/credit primitives used by the record workflow, and queries.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Datelike, Days, Months, NaiveDate};
use tracing::{error, info};
use uuid::Uuid;

use crate::calculation::{bonus_days_by_experience, entitlement_days};
use crate::config::VacationPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, EmployeeRole, VacationBalance};
use crate::store::{Cache, EmployeeStore, VacationBalanceStore, VacationRecordStore};

/// Cache TTL for balance reads.
const BALANCE_CACHE_TTL: Duration = Duration::from_secs(60);

/// Filter for balance list queries.
#[derive(Debug, Clone, Default)]
pub struct BalanceQuery {
    /// Restrict to one employee.
    pub employee_id: Option<String>,
    /// Restrict to one anniversary year.
    pub year: Option<i32>,
    /// Restrict to employees holding this role.
    pub role: Option<EmployeeRole>,
    /// Restrict to employees with this position title.
    pub position: Option<String>,
}

/// Service owning the vacation balance lifecycle.
#[derive(Clone)]
pub struct VacationBalanceService {
    balances: Arc<dyn VacationBalanceStore>,
    records: Arc<dyn VacationRecordStore>,
    employees: Arc<dyn EmployeeStore>,
    cache: Arc<dyn Cache>,
    policy: Arc<VacationPolicy>,
}

impl VacationBalanceService {
    /// Creates the service over the given stores.
    pub fn new(
        balances: Arc<dyn VacationBalanceStore>,
        records: Arc<dyn VacationRecordStore>,
        employees: Arc<dyn EmployeeStore>,
        cache: Arc<dyn Cache>,
        policy: Arc<VacationPolicy>,
    ) -> Self {
        Self {
            balances,
            records,
            employees,
            cache,
            policy,
        }
    }

    /// Loads a fully hydrated employee snapshot: the stored employee with
    /// its balances and vacation records attached from their stores.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmployeeNotFound`] when the employee is
    /// absent.
    pub async fn employee_snapshot(&self, employee_id: &str) -> EngineResult<Employee> {
        let employee =
            self.employees
                .get(employee_id)
                .await?
                .ok_or_else(|| EngineError::EmployeeNotFound {
                    employee_id: employee_id.to_string(),
                })?;
        self.hydrate(employee).await
    }

    async fn hydrate(&self, mut employee: Employee) -> EngineResult<Employee> {
        employee.vacation_balances = self.balances.list_for_employee(&employee.id).await?;
        employee.vacation_records = self.records.list_for_employee(&employee.id).await?;
        Ok(employee)
    }

    /// The anniversary balance-creation job.
    ///
    /// For every active employee whose work anniversary falls exactly on
    /// `today` and who does not yet have a balance for this year, creates a
    /// fresh balance covering one year from the anniversary, sized by the
    /// entitlement calculation. An anniversary missed because the job did
    /// not run that day is never created retroactively; that matches the
    /// established scheduler contract.
    ///
    /// Returns the number of balances created. Safe to re-run within the
    /// same day: the per-year existence check makes it idempotent.
    pub async fn auto_update_balances(&self, today: NaiveDate) -> EngineResult<u32> {
        let employees = self.employees.list_active().await?;
        let mut created = 0u32;

        for employee in employees {
            let years_worked = today.year() - employee.hire_date.year();
            if years_worked <= 0 {
                continue;
            }
            let anniversary = employee
                .hire_date
                .checked_add_months(Months::new(12 * years_worked as u32));
            let Some(anniversary) = anniversary else {
                continue;
            };
            if anniversary != today {
                continue;
            }
            if self
                .balances
                .exists_for_year(&employee.id, today.year())
                .await?
            {
                continue;
            }

            let Some(next_anniversary) = anniversary.checked_add_months(Months::new(12)) else {
                continue;
            };
            let snapshot = self.hydrate(employee).await?;
            let balance = VacationBalance {
                id: Uuid::new_v4().to_string(),
                employee_id: snapshot.id.clone(),
                year: today.year(),
                total_days: entitlement_days(&snapshot, today, &self.policy),
                used_days: 0,
                bonus_days: bonus_days_by_experience(&snapshot, today, &self.policy),
                period_start: anniversary,
                period_end: next_anniversary - Days::new(1),
            };

            info!(
                employee_id = %balance.employee_id,
                year = balance.year,
                total_days = balance.total_days,
                bonus_days = balance.bonus_days,
                "Created anniversary vacation balance"
            );
            self.balances.add(balance).await?;
            self.cache
                .remove_by_prefix(&format!("balance:{}", snapshot.id))
                .await;
            created += 1;
        }

        Ok(created)
    }

    /// Adds `days` to the used-day count of the employee's current balance.
    ///
    /// Applied optimistically before the vacation record is persisted; the
    /// submission workflow records the matching credit as a compensation
    /// step.
    pub async fn debit_days(&self, employee_id: &str, days: i64) -> EngineResult<VacationBalance> {
        let mut balance = self.require_latest(employee_id).await?;
        balance.used_days += days as i32;
        let updated = self.persist(balance).await?;
        info!(
            employee_id = %employee_id,
            days,
            used_days = updated.used_days,
            "Debited vacation balance"
        );
        Ok(updated)
    }

    /// Subtracts `days` from the used-day count, clamped at zero.
    ///
    /// Used to undo debits on compensation, HR rejection, cancellation and
    /// deletion.
    pub async fn credit_days(&self, employee_id: &str, days: i64) -> EngineResult<VacationBalance> {
        let mut balance = self.require_latest(employee_id).await?;
        balance.used_days = (balance.used_days - days as i32).max(0);
        let updated = self.persist(balance).await?;
        info!(
            employee_id = %employee_id,
            days,
            used_days = updated.used_days,
            "Credited vacation balance"
        );
        Ok(updated)
    }

    /// Fetches one balance by id.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::BalanceNotFound`] when absent.
    pub async fn get(&self, balance_id: &str) -> EngineResult<VacationBalance> {
        self.balances
            .get(balance_id)
            .await?
            .ok_or_else(|| EngineError::BalanceNotFound {
                employee_id: balance_id.to_string(),
            })
    }

    /// The employee's current balance (greatest year), cache-assisted.
    pub async fn latest_for_employee(&self, employee_id: &str) -> EngineResult<VacationBalance> {
        let key = format!("balance:{employee_id}:latest");
        if let Some(cached) = self.cache.get(&key).await {
            if let Ok(balance) = serde_json::from_str::<VacationBalance>(&cached) {
                return Ok(balance);
            }
        }
        let balance = self.require_latest(employee_id).await?;
        if let Ok(serialized) = serde_json::to_string(&balance) {
            self.cache.set(&key, serialized, BALANCE_CACHE_TTL).await;
        }
        Ok(balance)
    }

    /// Lists balances filtered by employee, year, role and position.
    pub async fn list(&self, query: &BalanceQuery) -> EngineResult<Vec<VacationBalance>> {
        let employees: Vec<Employee> = match &query.employee_id {
            Some(id) => self.employees.get(id).await?.into_iter().collect(),
            None => self.employees.list_active().await?,
        };

        let mut result = Vec::new();
        for employee in employees {
            if query.role.is_some_and(|role| employee.role != role) {
                continue;
            }
            if query
                .position
                .as_ref()
                .is_some_and(|position| &employee.position != position)
            {
                continue;
            }
            let mut balances = self.balances.list_for_employee(&employee.id).await?;
            balances.retain(|b| query.year.is_none_or(|year| b.year == year));
            result.extend(balances);
        }
        Ok(result)
    }

    async fn require_latest(&self, employee_id: &str) -> EngineResult<VacationBalance> {
        match self.balances.get_latest_for_employee(employee_id).await? {
            Some(balance) => Ok(balance),
            None => {
                error!(
                    employee_id = %employee_id,
                    "Balance mutation requested but no balance exists"
                );
                Err(EngineError::BalanceNotFound {
                    employee_id: employee_id.to_string(),
                })
            }
        }
    }

    async fn persist(&self, balance: VacationBalance) -> EngineResult<VacationBalance> {
        let employee_id = balance.employee_id.clone();
        let updated = self.balances.update(balance).await?.ok_or_else(|| {
            EngineError::StoreFailure {
                operation: "update_balance".to_string(),
                message: format!("balance for employee {employee_id} vanished during update"),
            }
        })?;
        self.cache
            .remove_by_prefix(&format!("balance:{employee_id}"))
            .await;
        Ok(updated)
    }
}
