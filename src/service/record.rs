//! Vacation record orchestration service.
//!
//! Owns the request lifecycle: submission (check → debit → persist →
//! notify, with compensating rollback on any downstream failure), the HR
//! response state machine, the auto-finish job, deletion and reads.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::checker::check_vacation;
use crate::config::VacationPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    VacationCheckResult, VacationRecord, VacationRequest, VacationStatus, VacationType,
};
use crate::store::{
    Cache, EmployeeStore, NotificationSender, RecordFilter, VacationNotification,
    VacationRecordStore,
};

use super::balance::VacationBalanceService;
use super::saga::{CompensationLog, CompensationStep};

/// Cache TTL for record reads.
const RECORD_CACHE_TTL: Duration = Duration::from_secs(60);

/// An HR decision on a pending vacation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HrDecision {
    /// Approve the request; the debited days stay consumed.
    Approve,
    /// Reject the request; the debited days are credited back.
    Reject,
}

/// Service orchestrating the vacation record lifecycle.
#[derive(Clone)]
pub struct VacationRecordService {
    records: Arc<dyn VacationRecordStore>,
    employees: Arc<dyn EmployeeStore>,
    notifier: Arc<dyn NotificationSender>,
    cache: Arc<dyn Cache>,
    balance_service: VacationBalanceService,
    policy: Arc<VacationPolicy>,
}

impl VacationRecordService {
    /// Creates the service over the given collaborators.
    pub fn new(
        records: Arc<dyn VacationRecordStore>,
        employees: Arc<dyn EmployeeStore>,
        notifier: Arc<dyn NotificationSender>,
        cache: Arc<dyn Cache>,
        balance_service: VacationBalanceService,
        policy: Arc<VacationPolicy>,
    ) -> Self {
        Self {
            records,
            employees,
            notifier,
            cache,
            balance_service,
            policy,
        }
    }

    /// Runs the eligibility check against a fresh employee snapshot
    /// without submitting anything.
    pub async fn check(
        &self,
        employee_id: &str,
        request: &VacationRequest,
        today: NaiveDate,
    ) -> EngineResult<VacationCheckResult> {
        request.validate()?;
        let snapshot = self.balance_service.employee_snapshot(employee_id).await?;
        Ok(check_vacation(request, &snapshot, today, &self.policy))
    }

    /// The submission workflow.
    ///
    /// Order of operations: eligibility check, HR recipient resolution,
    /// balance debit, record insert (Pending), one notification per
    /// recipient. Every side effect after the debit is recorded in a
    /// [`CompensationLog`]; on any downstream failure the committed steps
    /// are undone in reverse order. The rollback is best-effort, not
    /// atomic with the original mutations.
    pub async fn submit(
        &self,
        employee_id: &str,
        request: VacationRequest,
        today: NaiveDate,
    ) -> EngineResult<VacationRecord> {
        request.validate()?;
        let snapshot = self.balance_service.employee_snapshot(employee_id).await?;

        let check = check_vacation(&request, &snapshot, today, &self.policy);
        if !check.is_available {
            warn!(
                employee_id = %employee_id,
                reason = %check.message,
                "Vacation request failed eligibility check"
            );
            return Err(EngineError::RequestRejected {
                reason: check.message,
            });
        }

        let recipients = self
            .employees
            .list_active_by_role(self.policy.notify_role)
            .await?;
        if recipients.is_empty() {
            return Err(EngineError::NoHrRecipient {
                role: self.policy.notify_role.as_str().to_string(),
            });
        }

        let days = request.days_count();
        let mut log = CompensationLog::new();

        // Optimistic debit before the record exists; the matching credit
        // is the first compensation step.
        self.balance_service.debit_days(employee_id, days).await?;
        log.push(CompensationStep::CreditBalance {
            employee_id: employee_id.to_string(),
            days,
        });

        let record = VacationRecord {
            id: Uuid::new_v4().to_string(),
            employee_id: employee_id.to_string(),
            start_date: request.start_date,
            end_date: request.end_date,
            vacation_type: request.vacation_type,
            status: VacationStatus::Pending,
            payment_amount: match request.vacation_type {
                VacationType::Paid => Some(check.payment_amount),
                VacationType::Unpaid => None,
            },
            manager_comment: None,
        };

        let stored = match self.records.add(record).await {
            Ok(stored) => {
                log.push(CompensationStep::DeleteRecord {
                    record_id: stored.id.clone(),
                });
                stored
            }
            Err(err) => {
                error!(
                    employee_id = %employee_id,
                    error = %err,
                    "Record insert failed, compensating submission"
                );
                self.unwind(log).await;
                return Err(err);
            }
        };

        for recipient in &recipients {
            let notification = VacationNotification {
                vacation_id: stored.id.clone(),
                recipient_email: recipient.email.clone(),
                employee_name: snapshot.name.clone(),
                payment_amount: check.payment_amount,
                from_date: stored.start_date,
                to_date: stored.end_date,
            };
            if let Err(err) = self.notifier.send_vacation_submitted(&notification).await {
                error!(
                    record_id = %stored.id,
                    recipient = %recipient.email,
                    error = %err,
                    "Notification failed, compensating submission"
                );
                self.unwind(log).await;
                return Err(err);
            }
        }

        self.cache.remove_by_prefix("vacation_record:").await;
        info!(
            record_id = %stored.id,
            employee_id = %employee_id,
            days,
            payment = %check.payment_amount,
            "Vacation request submitted"
        );
        Ok(stored)
    }

    /// The HR response workflow, valid only on Pending records.
    ///
    /// Approval is a status update only: the days were already debited at
    /// submission. Rejection updates the status and credits the day count
    /// back.
    pub async fn hr_respond(
        &self,
        record_id: &str,
        decision: HrDecision,
        comment: Option<String>,
    ) -> EngineResult<VacationRecord> {
        let record = self.require_record(record_id).await?;
        if !record.status.accepts_response() {
            warn!(
                record_id = %record_id,
                status = ?record.status,
                "HR response on a non-pending record"
            );
            return Err(EngineError::InvalidTransition {
                current: record.status,
            });
        }

        let mut updated = record;
        updated.status = match decision {
            HrDecision::Approve => VacationStatus::Approved,
            HrDecision::Reject => VacationStatus::Rejected,
        };
        updated.manager_comment = comment;
        let stored = self.persist_update(updated).await?;

        if decision == HrDecision::Reject {
            self.balance_service
                .credit_days(&stored.employee_id, stored.days_count())
                .await?;
        }

        info!(
            record_id = %record_id,
            decision = ?decision,
            "HR responded to vacation request"
        );
        Ok(stored)
    }

    /// Cancels a pending request and credits the debited days back.
    pub async fn cancel(&self, record_id: &str) -> EngineResult<VacationRecord> {
        let record = self.require_record(record_id).await?;
        if record.status != VacationStatus::Pending {
            return Err(EngineError::InvalidTransition {
                current: record.status,
            });
        }

        let mut updated = record;
        updated.status = VacationStatus::Cancelled;
        let stored = self.persist_update(updated).await?;
        self.balance_service
            .credit_days(&stored.employee_id, stored.days_count())
            .await?;

        info!(record_id = %record_id, "Vacation request cancelled");
        Ok(stored)
    }

    /// The auto-finish job: every Approved record whose end date is before
    /// `today` becomes Finished. No balance change; the days stay
    /// consumed. Idempotent: finished records are not picked up again.
    pub async fn auto_finish(&self, today: NaiveDate) -> EngineResult<u32> {
        let due = self.records.list_to_finish(today).await?;
        let mut finished = 0u32;
        for record in due {
            let mut updated = record;
            updated.status = VacationStatus::Finished;
            let id = updated.id.clone();
            self.persist_update(updated).await?;
            info!(record_id = %id, "Vacation auto-finished");
            finished += 1;
        }
        Ok(finished)
    }

    /// The deletion workflow: delete the record, then credit the balance
    /// back by its day count.
    ///
    /// The credit runs for every deletion regardless of the record's
    /// status, so deleting an already-rejected record credits a second
    /// time.
    pub async fn delete(&self, record_id: &str) -> EngineResult<()> {
        let record = self.require_record(record_id).await?;
        let employee_id = record.employee_id.clone();
        let days = record.days_count();

        if !self.records.delete(record_id).await? {
            return Err(EngineError::RecordNotFound {
                record_id: record_id.to_string(),
            });
        }
        self.cache.remove_by_prefix("vacation_record:").await;
        self.balance_service.credit_days(&employee_id, days).await?;

        info!(
            record_id = %record_id,
            employee_id = %employee_id,
            days,
            "Vacation record deleted"
        );
        Ok(())
    }

    /// Fetches one record, cache-assisted.
    pub async fn get(&self, record_id: &str) -> EngineResult<VacationRecord> {
        let key = format!("vacation_record:{record_id}");
        if let Some(cached) = self.cache.get(&key).await {
            if let Ok(record) = serde_json::from_str::<VacationRecord>(&cached) {
                return Ok(record);
            }
        }
        let record = self.require_record(record_id).await?;
        if let Ok(serialized) = serde_json::to_string(&record) {
            self.cache.set(&key, serialized, RECORD_CACHE_TTL).await;
        }
        Ok(record)
    }

    /// Records intersecting the inclusive range, for summary reporting.
    pub async fn list_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<VacationRecord>> {
        self.records.list_between(start, end).await
    }

    /// Paginated filtered listing.
    pub async fn list(&self, filter: &RecordFilter) -> EngineResult<Vec<VacationRecord>> {
        self.records.list_filtered(filter).await
    }

    /// Undoes committed steps in reverse order. Failures are logged and
    /// skipped so the remaining steps still run.
    async fn unwind(&self, log: CompensationLog) {
        for step in log.into_unwind_order() {
            match step {
                CompensationStep::DeleteRecord { record_id } => {
                    if let Err(err) = self.records.delete(&record_id).await {
                        error!(
                            record_id = %record_id,
                            error = %err,
                            "Compensation delete failed"
                        );
                    }
                }
                CompensationStep::CreditBalance { employee_id, days } => {
                    if let Err(err) = self.balance_service.credit_days(&employee_id, days).await {
                        error!(
                            employee_id = %employee_id,
                            error = %err,
                            "Compensation credit failed"
                        );
                    }
                }
            }
        }
    }

    async fn require_record(&self, record_id: &str) -> EngineResult<VacationRecord> {
        self.records
            .get(record_id)
            .await?
            .ok_or_else(|| EngineError::RecordNotFound {
                record_id: record_id.to_string(),
            })
    }

    async fn persist_update(&self, record: VacationRecord) -> EngineResult<VacationRecord> {
        let record_id = record.id.clone();
        let stored =
            self.records
                .update(record)
                .await?
                .ok_or_else(|| EngineError::RecordNotFound {
                    record_id: record_id.clone(),
                })?;
        self.cache
            .remove(&format!("vacation_record:{record_id}"))
            .await;
        Ok(stored)
    }
}
