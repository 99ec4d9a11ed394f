//! Request types for the Vacation Engine API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{VacationRequest, VacationStatus, VacationType};
use crate::service::HrDecision;
use crate::store::RecordFilter;

/// Request body for `POST /vacations/check` and `POST /vacations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckRequest {
    /// The requesting employee.
    pub employee_id: String,
    /// Requested first day (inclusive).
    pub start_date: NaiveDate,
    /// Requested last day (inclusive).
    pub end_date: NaiveDate,
    /// Paid or unpaid.
    pub vacation_type: VacationType,
}

/// Submission uses the same shape as a check.
pub type SubmitRequest = CheckRequest;

impl CheckRequest {
    /// The domain-level request carried by this body.
    pub fn to_vacation_request(&self) -> VacationRequest {
        VacationRequest {
            start_date: self.start_date,
            end_date: self.end_date,
            vacation_type: self.vacation_type,
        }
    }
}

/// Request body for `POST /vacations/{id}/response`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RespondRequest {
    /// Approve or reject.
    pub decision: HrDecision,
    /// Optional manager comment stored on the record.
    #[serde(default)]
    pub comment: Option<String>,
}

/// Optional request body for the job endpoints.
///
/// `as_of` overrides the run date; omitted, the jobs run against today.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobRequest {
    /// The date the job should treat as "today".
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Query parameters for `GET /vacations`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListVacationsQuery {
    /// Restrict to one employee.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// Restrict to one status.
    #[serde(default)]
    pub status: Option<VacationStatus>,
    /// Zero-based page index.
    #[serde(default)]
    pub page: usize,
    /// Page size; 0 means no pagination.
    #[serde(default)]
    pub per_page: usize,
}

impl ListVacationsQuery {
    /// The store-level filter carried by these parameters.
    pub fn to_filter(&self) -> RecordFilter {
        RecordFilter {
            employee_id: self.employee_id.clone(),
            status: self.status,
            page: self.page,
            per_page: self.per_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_check_request() {
        let json = r#"{
            "employee_id": "emp_001",
            "start_date": "2026-06-09",
            "end_date": "2026-06-11",
            "vacation_type": "paid"
        }"#;

        let request: CheckRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employee_id, "emp_001");
        assert_eq!(request.vacation_type, VacationType::Paid);
        assert_eq!(request.to_vacation_request().days_count(), 3);
    }

    #[test]
    fn test_deserialize_respond_request_without_comment() {
        let json = r#"{"decision": "approve"}"#;
        let request: RespondRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.decision, HrDecision::Approve);
        assert!(request.comment.is_none());
    }

    #[test]
    fn test_deserialize_job_request() {
        let request: JobRequest = serde_json::from_str(r#"{"as_of": "2026-07-01"}"#).unwrap();
        assert_eq!(
            request.as_of,
            Some(NaiveDate::from_ymd_opt(2026, 7, 1).unwrap())
        );
        let empty: JobRequest = serde_json::from_str("{}").unwrap();
        assert!(empty.as_of.is_none());
    }

    #[test]
    fn test_list_query_defaults_to_unfiltered() {
        let query: ListVacationsQuery = serde_json::from_str("{}").unwrap();
        let filter = query.to_filter();
        assert!(filter.employee_id.is_none());
        assert!(filter.status.is_none());
        assert_eq!(filter.per_page, 0);
    }

    #[test]
    fn test_list_query_parses_status() {
        let json = r#"{"employee_id": "emp_001", "status": "pending", "per_page": 10}"#;
        let query: ListVacationsQuery = serde_json::from_str(json).unwrap();
        assert_eq!(query.status, Some(VacationStatus::Pending));
        assert_eq!(query.employee_id.as_deref(), Some("emp_001"));
        assert_eq!(query.per_page, 10);
    }
}
