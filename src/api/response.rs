//! Response types for the Vacation Engine API.
//!
//! This module defines the error response structures and the mapping from
//! engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(details: impl Into<String>) -> Self {
        Self {
            code: "MALFORMED_JSON".to_string(),
            message: "Request body is not valid JSON".to_string(),
            details: Some(details.into()),
        }
    }
}

/// An API error paired with its HTTP status.
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    /// The HTTP status to respond with.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl From<EngineError> for ApiErrorResponse {
    fn from(err: EngineError) -> Self {
        let (status, code) = match &err {
            EngineError::EmployeeNotFound { .. } => (StatusCode::NOT_FOUND, "EMPLOYEE_NOT_FOUND"),
            EngineError::RecordNotFound { .. } => (StatusCode::NOT_FOUND, "RECORD_NOT_FOUND"),
            EngineError::BalanceNotFound { .. } => (StatusCode::NOT_FOUND, "BALANCE_NOT_FOUND"),
            EngineError::RequestRejected { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "REQUEST_REJECTED")
            }
            EngineError::NoHrRecipient { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "NO_HR_RECIPIENT")
            }
            EngineError::InvalidTransition { .. } => (StatusCode::CONFLICT, "INVALID_TRANSITION"),
            EngineError::InvalidRequest { .. } => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR")
            }
            EngineError::StoreFailure { .. } => (StatusCode::BAD_GATEWAY, "STORE_FAILURE"),
            EngineError::NotificationFailure { .. } => {
                (StatusCode::BAD_GATEWAY, "NOTIFICATION_FAILURE")
            }
        };
        Self {
            status,
            error: ApiError::new(code, err.to_string()),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VacationStatus;

    #[test]
    fn test_not_found_maps_to_404() {
        let response: ApiErrorResponse = EngineError::EmployeeNotFound {
            employee_id: "emp_001".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.error.code, "EMPLOYEE_NOT_FOUND");
    }

    #[test]
    fn test_rejection_maps_to_422() {
        let response: ApiErrorResponse = EngineError::RequestRejected {
            reason: "too soon".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(response.error.message.contains("too soon"));
    }

    #[test]
    fn test_invalid_transition_maps_to_409() {
        let response: ApiErrorResponse = EngineError::InvalidTransition {
            current: VacationStatus::Finished,
        }
        .into();
        assert_eq!(response.status, StatusCode::CONFLICT);
    }

    #[test]
    fn test_infrastructure_maps_to_502() {
        let response: ApiErrorResponse = EngineError::NotificationFailure {
            recipient: "dana@example.com".to_string(),
            message: "smtp timeout".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_error_body_omits_empty_details() {
        let error = ApiError::new("X", "y");
        let json = serde_json::to_string(&error).unwrap();
        assert!(!json.contains("details"));
    }
}
