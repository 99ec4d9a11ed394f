//! Error types for the Vacation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during vacation processing.
//!
//! Business-rule rejections from the eligibility checker are NOT errors;
//! they are returned as [`crate::models::VacationCheckResult`] values. The
//! variants here cover not-found conditions, invalid state transitions, and
//! infrastructure failures at the store/notification boundary.

use thiserror::Error;

use crate::models::VacationStatus;

/// The main error type for the Vacation Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use vacation_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound {
///     employee_id: "emp_042".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: emp_042");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Policy configuration file was not found at the specified path.
    #[error("Policy configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Policy configuration file could not be parsed.
    #[error("Failed to parse policy configuration '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No employee exists with the given id.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The employee id that was not found.
        employee_id: String,
    },

    /// No vacation record exists with the given id.
    #[error("Vacation record not found: {record_id}")]
    RecordNotFound {
        /// The record id that was not found.
        record_id: String,
    },

    /// No vacation balance exists for the employee.
    #[error("No vacation balance found for employee: {employee_id}")]
    BalanceNotFound {
        /// The employee whose balance is missing.
        employee_id: String,
    },

    /// A vacation request failed the eligibility check.
    #[error("Vacation request rejected: {reason}")]
    RequestRejected {
        /// The diagnostic message produced by the checker.
        reason: String,
    },

    /// A status transition was attempted that the state machine forbids.
    #[error("Cannot respond to a vacation request in status {current:?}")]
    InvalidTransition {
        /// The status the record was in when the transition was attempted.
        current: VacationStatus,
    },

    /// No active HR recipient could be resolved for notification.
    #[error("No active employee with role '{role}' found to notify")]
    NoHrRecipient {
        /// The role that was searched for.
        role: String,
    },

    /// A vacation request contained inconsistent data.
    #[error("Invalid vacation request: {message}")]
    InvalidRequest {
        /// A description of what made the request invalid.
        message: String,
    },

    /// The underlying store failed.
    #[error("Store operation '{operation}' failed: {message}")]
    StoreFailure {
        /// The operation that failed.
        operation: String,
        /// A description of the failure.
        message: String,
    },

    /// The outbound notification call failed.
    #[error("Notification to '{recipient}' failed: {message}")]
    NotificationFailure {
        /// The recipient that could not be reached.
        recipient: String,
        /// A description of the transport failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/policy.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Policy configuration file not found: /missing/policy.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse policy configuration '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_employee_not_found_displays_id() {
        let error = EngineError::EmployeeNotFound {
            employee_id: "emp_042".to_string(),
        };
        assert_eq!(error.to_string(), "Employee not found: emp_042");
    }

    #[test]
    fn test_record_not_found_displays_id() {
        let error = EngineError::RecordNotFound {
            record_id: "vac_007".to_string(),
        };
        assert_eq!(error.to_string(), "Vacation record not found: vac_007");
    }

    #[test]
    fn test_request_rejected_displays_reason() {
        let error = EngineError::RequestRejected {
            reason: "Vacation must be requested at least 7 days in advance.".to_string(),
        };
        assert!(error.to_string().contains("7 days"));
    }

    #[test]
    fn test_invalid_transition_displays_status() {
        let error = EngineError::InvalidTransition {
            current: VacationStatus::Finished,
        };
        assert_eq!(
            error.to_string(),
            "Cannot respond to a vacation request in status Finished"
        );
    }

    #[test]
    fn test_no_hr_recipient_displays_role() {
        let error = EngineError::NoHrRecipient {
            role: "senior_hr".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "No active employee with role 'senior_hr' found to notify"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EngineResult<()> {
            Err(EngineError::EmployeeNotFound {
                employee_id: "emp_001".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
