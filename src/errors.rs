//! Error types for caseflow
//!
//! Each error type has a corresponding error code for programmatic handling.

use thiserror::Error;

use crate::schemas::Status;

/// Result type alias for caseflow operations
pub type Result<T> = std::result::Result<T, CaseflowError>;

/// Main error type for all caseflow operations
#[derive(Debug, Error)]
pub enum CaseflowError {
    /// A status symbol outside the fixed status set
    #[error("Unknown status: {0}")]
    UnknownStatus(String),

    /// The transition policy rejects the (from, to) pair
    #[error("Invalid transition from {} to {}", .from.label(), .to.label())]
    InvalidTransition { from: Status, to: Status },

    /// The actor already has an open session on another item
    #[error("{actor} already has an active item ({active_item}). Complete or refer it before picking another.")]
    ActorBusy { actor: String, active_item: String },

    /// Malformed input (empty comment, missing actor, duplicate id, ...)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Referenced item does not exist
    #[error("Item not found: {0}")]
    NotFound(String),

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl CaseflowError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            CaseflowError::UnknownStatus(_) => "UNKNOWN_STATUS",
            CaseflowError::InvalidTransition { .. } => "INVALID_TRANSITION",
            CaseflowError::ActorBusy { .. } => "ACTOR_BUSY",
            CaseflowError::Validation(_) => "VALIDATION_ERROR",
            CaseflowError::NotFound(_) => "NOT_FOUND",
            CaseflowError::InvalidJson(_) => "INVALID_JSON",
            CaseflowError::FileNotFound(_) => "FILE_NOT_FOUND",
            CaseflowError::ConfigError(_) => "CONFIG_ERROR",
            CaseflowError::Io(_) => "IO_ERROR",
            CaseflowError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// True for failures caused by the request itself rather than the environment
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            CaseflowError::UnknownStatus(_)
                | CaseflowError::InvalidTransition { .. }
                | CaseflowError::ActorBusy { .. }
                | CaseflowError::Validation(_)
        )
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        CaseflowError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &CaseflowError) -> i32 {
    if error.is_rejection() {
        return 2;
    }
    match error {
        CaseflowError::NotFound(_) => 3,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(CaseflowError::UnknownStatus("x".into()).code(), "UNKNOWN_STATUS");
        assert_eq!(
            CaseflowError::InvalidTransition {
                from: Status::ChReview,
                to: Status::ChComplaintClosed,
            }
            .code(),
            "INVALID_TRANSITION"
        );
        assert_eq!(
            CaseflowError::ActorBusy {
                actor: "alice".into(),
                active_item: "W-1".into(),
            }
            .code(),
            "ACTOR_BUSY"
        );
        assert_eq!(CaseflowError::Validation("x".into()).code(), "VALIDATION_ERROR");
        assert_eq!(CaseflowError::NotFound("x".into()).code(), "NOT_FOUND");
        assert_eq!(CaseflowError::InvalidJson("x".into()).code(), "INVALID_JSON");
        assert_eq!(CaseflowError::FileNotFound("x".into()).code(), "FILE_NOT_FOUND");
        assert_eq!(CaseflowError::ConfigError("x".into()).code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_invalid_transition_message_uses_labels() {
        let err = CaseflowError::InvalidTransition {
            from: Status::ChReview,
            to: Status::ChComplaintClosed,
        };
        assert_eq!(
            err.to_string(),
            "Invalid transition from CH Review to CH Complaint Closed"
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(to_exit_code(&CaseflowError::Validation("x".into())), 2);
        assert_eq!(to_exit_code(&CaseflowError::UnknownStatus("x".into())), 2);
        assert_eq!(to_exit_code(&CaseflowError::NotFound("x".into())), 3);
        assert_eq!(to_exit_code(&CaseflowError::ConfigError("x".into())), 1);
    }

    #[test]
    fn test_wrap_error() {
        let wrapped = CaseflowError::wrap("inner error", "outer context");
        assert_eq!(wrapped.code(), "WRAPPED_ERROR");
        assert!(wrapped.to_string().contains("outer context"));
        assert!(wrapped.to_string().contains("inner error"));
    }
}
