//! Unified error handling for Genback Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Genback Core operations.
#[derive(Debug, Error, Clone)]
pub enum GenbackError {
    /// Errors from the domain layer (invalid paths, malformed manifests).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl GenbackError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// Captured output of a failed external command, if this error carries one.
    pub fn details(&self) -> Option<&str> {
        match self {
            Self::Application(ApplicationError::CommandFailed { output, .. })
                if !output.trim().is_empty() =>
            {
                Some(output.as_str())
            }
            _ => None,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    External,
    Internal,
}

/// Convenient result type alias.
pub type GenbackResult<T> = Result<T, GenbackError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::domain::Step;

    #[test]
    fn command_failure_exposes_captured_output() {
        let err: GenbackError = ApplicationError::CommandFailed {
            step: Step::Dependencies,
            command: "npm install express".into(),
            code: Some(1),
            output: "npm ERR! network".into(),
        }
        .into();

        assert_eq!(err.details(), Some("npm ERR! network"));
        assert_eq!(err.category(), ErrorCategory::External);
    }

    #[test]
    fn blank_command_output_is_not_a_detail() {
        let err: GenbackError = ApplicationError::CommandFailed {
            step: Step::Initialize,
            command: "npm init --yes".into(),
            code: Some(1),
            output: "  \n".into(),
        }
        .into();

        assert!(err.details().is_none());
    }

    #[test]
    fn already_initialized_is_a_validation_error() {
        let err: GenbackError = ApplicationError::AlreadyInitialized {
            path: PathBuf::from("/srv/app/src"),
        }
        .into();

        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.to_string().contains("/srv/app/src"));
    }

    #[test]
    fn domain_errors_keep_their_category() {
        let err: GenbackError = DomainError::RelativeWorkingDir {
            path: "api".into(),
        }
        .into();

        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.details().is_none());
    }
}
