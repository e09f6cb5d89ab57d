// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (carried inside `GenbackError`)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Working directory must be an absolute path: {path}")]
    RelativeWorkingDir { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the project directory: {path}")]
    PathTraversal { path: String },

    #[error("Empty path in project layout")]
    EmptyPath,

    #[error("Duplicate path in project layout: {path}")]
    DuplicatePath { path: String },

    #[error("Invalid package manifest: {reason}")]
    InvalidManifest { reason: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RelativeWorkingDir { path } => vec![
                format!("'{}' is relative", path),
                "Pass an absolute directory, or run from inside the target directory".into(),
            ],
            Self::InvalidManifest { reason } => vec![
                format!("package.json could not be used: {}", reason),
                "Check that the package manager produced a valid package.json".into(),
                "Remove package.json and src/, then run again".into(),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("'{}' must not be empty", field),
                "Check your gen-backend configuration file".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RelativeWorkingDir { .. }
            | Self::InvalidManifest { .. }
            | Self::MissingRequiredField { .. } => ErrorCategory::Validation,
            Self::AbsolutePathNotAllowed { .. }
            | Self::PathTraversal { .. }
            | Self::EmptyPath
            | Self::DuplicatePath { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
