//! Application layer errors.
//!
//! These errors represent failures in orchestration, not domain rules.
//! Domain errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::Step;
use crate::error::ErrorCategory;

/// Errors that occur during scaffold orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The target directory already holds a scaffolded project.
    #[error("A project already exists in this directory ({path} is present)")]
    AlreadyInitialized { path: PathBuf },

    /// An external package-manager command exited unsuccessfully.
    #[error("{step} failed: `{command}` {}", exit_status(.code))]
    CommandFailed {
        step: Step,
        command: String,
        code: Option<i32>,
        output: String,
    },

    /// The package manager could not be started at all.
    #[error("Could not run '{program}': {reason}")]
    CommandUnavailable { program: String, reason: String },

    /// A bundled template payload is absent from the store.
    #[error("Template file missing: {location}")]
    MissingTemplate { name: String, location: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// `package.json` could not be read or written.
    #[error("Could not update {path}: {reason}")]
    ManifestError { path: PathBuf, reason: String },

    /// Reading an answer from the user failed.
    #[error("Prompt failed: {reason}")]
    PromptFailed { reason: String },

    /// Shared adapter state was poisoned.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

fn exit_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with code {code}"),
        None => "was terminated by a signal".into(),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::AlreadyInitialized { .. } => vec![
                "You have already created a project in this directory".into(),
                "If you want to recreate the project, please clear the directory first".into(),
            ],
            Self::CommandFailed { command, .. } => vec![
                format!("Re-run `{}` by hand to see the full log", command),
                "Check your network connection and npm registry settings".into(),
                "Files created before the failure were left in place".into(),
            ],
            Self::CommandUnavailable { program, .. } => vec![
                format!("Ensure '{}' is installed and in your PATH", program),
                "Install Node.js from https://nodejs.org (npm ships with it)".into(),
                "Or pick another program with --package-manager".into(),
            ],
            Self::MissingTemplate { name, .. } => vec![
                format!("The bundled template '{}' could not be found", name),
                "Your gen-backend installation looks incomplete; reinstall it".into(),
                "If you use --templates, check that directory contains every file".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::ManifestError { path, .. } => vec![
                format!("Inspect {} for syntax errors", path.display()),
                "Remove it and src/ to start over".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AlreadyInitialized { .. } => ErrorCategory::Validation,
            Self::CommandFailed { .. } => ErrorCategory::External,
            Self::CommandUnavailable { .. } | Self::MissingTemplate { .. } => {
                ErrorCategory::NotFound
            }
            Self::FilesystemError { .. }
            | Self::ManifestError { .. }
            | Self::PromptFailed { .. }
            | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
