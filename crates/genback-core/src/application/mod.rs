//! Application layer for gen-backend.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer sequences the domain layer but holds no data of its
//! own. Dependency lists, layouts, and defaults live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{ScaffoldOutcome, ScaffoldReport, ScaffoldService};

// Re-export port traits (for adapter implementation)
pub use ports::{
    CommandRunner, Filesystem, ProgressReporter, Prompter, SilentReporter, TemplateStore,
};

pub use error::ApplicationError;
