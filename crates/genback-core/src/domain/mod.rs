// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for gen-backend.
//!
//! This module contains pure scaffold logic with no I/O. Filesystem access,
//! process spawning, and prompting are handled via ports (traits) defined in
//! the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, process, or terminal calls
//! - **Data, not code**: dependency lists and layouts live in [`Blueprint`]
//!
pub mod blueprint;
pub mod entities;
pub mod error;
pub mod value_objects;


// Re-exports for convenience
pub use blueprint::{Blueprint, ConfigurationDefaults, ManifestPatch};
pub use entities::{
    answers::{ConfigurationAnswers, DATABASE_NAME_KEY, MONGODB_URL_KEY, SERVER_PORT_KEY},
    context::{CONFIRM_FLAGS, InvocationContext},
    layout::{DirectoryPlan, TemplateEntry, TemplateManifest},
    package::ProjectManifest,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{CommandOutcome, CommandSpec, Step};

