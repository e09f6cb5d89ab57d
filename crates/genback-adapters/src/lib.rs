//! Infrastructure adapters for gen-backend.
//!
//! This crate implements the ports defined in `genback-core::application::ports`.
//! It contains all external dependencies and I/O operations, plus the
//! scripted doubles the test suites drive the scaffold with.

pub mod filesystem;
pub mod process;
pub mod prompt;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{RecordedCommand, ScriptedCommandRunner, SystemCommandRunner};
pub use prompt::ScriptedPrompter;
pub use template_store::{DirectoryStore, EmbeddedStore, InMemoryStore};
