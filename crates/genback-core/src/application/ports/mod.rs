//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `genback-adapters` and
//! `genback-cli` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `CommandRunner`: Package-manager invocations
//!   - `Prompter`: Interactive questions
//!   - `TemplateStore`: Bundled payload retrieval
//!   - `ProgressReporter`: Step notifications
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    CommandRunner, Filesystem, ProgressReporter, Prompter, SilentReporter, TemplateStore,
};

#[cfg(test)]
pub use output::{MockCommandRunner, MockFilesystem, MockPrompter, MockTemplateStore};
