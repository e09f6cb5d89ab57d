//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the scaffold needs from the outside world.
//! `genback-adapters` provides production and test implementations; the CLI
//! crate provides the terminal-facing ones.

use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::{CommandOutcome, CommandSpec, Step};
use crate::error::{GenbackError, GenbackResult};

/// Port for filesystem operations.
///
/// Implemented by:
/// - `genback_adapters::filesystem::LocalFilesystem` (production)
/// - `genback_adapters::filesystem::MemoryFilesystem` (testing)
///
/// All paths handed to the port are absolute (resolved against the
/// invocation's working directory).
#[cfg_attr(test, automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Existing directories
    /// are not an error.
    fn create_dir_all(&self, path: &Path) -> GenbackResult<()>;

    /// Write bytes to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &[u8]) -> GenbackResult<()>;

    /// Read a UTF-8 text file.
    fn read_to_string(&self, path: &Path) -> GenbackResult<String>;

    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Port for running external commands.
///
/// Implemented by:
/// - `genback_adapters::process::SystemCommandRunner` (production)
/// - `genback_adapters::process::ScriptedCommandRunner` (testing)
///
/// A command that ran and exited non-zero is `Ok` with a failed
/// [`CommandOutcome`]; `Err` is reserved for commands that could not be
/// started. Blocks until the process exits; there is no timeout.
#[cfg_attr(test, automock)]
pub trait CommandRunner: Send + Sync {
    fn run(
        &self,
        command: &CommandSpec,
        label: &str,
        working_dir: &Path,
    ) -> GenbackResult<CommandOutcome>;
}

/// Port for interactive questions.
///
/// Implemented by:
/// - `genback_cli::prompt::TerminalPrompter` (production)
/// - `genback_adapters::prompt::ScriptedPrompter` (testing)
#[cfg_attr(test, automock)]
pub trait Prompter: Send + Sync {
    /// Ask `message`, showing `default`. Returns the raw response; an empty
    /// response means "use the default".
    fn prompt(&self, message: &str, default: &str) -> GenbackResult<String>;
}

/// Port for bundled template payloads.
///
/// Implemented by:
/// - `genback_adapters::template_store::EmbeddedStore` (compiled in)
/// - `genback_adapters::template_store::DirectoryStore` (on disk)
/// - `genback_adapters::template_store::InMemoryStore` (testing)
#[cfg_attr(test, automock)]
pub trait TemplateStore: Send + Sync {
    /// Whether a payload with this name exists.
    fn contains(&self, name: &str) -> bool;

    /// Payload bytes, verbatim.
    fn read(&self, name: &str) -> GenbackResult<Vec<u8>>;

    /// Human-readable location of `name`, used in diagnostics.
    fn location(&self, name: &str) -> String;

    /// Names of every payload in the store, sorted.
    fn names(&self) -> GenbackResult<Vec<String>>;

    /// Short description of where payloads come from.
    fn describe(&self) -> String;
}

/// Port for step progress notifications.
///
/// All methods default to no-ops so adapters only implement what they show.
pub trait ProgressReporter: Send + Sync {
    fn step_started(&self, _step: Step) {}

    fn step_succeeded(&self, _step: Step) {}

    /// The step was skipped because the blueprint has nothing for it to do.
    fn step_skipped(&self, _step: Step) {}

    fn step_failed(&self, _step: Step, _error: &GenbackError) {}
}

/// Reporter that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {}
