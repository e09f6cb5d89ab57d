//! Runs package-manager commands as child processes.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, instrument};

use genback_core::{
    application::{ApplicationError, ports::CommandRunner},
    domain::{CommandOutcome, CommandSpec},
    error::GenbackResult,
};

/// Production command runner backed by `std::process::Command`.
///
/// Output is captured rather than streamed; the caller decides what to show.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    #[instrument(skip_all, fields(command = %command, label = %label))]
    fn run(
        &self,
        command: &CommandSpec,
        label: &str,
        working_dir: &Path,
    ) -> GenbackResult<CommandOutcome> {
        let output = build_command(command)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| ApplicationError::CommandUnavailable {
                program: command.program().to_string(),
                reason: e.to_string(),
            })?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        let code = output.status.code();
        debug!(?code, bytes = text.len(), "Command finished");

        Ok(CommandOutcome { code, output: text })
    }
}

// npm is a .cmd shim on Windows and cannot be spawned directly.
#[cfg(windows)]
fn build_command(spec: &CommandSpec) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(spec.program()).args(spec.arguments());
    cmd
}

#[cfg(not(windows))]
fn build_command(spec: &CommandSpec) -> Command {
    let mut cmd = Command::new(spec.program());
    cmd.args(spec.arguments());
    cmd
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use genback_core::error::GenbackError;
    use tempfile::TempDir;

    #[test]
    fn captures_stdout_and_stderr() {
        let temp = TempDir::new().unwrap();
        let spec = CommandSpec::new("sh").args(["-c", "echo out; echo err >&2; exit 3"]);

        let outcome = SystemCommandRunner::new()
            .run(&spec, "test", temp.path())
            .unwrap();

        assert_eq!(outcome.code, Some(3));
        assert!(!outcome.is_success());
        assert!(outcome.output.contains("out"));
        assert!(outcome.output.contains("err"));
    }

    #[test]
    fn runs_in_the_working_directory() {
        let temp = TempDir::new().unwrap();
        let spec = CommandSpec::new("sh").args(["-c", "touch marker"]);

        let outcome = SystemCommandRunner::new()
            .run(&spec, "test", temp.path())
            .unwrap();

        assert!(outcome.is_success());
        assert!(temp.path().join("marker").exists());
    }

    #[test]
    fn missing_program_is_unavailable() {
        let temp = TempDir::new().unwrap();
        let spec = CommandSpec::new("genback-definitely-not-installed").arg("init");

        let err = SystemCommandRunner::new()
            .run(&spec, "test", temp.path())
            .unwrap_err();

        assert!(matches!(
            err,
            GenbackError::Application(ApplicationError::CommandUnavailable { .. })
        ));
    }
}
