//! Domain value objects: Step, CommandSpec, CommandOutcome.
//!
//! Pure value types with no I/O. `CommandSpec` describes an external command;
//! running it is the job of the `CommandRunner` port.

use std::fmt;

use serde::Serialize;

// ── Step ─────────────────────────────────────────────────────────────────────

/// One stage of the scaffold sequence, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    Initialize,
    ModuleType,
    Dependencies,
    DevDependencies,
    Directories,
    Templates,
    Manifest,
    Configuration,
    EnvFile,
}

impl Step {
    /// Every step, in the order the scaffold runs them.
    pub const ALL: [Step; 9] = [
        Self::Initialize,
        Self::ModuleType,
        Self::Dependencies,
        Self::DevDependencies,
        Self::Directories,
        Self::Templates,
        Self::Manifest,
        Self::Configuration,
        Self::EnvFile,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Initialize => "Project initialization",
            Self::ModuleType => "Module type",
            Self::Dependencies => "Main dependencies",
            Self::DevDependencies => "Dev dependencies",
            Self::Directories => "Project structure",
            Self::Templates => "Template files",
            Self::Manifest => "package.json update",
            Self::Configuration => "Configuration setup",
            Self::EnvFile => "Environment file",
        }
    }

    /// Steps that shell out to the package manager.
    pub const fn is_external(&self) -> bool {
        matches!(
            self,
            Self::Initialize | Self::Dependencies | Self::DevDependencies
        )
    }

    /// Steps that wait on the user.
    pub const fn is_interactive(&self) -> bool {
        matches!(self, Self::Configuration)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── CommandSpec ──────────────────────────────────────────────────────────────

/// An external command: program plus arguments, no shell involved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

// ── CommandOutcome ───────────────────────────────────────────────────────────

/// Result of running a command to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Exit code; `None` when the process was killed by a signal.
    pub code: Option<i32>,
    /// Combined stdout followed by stderr.
    pub output: String,
}

impl CommandOutcome {
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            code: Some(0),
            output: output.into(),
        }
    }

    pub fn failure(code: i32, output: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            output: output.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_listed_in_run_order() {
        assert_eq!(Step::ALL.first(), Some(&Step::Initialize));
        assert_eq!(Step::ALL.last(), Some(&Step::EnvFile));
    }

    #[test]
    fn only_package_manager_steps_are_external() {
        let external: Vec<_> = Step::ALL.iter().filter(|s| s.is_external()).collect();
        assert_eq!(
            external,
            [&Step::Initialize, &Step::Dependencies, &Step::DevDependencies]
        );
    }

    #[test]
    fn command_displays_like_a_shell_line() {
        let cmd = CommandSpec::new("npm")
            .arg("install")
            .args(["--save-dev", "nodemon"]);
        assert_eq!(cmd.to_string(), "npm install --save-dev nodemon");
    }

    #[test]
    fn arguments_with_spaces_are_quoted() {
        let cmd = CommandSpec::new("npm").args(["run", "my script"]);
        assert_eq!(cmd.to_string(), "npm run \"my script\"");
    }

    #[test]
    fn signal_termination_is_not_success() {
        let outcome = CommandOutcome {
            code: None,
            output: String::new(),
        };
        assert!(!outcome.is_success());
        assert!(CommandOutcome::success("").is_success());
        assert!(!CommandOutcome::failure(1, "").is_success());
    }
}
