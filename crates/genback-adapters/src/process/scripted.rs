//! Scripted command runner for testing.
//!
//! Records every invocation and answers with canned outcomes, so the full
//! scaffold sequence can run without a package manager installed.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use serde_json::json;
use tracing::debug;

use genback_core::{
    application::{ApplicationError, ports::CommandRunner, ports::Filesystem},
    domain::{CommandOutcome, CommandSpec},
    error::GenbackResult,
};

/// One call seen by [`ScriptedCommandRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCommand {
    pub command: String,
    pub label: String,
    pub working_dir: PathBuf,
}

#[derive(Default)]
struct ScriptedInner {
    calls: Vec<RecordedCommand>,
    failures: HashMap<String, CommandOutcome>,
    unavailable: Option<String>,
}

/// Command runner double.
///
/// By default every command succeeds with empty output. Clones share the
/// same script and call log.
#[derive(Clone, Default)]
pub struct ScriptedCommandRunner {
    inner: Arc<Mutex<ScriptedInner>>,
    manifest_sink: Option<Arc<dyn Filesystem>>,
}

impl ScriptedCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emulate `init` by writing a fresh `package.json` through `filesystem`.
    pub fn writing_manifest_to(mut self, filesystem: impl Filesystem + 'static) -> Self {
        self.manifest_sink = Some(Arc::new(filesystem));
        self
    }

    /// Make the command run under `label` exit with `outcome`.
    pub fn fail_step(self, label: &str, outcome: CommandOutcome) -> Self {
        if let Ok(mut inner) = self.inner.lock() {
            inner.failures.insert(label.to_string(), outcome);
        }
        self
    }

    /// Make every command fail to start with `reason`.
    pub fn unavailable(self, reason: &str) -> Self {
        if let Ok(mut inner) = self.inner.lock() {
            inner.unavailable = Some(reason.to_string());
        }
        self
    }

    /// Every call seen so far, in order.
    pub fn calls(&self) -> Vec<RecordedCommand> {
        self.inner
            .lock()
            .map(|inner| inner.calls.clone())
            .unwrap_or_default()
    }

    /// The shell-like rendering of each call, in order.
    pub fn commands(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.command).collect()
    }

    fn write_manifest(&self, working_dir: &Path) -> GenbackResult<()> {
        let Some(sink) = &self.manifest_sink else {
            return Ok(());
        };

        let name = working_dir
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_else(|| "app".into());

        // Mirrors what `npm init --yes` produces.
        let manifest = json!({
            "name": name,
            "version": "1.0.0",
            "description": "",
            "main": "index.js",
            "scripts": {
                "test": "echo \"Error: no test specified\" && exit 1"
            },
            "keywords": [],
            "author": "",
            "license": "ISC"
        });

        let text = serde_json::to_string_pretty(&manifest).map_err(|e| {
            ApplicationError::ManifestError {
                path: working_dir.join("package.json"),
                reason: e.to_string(),
            }
        })?;
        sink.write_file(&working_dir.join("package.json"), text.as_bytes())
    }
}

impl CommandRunner for ScriptedCommandRunner {
    fn run(
        &self,
        command: &CommandSpec,
        label: &str,
        working_dir: &Path,
    ) -> GenbackResult<CommandOutcome> {
        let scripted = {
            let mut inner = self
                .inner
                .lock()
                .map_err(|_| ApplicationError::LockPoisoned)?;

            inner.calls.push(RecordedCommand {
                command: command.to_string(),
                label: label.to_string(),
                working_dir: working_dir.to_path_buf(),
            });

            if let Some(reason) = &inner.unavailable {
                return Err(ApplicationError::CommandUnavailable {
                    program: command.program().to_string(),
                    reason: reason.clone(),
                }
                .into());
            }

            inner.failures.get(label).cloned()
        };

        debug!(command = %command, label, "Scripted command");

        if let Some(outcome) = scripted {
            return Ok(outcome);
        }

        if command.arguments().first().map(String::as_str) == Some("init") {
            self.write_manifest(working_dir)?;
        }

        Ok(CommandOutcome::success(""))
    }
}
