//! Scaffold Service - main application orchestrator.
//!
//! This service drives the whole scaffold sequence:
//! 1. Package manager `init`
//! 2. `package.json` module type
//! 3. Runtime dependencies
//! 4. Dev dependencies
//! 5. Directory layout
//! 6. Template copy
//! 7. `package.json` entry point, scripts, engine
//! 8. Configuration prompts
//! 9. Env file
//!
//! Each step runs only if every earlier step succeeded. Nothing is rolled
//! back on failure: whatever the earlier steps wrote stays on disk.

use std::path::{Path, PathBuf};

use tracing::{debug, error, info, info_span, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{
            CommandRunner, Filesystem, ProgressReporter, Prompter, SilentReporter, TemplateStore,
        },
    },
    domain::{
        Blueprint, CommandSpec, ConfigurationAnswers, DomainError, InvocationContext,
        ProjectManifest, Step,
    },
    error::GenbackResult,
};

pub const PORT_PROMPT: &str = "Enter port number";
pub const DATABASE_NAME_PROMPT: &str = "Enter database name";
pub const MONGODB_URL_PROMPT: &str = "Enter MongoDB URL";

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    /// The confirmation flag was absent; nothing was touched.
    ConfirmationRequired,
    /// Every step succeeded.
    Completed(ScaffoldReport),
}

/// Summary of a completed scaffold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub project_root: PathBuf,
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
    pub env_file: PathBuf,
    pub answers: ConfigurationAnswers,
    pub start_command: String,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    blueprint: Blueprint,
    runner: Box<dyn CommandRunner>,
    prompter: Box<dyn Prompter>,
    store: Box<dyn TemplateStore>,
    filesystem: Box<dyn Filesystem>,
    reporter: Box<dyn ProgressReporter>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// Progress is not reported until a reporter is attached with
    /// [`ScaffoldService::with_reporter`].
    pub fn new(
        blueprint: Blueprint,
        runner: Box<dyn CommandRunner>,
        prompter: Box<dyn Prompter>,
        store: Box<dyn TemplateStore>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            blueprint,
            runner,
            prompter,
            store,
            filesystem,
            reporter: Box::new(SilentReporter),
        }
    }

    pub fn with_reporter(mut self, reporter: Box<dyn ProgressReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn blueprint(&self) -> &Blueprint {
        &self.blueprint
    }

    /// Run the scaffold sequence against `context.working_dir()`.
    #[instrument(
        skip_all,
        fields(
            dir = %context.working_dir().display(),
            confirmed = context.auto_confirm()
        )
    )]
    pub fn run(&self, context: &InvocationContext) -> GenbackResult<ScaffoldOutcome> {
        if !context.auto_confirm() {
            info!("Confirmation flag absent, nothing to do");
            return Ok(ScaffoldOutcome::ConfirmationRequired);
        }

        self.blueprint.validate()?;
        self.ensure_uninitialized(context)?;

        let root = context.working_dir();
        info!("Scaffolding {} project", self.blueprint.package_manager);

        self.step(Step::Initialize, || {
            self.run_command(Step::Initialize, &self.blueprint.init_command(), root)
        })?;

        self.step(Step::ModuleType, || {
            self.patch_manifest(root, |manifest| {
                manifest.set_module_type(&self.blueprint.manifest_patch.module_type);
                Ok(())
            })
        })?;

        self.optional_command(Step::Dependencies, self.blueprint.install_command(), root)?;
        self.optional_command(
            Step::DevDependencies,
            self.blueprint.dev_install_command(),
            root,
        )?;

        let directories = self.step(Step::Directories, || self.create_directories(root))?;
        let files = self.step(Step::Templates, || self.copy_templates(root))?;

        self.step(Step::Manifest, || {
            self.patch_manifest(root, |manifest| {
                manifest.finalize(&self.blueprint.manifest_patch)
            })
        })?;

        let answers = self.step(Step::Configuration, || self.capture_configuration())?;
        let env_file = self.step(Step::EnvFile, || self.write_env_file(root, &answers))?;

        info!(
            directories = directories.len(),
            files = files.len(),
            "Scaffold completed successfully"
        );

        Ok(ScaffoldOutcome::Completed(ScaffoldReport {
            project_root: root.to_path_buf(),
            directories,
            files,
            env_file,
            answers,
            start_command: self.blueprint.start_command(),
        }))
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Wrap one step with reporter notifications and a tracing span.
    fn step<T>(&self, step: Step, action: impl FnOnce() -> GenbackResult<T>) -> GenbackResult<T> {
        let _span = info_span!("step", step = %step).entered();
        self.reporter.step_started(step);

        match action() {
            Ok(value) => {
                debug!("Step completed");
                self.reporter.step_succeeded(step);
                Ok(value)
            }
            Err(e) => {
                warn!(error = %e, "Step failed");
                self.reporter.step_failed(step, &e);
                Err(e)
            }
        }
    }

    /// The only guard against overwriting an existing project.
    fn ensure_uninitialized(&self, context: &InvocationContext) -> GenbackResult<()> {
        let guard = context.resolve(&self.blueprint.guard_dir);
        if self.filesystem.exists(&guard) {
            warn!(path = %guard.display(), "Project already initialized");
            return Err(ApplicationError::AlreadyInitialized { path: guard }.into());
        }
        Ok(())
    }

    fn optional_command(
        &self,
        step: Step,
        command: Option<CommandSpec>,
        root: &Path,
    ) -> GenbackResult<()> {
        match command {
            Some(command) => self.step(step, || self.run_command(step, &command, root)),
            None => {
                debug!(step = %step, "Nothing to install, skipping");
                self.reporter.step_skipped(step);
                Ok(())
            }
        }
    }

    fn run_command(&self, step: Step, command: &CommandSpec, root: &Path) -> GenbackResult<()> {
        info!(command = %command, "Running package manager");
        let outcome = self.runner.run(command, step.label(), root)?;

        if outcome.is_success() {
            return Ok(());
        }

        Err(ApplicationError::CommandFailed {
            step,
            command: command.to_string(),
            code: outcome.code,
            output: outcome.output,
        }
        .into())
    }

    /// Read `package.json`, apply `edit`, write it back.
    fn patch_manifest(
        &self,
        root: &Path,
        edit: impl FnOnce(&mut ProjectManifest) -> Result<(), DomainError>,
    ) -> GenbackResult<()> {
        let path = root.join(&self.blueprint.manifest_file);
        let invalid = |e: DomainError| ApplicationError::ManifestError {
            path: path.clone(),
            reason: e.to_string(),
        };

        let text = self.filesystem.read_to_string(&path)?;
        let mut manifest = ProjectManifest::parse(&text).map_err(invalid)?;
        edit(&mut manifest).map_err(invalid)?;
        let rendered = manifest.to_pretty_string().map_err(invalid)?;

        self.filesystem.write_file(&path, rendered.as_bytes())?;
        debug!(path = %path.display(), "Manifest written");
        Ok(())
    }

    fn create_directories(&self, root: &Path) -> GenbackResult<Vec<PathBuf>> {
        let mut created = Vec::with_capacity(self.blueprint.directories.len());
        for dir in self.blueprint.directories.directories() {
            let path = root.join(dir);
            self.filesystem.create_dir_all(&path)?;
            debug!(path = %path.display(), "Directory ready");
            created.push(path);
        }
        Ok(created)
    }

    /// Copy every manifest entry in order, stopping at the first payload the
    /// store does not have. Entries copied before the miss stay on disk.
    fn copy_templates(&self, root: &Path) -> GenbackResult<Vec<PathBuf>> {
        let mut copied = Vec::with_capacity(self.blueprint.templates.len());
        for entry in self.blueprint.templates.entries() {
            if !self.store.contains(&entry.source) {
                let location = self.store.location(&entry.source);
                error!(template = %entry.source, %location, "Bundled template missing");
                return Err(ApplicationError::MissingTemplate {
                    name: entry.source.clone(),
                    location,
                }
                .into());
            }

            let content = self.store.read(&entry.source)?;
            let destination = root.join(&entry.destination);
            if let Some(parent) = destination.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&destination, &content)?;

            debug!(
                template = %entry.source,
                destination = %destination.display(),
                bytes = content.len(),
                "Template copied"
            );
            copied.push(destination);
        }
        Ok(copied)
    }

    /// Ask the three questions, one after another.
    fn capture_configuration(&self) -> GenbackResult<ConfigurationAnswers> {
        let defaults = &self.blueprint.defaults;

        let port = self.prompter.prompt(PORT_PROMPT, &defaults.port)?;
        let database_name = self
            .prompter
            .prompt(DATABASE_NAME_PROMPT, &defaults.database_name)?;
        let mongodb_url = self
            .prompter
            .prompt(MONGODB_URL_PROMPT, &defaults.mongodb_url)?;

        Ok(ConfigurationAnswers::from_responses(
            defaults,
            &port,
            &database_name,
            &mongodb_url,
        ))
    }

    fn write_env_file(
        &self,
        root: &Path,
        answers: &ConfigurationAnswers,
    ) -> GenbackResult<PathBuf> {
        let path = root.join(&self.blueprint.env_file);
        self.filesystem
            .write_file(&path, answers.to_env_file().as_bytes())?;
        info!(path = %path.display(), "Environment file written");
        Ok(path)
    }
}
