//! The default run: scaffold the target directory.
//!
//! Responsibility: resolve the working directory, assemble the adapters, and
//! hand over to `ScaffoldService`. Step order and failure handling live in
//! the core.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use genback_adapters::{LocalFilesystem, SystemCommandRunner};
use genback_core::{
    application::{ScaffoldOutcome, ScaffoldReport, ScaffoldService},
    domain::InvocationContext,
    error::GenbackError,
};

use crate::{
    cli::ScaffoldArgs,
    commands::template_store,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
    progress::TerminalReporter,
    prompt::TerminalPrompter,
};

const CONFIRM_HINT: &str = "Run 'gen-backend --yes' to initialize the project automatically.";

/// Execute the scaffold run.
///
/// 1. Resolve the target directory to an absolute path
/// 2. Build the blueprint from configuration and flags
/// 3. Run every step through `ScaffoldService`
/// 4. Print the hint or the completion message
#[instrument(skip_all, fields(yes = args.yes))]
pub fn execute(args: ScaffoldArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let working_dir = resolve_working_dir(args.dir.as_deref())?;
    let store = template_store(config.templates_dir(args.templates.as_ref()))?;
    let blueprint = config.blueprint(args.package_manager.as_deref());

    let context = InvocationContext::new(
        working_dir,
        std::env::args().skip(1).collect(),
        args.yes,
    )
    .map_err(GenbackError::from)?;

    debug!(
        dir = %context.working_dir().display(),
        package_manager = %blueprint.package_manager,
        templates = %store.describe(),
        "Scaffold resolved"
    );

    let service = ScaffoldService::new(
        blueprint,
        Box::new(SystemCommandRunner::new()),
        Box::new(TerminalPrompter::new(output.clone())),
        store,
        Box::new(LocalFilesystem::new()),
    )
    .with_reporter(Box::new(TerminalReporter::new(output.clone())));

    match service.run(&context)? {
        ScaffoldOutcome::ConfirmationRequired => {
            output.info(CONFIRM_HINT)?;
        }
        ScaffoldOutcome::Completed(report) => {
            info!(files = report.files.len(), "Scaffold completed");
            print_summary(&report, &output)?;
        }
    }

    Ok(())
}

/// `--dir` when given (must exist), the current directory otherwise.
fn resolve_working_dir(dir: Option<&Path>) -> CliResult<PathBuf> {
    match dir {
        Some(dir) if !dir.is_dir() => Err(CliError::DirectoryNotFound {
            path: dir.to_path_buf(),
        }),
        Some(dir) => std::path::absolute(dir)
            .with_cli_context(|| format!("Failed to resolve '{}'", dir.display())),
        None => std::env::current_dir().with_cli_context(|| "Failed to read current directory"),
    }
}

fn print_summary(report: &ScaffoldReport, output: &OutputManager) -> CliResult<()> {
    output.print("")?;
    output.success("Project setup complete! 🎉")?;
    output.print("")?;
    output.print("Start the development server:")?;
    output.print(&format!("  > {}", report.start_command))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_dir_is_not_found() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");

        let err = resolve_working_dir(Some(&missing)).unwrap_err();
        assert!(matches!(err, CliError::DirectoryNotFound { .. }));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn file_is_not_a_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("package.json");
        std::fs::write(&file, "{}").unwrap();

        assert!(resolve_working_dir(Some(&file)).is_err());
    }

    #[test]
    fn existing_dir_becomes_absolute() {
        let temp = TempDir::new().unwrap();
        let resolved = resolve_working_dir(Some(temp.path())).unwrap();
        assert!(resolved.is_absolute());
    }

    #[test]
    fn default_is_current_dir() {
        let resolved = resolve_working_dir(None).unwrap();
        assert_eq!(resolved, std::env::current_dir().unwrap());
    }
}
