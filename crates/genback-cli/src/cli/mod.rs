//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// Without a subcommand the binary scaffolds the target directory, which
/// only happens when `--yes` is given.
#[derive(Debug, Parser)]
#[command(
    name     = "gen-backend",
    bin_name = "gen-backend",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold an Express + MongoDB backend",
    long_about = "gen-backend turns an empty directory into a ready-to-run \
                  Express + MongoDB project: package.json, dependencies, \
                  source layout, starter files, and a .env file.",
    after_help = "EXAMPLES:\n\
        \x20 gen-backend --yes\n\
        \x20 gen-backend --yes --dir ./my-api\n\
        \x20 gen-backend --yes --package-manager pnpm\n\
        \x20 gen-backend templates list\n\
        \x20 gen-backend completions bash > /usr/share/bash-completion/completions/gen-backend",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Flags for the default scaffold run.
    #[command(flatten)]
    pub scaffold: ScaffoldArgs,

    /// Subcommand to execute instead of scaffolding.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── scaffold ──────────────────────────────────────────────────────────────────

/// Arguments for the default scaffold run.
#[derive(Debug, Clone, Args)]
pub struct ScaffoldArgs {
    /// Confirm the run. Without it nothing is touched.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Initialize the project without asking"
    )]
    pub yes: bool,

    /// Directory to scaffold into.
    #[arg(
        short = 'C',
        long = "dir",
        value_name = "DIR",
        help = "Target directory (default: current directory)"
    )]
    pub dir: Option<PathBuf>,

    /// Read template payloads from a directory instead of the built-in set.
    #[arg(
        long = "templates",
        value_name = "DIR",
        env = "GEN_BACKEND_TEMPLATES",
        global = true,
        help = "Directory holding template files"
    )]
    pub templates: Option<PathBuf>,

    /// Package manager program.
    #[arg(
        long = "package-manager",
        value_name = "PROGRAM",
        env = "GEN_BACKEND_PACKAGE_MANAGER",
        help = "Package manager to run (default: npm)"
    )]
    pub package_manager: Option<String>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Inspect or export the bundled template files.
    #[command(
        subcommand,
        about = "Inspect bundled templates",
        after_help = "EXAMPLES:\n\
            \x20 gen-backend templates list\n\
            \x20 gen-backend templates list --format json\n\
            \x20 gen-backend templates export ./my-templates"
    )]
    Templates(TemplatesCommands),

    /// Manage the gen-backend configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 gen-backend config init\n\
            \x20 gen-backend config get defaults.port\n\
            \x20 gen-backend config list"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 gen-backend completions bash > ~/.local/share/bash-completion/completions/gen-backend\n\
            \x20 gen-backend completions zsh  > ~/.zfunc/_gen-backend\n\
            \x20 gen-backend completions fish > ~/.config/fish/completions/gen-backend.fish"
    )]
    Completions(CompletionsArgs),
}

// ── templates ─────────────────────────────────────────────────────────────────

/// Subcommands for `gen-backend templates`.
#[derive(Debug, Subcommand)]
pub enum TemplatesCommands {
    /// Show every template, where it is copied to, and whether it is present.
    #[command(visible_alias = "ls")]
    List {
        /// Output format.
        #[arg(
            long = "format",
            value_enum,
            default_value = "table",
            help = "Output format"
        )]
        format: ListFormat,
    },

    /// Write the built-in templates to a directory, for use with `--templates`.
    Export {
        /// Destination directory; created if missing.
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Overwrite files that already exist.
        #[arg(short = 'f', long = "force", help = "Overwrite existing files")]
        force: bool,
    },
}

/// Output format for `templates list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `gen-backend completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `gen-backend config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Write a configuration file holding the defaults.
    Init {
        /// Overwrite an existing config file.
        #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
        force: bool,
    },
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.port`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_means_unconfirmed_scaffold() {
        let cli = Cli::parse_from(["gen-backend"]);
        assert!(cli.command.is_none());
        assert!(!cli.scaffold.yes);
    }

    #[test]
    fn short_yes_confirms() {
        let cli = Cli::parse_from(["gen-backend", "-y", "-C", "/tmp/api"]);
        assert!(cli.scaffold.yes);
        assert_eq!(cli.scaffold.dir, Some(PathBuf::from("/tmp/api")));
    }

    #[test]
    fn parse_templates_export() {
        let cli = Cli::parse_from(["gen-backend", "templates", "export", "out", "--force"]);
        match cli.command {
            Some(Commands::Templates(TemplatesCommands::Export { dir, force })) => {
                assert_eq!(dir, PathBuf::from("out"));
                assert!(force);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn list_format_defaults_to_table() {
        let cli = Cli::parse_from(["gen-backend", "templates", "list"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Templates(TemplatesCommands::List {
                format: ListFormat::Table
            }))
        ));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["gen-backend", "--quiet", "--verbose"]);
        assert!(result.is_err());
    }
}
