//! Flags accepted by the scaffold run and by every subcommand.

use clap::Args;
use std::path::PathBuf;

/// Global arguments for all commands.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Logging verbosity, counted.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Log to stderr while scaffolding:
    (none)  - warnings and errors only
    -v      - each step and package-manager command
    -vv     - every directory and file written
    -vvv    - everything"
    )]
    pub verbose: u8,

    /// Hide step progress and the summary. Prompts are still shown.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print prompts and errors"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes; `NO_COLOR` has the same effect.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Read this TOML file instead of the platform config path.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file (TOML)"
    )]
    pub config: Option<PathBuf>,

    /// `plain` never colours, e.g. for CI logs.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of progress and messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Colour when stdout is a terminal.
    #[default]
    Auto,
    /// Always colour.
    Human,
    /// Never colour.
    Plain,
}
