//! Tracing subscriber initialisation.
//!
//! Only the CLI crate calls [`init_logging`]; `genback-core` and
//! `genback-adapters` only *emit* spans and events.
//!
//! # Verbosity mapping
//!
//! | Flag(s)  | Filter level |
//! |----------|--------------|
//! | (none)   | WARN         |
//! | `-v`     | INFO         |
//! | `-vv`    | DEBUG        |
//! | `-vvv`   | TRACE        |
//! | `--quiet`| ERROR        |
//!
//! `RUST_LOG` overrides all of the above if set.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

const WORKSPACE_TARGETS: &[&str] = &["gen_backend", "genback_core", "genback_adapters"];

/// Initialise the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros fire.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| workspace_filter(level_for(args)));

    // Prompts and the summary go to stdout; diagnostics stay on stderr.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

/// Same level for the binary and both library crates.
fn workspace_filter(level: LevelFilter) -> EnvFilter {
    EnvFilter::new(
        WORKSPACE_TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect::<Vec<_>>()
            .join(","),
    )
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    match (args.quiet, args.verbose) {
        (true, _) => LevelFilter::ERROR,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::INFO,
        (false, 2) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn silent_by_default_except_warnings() {
        assert_eq!(level_for(&args_with(0, false)), LevelFilter::WARN);
    }

    #[test]
    fn each_v_raises_the_level() {
        assert_eq!(level_for(&args_with(1, false)), LevelFilter::INFO);
        assert_eq!(level_for(&args_with(2, false)), LevelFilter::DEBUG);
        assert_eq!(level_for(&args_with(3, false)), LevelFilter::TRACE);
        assert_eq!(level_for(&args_with(9, false)), LevelFilter::TRACE);
    }

    #[test]
    fn quiet_wins() {
        assert_eq!(level_for(&args_with(3, true)), LevelFilter::ERROR);
    }

    #[test]
    fn filter_names_every_crate() {
        let filter = workspace_filter(LevelFilter::DEBUG).to_string();
        for target in WORKSPACE_TARGETS {
            assert!(filter.contains(&format!("{target}=debug")), "{filter}");
        }
    }
}
