//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::{OwoColorize, Style};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
///
/// Cheap to clone; clones write to the same terminal.
#[derive(Debug, Clone)]
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format == OutputFormat::Plain,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// `✓ <msg>` in green.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.marked('\u{2713}', msg, Style::new().green())
    }

    /// `✗ <msg>` in red. Shown even in quiet mode.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = self.decorate('\u{2717}', msg, Style::new().red());
        self.term.write_line(&line)
    }

    /// `⚠ <msg>` in yellow.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.marked('\u{26a0}', msg, Style::new().yellow())
    }

    /// `ℹ <msg>` in blue.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.marked('\u{2139}', msg, Style::new().blue())
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.style(Style::new().cyan().bold()).to_string()
        };
        self.term.write_line(&line)
    }

    /// Write without a newline, ignoring quiet mode. Used for prompts.
    pub fn prompt(&self, text: &str) -> io::Result<()> {
        self.term.write_str(text)?;
        self.term.flush()
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    fn marked(&self, symbol: char, msg: &str, style: Style) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = self.decorate(symbol, msg, style);
        self.term.write_line(&line)
    }

    fn decorate(&self, symbol: char, msg: &str, style: Style) -> String {
        if self.no_color {
            format!("{symbol} {msg}")
        } else {
            format!("{} {}", symbol.style(style.bold()), msg.style(style))
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
