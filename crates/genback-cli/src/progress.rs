//! Terminal progress reporting for the scaffold steps.

use std::io::IsTerminal as _;
use std::sync::Mutex;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use genback_core::{application::ports::ProgressReporter, domain::Step, error::GenbackError};

use crate::output::OutputManager;

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

/// Prints `✓ <step>` as each step completes, with a spinner while the
/// package manager runs.
pub struct TerminalReporter {
    output: OutputManager,
    spinner: Mutex<Option<ProgressBar>>,
    animate: bool,
}

impl TerminalReporter {
    pub fn new(output: OutputManager) -> Self {
        // Spinners draw on stderr; skip them when nobody is watching.
        let animate = !output.is_quiet() && std::io::stderr().is_terminal();
        Self {
            output,
            spinner: Mutex::new(None),
            animate,
        }
    }

    fn start_spinner(&self, message: String) {
        let style = ProgressStyle::with_template(SPINNER_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        let bar = ProgressBar::new_spinner().with_style(style);
        bar.set_message(message);
        bar.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(bar);
        }
    }

    fn clear_spinner(&self) {
        if let Ok(mut slot) = self.spinner.lock()
            && let Some(bar) = slot.take()
        {
            bar.finish_and_clear();
        }
    }
}

impl ProgressReporter for TerminalReporter {
    fn step_started(&self, step: Step) {
        if step.is_external() && self.animate {
            self.start_spinner(format!("{}...", step.label()));
        } else if step.is_interactive() {
            let _ = self.output.header("Configure your project:");
        }
    }

    fn step_succeeded(&self, step: Step) {
        self.clear_spinner();
        let _ = self.output.success(step.label());
    }

    fn step_skipped(&self, step: Step) {
        let _ = self
            .output
            .info(&format!("{} skipped, nothing to install", step.label()));
    }

    fn step_failed(&self, step: Step, _error: &GenbackError) {
        self.clear_spinner();
        let _ = self.output.error(step.label());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{GlobalArgs, OutputFormat};
    use crate::config::AppConfig;

    fn quiet_reporter() -> TerminalReporter {
        let args = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
        };
        TerminalReporter::new(OutputManager::new(&args, &AppConfig::default()))
    }

    #[test]
    fn quiet_output_never_animates() {
        assert!(!quiet_reporter().animate);
    }

    #[test]
    fn every_step_can_be_reported() {
        let reporter = quiet_reporter();
        for step in Step::ALL {
            reporter.step_started(step);
            reporter.step_succeeded(step);
        }
        assert!(reporter.spinner.lock().unwrap().is_none());
    }
}
