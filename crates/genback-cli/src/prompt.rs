//! Terminal prompter.
//!
//! With a terminal on stdin (and the `interactive` feature) questions go
//! through `dialoguer`. Otherwise one line is read from stdin per question,
//! so answers can be piped in.

use std::io::{self, BufRead, IsTerminal as _};

use genback_core::{
    application::{ApplicationError, ports::Prompter},
    error::GenbackResult,
};

use crate::output::OutputManager;

pub struct TerminalPrompter {
    output: OutputManager,
    #[cfg_attr(not(feature = "interactive"), allow(dead_code))]
    interactive: bool,
}

impl TerminalPrompter {
    pub fn new(output: OutputManager) -> Self {
        Self {
            output,
            interactive: io::stdin().is_terminal(),
        }
    }

    fn read_line(&self, message: &str, default: &str) -> GenbackResult<String> {
        self.output
            .prompt(&format!("{message} ({default}): "))
            .map_err(prompt_failed)?;

        let mut line = String::new();
        // EOF leaves `line` empty, which selects the default.
        io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(prompt_failed)?;

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl Prompter for TerminalPrompter {
    fn prompt(&self, message: &str, default: &str) -> GenbackResult<String> {
        #[cfg(feature = "interactive")]
        if self.interactive {
            return dialoguer::Input::<String>::new()
                .with_prompt(message)
                .default(default.to_string())
                .allow_empty(true)
                .interact_text()
                .map_err(|e| {
                    ApplicationError::PromptFailed {
                        reason: e.to_string(),
                    }
                    .into()
                });
        }

        self.read_line(message, default)
    }
}

fn prompt_failed(e: io::Error) -> ApplicationError {
    ApplicationError::PromptFailed {
        reason: e.to_string(),
    }
}
