//! Scripted prompter for testing.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use genback_core::{
    application::{ApplicationError, ports::Prompter},
    error::GenbackResult,
};

#[derive(Debug, Default)]
struct ScriptedPrompterInner {
    responses: VecDeque<String>,
    asked: Vec<(String, String)>,
}

/// Answers prompts from a fixed list of responses.
///
/// Once the list is exhausted every further prompt gets an empty response,
/// which the scaffold treats as "use the default".
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    inner: Arc<Mutex<ScriptedPrompterInner>>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inner: Arc::new(Mutex::new(ScriptedPrompterInner {
                responses: responses.into_iter().map(Into::into).collect(),
                asked: Vec::new(),
            })),
        }
    }

    /// A prompter that accepts every default.
    pub fn accepting_defaults() -> Self {
        Self::default()
    }

    /// `(message, default)` for every prompt shown so far.
    pub fn asked(&self) -> Vec<(String, String)> {
        self.inner
            .lock()
            .map(|inner| inner.asked.clone())
            .unwrap_or_default()
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt(&self, message: &str, default: &str) -> GenbackResult<String> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        inner.asked.push((message.to_string(), default.to_string()));
        Ok(inner.responses.pop_front().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_in_order_then_empty() {
        let prompter = ScriptedPrompter::new(["9090"]);

        assert_eq!(prompter.prompt("Enter port number", "8000").unwrap(), "9090");
        assert_eq!(prompter.prompt("Enter database name", "My_DB").unwrap(), "");
        assert_eq!(
            prompter.asked(),
            vec![
                ("Enter port number".to_string(), "8000".to_string()),
                ("Enter database name".to_string(), "My_DB".to_string()),
            ]
        );
    }
}
