//! Command handlers. Each one translates parsed arguments into calls on
//! the core and adapters and renders the result.

use std::path::PathBuf;

use genback_adapters::{DirectoryStore, EmbeddedStore};
use genback_core::application::ports::TemplateStore;

use crate::error::{CliError, CliResult};

pub mod completions;
pub mod config;
pub mod scaffold;
pub mod templates;

/// The store templates are read from: a directory when one is configured,
/// the built-in set otherwise.
pub(crate) fn template_store(dir: Option<PathBuf>) -> CliResult<Box<dyn TemplateStore>> {
    match dir {
        Some(dir) if !dir.is_dir() => Err(CliError::DirectoryNotFound { path: dir }),
        Some(dir) => Ok(Box::new(DirectoryStore::new(dir))),
        None => Ok(Box::new(EmbeddedStore::express_mongo())),
    }
}
