//! Payloads read from a directory on disk.
//!
//! Lets a user point the scaffold at their own copies of the templates
//! (`--templates DIR`). File names map one-to-one onto template names;
//! nested files are named by their forward-slash relative path.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use genback_core::{
    application::{ApplicationError, ports::TemplateStore},
    error::{GenbackError, GenbackResult},
};

/// Store backed by a directory of payload files.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Create a store rooted at `root`.
    ///
    /// The directory does not need to exist yet; lookups against a missing
    /// root simply find nothing.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl TemplateStore for DirectoryStore {
    fn contains(&self, name: &str) -> bool {
        self.path_of(name).is_file()
    }

    fn read(&self, name: &str) -> GenbackResult<Vec<u8>> {
        let path = self.path_of(name);
        if !path.is_file() {
            return Err(ApplicationError::MissingTemplate {
                name: name.to_string(),
                location: path.display().to_string(),
            }
            .into());
        }

        std::fs::read(&path).map_err(|e| {
            ApplicationError::FilesystemError {
                path,
                reason: format!("Failed to read template: {e}"),
            }
            .into()
        })
    }

    fn location(&self, name: &str) -> String {
        self.path_of(name).display().to_string()
    }

    #[instrument(skip(self), fields(dir = %self.root.display()))]
    fn names(&self) -> GenbackResult<Vec<String>> {
        if !self.root.is_dir() {
            return Err(ApplicationError::FilesystemError {
                path: self.root.clone(),
                reason: "Templates directory not found".into(),
            }
            .into());
        }

        let mut names = Vec::new();
        for walk_entry in WalkDir::new(&self.root).min_depth(1) {
            let walk_entry = walk_entry.map_err(|e| walk_error(&self.root, e))?;
            if !walk_entry.file_type().is_file() {
                continue;
            }

            match walk_entry.path().strip_prefix(&self.root) {
                Ok(rel) => names.push(normalize_path(&rel.to_string_lossy())),
                Err(_) => warn!(
                    path = %walk_entry.path().display(),
                    "Skipping entry outside templates directory"
                ),
            }
        }

        names.sort();
        debug!(count = names.len(), "Listed templates");
        Ok(names)
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

fn walk_error(root: &Path, e: walkdir::Error) -> GenbackError {
    ApplicationError::FilesystemError {
        path: e.path().unwrap_or(root).to_path_buf(),
        reason: format!("Directory walk error: {e}"),
    }
    .into()
}

/// Normalise a filesystem path to forward slashes so Windows and Unix paths
/// compare identically.
fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
