use std::path::{Path, PathBuf};

use serde::Serialize;

use super::common::ensure_unique_relative;
use crate::domain::error::DomainError;

/// Ordered set of directories to create inside the project.
///
/// Creation is idempotent: a missing parent is created, an existing
/// directory is left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryPlan {
    directories: Vec<PathBuf>,
}

impl DirectoryPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.directories.push(path.into());
        self
    }

    pub fn directories(&self) -> impl Iterator<Item = &Path> {
        self.directories.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.directories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directories.is_empty()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        ensure_unique_relative(self.directories())
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for DirectoryPlan {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            directories: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// One bundled payload and where it lands in the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateEntry {
    /// Name of the payload in the template store.
    pub source: String,
    /// Destination relative to the project root.
    pub destination: PathBuf,
}

impl TemplateEntry {
    pub fn new(source: impl Into<String>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// Ordered list of payloads copied into the project, verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateManifest {
    entries: Vec<TemplateEntry>,
}

impl TemplateManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(
        mut self,
        source: impl Into<String>,
        destination: impl Into<PathBuf>,
    ) -> Self {
        self.entries.push(TemplateEntry::new(source, destination));
        self
    }

    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Destinations must be relative, stay inside the project, and be unique.
    pub fn validate(&self) -> Result<(), DomainError> {
        ensure_unique_relative(self.entries.iter().map(|e| e.destination.as_path()))
    }
}
