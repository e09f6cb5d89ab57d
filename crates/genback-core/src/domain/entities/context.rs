use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// Flags that confirm the run, checked by [`InvocationContext::from_args`].
pub const CONFIRM_FLAGS: &[&str] = &["--yes", "-y"];

/// Process-wide state captured once at startup.
///
/// Invariant: `working_dir` is absolute. The context is immutable for the
/// whole run; the orchestration never reads cwd or argv itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    working_dir: PathBuf,
    args: Vec<String>,
    auto_confirm: bool,
}

impl InvocationContext {
    /// Build a context from an already-resolved confirmation flag.
    pub fn new(
        working_dir: impl Into<PathBuf>,
        args: Vec<String>,
        auto_confirm: bool,
    ) -> Result<Self, DomainError> {
        let working_dir = working_dir.into();
        if !working_dir.is_absolute() {
            return Err(DomainError::RelativeWorkingDir {
                path: working_dir.display().to_string(),
            });
        }
        Ok(Self {
            working_dir,
            args,
            auto_confirm,
        })
    }

    /// Build a context, deriving `auto_confirm` from the presence of a
    /// confirmation flag in `args`.
    pub fn from_args(
        working_dir: impl Into<PathBuf>,
        args: Vec<String>,
    ) -> Result<Self, DomainError> {
        let auto_confirm = args.iter().any(|a| CONFIRM_FLAGS.contains(&a.as_str()));
        Self::new(working_dir, args, auto_confirm)
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn auto_confirm(&self) -> bool {
        self.auto_confirm
    }

    /// Absolute path of `relative` inside the working directory.
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.working_dir.join(relative)
    }
}
