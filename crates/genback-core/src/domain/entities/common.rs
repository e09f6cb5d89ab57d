use std::collections::HashSet;
use std::path::{Component, Path};

use super::DomainError;

/// Check that `path` stays inside the project directory.
///
/// Rejects empty paths, absolute paths, and any `..` component.
pub fn ensure_relative(path: &Path) -> Result<(), DomainError> {
    if path.as_os_str().is_empty() {
        return Err(DomainError::EmptyPath);
    }
    if path.is_absolute() || path.has_root() {
        return Err(DomainError::AbsolutePathNotAllowed {
            path: path.display().to_string(),
        });
    }
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(DomainError::PathTraversal {
            path: path.display().to_string(),
        });
    }
    Ok(())
}

/// Validate a sequence of layout paths: each relative, none repeated.
pub fn ensure_unique_relative<'a>(
    paths: impl IntoIterator<Item = &'a Path>,
) -> Result<(), DomainError> {
    let mut seen = HashSet::new();
    for path in paths {
        ensure_relative(path)?;
        if !seen.insert(path) {
            return Err(DomainError::DuplicatePath {
                path: path.display().to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_relative_path_is_accepted() {
        assert!(ensure_relative(Path::new("src/routes/api.js")).is_ok());
    }

    #[test]
    fn absolute_path_is_rejected() {
        assert!(matches!(
            ensure_relative(Path::new("/etc/passwd")),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn parent_traversal_is_rejected() {
        assert!(matches!(
            ensure_relative(Path::new("src/../../outside")),
            Err(DomainError::PathTraversal { .. })
        ));
    }

    #[test]
    fn empty_path_is_rejected() {
        assert_eq!(ensure_relative(Path::new("")), Err(DomainError::EmptyPath));
    }

    #[test]
    fn duplicates_are_reported() {
        let paths = [Path::new("src"), Path::new("src/models"), Path::new("src")];
        assert!(matches!(
            ensure_unique_relative(paths),
            Err(DomainError::DuplicatePath { path }) if path == "src"
        ));
    }
}
