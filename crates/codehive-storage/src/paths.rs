//! Path validation for names and client-supplied relative paths.
//!
//! Every name that ends up on disk passes through here first. Uploads
//! carry webkit-style relative paths (`a/b/c.txt`); single components
//! come from folder and branch names.

use std::path::PathBuf;

use codehive_core::error::AppError;
use codehive_core::result::AppResult;

/// Validate a single path component (folder, branch, or file name).
///
/// Returns the trimmed name. Rejects empty names, separators, traversal
/// tokens, and NUL bytes.
pub fn validate_component(name: &str) -> AppResult<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation("Name must not be empty"));
    }
    if trimmed == "." || trimmed == ".." {
        return Err(AppError::validation("Name must not be a traversal token"));
    }
    if trimmed.contains('/') || trimmed.contains('\\') {
        return Err(AppError::validation("Name must not contain path separators"));
    }
    if trimmed.contains('\0') {
        return Err(AppError::validation("Name must not contain NUL bytes"));
    }
    Ok(trimmed)
}

/// Validate a client-supplied relative path and normalize it into a
/// `PathBuf` of safe components.
///
/// Accepts `/` and `\` as separators (browsers send either). Rejects
/// absolute paths, empty paths, and any component that fails
/// [`validate_component`].
pub fn validate_relative_path(path: &str) -> AppResult<PathBuf> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation("Path must not be empty"));
    }
    if trimmed.starts_with('/') || trimmed.starts_with('\\') {
        return Err(AppError::validation("Path must be relative"));
    }

    let mut out = PathBuf::new();
    for component in trimmed.split(['/', '\\']) {
        out.push(validate_component(component)?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_names() {
        assert_eq!(validate_component("src").unwrap(), "src");
        assert_eq!(validate_component("  notes.md ").unwrap(), "notes.md");
    }

    #[test]
    fn rejects_bad_components() {
        assert!(validate_component("").is_err());
        assert!(validate_component("   ").is_err());
        assert!(validate_component("..").is_err());
        assert!(validate_component("a/b").is_err());
        assert!(validate_component("a\\b").is_err());
        assert!(validate_component("a\0b").is_err());
    }

    #[test]
    fn normalizes_relative_paths() {
        assert_eq!(
            validate_relative_path("a/b/c.txt").unwrap(),
            PathBuf::from("a").join("b").join("c.txt")
        );
        assert_eq!(
            validate_relative_path("a\\b.txt").unwrap(),
            PathBuf::from("a").join("b.txt")
        );
    }

    #[test]
    fn rejects_escaping_paths() {
        assert!(validate_relative_path("../etc/passwd").is_err());
        assert!(validate_relative_path("a/../b").is_err());
        assert!(validate_relative_path("/etc/passwd").is_err());
        assert!(validate_relative_path("").is_err());
        assert!(validate_relative_path("a//b").is_err());
    }
}
