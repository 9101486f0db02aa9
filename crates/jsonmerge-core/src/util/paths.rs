//! Path expansion helpers.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// Returns whether the argument contains glob metacharacters.
pub fn is_pattern(arg: &str) -> bool {
    arg.contains(['*', '?', '['])
}

/// Expand one input argument into concrete file paths.
///
/// Plain paths are returned as-is (after `~` expansion) even if they do not
/// exist; the merge reports unreadable files individually. An existing path is
/// taken literally even when its name contains glob metacharacters. Glob
/// patterns expand to matching regular files in sorted order.
pub fn expand_input(arg: &str) -> Result<Vec<PathBuf>> {
    let expanded = shellexpand::tilde(arg).into_owned();
    if !is_pattern(&expanded) || Path::new(&expanded).exists() {
        return Ok(vec![PathBuf::from(expanded)]);
    }

    let entries = glob::glob(&expanded)
        .map_err(|e| Error::validation(format!("Invalid pattern '{arg}': {e}")))?;

    let mut paths = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => paths.push(path),
            Ok(_) => {}
            Err(e) => tracing::warn!(pattern = %arg, error = %e, "Unreadable glob match"),
        }
    }
    paths.sort();
    Ok(paths)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_is_pattern() {
        assert!(is_pattern("data/*.json"));
        assert!(is_pattern("file?.txt"));
        assert!(is_pattern("[ab].json"));
        assert!(!is_pattern("data/plain.json"));
    }

    #[test]
    fn test_expand_plain_path_passthrough() {
        let paths = expand_input("does/not/exist.json").unwrap();
        assert_eq!(paths, vec![PathBuf::from("does/not/exist.json")]);
    }

    #[test]
    fn test_expand_glob_sorted_files_only() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("b.json"), "{}").unwrap();
        std::fs::write(dir.path().join("a.json"), "{}").unwrap();
        std::fs::write(dir.path().join("c.txt"), "{}").unwrap();
        std::fs::create_dir(dir.path().join("d.json")).unwrap();

        let pattern = format!("{}/*.json", dir.path().display());
        let paths = expand_input(&pattern).unwrap();
        assert_eq!(
            paths,
            vec![dir.path().join("a.json"), dir.path().join("b.json")]
        );
    }

    #[test]
    fn test_expand_existing_file_with_brackets_is_literal() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("Jane [2].json");
        std::fs::write(&file, "{}").unwrap();
        std::fs::write(dir.path().join("Jane 2.json"), "{}").unwrap();

        let paths = expand_input(&file.display().to_string()).unwrap();
        assert_eq!(paths, vec![file]);
    }

    #[test]
    fn test_expand_glob_no_matches() {
        let dir = TempDir::new().unwrap();
        let pattern = format!("{}/*.json", dir.path().display());
        assert!(expand_input(&pattern).unwrap().is_empty());
    }

    #[test]
    fn test_expand_invalid_pattern() {
        let err = expand_input("data/[.json").unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn test_expand_tilde_without_tilde() {
        assert_eq!(expand_tilde("/abs/path"), PathBuf::from("/abs/path"));
    }
}
