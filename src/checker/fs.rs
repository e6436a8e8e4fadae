//! Filesystem checkers
//!
//! Each check is a single metadata lookup at check time.

use std::path::Path;

use super::combinators::ValueChecker;
use crate::CheckResult;

/// What kind of filesystem entry a path must name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A regular file (or a symlink to one)
    File,
    /// A directory (or a symlink to one)
    Directory,
    /// Anything
    Any,
}

/// Checker that a path exists.
#[derive(Clone, Copy, Debug)]
pub struct Exists {
    kind: EntryKind,
}

impl<P: AsRef<Path> + ?Sized> ValueChecker<P> for Exists {
    fn check(&self, value: &P) -> CheckResult {
        let path = value.as_ref();
        let result = match (self.kind, std::fs::metadata(path)) {
            (EntryKind::Any, Ok(_)) => CheckResult::Success,
            (EntryKind::File, Ok(meta)) if meta.is_file() => CheckResult::Success,
            (EntryKind::Directory, Ok(meta)) if meta.is_dir() => CheckResult::Success,
            (EntryKind::File, Ok(_)) => {
                CheckResult::failure(format!("'{}' is not a file", path.display()))
            }
            (EntryKind::Directory, Ok(_)) => {
                CheckResult::failure(format!("'{}' is not a directory", path.display()))
            }
            (EntryKind::File, Err(_)) => {
                CheckResult::failure(format!("file '{}' does not exist", path.display()))
            }
            (EntryKind::Directory, Err(_)) => {
                CheckResult::failure(format!("directory '{}' does not exist", path.display()))
            }
            (EntryKind::Any, Err(_)) => {
                CheckResult::failure(format!("path '{}' does not exist", path.display()))
            }
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(path = %path.display(), kind = ?self.kind, passed = result.is_success(), "filesystem check");
        result
    }
}

/// Create a checker for an existing regular file.
///
/// # Example
///
/// ```rust
/// use argcheck::checker::*;
/// use std::path::Path;
///
/// assert!(file_exists().check(Path::new("Cargo.toml")).is_success());
/// assert!(file_exists().check(Path::new("src")).is_failure());
/// ```
pub fn file_exists() -> Exists {
    Exists {
        kind: EntryKind::File,
    }
}

/// Create a checker for an existing directory.
pub fn dir_exists() -> Exists {
    Exists {
        kind: EntryKind::Directory,
    }
}

/// Create a checker for any existing path.
pub fn path_exists() -> Exists {
    Exists {
        kind: EntryKind::Any,
    }
}

/// Checker that nothing exists at a path yet.
#[derive(Clone, Copy, Debug, Default)]
pub struct Absent;

impl<P: AsRef<Path> + ?Sized> ValueChecker<P> for Absent {
    fn check(&self, value: &P) -> CheckResult {
        let path = value.as_ref();
        CheckResult::from_bool(!path.exists(), || {
            format!("'{}' already exists", path.display())
        })
    }
}

/// Create a checker that passes paths where nothing exists yet.
pub fn path_absent() -> Absent {
    Absent
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn file_and_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("input.txt");
        fs::write(&file, "data").unwrap();

        assert!(file_exists().check(&file).is_success());
        assert!(dir_exists().check(dir.path()).is_success());
        assert!(path_exists().check(&file).is_success());

        assert_eq!(
            file_exists().check(dir.path()).error_message(),
            Some(format!("'{}' is not a file", dir.path().display()).as_str())
        );
        assert_eq!(
            dir_exists().check(&file).error_message(),
            Some(format!("'{}' is not a directory", file.display()).as_str())
        );
    }

    #[test]
    fn missing_paths() {
        let dir = tempfile::tempdir().unwrap();
        let missing: PathBuf = dir.path().join("nope");

        assert!(file_exists().check(&missing).is_failure());
        assert!(dir_exists().check(&missing).is_failure());
        assert_eq!(
            path_exists().check(&missing).error_message(),
            Some(format!("path '{}' does not exist", missing.display()).as_str())
        );
        assert!(path_absent().check(&missing).is_success());
        assert!(path_absent().check(dir.path()).is_failure());
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(dir.path().join("gone"), &link).unwrap();

        assert_eq!(
            file_exists().check(&link).error_message(),
            Some(format!("file '{}' does not exist", link.display()).as_str())
        );
        assert!(path_exists().check(&link).is_failure());
    }

    #[test]
    fn accepts_strings() {
        let dir = tempfile::tempdir().unwrap();
        let as_string = dir.path().to_string_lossy().into_owned();
        assert!(dir_exists().check(&as_string).is_success());
        assert!(dir_exists().check(as_string.as_str()).is_success());
    }
}
