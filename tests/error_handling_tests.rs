//! Tests for fatal-vs-recoverable error behavior.
//!
//! Only an invalid root aborts a scan; everything else is a per-entry
//! diagnostic that leaves the rest of the results intact.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use finddups::duplicates::{DuplicateFinder, FinderError};

fn write_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_missing_root_is_fatal() {
    let finder = DuplicateFinder::with_defaults();
    let result = finder.find_duplicates(Path::new("/no/such/dir/anywhere"));

    assert!(matches!(result, Err(FinderError::PathNotFound(_))));
}

#[test]
fn test_non_directory_root_is_fatal() {
    let dir = TempDir::new().unwrap();
    let file = write_file(dir.path(), "file.txt", b"contents");

    let finder = DuplicateFinder::with_defaults();
    let result = finder.find_duplicates(&file);

    assert!(matches!(result, Err(FinderError::NotADirectory(_))));
}

#[cfg(unix)]
mod unix {
    use super::*;
    use std::collections::HashSet;
    use std::os::unix::fs::PermissionsExt;

    fn chmod(path: &Path, mode: u32) {
        fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
    }

    /// Permission bits do not bind a privileged user (e.g. root in CI),
    /// in which case revoking access cannot be tested.
    fn permissions_enforced(locked: &Path) -> bool {
        fs::File::open(locked).is_err()
    }

    /// N candidates with one made unreadable: the other N-1 still group,
    /// and exactly one diagnostic is recorded.
    #[test]
    fn test_one_unreadable_candidate_does_not_abort() {
        let dir = TempDir::new().unwrap();
        let a = write_file(dir.path(), "a", b"dup");
        let b = write_file(dir.path(), "b", b"dup");
        let locked = write_file(dir.path(), "locked", b"dup");
        chmod(&locked, 0o000);
        if !permissions_enforced(&locked) {
            return;
        }

        let finder = DuplicateFinder::with_defaults();
        let (groups, summary) = finder.find_duplicates(dir.path()).unwrap();

        chmod(&locked, 0o644);

        assert_eq!(summary.failed_files, 1);
        assert_eq!(summary.scan_errors.len(), 1);
        assert_eq!(groups.len(), 1);

        let paths: HashSet<_> = groups[0].paths().into_iter().collect();
        assert_eq!(paths, HashSet::from([a, b]));
    }

    /// An unreadable file in a singleton size bucket is never opened, so
    /// it produces no diagnostic at all.
    #[test]
    fn test_unreadable_singleton_is_never_touched() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "small", b"xy");
        let locked = write_file(dir.path(), "locked", b"unique length here");
        chmod(&locked, 0o000);

        // No enforcement guard needed: the file must never be opened at
        // all, so the assertions hold whether or not the chmod bites.
        let finder = DuplicateFinder::with_defaults();
        let (groups, summary) = finder.find_duplicates(dir.path()).unwrap();

        chmod(&locked, 0o644);

        assert!(groups.is_empty());
        assert_eq!(summary.failed_files, 0);
        assert!(summary.scan_errors.is_empty());
    }

    /// Zero-byte files take the empty-content shortcut, so even an
    /// unreadable empty file lands in the reserved bucket without error.
    #[test]
    fn test_unreadable_empty_file_still_grouped() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "e1", b"");
        let locked = write_file(dir.path(), "e2", b"");
        chmod(&locked, 0o000);

        let finder = DuplicateFinder::with_defaults();
        let (groups, summary) = finder.find_duplicates(dir.path()).unwrap();

        chmod(&locked, 0o644);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 2);
        assert!(summary.scan_errors.is_empty());
    }

    /// An unreadable subdirectory is skipped with a diagnostic while the
    /// rest of the tree is scanned normally.
    #[test]
    fn test_unreadable_subdirectory_is_skipped() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "a", b"pair");
        write_file(dir.path(), "b", b"pair");

        let locked_dir = dir.path().join("locked");
        fs::create_dir(&locked_dir).unwrap();
        write_file(&locked_dir, "hidden", b"pair");
        chmod(&locked_dir, 0o000);
        if fs::read_dir(&locked_dir).is_ok() {
            chmod(&locked_dir, 0o755);
            return;
        }

        let finder = DuplicateFinder::with_defaults();
        let (groups, summary) = finder.find_duplicates(dir.path()).unwrap();

        chmod(&locked_dir, 0o755);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 2);
        assert_eq!(summary.scan_errors.len(), 1);
    }
}
