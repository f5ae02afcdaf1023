//! Directory walker implementation using walkdir.
//!
//! Provides the [`Walker`] struct for recursively traversing a directory
//! tree and collecting regular files that fall inside a size window.
//! Traversal errors on individual entries are yielded as [`ScanError`]
//! values rather than stopping iteration, so one unreadable subtree never
//! aborts a scan.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{FileEntry, ScanError, WalkerConfig};

/// Directory walker for file discovery.
///
/// Symbolic links are not followed; only regular files are yielded.
#[derive(Debug)]
pub struct Walker {
    /// Root path to walk
    root: PathBuf,
    /// Walker configuration
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use finddups::scanner::{Walker, WalkerConfig};
    /// use std::path::Path;
    ///
    /// let walker = Walker::new(Path::new("."), WalkerConfig::default());
    /// ```
    #[must_use]
    pub fn new(path: &Path, config: WalkerConfig) -> Self {
        Self {
            root: path.to_path_buf(),
            config,
        }
    }

    /// Walk the directory tree, yielding file entries.
    ///
    /// Returns an iterator over [`FileEntry`] results. Per-entry errors
    /// (permission denied, vanished file, unreadable metadata) are yielded
    /// as [`ScanError`] values; files outside the size window are silently
    /// dropped. Traversal order is unspecified.
    pub fn walk(&self) -> impl Iterator<Item = Result<FileEntry, ScanError>> + '_ {
        WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_map(move |entry_result| {
                let entry = match entry_result {
                    Ok(entry) => entry,
                    Err(e) => return Some(Err(self.convert_error(e))),
                };

                // Only regular files count; directories, symlinks and
                // special files are excluded from results.
                if !entry.file_type().is_file() {
                    if entry.file_type().is_symlink() {
                        log::trace!("Skipping symlink: {}", entry.path().display());
                    }
                    return None;
                }

                // Size is queried exactly once, here.
                let metadata = match entry.metadata() {
                    Ok(m) => m,
                    Err(e) => return Some(Err(self.convert_error(e))),
                };

                let size = metadata.len();
                if !self.config.contains(size) {
                    log::trace!(
                        "Skipping file due to size filter ({}): {}",
                        size,
                        entry.path().display()
                    );
                    return None;
                }

                Some(Ok(FileEntry::new(entry.into_path(), size)))
            })
    }

    /// Convert a walkdir error into a [`ScanError`], logging it as a
    /// diagnostic.
    fn convert_error(&self, error: walkdir::Error) -> ScanError {
        use std::io::ErrorKind;

        let path = error
            .path()
            .map_or_else(|| self.root.clone(), Path::to_path_buf);

        match error.io_error().map(std::io::Error::kind) {
            Some(ErrorKind::PermissionDenied) => {
                log::warn!("Permission denied: {}", path.display());
                ScanError::PermissionDenied(path)
            }
            Some(ErrorKind::NotFound) => {
                log::debug!("Entry not found (may have vanished): {}", path.display());
                ScanError::NotFound(path)
            }
            _ => {
                log::warn!("Walker error for {}: {}", path.display(), error);
                let source = error
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("filesystem loop"));
                ScanError::Io { path, source }
            }
        }
    }
}
