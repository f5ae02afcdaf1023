//! Scanner module for directory traversal and content fingerprinting.
//!
//! The scanner is divided into submodules:
//! - [`walker`]: Recursive traversal and size-window filtering
//! - [`hasher`]: XXH64 content fingerprints over memory-mapped files
//!
//! # Example
//!
//! ```no_run
//! use finddups::scanner::{Walker, WalkerConfig};
//! use std::path::Path;
//!
//! let config = WalkerConfig::new(1024, u64::MAX); // skip files under 1KB
//! let walker = Walker::new(Path::new("."), config);
//! for entry in walker.walk() {
//!     match entry {
//!         Ok(file) => println!("{}: {} bytes", file.path.display(), file.size),
//!         Err(e) => eprintln!("Warning: {}", e),
//!     }
//! }
//! ```

pub mod hasher;
pub mod walker;

use std::path::PathBuf;

// Re-export main types
pub use hasher::{
    fingerprint_bytes, fingerprint_file, fingerprint_to_hex, Fingerprint, EMPTY_FINGERPRINT,
};
pub use walker::Walker;

/// Metadata for a discovered regular file.
///
/// The size is read once at classification time and never re-queried;
/// a file that changes size on disk afterwards yields a stale entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path to the file
    pub path: PathBuf,
    /// File size in bytes, as observed during traversal
    pub size: u64,
}

impl FileEntry {
    /// Create a new `FileEntry`.
    #[must_use]
    pub fn new(path: PathBuf, size: u64) -> Self {
        Self { path, size }
    }
}

/// Configuration for directory walking.
///
/// Both bounds are inclusive. The caller is responsible for ensuring
/// `min_size <= max_size` before constructing a walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkerConfig {
    /// Minimum file size to include (in bytes).
    pub min_size: u64,
    /// Maximum file size to include (in bytes).
    pub max_size: u64,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            min_size: 0,
            max_size: u64::MAX,
        }
    }
}

impl WalkerConfig {
    /// Create a new configuration with an inclusive size window.
    #[must_use]
    pub fn new(min_size: u64, max_size: u64) -> Self {
        Self { min_size, max_size }
    }

    /// Check whether a file size falls inside the window.
    #[must_use]
    pub fn contains(&self, size: u64) -> bool {
        size >= self.min_size && size <= self.max_size
    }
}

/// Errors that can occur during directory scanning.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// Permission was denied when accessing a file or directory.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// The specified path was not found.
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// An I/O error occurred while accessing a file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A fingerprinting error occurred.
    #[error(transparent)]
    Hash(#[from] HashError),
}

/// Errors that can occur while fingerprinting a file.
#[derive(thiserror::Error, Debug)]
pub enum HashError {
    /// The specified file was not found.
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Permission was denied when reading the file.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// An I/O error occurred while opening or mapping the file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
