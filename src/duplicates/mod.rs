//! Two-phase duplicate detection.
//!
//! 1. **Size classification** ([`group_by_size`]): bucket files by exact
//!    size; files with different sizes cannot be duplicates.
//! 2. **Content fingerprinting** ([`fingerprint_groups`]): hash every file
//!    in a multi-member size bucket and regroup by 64-bit fingerprint.
//!
//! [`DuplicateFinder`] orchestrates both phases over a directory tree.

pub mod finder;
pub mod fingerprint;
pub mod groups;

pub use finder::{DuplicateFinder, FinderConfig, FinderError, ScanSummary};
pub use fingerprint::{fingerprint_groups, FingerprintConfig, FingerprintStats};
pub use groups::{group_by_size, GroupingStats};

use crate::scanner::{fingerprint_to_hex, FileEntry, Fingerprint};

/// Confirmed group of files with identical content fingerprints.
#[derive(Debug, Clone)]
pub struct DuplicateGroup {
    /// XXH64 fingerprint shared by every member
    pub fingerprint: Fingerprint,
    /// File size in bytes (shared by all members)
    pub size: u64,
    /// Member files
    pub files: Vec<FileEntry>,
}

impl DuplicateGroup {
    /// Create a new duplicate group.
    #[must_use]
    pub fn new(fingerprint: Fingerprint, size: u64, files: Vec<FileEntry>) -> Self {
        Self {
            fingerprint,
            size,
            files,
        }
    }

    /// Number of files in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if this group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Number of duplicate copies (total minus one original).
    #[must_use]
    pub fn duplicate_count(&self) -> usize {
        self.files.len().saturating_sub(1)
    }

    /// Space wasted by the extra copies (all copies minus one).
    #[must_use]
    pub fn wasted_space(&self) -> u64 {
        self.size * self.duplicate_count() as u64
    }

    /// Fingerprint as a hexadecimal string.
    #[must_use]
    pub fn fingerprint_hex(&self) -> String {
        fingerprint_to_hex(self.fingerprint)
    }

    /// Get just the paths of files in this group.
    #[must_use]
    pub fn paths(&self) -> Vec<std::path::PathBuf> {
        self.files.iter().map(|f| f.path.clone()).collect()
    }
}
