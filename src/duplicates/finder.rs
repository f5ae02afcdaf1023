//! Duplicate finder orchestrating the two-phase detection pipeline.
//!
//! 1. **Walk** - collect in-bound regular files from the target directory
//! 2. **Phase 1** - group files by size (singletons cannot be duplicates)
//! 3. **Phase 2** - fingerprint multi-member buckets and regroup by content
//!
//! Per-entry traversal errors and per-file hashing errors are accumulated
//! in the [`ScanSummary`]; only an invalid root aborts the run.

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::fingerprint::{fingerprint_groups, FingerprintConfig};
use super::groups::group_by_size;
use super::DuplicateGroup;
use crate::scanner::{ScanError, Walker, WalkerConfig};

/// Configuration for the duplicate finder.
#[derive(Debug, Clone, Default)]
pub struct FinderConfig {
    /// Size window applied during traversal.
    pub walker_config: WalkerConfig,
    /// Fingerprint phase settings (I/O parallelism).
    pub fingerprint_config: FingerprintConfig,
}

impl FinderConfig {
    /// Set the walker configuration.
    #[must_use]
    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = config;
        self
    }

    /// Set the number of I/O threads for the fingerprint phase.
    #[must_use]
    pub fn with_io_threads(mut self, threads: usize) -> Self {
        self.fingerprint_config = self.fingerprint_config.with_io_threads(threads);
        self
    }
}

/// Errors that abort a duplicate scan.
#[derive(thiserror::Error, Debug)]
pub enum FinderError {
    /// The provided root path does not exist.
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    /// The provided root path is not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Summary statistics from a duplicate scan.
#[derive(Debug, Default)]
pub struct ScanSummary {
    /// Total number of in-bound files found
    pub total_files: usize,
    /// Total size of all in-bound files in bytes
    pub total_size: u64,
    /// Files eliminated by size classification (unique nonzero sizes)
    pub eliminated_by_size: usize,
    /// Zero-byte files assigned the reserved fingerprint without a read
    pub empty_files: usize,
    /// Files successfully fingerprinted
    pub fingerprinted_files: usize,
    /// Files dropped due to per-file I/O failures
    pub failed_files: usize,
    /// Number of confirmed duplicate groups
    pub duplicate_groups: usize,
    /// Number of duplicate files (excluding one original per group)
    pub duplicate_files: usize,
    /// Space wasted by the extra copies
    pub wasted_space: u64,
    /// Duration of the entire scan
    pub scan_duration: Duration,
    /// Non-fatal errors encountered during the scan
    pub scan_errors: Vec<ScanError>,
}

impl ScanSummary {
    /// Whether any per-entry or per-file error occurred.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.scan_errors.is_empty()
    }

    /// Format wasted space as a human-readable string.
    #[must_use]
    pub fn wasted_display(&self) -> String {
        format_size(self.wasted_space)
    }

    /// Format total size as a human-readable string.
    #[must_use]
    pub fn total_size_display(&self) -> String {
        format_size(self.total_size)
    }
}

/// Format a byte size as a human-readable string.
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    if bytes >= TB {
        format!("{:.2} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Duplicate finder running the two-phase detection pipeline.
///
/// # Example
///
/// ```no_run
/// use finddups::duplicates::{DuplicateFinder, FinderConfig};
/// use std::path::Path;
///
/// let finder = DuplicateFinder::new(FinderConfig::default());
/// let (groups, summary) = finder.find_duplicates(Path::new(".")).unwrap();
///
/// println!("Found {} duplicate groups", summary.duplicate_groups);
/// ```
pub struct DuplicateFinder {
    config: FinderConfig,
}

impl DuplicateFinder {
    /// Create a new duplicate finder with the given configuration.
    #[must_use]
    pub fn new(config: FinderConfig) -> Self {
        Self { config }
    }

    /// Create a new duplicate finder with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(FinderConfig::default())
    }

    /// Find all duplicate files under the given root directory.
    ///
    /// Returns confirmed duplicate groups (2+ byte-identical members,
    /// modulo the fingerprint's non-cryptographic collision rate) sorted
    /// by wasted space, along with summary statistics. Per-entry failures
    /// are accumulated in the summary, not raised.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError`] if the root path does not exist or is not a
    /// directory. These are the only fatal conditions; they are checked
    /// before any traversal begins.
    pub fn find_duplicates(
        &self,
        path: &Path,
    ) -> Result<(Vec<DuplicateGroup>, ScanSummary), FinderError> {
        let start_time = std::time::Instant::now();
        let mut summary = ScanSummary::default();

        if !path.exists() {
            return Err(FinderError::PathNotFound(path.to_path_buf()));
        }
        if !path.is_dir() {
            return Err(FinderError::NotADirectory(path.to_path_buf()));
        }

        log::info!("Starting duplicate scan of {}", path.display());

        let walker = Walker::new(path, self.config.walker_config);
        let mut files = Vec::new();
        for result in walker.walk() {
            match result {
                Ok(file) => files.push(file),
                Err(e) => summary.scan_errors.push(e),
            }
        }

        summary.total_files = files.len();
        summary.total_size = files.iter().map(|f| f.size).sum();

        log::info!(
            "Found {} files ({})",
            summary.total_files,
            summary.total_size_display()
        );

        let (size_buckets, grouping_stats) = group_by_size(files);
        summary.eliminated_by_size = grouping_stats.eliminated_unique;

        let (fingerprint_buckets, fingerprint_stats) =
            fingerprint_groups(size_buckets, &self.config.fingerprint_config);

        summary.empty_files = fingerprint_stats.empty_files;
        summary.fingerprinted_files = fingerprint_stats.fingerprinted_files;
        summary.failed_files = fingerprint_stats.failed_files;
        summary
            .scan_errors
            .extend(fingerprint_stats.errors.into_iter().map(ScanError::from));

        let mut duplicate_groups: Vec<DuplicateGroup> = fingerprint_buckets
            .into_iter()
            .filter(|(_, members)| members.len() > 1)
            .map(|(fingerprint, members)| {
                let size = members.first().map_or(0, |f| f.size);
                DuplicateGroup::new(fingerprint, size, members)
            })
            .collect();

        // Largest savings first; fingerprint as tie-breaker for stable output.
        duplicate_groups.sort_by(|a, b| {
            b.wasted_space()
                .cmp(&a.wasted_space())
                .then(a.fingerprint.cmp(&b.fingerprint))
        });

        summary.duplicate_groups = duplicate_groups.len();
        summary.duplicate_files = duplicate_groups.iter().map(DuplicateGroup::duplicate_count).sum();
        summary.wasted_space = duplicate_groups.iter().map(DuplicateGroup::wasted_space).sum();
        summary.scan_duration = start_time.elapsed();

        log::info!(
            "Scan complete in {:?}: {} duplicate groups, {} duplicate files, {} wasted",
            summary.scan_duration,
            summary.duplicate_groups,
            summary.duplicate_files,
            summary.wasted_display()
        );

        Ok((duplicate_groups, summary))
    }
}
