//! JSON output formatter for duplicate scan results.
//!
//! # Output Schema
//!
//! ```json
//! {
//!   "duplicates": [
//!     {
//!       "fingerprint": "a1b2c3d4e5f60718",
//!       "size": 1024,
//!       "files": ["/path/to/file1.txt", "/path/to/file2.txt"]
//!     }
//!   ],
//!   "summary": {
//!     "total_files": 100,
//!     "total_size": 1048576,
//!     "duplicate_groups": 5,
//!     "duplicate_files": 10,
//!     "wasted_space": 51200,
//!     "scan_duration_ms": 1234,
//!     "skipped_entries": 0
//!   }
//! }
//! ```

use std::io::Write;

use serde::Serialize;

use crate::duplicates::{DuplicateGroup, ScanSummary};

/// A single duplicate group in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonDuplicateGroup {
    /// XXH64 fingerprint as a hexadecimal string (16 characters)
    pub fingerprint: String,
    /// File size in bytes
    pub size: u64,
    /// Paths of all files in the group
    pub files: Vec<String>,
}

impl JsonDuplicateGroup {
    /// Create a JSON duplicate group from a [`DuplicateGroup`].
    #[must_use]
    pub fn from_duplicate_group(group: &DuplicateGroup) -> Self {
        let mut files: Vec<String> = group
            .files
            .iter()
            .map(|f| f.path.to_string_lossy().into_owned())
            .collect();
        files.sort();
        Self {
            fingerprint: group.fingerprint_hex(),
            size: group.size,
            files,
        }
    }
}

/// Summary statistics in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSummary {
    /// Total number of in-bound files found
    pub total_files: usize,
    /// Total size of all in-bound files in bytes
    pub total_size: u64,
    /// Number of confirmed duplicate groups
    pub duplicate_groups: usize,
    /// Total number of duplicate files (excluding originals)
    pub duplicate_files: usize,
    /// Space wasted by the extra copies (bytes)
    pub wasted_space: u64,
    /// Duration of the scan in milliseconds
    pub scan_duration_ms: u64,
    /// Number of entries skipped due to non-fatal errors
    pub skipped_entries: usize,
}

impl JsonSummary {
    /// Create a JSON summary from a [`ScanSummary`].
    #[must_use]
    pub fn from_summary(summary: &ScanSummary) -> Self {
        Self {
            total_files: summary.total_files,
            total_size: summary.total_size,
            duplicate_groups: summary.duplicate_groups,
            duplicate_files: summary.duplicate_files,
            wasted_space: summary.wasted_space,
            scan_duration_ms: summary.scan_duration.as_millis() as u64,
            skipped_entries: summary.scan_errors.len(),
        }
    }
}

/// Complete JSON output document.
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    /// All confirmed duplicate groups
    pub duplicates: Vec<JsonDuplicateGroup>,
    /// Scan summary statistics
    pub summary: JsonSummary,
}

impl JsonOutput {
    /// Create a JSON output document for the given scan results.
    #[must_use]
    pub fn new(groups: &[DuplicateGroup], summary: &ScanSummary) -> Self {
        Self {
            duplicates: groups
                .iter()
                .map(JsonDuplicateGroup::from_duplicate_group)
                .collect(),
            summary: JsonSummary::from_summary(summary),
        }
    }

    /// Serialize to a compact JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize to a pretty-printed JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write pretty-printed JSON to the given writer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> anyhow::Result<()> {
        let json = self.to_json_pretty()?;
        writeln!(writer, "{json}")?;
        Ok(())
    }
}
