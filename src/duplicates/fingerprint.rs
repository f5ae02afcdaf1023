//! Content fingerprinting phase (Phase 2 of duplicate detection).
//!
//! Consumes the size buckets from Phase 1 and regroups candidate files by
//! their 64-bit content fingerprint. Only buckets with more than one member
//! are read at all; a lone size cannot have a duplicate. Zero-byte files go
//! straight to the reserved empty-content fingerprint without any read.
//!
//! Failures are isolated per file: when a candidate cannot be opened or
//! mapped, a warning naming the path and the OS error goes to the log and
//! that single file is dropped from all output buckets. The remaining
//! candidates are unaffected.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::scanner::{fingerprint_file, FileEntry, Fingerprint, HashError, EMPTY_FINGERPRINT};

/// Configuration for the fingerprint phase.
#[derive(Debug, Clone)]
pub struct FingerprintConfig {
    /// Number of I/O threads for parallel hashing.
    /// Default is 4 to prevent disk thrashing.
    pub io_threads: usize,
}

impl Default for FingerprintConfig {
    fn default() -> Self {
        Self { io_threads: 4 }
    }
}

impl FingerprintConfig {
    /// Create a new configuration with a custom I/O thread count.
    #[must_use]
    pub fn with_io_threads(mut self, threads: usize) -> Self {
        self.io_threads = threads.max(1);
        self
    }
}

/// Statistics from the fingerprint phase.
#[derive(Debug, Default)]
pub struct FingerprintStats {
    /// Files that entered the phase as hash candidates (nonzero buckets, 2+ members)
    pub candidate_files: usize,
    /// Files successfully fingerprinted
    pub fingerprinted_files: usize,
    /// Files dropped due to per-file I/O failures
    pub failed_files: usize,
    /// Nonzero-size singleton buckets skipped without any read
    pub skipped_singletons: usize,
    /// Zero-byte files assigned the empty fingerprint without a read
    pub empty_files: usize,
    /// Total bytes hashed
    pub bytes_hashed: u64,
    /// Per-file errors encountered (also logged as warnings)
    pub errors: Vec<HashError>,
}

/// Regroup size buckets by content fingerprint (Phase 2).
///
/// For every size bucket with 2+ members, computes the XXH64 fingerprint of
/// each member over a memory-mapped read and buckets files by fingerprint.
/// The zero-size bucket is assigned [`EMPTY_FINGERPRINT`] wholesale.
///
/// Hashing runs on a rayon pool bounded by `config.io_threads`; results are
/// merged into the output map sequentially afterwards, so bucket membership
/// is identical regardless of worker scheduling.
///
/// Returned buckets are a disjoint repartitioning of the candidates that
/// produced a fingerprint. Buckets may contain a single file (a candidate
/// whose content matched nothing); the reporter filters those out.
#[must_use]
pub fn fingerprint_groups(
    size_groups: HashMap<u64, Vec<FileEntry>>,
    config: &FingerprintConfig,
) -> (HashMap<Fingerprint, Vec<FileEntry>>, FingerprintStats) {
    let mut stats = FingerprintStats::default();
    let mut buckets: HashMap<Fingerprint, Vec<FileEntry>> = HashMap::new();
    let mut candidates: Vec<FileEntry> = Vec::new();

    for (size, members) in size_groups {
        if size == 0 {
            // All zero-length content hashes identically; no read needed.
            stats.empty_files += members.len();
            buckets
                .entry(EMPTY_FINGERPRINT)
                .or_default()
                .extend(members);
        } else if members.len() == 1 {
            stats.skipped_singletons += 1;
        } else {
            candidates.extend(members);
        }
    }

    stats.candidate_files = candidates.len();

    if candidates.is_empty() {
        log::debug!("Phase 2: no candidate files to fingerprint");
        return (buckets, stats);
    }

    log::info!(
        "Phase 2: fingerprinting {} candidate files",
        candidates.len()
    );

    let results: Vec<(FileEntry, Result<Fingerprint, HashError>)> =
        match rayon::ThreadPoolBuilder::new()
            .num_threads(config.io_threads.max(1))
            .build()
        {
            Ok(pool) => pool.install(|| {
                candidates
                    .into_par_iter()
                    .map(|file| {
                        let result = fingerprint_file(&file.path);
                        (file, result)
                    })
                    .collect()
            }),
            Err(e) => {
                log::warn!("Failed to build fingerprint thread pool ({e}); hashing sequentially");
                candidates
                    .into_iter()
                    .map(|file| {
                        let result = fingerprint_file(&file.path);
                        (file, result)
                    })
                    .collect()
            }
        };

    // Merge after partition: insertion into the shared map stays on one
    // thread, and the final grouping is independent of hash order.
    for (file, result) in results {
        match result {
            Ok(fingerprint) => {
                stats.fingerprinted_files += 1;
                stats.bytes_hashed += file.size;
                buckets.entry(fingerprint).or_default().push(file);
            }
            Err(e) => {
                log::warn!("Skipping {}: {}", file.path.display(), e);
                stats.failed_files += 1;
                stats.errors.push(e);
            }
        }
    }

    log::info!(
        "Phase 2 complete: {} files fingerprinted, {} failed, {} bytes hashed",
        stats.fingerprinted_files,
        stats.failed_files,
        stats.bytes_hashed
    );

    (buckets, stats)
}
