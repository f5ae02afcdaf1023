//! Size-based file classification (Phase 1 of duplicate detection).
//!
//! Groups files by their exact size. Files with different sizes cannot be
//! duplicates, so size buckets with a single member are excluded from the
//! fingerprint phase without ever being read. Classification itself keeps
//! every file it is given: the union of all bucket members equals exactly
//! the input set, and pruning happens downstream.

use std::collections::HashMap;

use crate::scanner::FileEntry;

/// Statistics from the size classification phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupingStats {
    /// Total number of files classified
    pub total_files: usize,
    /// Total size of all files in bytes
    pub total_size: u64,
    /// Number of distinct file sizes seen
    pub unique_sizes: usize,
    /// Number of files in nonzero-size buckets with 2+ members
    pub potential_duplicates: usize,
    /// Number of nonzero-size buckets with exactly one member
    pub eliminated_unique: usize,
    /// Number of zero-byte files (fingerprinted without a read)
    pub empty_files: usize,
    /// Number of nonzero-size buckets with 2+ members
    pub duplicate_groups: usize,
}

impl GroupingStats {
    /// Percentage of files eliminated by size classification alone.
    #[must_use]
    pub fn elimination_rate(&self) -> f64 {
        if self.total_files == 0 {
            0.0
        } else {
            (self.eliminated_unique as f64 / self.total_files as f64) * 100.0
        }
    }
}

/// Group files by size (Phase 1 of duplicate detection).
///
/// Returns every bucket, singletons included; the grouping is independent
/// of input order. Time and space are O(n) in the number of files, and no
/// file I/O is performed.
///
/// # Example
///
/// ```
/// use finddups::scanner::FileEntry;
/// use finddups::duplicates::group_by_size;
/// use std::path::PathBuf;
///
/// let files = vec![
///     FileEntry::new(PathBuf::from("/a.txt"), 100),
///     FileEntry::new(PathBuf::from("/b.txt"), 100),
///     FileEntry::new(PathBuf::from("/c.txt"), 200),
/// ];
///
/// let (buckets, stats) = group_by_size(files);
///
/// assert_eq!(buckets.len(), 2);
/// assert_eq!(buckets[&100].len(), 2);
/// assert_eq!(stats.potential_duplicates, 2);
/// assert_eq!(stats.eliminated_unique, 1);
/// ```
#[must_use]
pub fn group_by_size(
    files: impl IntoIterator<Item = FileEntry>,
) -> (HashMap<u64, Vec<FileEntry>>, GroupingStats) {
    let mut buckets: HashMap<u64, Vec<FileEntry>> = HashMap::new();
    let mut stats = GroupingStats::default();

    for file in files {
        stats.total_files += 1;
        stats.total_size += file.size;
        buckets.entry(file.size).or_default().push(file);
    }

    stats.unique_sizes = buckets.len();

    for (size, members) in &buckets {
        if *size == 0 {
            // Zero-byte files all share the reserved empty fingerprint;
            // the fingerprint phase assigns it without reading them.
            stats.empty_files = members.len();
        } else if members.len() == 1 {
            stats.eliminated_unique += 1;
            log::trace!(
                "Eliminated unique size {}: {}",
                size,
                members[0].path.display()
            );
        } else {
            stats.potential_duplicates += members.len();
            stats.duplicate_groups += 1;
            log::debug!(
                "Size bucket {} bytes: {} potential duplicates",
                size,
                members.len()
            );
        }
    }

    log::info!(
        "Phase 1 complete: {} files, {} potential duplicates ({:.1}% eliminated by size)",
        stats.total_files,
        stats.potential_duplicates,
        stats.elimination_rate()
    );

    (buckets, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn make_file(path: &str, size: u64) -> FileEntry {
        FileEntry::new(PathBuf::from(path), size)
    }

    #[test]
    fn test_group_by_size_empty_input() {
        let files: Vec<FileEntry> = vec![];
        let (buckets, stats) = group_by_size(files);

        assert!(buckets.is_empty());
        assert_eq!(stats.total_files, 0);
        assert_eq!(stats.unique_sizes, 0);
        assert_eq!(stats.potential_duplicates, 0);
    }

    #[test]
    fn test_group_by_size_all_unique() {
        let files = vec![
            make_file("/a.txt", 100),
            make_file("/b.txt", 200),
            make_file("/c.txt", 300),
        ];
        let (buckets, stats) = group_by_size(files);

        // Every file is kept, each in its own bucket.
        assert_eq!(buckets.len(), 3);
        assert_eq!(stats.total_files, 3);
        assert_eq!(stats.unique_sizes, 3);
        assert_eq!(stats.eliminated_unique, 3);
        assert_eq!(stats.potential_duplicates, 0);
    }

    #[test]
    fn test_group_by_size_with_duplicates() {
        let files = vec![
            make_file("/a.txt", 100),
            make_file("/b.txt", 100),
            make_file("/c.txt", 200),
        ];
        let (buckets, stats) = group_by_size(files);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[&100].len(), 2);
        assert_eq!(buckets[&200].len(), 1);

        assert_eq!(stats.total_files, 3);
        assert_eq!(stats.unique_sizes, 2);
        assert_eq!(stats.eliminated_unique, 1);
        assert_eq!(stats.potential_duplicates, 2);
        assert_eq!(stats.duplicate_groups, 1);
    }

    #[test]
    fn test_group_by_size_union_equals_input() {
        let files = vec![
            make_file("/a1.txt", 100),
            make_file("/a2.txt", 100),
            make_file("/b.txt", 200),
            make_file("/empty.txt", 0),
        ];
        let (buckets, _) = group_by_size(files.clone());

        let mut members: Vec<FileEntry> = buckets.into_values().flatten().collect();
        members.sort_by(|a, b| a.path.cmp(&b.path));
        let mut expected = files;
        expected.sort_by(|a, b| a.path.cmp(&b.path));
        assert_eq!(members, expected);
    }

    #[test]
    fn test_group_by_size_keys_match_member_sizes() {
        let files = vec![
            make_file("/a.txt", 7),
            make_file("/b.txt", 7),
            make_file("/c.txt", 9),
        ];
        let (buckets, _) = group_by_size(files);

        for (size, members) in &buckets {
            for member in members {
                assert_eq!(member.size, *size);
            }
        }
    }

    #[test]
    fn test_group_by_size_zero_bucket_counted_separately() {
        let files = vec![
            make_file("/empty1.txt", 0),
            make_file("/empty2.txt", 0),
            make_file("/normal.txt", 100),
        ];
        let (buckets, stats) = group_by_size(files);

        assert_eq!(buckets[&0].len(), 2);
        assert_eq!(stats.empty_files, 2);
        assert_eq!(stats.eliminated_unique, 1);
        assert_eq!(stats.duplicate_groups, 0);
    }

    #[test]
    fn test_group_by_size_order_independent() {
        let forward = vec![
            make_file("/a.txt", 100),
            make_file("/b.txt", 100),
            make_file("/c.txt", 200),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        let (buckets_fwd, _) = group_by_size(forward);
        let (buckets_rev, _) = group_by_size(reversed);

        assert_eq!(buckets_fwd.len(), buckets_rev.len());
        for (size, members) in &buckets_fwd {
            let mut fwd: Vec<_> = members.iter().map(|f| f.path.clone()).collect();
            let mut rev: Vec<_> = buckets_rev[size].iter().map(|f| f.path.clone()).collect();
            fwd.sort();
            rev.sort();
            assert_eq!(fwd, rev);
        }
    }

    #[test]
    fn test_group_by_size_total_size_calculation() {
        let files = vec![
            make_file("/a.txt", 100),
            make_file("/b.txt", 200),
            make_file("/c.txt", 300),
        ];
        let (_, stats) = group_by_size(files);

        assert_eq!(stats.total_size, 600);
    }

    #[test]
    fn test_grouping_stats_elimination_rate_empty() {
        let stats = GroupingStats::default();
        assert_eq!(stats.elimination_rate(), 0.0);
    }
}
