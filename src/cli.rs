//! Command-line interface definitions for finddups.
//!
//! # Example
//!
//! ```bash
//! # Scan the current directory
//! finddups
//!
//! # Scan with a size window
//! finddups ~/Downloads --min-size 1KB --max-size 1GB
//!
//! # Machine-readable output
//! finddups ~/Downloads --output json
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Recursively find duplicate files.
///
/// Files are bucketed by size first, then same-size files are compared by
/// a 64-bit content fingerprint over memory-mapped reads. Groups of files
/// with identical fingerprints are reported as duplicates.
#[derive(Debug, Parser)]
#[command(name = "finddups")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan for duplicates
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Minimum file size to consider (e.g. 4K, 1MB, 1GiB)
    ///
    /// Supports suffixes: B, KB, KiB, MB, MiB, GB, GiB, TB, TiB
    #[arg(long, value_name = "SIZE", value_parser = parse_size, default_value = "0")]
    pub min_size: u64,

    /// Maximum file size to consider (e.g. 100MB)
    ///
    /// Supports suffixes: B, KB, KiB, MB, MiB, GB, GiB, TB, TiB
    #[arg(long, value_name = "SIZE", value_parser = parse_size)]
    pub max_size: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Number of I/O threads for fingerprinting (default: 4)
    ///
    /// Lower values reduce disk thrashing on HDDs.
    #[arg(long, value_name = "N", default_value = "4")]
    pub io_threads: usize,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors and results
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable group listing
    Text,
    /// Machine-readable JSON document
    Json,
}

/// Parse a human-readable size string into bytes.
///
/// Both the minimum and the maximum bound go through this parser, and a
/// malformed value for either is rejected at argument-parse time.
///
/// # Errors
///
/// Returns an error for empty input, negative or malformed numbers, and
/// unknown suffixes.
pub fn parse_size(s: &str) -> Result<u64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("Size cannot be empty".to_string());
    }

    // Find where the number ends and the suffix begins
    let (num_str, suffix) = match s.find(|c: char| !c.is_ascii_digit() && c != '.') {
        Some(idx) => (&s[..idx], s[idx..].trim().to_uppercase()),
        None => (s, String::new()),
    };

    let num: f64 = num_str
        .parse()
        .map_err(|_| format!("Invalid number: '{num_str}'"))?;

    if num < 0.0 {
        return Err("Size cannot be negative".to_string());
    }

    let multiplier: u64 = match suffix.as_str() {
        "" | "B" => 1,
        "KB" | "K" => 1_000,
        "KIB" => 1_024,
        "MB" | "M" => 1_000_000,
        "MIB" => 1_048_576,
        "GB" | "G" => 1_000_000_000,
        "GIB" => 1_073_741_824,
        "TB" | "T" => 1_000_000_000_000,
        "TIB" => 1_099_511_627_776,
        _ => return Err(format!("Unknown size suffix: '{suffix}'")),
    };

    let bytes = num * multiplier as f64;
    if bytes > u64::MAX as f64 {
        return Err(format!("Size too large: '{s}'"));
    }

    Ok(bytes as u64)
}
