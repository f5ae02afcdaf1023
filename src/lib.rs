//! finddups - recursively find duplicate files.
//!
//! Files are bucketed by size, then same-size files are fingerprinted with
//! a 64-bit content hash over memory-mapped reads; groups sharing a
//! fingerprint are reported as duplicates.

pub mod cli;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod output;
pub mod scanner;

use anyhow::{bail, Context};

use crate::cli::{Cli, OutputFormat};
use crate::duplicates::{DuplicateFinder, FinderConfig};
use crate::error::ExitCode;
use crate::output::{JsonOutput, TextOutput};
use crate::scanner::WalkerConfig;

/// Run the application logic for the parsed CLI arguments.
///
/// # Errors
///
/// Returns an error for an invalid size window, a missing or non-directory
/// root path, or an output failure. Per-entry scan errors do not fail the
/// run; they are reflected in the exit code instead.
pub fn run_app(cli: Cli) -> anyhow::Result<ExitCode> {
    let max_size = cli.max_size.unwrap_or(u64::MAX);
    if max_size < cli.min_size {
        bail!(
            "Maximum file size ({}) must be at least minimum file size ({})",
            max_size,
            cli.min_size
        );
    }

    let config = FinderConfig::default()
        .with_walker_config(WalkerConfig::new(cli.min_size, max_size))
        .with_io_threads(cli.io_threads);

    let finder = DuplicateFinder::new(config);
    let (groups, summary) = finder
        .find_duplicates(&cli.path)
        .with_context(|| format!("Failed to scan {}", cli.path.display()))?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    match cli.output {
        OutputFormat::Text => TextOutput::new(&groups, &summary)
            .write_to(&mut handle)
            .context("Failed to write text output")?,
        OutputFormat::Json => JsonOutput::new(&groups, &summary)
            .write_to(&mut handle)
            .context("Failed to write JSON output")?,
    }

    Ok(if summary.has_errors() {
        ExitCode::PartialSuccess
    } else if groups.is_empty() {
        ExitCode::NoDuplicates
    } else {
        ExitCode::Success
    })
}
