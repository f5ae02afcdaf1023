//! Human-readable text output for duplicate scan results.

use std::io::Write;

use crate::duplicates::{DuplicateGroup, ScanSummary};

/// Text formatter: one block per duplicate group, then a summary line.
#[derive(Debug)]
pub struct TextOutput<'a> {
    groups: &'a [DuplicateGroup],
    summary: &'a ScanSummary,
}

impl<'a> TextOutput<'a> {
    /// Create a text output for the given scan results.
    #[must_use]
    pub fn new(groups: &'a [DuplicateGroup], summary: &'a ScanSummary) -> Self {
        Self { groups, summary }
    }

    /// Write the formatted report to the given writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the underlying writer fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for group in self.groups {
            writeln!(
                writer,
                "{}  {} bytes  {} files",
                group.fingerprint_hex(),
                group.size,
                group.len()
            )?;
            let mut paths = group.paths();
            paths.sort();
            for path in paths {
                writeln!(writer, "  {}", path.display())?;
            }
            writeln!(writer)?;
        }

        writeln!(
            writer,
            "{} duplicate groups, {} duplicate files, {} wasted ({} files scanned in {:.2?})",
            self.summary.duplicate_groups,
            self.summary.duplicate_files,
            self.summary.wasted_display(),
            self.summary.total_files,
            self.summary.scan_duration
        )?;

        if self.summary.has_errors() {
            writeln!(
                writer,
                "{} entries skipped due to errors (see warnings)",
                self.summary.scan_errors.len()
            )?;
        }

        Ok(())
    }

    /// Render the report to a string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut buf = Vec::new();
        // Writing to a Vec cannot fail.
        let _ = self.write_to(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}
