//! Process exit codes.

/// Exit codes for the finddups binary.
///
/// - 0: Success (completed normally, duplicates found)
/// - 1: General error (invalid configuration or unexpected failure)
/// - 2: No duplicates found (completed normally)
/// - 3: Partial success (completed with some non-fatal per-entry errors)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Scan completed and duplicates were found.
    Success = 0,
    /// An unexpected or fatal error occurred.
    GeneralError = 1,
    /// Scan completed but no duplicates were found.
    NoDuplicates = 2,
    /// Scan completed but some entries were skipped due to errors.
    PartialSuccess = 3,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}
