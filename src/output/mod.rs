//! Output formatters for duplicate scan results.
//!
//! - [`text`]: human-readable group listing for the terminal
//! - [`json`]: machine-readable output for scripting and automation
//!
//! Both consume finished [`DuplicateGroup`](crate::duplicates::DuplicateGroup)
//! values read-only; detection logic never prints.

pub mod json;
pub mod text;

// Re-export main types
pub use json::JsonOutput;
pub use text::TextOutput;
