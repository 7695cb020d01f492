//! CLI module
//!
//! Command-line interface for exporting Help Center articles.
//!
//! ```text
//! help-center-articles https://support.example.com/hc/en-us --format jsonl --include-fields id title
//! ```
//!
//! Exit status is 0 on success and 1 on any error, including a closed
//! output pipe.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::{ExitCode, ExportStats, Runner};
