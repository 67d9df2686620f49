//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide the text and JSON renderings of trees, diffs and validation reports.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//! - Decryption; callers pass already-decrypted trees.
//!
//! Invariants:
//! - Scalars print raw when they are strings and as compact JSON otherwise.
//! - Text output for an empty result is a human message; JSON output for an
//!   empty result is a valid empty structure (`{}` or an empty array).

use anyhow::Result;
use clap::ValueEnum;
use fern_config::{ConfigTree, DiffEntry, ValidationIssue};

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Output format for listing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Renders command results for one output format.
pub trait Formatter {
    /// Format every entry of `environment`.
    fn format_tree(&self, environment: &str, tree: &ConfigTree) -> Result<String>;

    /// Format the differences between two environments.
    fn format_diff(&self, left: &str, right: &str, entries: &[DiffEntry]) -> Result<String>;

    /// Format the outcome of validating `environment`.
    fn format_validation(&self, environment: &str, issues: &[ValidationIssue]) -> Result<String>;
}

/// Get a formatter for the specified format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

#[cfg(test)]
mod tests;
