//! Human-readable text formatter.

use anyhow::Result;
use fern_config::{ConfigTree, ConfigValue, DiffEntry, ValidationIssue};
use std::fmt::Write;

use super::Formatter;

/// Indentation added per nesting level.
const INDENT: &str = "  ";

/// Plain text formatter.
pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format_tree(&self, environment: &str, tree: &ConfigTree) -> Result<String> {
        if tree.is_empty() {
            return Ok(format!(
                "No configuration entries found for environment '{}'",
                environment
            ));
        }

        let mut output = format!("Configuration entries for environment '{}':\n", environment);
        write_tree(&mut output, tree, "")?;
        Ok(output.trim_end().to_string())
    }

    fn format_diff(&self, left: &str, right: &str, entries: &[DiffEntry]) -> Result<String> {
        if entries.is_empty() {
            return Ok(format!(
                "No differences found between environments '{}' and '{}'",
                left, right
            ));
        }

        let mut output = format!("Differences between environments '{}' and '{}':\n", left, right);
        for entry in entries {
            writeln!(output)?;
            writeln!(output, "Key: {}", entry.path)?;
            writeln!(output, "- {}: {}", left, entry.left)?;
            writeln!(output, "- {}: {}", right, entry.right)?;
        }
        Ok(output.trim_end().to_string())
    }

    fn format_validation(&self, environment: &str, issues: &[ValidationIssue]) -> Result<String> {
        if issues.is_empty() {
            return Ok(format!("Configuration for environment '{}' is valid", environment));
        }

        let mut output = format!("Configuration for environment '{}' is invalid", environment);
        for issue in issues {
            write!(output, "\n{}- {}", INDENT, issue.describe())?;
        }
        Ok(output)
    }
}

fn write_tree(output: &mut String, tree: &ConfigTree, prefix: &str) -> std::fmt::Result {
    for (key, value) in tree {
        match value {
            ConfigValue::Tree(nested) => {
                writeln!(output, "{prefix}{key}:")?;
                write_tree(output, nested, &format!("{prefix}{INDENT}"))?;
            }
            scalar => writeln!(output, "{prefix}{key}: {scalar}")?,
        }
    }
    Ok(())
}
