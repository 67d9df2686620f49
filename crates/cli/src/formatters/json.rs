//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Format trees, diffs and validation reports as pretty-printed JSON.
//!
//! Invariants:
//! - Diff values are keyed by environment name, matching the text output.

use anyhow::Result;
use fern_config::{ConfigTree, DiffEntry, ValidationIssue};
use serde::Serialize;
use serde_json::{Map, Value};

use super::Formatter;

/// JSON formatter.
pub struct JsonFormatter;

#[derive(Serialize)]
struct DiffReport<'a> {
    environments: [&'a str; 2],
    differences: Vec<DiffRow<'a>>,
}

#[derive(Serialize)]
struct DiffRow<'a> {
    key: &'a str,
    values: Map<String, Value>,
}

impl<'a> DiffRow<'a> {
    fn new(left: &str, right: &str, entry: &'a DiffEntry) -> Result<Self> {
        let mut values = Map::new();
        values.insert(left.to_string(), serde_json::to_value(&entry.left)?);
        values.insert(right.to_string(), serde_json::to_value(&entry.right)?);
        Ok(Self {
            key: &entry.path,
            values,
        })
    }
}

#[derive(Serialize)]
struct ValidationReport<'a> {
    environment: &'a str,
    valid: bool,
    issues: &'a [ValidationIssue],
}

impl Formatter for JsonFormatter {
    fn format_tree(&self, _environment: &str, tree: &ConfigTree) -> Result<String> {
        Ok(serde_json::to_string_pretty(tree)?)
    }

    fn format_diff(&self, left: &str, right: &str, entries: &[DiffEntry]) -> Result<String> {
        let differences = entries
            .iter()
            .map(|entry| DiffRow::new(left, right, entry))
            .collect::<Result<Vec<_>>>()?;
        Ok(serde_json::to_string_pretty(&DiffReport {
            environments: [left, right],
            differences,
        })?)
    }

    fn format_validation(&self, environment: &str, issues: &[ValidationIssue]) -> Result<String> {
        Ok(serde_json::to_string_pretty(&ValidationReport {
            environment,
            valid: issues.is_empty(),
            issues,
        })?)
    }
}
