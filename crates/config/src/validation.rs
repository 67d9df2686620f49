//! Structural validation of configuration trees.
//!
//! Only keys are checked: every key at every depth must contain at least one
//! non-whitespace character. Scalar types and encryption markers are not
//! inspected.

use serde::Serialize;

use crate::types::{ConfigTree, ConfigValue, join_path};

/// A structural problem found in a tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Path of the parent section (empty at the root).
    pub parent: String,
    /// The offending key, verbatim.
    pub key: String,
}

impl ValidationIssue {
    pub fn describe(&self) -> String {
        if self.parent.is_empty() {
            format!("empty key {:?} at the top level", self.key)
        } else {
            format!("empty key {:?} under '{}'", self.key, self.parent)
        }
    }
}

/// Returns true if every key at every depth is non-blank.
pub fn validate(tree: &ConfigTree) -> bool {
    validation_issues(tree).is_empty()
}

/// Collects every blank key in the tree, depth-first in key order.
pub fn validation_issues(tree: &ConfigTree) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    collect_issues(tree, "", &mut issues);
    issues
}

fn collect_issues(tree: &ConfigTree, prefix: &str, out: &mut Vec<ValidationIssue>) {
    for (key, value) in tree {
        if key.trim().is_empty() {
            out.push(ValidationIssue {
                parent: prefix.to_string(),
                key: key.clone(),
            });
        }
        if let ConfigValue::Tree(nested) = value {
            collect_issues(nested, &join_path(prefix, key), out);
        }
    }
}
