//! Structural diff between two configuration trees.
//!
//! Responsibilities:
//! - Report every path whose value differs between two trees, or that exists
//!   in only one of them.
//!
//! Does NOT handle:
//! - Decryption. Callers pass already-decrypted trees so that random IVs do
//!   not show up as differences.
//!
//! Invariants:
//! - `compare(a, a)` is empty.
//! - Nested sections present on both sides are recursed into and never
//!   reported at the parent level.
//! - Scalars are equal only when both value and type match (`1` != `"1"`).
//! - Ordering follows `a`'s keys, with keys only in `b` after them at each level.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::constants::NOT_SET;
use crate::types::{ConfigTree, ConfigValue, join_path};

/// One side of a difference.
#[derive(Debug, Clone, PartialEq)]
pub enum DiffSide {
    Value(ConfigValue),
    /// The key is absent in this environment.
    NotSet,
}

impl DiffSide {
    pub fn is_not_set(&self) -> bool {
        matches!(self, Self::NotSet)
    }
}

impl fmt::Display for DiffSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => fmt::Display::fmt(value, f),
            Self::NotSet => f.write_str(NOT_SET),
        }
    }
}

impl Serialize for DiffSide {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(value) => value.serialize(serializer),
            Self::NotSet => serializer.serialize_str(NOT_SET),
        }
    }
}

/// A path at which two trees disagree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffEntry {
    /// `:`-joined key path.
    pub path: String,
    pub left: DiffSide,
    pub right: DiffSide,
}

/// Computes the differences between `left` and `right`.
pub fn compare(left: &ConfigTree, right: &ConfigTree) -> Vec<DiffEntry> {
    let mut differences = Vec::new();
    compare_level(left, right, "", &mut differences);
    differences
}

fn compare_level(left: &ConfigTree, right: &ConfigTree, prefix: &str, out: &mut Vec<DiffEntry>) {
    for (key, left_value) in left {
        let path = join_path(prefix, key);
        let Some(right_value) = right.get(key) else {
            out.push(DiffEntry {
                path,
                left: DiffSide::Value(left_value.clone()),
                right: DiffSide::NotSet,
            });
            continue;
        };

        match (left_value, right_value) {
            (ConfigValue::Tree(l), ConfigValue::Tree(r)) => compare_level(l, r, &path, out),
            (l, r) if l == r => {}
            (l, r) => out.push(DiffEntry {
                path,
                left: DiffSide::Value(l.clone()),
                right: DiffSide::Value(r.clone()),
            }),
        }
    }

    for (key, right_value) in right {
        if !left.contains_key(key) {
            out.push(DiffEntry {
                path: join_path(prefix, key),
                left: DiffSide::NotSet,
                right: DiffSide::Value(right_value.clone()),
            });
        }
    }
}
