//! The configuration tree and its values.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::key_path::{KeyPath, join_path};
use crate::encryption::is_encrypted;
use crate::error::ConfigError;

/// A single value in a configuration tree.
///
/// Serialized untagged so the JSON shape on disk mirrors the tree exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    /// Opaque leaf; never descended into or decrypted element-wise.
    Array(Vec<ConfigValue>),
    Tree(ConfigTree),
}

impl ConfigValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_tree(&self) -> Option<&ConfigTree> {
        match self {
            Self::Tree(tree) => Some(tree),
            _ => None,
        }
    }

    pub fn is_tree(&self) -> bool {
        matches!(self, Self::Tree(_))
    }

    /// True for string values carrying the `ENC:` marker.
    pub fn is_encrypted(&self) -> bool {
        self.as_str().is_some_and(is_encrypted)
    }
}

/// Strings render raw; everything else renders as compact JSON.
impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            other => {
                let json = serde_json::to_string(other).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<ConfigTree> for ConfigValue {
    fn from(value: ConfigTree) -> Self {
        Self::Tree(value)
    }
}

/// An insertion-ordered mapping from key to [`ConfigValue`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigTree(IndexMap<String, ConfigValue>);

impl ConfigTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Inserts a value, keeping the original position when the key exists.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ConfigValue>,
    ) -> Option<ConfigValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Removes a key, preserving the order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<ConfigValue> {
        self.0.shift_remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ConfigValue)> {
        self.0.iter()
    }

    /// Looks up the value at `path`, if every intermediate segment is a tree.
    pub fn get_path(&self, path: &KeyPath) -> Option<&ConfigValue> {
        let mut current = self;
        for segment in path.parents() {
            match current.0.get(segment.as_str())? {
                ConfigValue::Tree(tree) => current = tree,
                _ => return None,
            }
        }
        current.0.get(path.leaf())
    }

    /// Sets the value at `path`, creating missing intermediate trees.
    ///
    /// Returns the previous value at that path, if any.
    ///
    /// # Errors
    /// Returns `ConfigError::PathConflict` if an intermediate segment already
    /// holds a non-tree value.
    pub fn set_path(
        &mut self,
        path: &KeyPath,
        value: impl Into<ConfigValue>,
    ) -> Result<Option<ConfigValue>, ConfigError> {
        let mut current = self;
        let mut walked = String::new();
        for segment in path.parents() {
            walked = join_path(&walked, segment);
            let entry = current
                .0
                .entry(segment.clone())
                .or_insert_with(|| ConfigValue::Tree(ConfigTree::new()));
            current = match entry {
                ConfigValue::Tree(tree) => tree,
                _ => return Err(ConfigError::PathConflict { path: walked }),
            };
        }
        Ok(current.0.insert(path.leaf().to_string(), value.into()))
    }

    /// Flattens the tree into `(path, value)` pairs for every non-tree value.
    pub fn leaves(&self) -> Vec<(String, &ConfigValue)> {
        let mut out = Vec::new();
        self.collect_leaves("", &mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, prefix: &str, out: &mut Vec<(String, &'a ConfigValue)>) {
        for (key, value) in &self.0 {
            let path = join_path(prefix, key);
            match value {
                ConfigValue::Tree(tree) => tree.collect_leaves(&path, out),
                leaf => out.push((path, leaf)),
            }
        }
    }
}

impl FromIterator<(String, ConfigValue)> for ConfigTree {
    fn from_iter<I: IntoIterator<Item = (String, ConfigValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ConfigTree {
    type Item = (String, ConfigValue);
    type IntoIter = indexmap::map::IntoIter<String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConfigTree {
    type Item = (&'a String, &'a ConfigValue);
    type IntoIter = indexmap::map::Iter<'a, String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
