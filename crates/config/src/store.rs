//! Configuration store: the façade used by the CLI and other callers.
//!
//! Responsibilities:
//! - Load an environment and decrypt every marked leaf.
//! - Save an environment by merging into the raw persisted tree.
//! - Compare two environments on decrypted values.
//! - Set individual key paths, optionally encrypting the new leaf.
//! - Export an environment to a plaintext file.
//!
//! Does NOT handle:
//! - Prompting or confirmation; callers gate destructive operations.
//! - Caching: every call reads the backing store afresh.
//!
//! Invariants:
//! - A missing environment loads as an empty tree.
//! - A leaf that fails to decrypt fails the whole load; it is never returned
//!   as ciphertext or silently dropped.
//! - Saving never removes keys and never downgrades an encrypted leaf to
//!   plaintext when the caller supplies a replacement string.

use std::path::Path;

use crate::diff::{DiffEntry, compare};
use crate::encryption::{self, ValueCodec, is_encrypted};
use crate::error::{ConfigError, Result};
use crate::merge::merge;
use crate::persistence::{ConfigRepository, write_document};
use crate::types::{ConfigTree, ConfigValue, Environment, KeyPath, join_path};
use crate::validation::{validate, validation_issues};

/// Whether `set_value` created a new key or replaced an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    Added,
    Updated,
}

/// Orchestrates codec, merge, diff and validation over a repository.
#[derive(Debug)]
pub struct ConfigStore<R> {
    repository: R,
    codec: ValueCodec,
}

impl<R: ConfigRepository> ConfigStore<R> {
    pub fn new(repository: R, codec: ValueCodec) -> Self {
        Self { repository, codec }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Loads `environment` with every encrypted leaf replaced by its plaintext.
    ///
    /// # Errors
    /// Returns `ConfigError::Decryption` naming the first leaf that fails to
    /// decrypt, or the repository's read error.
    pub async fn load(&self, environment: &Environment) -> Result<ConfigTree> {
        let raw = self.repository.read(environment).await?.unwrap_or_default();
        let tree = decrypt_tree(raw, &self.codec, "")?;
        tracing::debug!(environment = %environment, keys = tree.len(), "Configuration loaded");
        Ok(tree)
    }

    /// Merges `tree` into the persisted state of `environment` and writes it.
    ///
    /// Not transactional: a concurrent save between the read and the write of
    /// this call is overwritten.
    pub async fn save(&self, environment: &Environment, tree: ConfigTree) -> Result<()> {
        let existing = self.repository.read(environment).await?.unwrap_or_default();
        let merged = merge(existing, tree, &self.codec)?;
        self.repository.write(environment, &merged).await?;
        tracing::debug!(environment = %environment, keys = merged.len(), "Configuration saved");
        Ok(())
    }

    /// Loads both environments and reports their differences.
    pub async fn compare(&self, left: &Environment, right: &Environment) -> Result<Vec<DiffEntry>> {
        let left_tree = self.load(left).await?;
        let right_tree = self.load(right).await?;
        Ok(compare(&left_tree, &right_tree))
    }

    /// Structural check; see [`crate::validation`].
    pub fn validate(&self, tree: &ConfigTree) -> bool {
        validate(tree)
    }

    pub fn encrypt_value(&self, value: &str) -> encryption::Result<String> {
        self.codec.encrypt(value)
    }

    pub fn decrypt_value(&self, value: &str) -> encryption::Result<String> {
        self.codec.decrypt(value)
    }

    /// Returns the decrypted value at `path`, if present.
    pub async fn get_value(
        &self,
        environment: &Environment,
        path: &KeyPath,
    ) -> Result<Option<ConfigValue>> {
        let tree = self.load(environment).await?;
        Ok(tree.get_path(path).cloned())
    }

    /// Sets `path` to `value`, creating intermediate sections as needed.
    ///
    /// With `encrypt`, the new leaf is stored encrypted. Without it, a leaf that
    /// was already encrypted stays encrypted.
    ///
    /// # Errors
    /// Returns `ConfigError::PathConflict` if the path runs through a scalar,
    /// and `ConfigError::InvalidConfiguration` if the resulting tree fails
    /// validation (nothing is written in either case).
    pub async fn set_value(
        &self,
        environment: &Environment,
        path: &KeyPath,
        value: String,
        encrypt: bool,
    ) -> Result<SetOutcome> {
        let mut tree = self.load(environment).await?;

        let value = if encrypt {
            self.codec.encrypt(&value)?
        } else {
            value
        };
        let previous = tree.set_path(path, value)?;

        let issues = validation_issues(&tree);
        if !issues.is_empty() {
            let details: Vec<String> = issues.iter().map(|issue| issue.describe()).collect();
            return Err(ConfigError::InvalidConfiguration(details.join("; ")));
        }

        self.save(environment, tree).await?;

        let outcome = if previous.is_some() {
            SetOutcome::Updated
        } else {
            SetOutcome::Added
        };
        tracing::debug!(
            environment = %environment,
            path = %path,
            encrypted = encrypt,
            ?outcome,
            "Configuration entry set"
        );
        Ok(outcome)
    }

    /// Writes the decrypted contents of `environment` to `destination`.
    ///
    /// Returns the number of leaves written. The output contains secrets in
    /// plaintext; callers are expected to confirm with the user first.
    pub async fn export_decrypted(
        &self,
        environment: &Environment,
        destination: &Path,
    ) -> Result<usize> {
        let tree = self.load(environment).await?;
        write_document(destination, &tree).await?;

        let leaves = tree.leaves().len();
        tracing::warn!(
            environment = %environment,
            destination = %destination.display(),
            leaves,
            "Exported decrypted configuration to a plaintext file"
        );
        Ok(leaves)
    }
}

fn decrypt_tree(tree: ConfigTree, codec: &ValueCodec, prefix: &str) -> Result<ConfigTree> {
    tree.into_iter()
        .map(|(key, value)| -> Result<(String, ConfigValue)> {
            let value = match value {
                ConfigValue::Tree(nested) => {
                    ConfigValue::Tree(decrypt_tree(nested, codec, &join_path(prefix, &key))?)
                }
                ConfigValue::String(s) if is_encrypted(&s) => {
                    let plaintext =
                        codec
                            .decrypt(&s)
                            .map_err(|source| ConfigError::Decryption {
                                path: join_path(prefix, &key),
                                source,
                            })?;
                    ConfigValue::String(plaintext)
                }
                other => other,
            };
            Ok((key, value))
        })
        .collect()
}
