//! In-memory backend, for tests and embedding.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use super::ConfigRepository;
use crate::error::Result;
use crate::types::{ConfigTree, Environment};

/// Keeps persisted trees in a process-local map.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    trees: Mutex<HashMap<Environment, ConfigTree>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an environment with a raw (possibly encrypted) tree.
    pub fn with_tree(self, environment: Environment, tree: ConfigTree) -> Self {
        self.trees
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(environment, tree);
        self
    }

    /// Returns the raw persisted tree for `environment`.
    pub fn snapshot(&self, environment: &Environment) -> Option<ConfigTree> {
        self.trees
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(environment)
            .cloned()
    }
}

impl ConfigRepository for MemoryRepository {
    async fn read(&self, environment: &Environment) -> Result<Option<ConfigTree>> {
        Ok(self.snapshot(environment))
    }

    async fn write(&self, environment: &Environment, tree: &ConfigTree) -> Result<()> {
        self.trees
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(environment.clone(), tree.clone());
        Ok(())
    }
}
