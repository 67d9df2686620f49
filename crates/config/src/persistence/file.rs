//! JSON file backend: one `appsettings.<env>.json` per environment.

use std::path::{Path, PathBuf};

use super::{ConfigRepository, parse_document, write_document};
use crate::error::{ConfigError, Result};
use crate::types::{ConfigTree, Environment};

/// Stores each environment as a JSON document inside `root`.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    root: PathBuf,
}

impl JsonFileRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the document for `environment`.
    pub fn path_for(&self, environment: &Environment) -> PathBuf {
        self.root.join(environment.file_name())
    }
}

impl ConfigRepository for JsonFileRepository {
    async fn read(&self, environment: &Environment) -> Result<Option<ConfigTree>> {
        let path = self.path_for(environment);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(
                    path = %path.display(),
                    environment = %environment,
                    "No configuration file for environment"
                );
                return Ok(None);
            }
            Err(source) => return Err(ConfigError::Io { path, source }),
        };

        parse_document(&path, &content).map(Some)
    }

    async fn write(&self, environment: &Environment, tree: &ConfigTree) -> Result<()> {
        write_document(&self.path_for(environment), tree).await
    }
}
