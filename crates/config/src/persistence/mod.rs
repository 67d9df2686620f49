//! Persistence of whole configuration trees.
//!
//! Responsibilities:
//! - Define the `ConfigRepository` abstraction (read full tree / write full tree).
//! - Provide the JSON file backend (`appsettings.<env>.json`) and an in-memory
//!   backend.
//! - Write documents atomically (temp file + rename).
//!
//! Does NOT handle:
//! - Encryption or decryption of values (see `store.rs`).
//! - Merging with previously persisted state (see `merge.rs`).
//! - Locking: concurrent writers to the same environment are last-writer-wins.
//!
//! Invariants:
//! - A missing document reads as `None`, never as an error.
//! - An empty or `null` document reads as an empty tree.
//! - Any other unparsable document is a `ConfigError::Format`.
//! - Documents are written in full, pretty-printed with 2-space indentation.

use std::future::Future;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{ConfigError, Result};
use crate::types::{ConfigTree, Environment};

mod file;
mod memory;

pub use file::JsonFileRepository;
pub use memory::MemoryRepository;

/// Load-full-tree / save-full-tree storage for environments.
pub trait ConfigRepository: Send + Sync {
    /// Reads the persisted tree verbatim, or `None` if nothing is stored.
    fn read(
        &self,
        environment: &Environment,
    ) -> impl Future<Output = Result<Option<ConfigTree>>> + Send;

    /// Replaces the persisted tree.
    fn write(
        &self,
        environment: &Environment,
        tree: &ConfigTree,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// Parses a persisted document.
pub(crate) fn parse_document(path: &Path, content: &str) -> Result<ConfigTree> {
    if content.trim().is_empty() {
        return Ok(ConfigTree::new());
    }
    let tree: Option<ConfigTree> =
        serde_json::from_str(content).map_err(|source| ConfigError::Format {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(tree.unwrap_or_default())
}

/// Writes `tree` to `path` through a uniquely named sibling temporary file.
///
/// Each call gets its own temp file, so overlapping writers never share one;
/// the last rename wins. The temp file is removed if the write or rename fails.
pub(crate) async fn write_document(path: &Path, tree: &ConfigTree) -> Result<()> {
    let content = serde_json::to_string_pretty(tree).map_err(ConfigError::Serialize)?;
    let target = path.to_path_buf();

    tokio::task::spawn_blocking(move || persist_document(&target, &content))
        .await
        .map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::other(e),
        })??;

    tracing::debug!(path = %path.display(), "Configuration written atomically");
    Ok(())
}

fn persist_document(path: &Path, content: &str) -> Result<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    std::fs::create_dir_all(parent).map_err(io_error(parent))?;

    let mut temp_file = NamedTempFile::new_in(parent).map_err(io_error(parent))?;
    let written = temp_file
        .write_all(content.as_bytes())
        .and_then(|()| temp_file.flush());
    written.map_err(io_error(temp_file.path()))?;

    // A failed persist hands the temp file back; dropping it deletes it.
    temp_file
        .persist(path)
        .map_err(|e| io_error(path)(e.error))?;
    Ok(())
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ConfigError + use<> {
    let path = path.to_path_buf();
    move |source| ConfigError::Io { path, source }
}
