//! Per-environment hierarchical configuration with field-level encryption.
//!
//! This crate loads and saves `appsettings.<env>.json` documents, encrypts
//! individual string values behind an `ENC:` marker, merges partial updates
//! into persisted trees, and compares or validates environments.

pub mod constants;
pub mod diff;
pub mod encryption;
pub mod error;
mod loader;
pub mod merge;
pub mod persistence;
pub mod store;
pub mod types;
pub mod validation;

pub use diff::{DiffEntry, DiffSide};
pub use encryption::{EncryptionError, ValueCodec};
pub use error::{ConfigError, Result};
pub use loader::{Settings, SettingsLoader, env_var_or_none};
pub use persistence::{ConfigRepository, JsonFileRepository, MemoryRepository};
pub use store::{ConfigStore, SetOutcome};
pub use types::{ConfigTree, ConfigValue, Environment, KeyPath};
pub use validation::ValidationIssue;
