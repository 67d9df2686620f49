//! Error types for the configuration core.
//!
//! Responsibilities:
//! - Define the error taxonomy surfaced by the store and its collaborators.
//! - Convert lower-level codec and I/O failures into `ConfigError`.
//!
//! Does NOT handle:
//! - Rendering errors for users (see the CLI crate).
//! - Structural validation failures, which are reported as a boolean by
//!   `validation::validate` rather than as an error.
//!
//! Invariants:
//! - No variant carries key material or decrypted secret values.
//! - Decryption failures always name the key path that failed.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use crate::encryption::EncryptionError;

/// Errors that can occur while loading, saving or comparing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file at {path}: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to decrypt value at '{path}': {source}")]
    Decryption {
        path: String,
        #[source]
        source: EncryptionError,
    },

    #[error(transparent)]
    Encryption(#[from] EncryptionError),

    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid key path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("Invalid environment name '{0}'")]
    InvalidEnvironment(String),

    #[error("Cannot descend into '{path}': an existing value is not a nested section")]
    PathConflict { path: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error(
        "The {var} is not set. You can generate a secure key using: openssl rand -base64 32"
    )]
    MissingEncryptionKey { var: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// Only the byte index is reported; the offending line is never included.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

pub type Result<T> = std::result::Result<T, ConfigError>;
