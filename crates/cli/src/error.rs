//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ConfigError` and `EncryptionError` variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-5 are reserved for specific error categories.

use fern_config::{ConfigError, EncryptionError};

/// Structured exit codes for fern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - I/O failure or anything not categorized below.
    GeneralError = 1,

    /// An encrypted value could not be decrypted.
    ///
    /// Usually a wrong `CONFIG_ENCRYPTION_KEY` or a tampered file.
    DecryptionFailed = 2,

    /// A configuration file is malformed or the resulting tree is invalid.
    InvalidConfiguration = 3,

    /// A key path or environment name supplied by the user is unusable.
    InvalidInput = 4,

    /// `CONFIG_ENCRYPTION_KEY` is not set.
    MissingEncryptionKey = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::Decryption { .. } => ExitCode::DecryptionFailed,
            ConfigError::Encryption(inner) => ExitCode::from(inner),

            ConfigError::Format { .. } | ConfigError::InvalidConfiguration(_) => {
                ExitCode::InvalidConfiguration
            }

            ConfigError::InvalidPath { .. }
            | ConfigError::InvalidEnvironment(_)
            | ConfigError::PathConflict { .. } => ExitCode::InvalidInput,

            ConfigError::MissingEncryptionKey { .. } => ExitCode::MissingEncryptionKey,

            ConfigError::Serialize(_)
            | ConfigError::Io { .. }
            | ConfigError::DotenvParse { .. }
            | ConfigError::DotenvIo { .. }
            | ConfigError::DotenvUnknown => ExitCode::GeneralError,
        }
    }
}

impl From<&EncryptionError> for ExitCode {
    fn from(err: &EncryptionError) -> Self {
        match err {
            EncryptionError::DecryptionFailed(_) | EncryptionError::InvalidFormat(_) => {
                ExitCode::DecryptionFailed
            }
            EncryptionError::EncryptionFailed(_) => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no library error is found in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(config_err);
            }
            if let Some(codec_err) = cause.downcast_ref::<EncryptionError>() {
                return ExitCode::from(codec_err);
            }
        }

        ExitCode::GeneralError
    }
}
