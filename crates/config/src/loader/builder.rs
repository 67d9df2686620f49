//! Settings loader builder implementation.

use secrecy::SecretString;
use std::path::PathBuf;

use super::env::{dotenv_disabled, env_var_or_none, secret_env_var};
use crate::constants::{ENV_CONFIG_DIR, ENV_ENCRYPTION_KEY};
use crate::encryption::ValueCodec;
use crate::error::{ConfigError, Result};
use crate::persistence::JsonFileRepository;
use crate::store::ConfigStore;

/// Resolved startup settings.
#[derive(Debug)]
pub struct Settings {
    /// Secret from which the value encryption key is derived.
    pub encryption_key: SecretString,
    /// Directory holding the `appsettings.<env>.json` files.
    pub config_dir: PathBuf,
}

impl Settings {
    /// Builds a file-backed store rooted at `config_dir`.
    pub fn into_store(self) -> ConfigStore<JsonFileRepository> {
        let codec = ValueCodec::new(&self.encryption_key);
        ConfigStore::new(JsonFileRepository::new(self.config_dir), codec)
    }
}

/// Builds [`Settings`] from `.env`, environment variables and explicit overrides.
#[derive(Debug, Default)]
pub struct SettingsLoader {
    encryption_key: Option<SecretString>,
    config_dir: Option<PathBuf>,
}

impl SettingsLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load environment variables from a `.env` file in the working directory.
    ///
    /// A missing `.env` file is not an error. Setting `DOTENV_DISABLED` to
    /// `1` or `true` skips loading entirely.
    pub fn load_dotenv(self) -> Result<Self> {
        if dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Read `CONFIG_ENCRYPTION_KEY` and `FERN_CONFIG_DIR`.
    ///
    /// The secret is taken as given; only the directory is trimmed. Values already set through builder methods are kept.
    pub fn from_env(mut self) -> Self {
        if self.encryption_key.is_none()
            && let Some(key) = secret_env_var(ENV_ENCRYPTION_KEY)
        {
            self.encryption_key = Some(SecretString::new(key.into()));
        }
        if self.config_dir.is_none()
            && let Some(dir) = env_var_or_none(ENV_CONFIG_DIR)
        {
            self.config_dir = Some(PathBuf::from(dir));
        }
        self
    }

    pub fn with_encryption_key(mut self, key: SecretString) -> Self {
        self.encryption_key = Some(key);
        self
    }

    pub fn with_config_dir(mut self, dir: PathBuf) -> Self {
        self.config_dir = Some(dir);
        self
    }

    /// Finalize the settings.
    ///
    /// # Errors
    /// Returns `ConfigError::MissingEncryptionKey` if no secret was provided.
    pub fn build(self) -> Result<Settings> {
        let encryption_key = self
            .encryption_key
            .ok_or_else(|| ConfigError::MissingEncryptionKey {
                var: ENV_ENCRYPTION_KEY.to_string(),
            })?;

        Ok(Settings {
            encryption_key,
            config_dir: self.config_dir.unwrap_or_else(|| PathBuf::from(".")),
        })
    }
}

fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}
