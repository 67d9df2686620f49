//! Environment names (`dev`, `staging`, `prod`, ...).

use std::fmt;
use std::str::FromStr;

use crate::constants::{SETTINGS_FILE_EXTENSION, SETTINGS_FILE_PREFIX};
use crate::error::ConfigError;

/// A named configuration profile backed by one persisted document.
///
/// Names are restricted so that the derived file name always stays inside the
/// configuration directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Environment(String);

impl Environment {
    /// Validates and wraps an environment name.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidEnvironment` for blank names, `.`/`..`,
    /// and names containing path separators or NUL.
    pub fn new(name: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        let invalid = name.trim().is_empty()
            || name == "."
            || name == ".."
            || name.contains(['/', '\\', '\0']);
        if invalid {
            return Err(ConfigError::InvalidEnvironment(name));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the persisted document, e.g. `appsettings.dev.json`.
    pub fn file_name(&self) -> String {
        format!(
            "{}.{}.{}",
            SETTINGS_FILE_PREFIX, self.0, SETTINGS_FILE_EXTENSION
        )
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Environment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
