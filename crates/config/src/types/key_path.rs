//! Delimited key paths such as `ConnectionStrings:DefaultConnection`.

use std::fmt;
use std::str::FromStr;

use crate::constants::PATH_DELIMITER;
use crate::error::ConfigError;

/// An ordered, non-empty sequence of non-blank key segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Parses a `:`-delimited path.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidPath` if the input is empty or any segment
    /// is empty or whitespace-only.
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        if input.trim().is_empty() {
            return Err(ConfigError::InvalidPath {
                path: input.to_string(),
                reason: "path is empty".to_string(),
            });
        }

        let segments: Vec<String> = input.split(PATH_DELIMITER).map(str::to_string).collect();
        if let Some(index) = segments.iter().position(|s| s.trim().is_empty()) {
            return Err(ConfigError::InvalidPath {
                path: input.to_string(),
                reason: format!("segment {} is empty", index + 1),
            });
        }

        Ok(Self { segments })
    }

    /// All segments, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Segments leading up to the leaf.
    pub fn parents(&self) -> &[String] {
        &self.segments[..self.segments.len() - 1]
    }

    /// The final segment.
    pub fn leaf(&self) -> &str {
        // parse() guarantees at least one segment
        &self.segments[self.segments.len() - 1]
    }
}

impl FromStr for KeyPath {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", PATH_DELIMITER)?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

/// Appends `key` to a reporting prefix, omitting the delimiter at the root.
pub(crate) fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}{}{}", prefix, PATH_DELIMITER, key)
    }
}
