//! CLI command implementations.

pub mod add;
pub mod codec;
pub mod compare;
pub mod export;
pub mod get;
pub mod list;
pub mod validate;

use anyhow::Result;
use fern_config::{Environment, KeyPath};

/// Parse a user-supplied environment name.
pub(crate) fn parse_environment(name: &str) -> Result<Environment> {
    Ok(Environment::new(name)?)
}

/// Parse a user-supplied `:`-delimited key.
pub(crate) fn parse_key(key: &str) -> Result<KeyPath> {
    Ok(KeyPath::parse(key)?)
}
