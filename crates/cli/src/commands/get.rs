//! Print a single decrypted value.

use anyhow::{Context, Result};
use fern_config::{ConfigRepository, ConfigStore};

use super::{parse_environment, parse_key};

pub async fn run<R: ConfigRepository>(store: &ConfigStore<R>, key: &str, env: &str) -> Result<()> {
    let environment = parse_environment(env)?;
    let path = parse_key(key)?;

    let value = store
        .get_value(&environment, &path)
        .await
        .with_context(|| format!("Failed to load environment '{}'", env))?;

    match value {
        Some(value) => println!("{}", value),
        None => anyhow::bail!(
            "Configuration key '{}' not found in environment '{}'",
            key,
            env
        ),
    }

    Ok(())
}
