//! Add or update a single configuration entry.

use anyhow::{Context, Result};
use fern_config::{ConfigRepository, ConfigStore, SetOutcome};

use super::{parse_environment, parse_key};

pub async fn run<R: ConfigRepository>(
    store: &ConfigStore<R>,
    key: &str,
    value: String,
    env: &str,
    encrypted: bool,
    desc: Option<&str>,
) -> Result<()> {
    let environment = parse_environment(env)?;
    let path = parse_key(key)?;

    if let Some(desc) = desc {
        tracing::debug!(key, description = desc, "Entry descriptions are not persisted");
    }

    let outcome = store
        .set_value(&environment, &path, value, encrypted)
        .await
        .with_context(|| format!("Failed to set '{}' in environment '{}'", key, env))?;

    match outcome {
        SetOutcome::Added => {
            println!("Added configuration entry '{}' to environment '{}'", key, env)
        }
        SetOutcome::Updated => {
            println!("Updated configuration entry '{}' in environment '{}'", key, env)
        }
    }

    Ok(())
}
