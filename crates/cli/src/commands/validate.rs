//! Validate an environment's structure.

use anyhow::{Context, Result};
use fern_config::validation::validation_issues;
use fern_config::{ConfigError, ConfigRepository, ConfigStore};

use super::parse_environment;
use crate::formatters::{Formatter, TextFormatter};

pub async fn run<R: ConfigRepository>(store: &ConfigStore<R>, env: &str) -> Result<()> {
    let environment = parse_environment(env)?;

    let tree = store
        .load(&environment)
        .await
        .with_context(|| format!("Failed to load environment '{}'", env))?;

    if tree.is_empty() {
        println!("No configuration entries found for environment '{}'", env);
        return Ok(());
    }

    let issues = validation_issues(&tree);
    println!("{}", TextFormatter.format_validation(env, &issues)?);

    if !issues.is_empty() {
        return Err(ConfigError::InvalidConfiguration(format!(
            "{} empty key(s) in environment '{}'",
            issues.len(),
            env
        ))
        .into());
    }

    Ok(())
}
