//! List every entry of an environment.

use anyhow::{Context, Result};
use fern_config::{ConfigRepository, ConfigStore};

use super::parse_environment;
use crate::formatters::{OutputFormat, get_formatter};

pub async fn run<R: ConfigRepository>(
    store: &ConfigStore<R>,
    env: &str,
    output: OutputFormat,
) -> Result<()> {
    let environment = parse_environment(env)?;

    let tree = store
        .load(&environment)
        .await
        .with_context(|| format!("Failed to load environment '{}'", env))?;

    let formatter = get_formatter(output);
    println!("{}", formatter.format_tree(env, &tree)?);

    Ok(())
}
