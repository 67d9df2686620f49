//! Compare two environments.

use anyhow::{Context, Result};
use fern_config::{ConfigRepository, ConfigStore};

use super::parse_environment;
use crate::formatters::{OutputFormat, get_formatter};
use crate::progress::Spinner;

pub async fn run<R: ConfigRepository>(
    store: &ConfigStore<R>,
    env1: &str,
    env2: &str,
    output: OutputFormat,
    show_progress: bool,
) -> Result<()> {
    let left = parse_environment(env1)?;
    let right = parse_environment(env2)?;

    let spinner = Spinner::new(show_progress, "Comparing environments");
    let differences = store
        .compare(&left, &right)
        .await
        .with_context(|| format!("Failed to compare '{}' and '{}'", env1, env2))?;
    spinner.finish();

    let formatter = get_formatter(output);
    println!("{}", formatter.format_diff(env1, env2, &differences)?);

    Ok(())
}
