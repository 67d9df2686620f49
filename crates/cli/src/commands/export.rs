//! Export an environment's decrypted values to a plaintext file.

use anyhow::{Context, Result};
use fern_config::{ConfigRepository, ConfigStore};
use std::path::Path;

use super::parse_environment;
use crate::interactive::confirm_plaintext_export;
use crate::progress::Spinner;

pub async fn run<R: ConfigRepository>(
    store: &ConfigStore<R>,
    env: &str,
    file: &Path,
    yes: bool,
    show_progress: bool,
) -> Result<()> {
    let environment = parse_environment(env)?;
    let destination = file.display().to_string();

    if !yes && !confirm_plaintext_export(env, &destination)? {
        return Ok(());
    }

    let spinner = Spinner::new(show_progress, "Exporting configuration");
    let written = store
        .export_decrypted(&environment, file)
        .await
        .with_context(|| format!("Failed to export environment '{}'", env))?;
    spinner.finish();

    println!(
        "Exported {} entries from environment '{}' to '{}'",
        written, env, destination
    );
    eprintln!(
        "Warning: '{}' contains decrypted values in plaintext",
        destination
    );

    Ok(())
}
