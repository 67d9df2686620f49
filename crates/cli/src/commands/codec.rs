//! Encrypt or decrypt a single value without touching any environment.

use anyhow::{Context, Result};
use fern_config::{ConfigRepository, ConfigStore};

use crate::interactive::prompt_secret;

pub fn run_encrypt<R: ConfigRepository>(store: &ConfigStore<R>, value: Option<String>) -> Result<()> {
    let value = match value {
        Some(value) => value,
        None => prompt_secret("Value to encrypt")?,
    };

    let encrypted = store
        .encrypt_value(&value)
        .context("Failed to encrypt value")?;
    println!("{}", encrypted);

    Ok(())
}

pub fn run_decrypt<R: ConfigRepository>(store: &ConfigStore<R>, value: &str) -> Result<()> {
    let plaintext = store
        .decrypt_value(value)
        .context("Failed to decrypt value")?;
    println!("{}", plaintext);

    Ok(())
}
