//! User interaction utilities for the CLI.
//!
//! Responsibilities:
//! - Provide shared helpers for interactive user prompts
//! - Handle stdin/stdout interactions safely

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Prompt the user to confirm writing decrypted secrets to `destination`.
///
/// Returns `true` only if the user enters 'y' or 'Y'. End of input counts as
/// a refusal.
pub fn confirm_plaintext_export(environment: &str, destination: &str) -> Result<bool> {
    let stdin = std::io::stdin();
    confirm_with(
        &mut stdin.lock(),
        &mut std::io::stdout(),
        environment,
        destination,
    )
}

fn confirm_with(
    input: &mut impl BufRead,
    output: &mut impl Write,
    environment: &str,
    destination: &str,
) -> Result<bool> {
    write!(
        output,
        "This will write every value of environment '{}' to '{}' in plaintext. Continue? [y/N] ",
        environment, destination
    )?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    if !answer.trim().eq_ignore_ascii_case("y") {
        writeln!(output, "Export cancelled.")?;
        return Ok(false);
    }

    Ok(true)
}

/// Prompt for a value without echoing it to the terminal.
pub fn prompt_secret(prompt_text: &str) -> Result<String> {
    dialoguer::Password::new()
        .with_prompt(prompt_text)
        .allow_empty_password(false)
        .interact()
        .context("Failed to read value from terminal")
}
