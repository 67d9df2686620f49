//! Fern CLI - per-environment configuration management from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Resolve startup settings (encryption secret, configuration directory).
//! - Execute configuration commands via the shared `fern-config` library.
//!
//! Does NOT handle:
//! - Encryption, merging or comparison logic (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr; stdout is reserved for command results.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;
mod interactive;
mod progress;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use fern_config::SettingsLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = SettingsLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut loader = SettingsLoader::new();

    // Blank/whitespace-only values are ignored to allow fallback to the env var
    if let Some(ref dir) = cli.config_dir
        && !dir.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_config_dir(dir.clone());
    }

    let settings = match loader.from_env().build() {
        Ok(settings) => settings,
        Err(e) => {
            let e = anyhow::Error::new(e);
            eprintln!("Error: {:#}", e);
            std::process::exit(e.exit_code().as_i32());
        }
    };

    tracing::debug!(config_dir = %settings.config_dir.display(), "Settings resolved");
    let store = settings.into_store();

    let exit_code = match run_command(cli, &store).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
