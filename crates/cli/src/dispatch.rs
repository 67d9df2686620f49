//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Settings resolution (see `main()`).
//!
//! Invariants:
//! - Every handler receives the same store; no handler builds its own.

use anyhow::Result;
use fern_config::{ConfigRepository, ConfigStore};

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command<R: ConfigRepository>(cli: Cli, store: &ConfigStore<R>) -> Result<()> {
    let show_progress = !cli.quiet;

    match cli.command {
        Commands::Add {
            key,
            value,
            env,
            encrypted,
            desc,
        } => {
            commands::add::run(store, &key, value, &env, encrypted, desc.as_deref()).await?;
        }
        Commands::Get { key, env } => {
            commands::get::run(store, &key, &env).await?;
        }
        Commands::List { env, output } => {
            commands::list::run(store, &env, output).await?;
        }
        Commands::Compare { env1, env2, output } => {
            commands::compare::run(store, &env1, &env2, output, show_progress).await?;
        }
        Commands::Validate { env } => {
            commands::validate::run(store, &env).await?;
        }
        Commands::Export { env, file, yes } => {
            commands::export::run(store, &env, &file, yes, show_progress).await?;
        }
        Commands::Encrypt { value } => {
            commands::codec::run_encrypt(store, value)?;
        }
        Commands::Decrypt { value } => {
            commands::codec::run_decrypt(store, &value)?;
        }
    }

    Ok(())
}
