//! Startup settings loader.
//!
//! Responsibilities:
//! - Load `.env` files (unless `DOTENV_DISABLED` is set).
//! - Read the encryption secret and configuration directory from the environment.
//! - Provide a builder-pattern `SettingsLoader` whose explicit overrides win
//!   over environment values.
//!
//! Does NOT handle:
//! - Reading or writing environment documents (see `persistence`).
//! - Command-line parsing (see the CLI crate).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - A missing encryption secret is reported by `build()`, never defaulted.

mod builder;
mod env;

pub use builder::{Settings, SettingsLoader};
pub use env::env_var_or_none;

#[cfg(test)]
mod tests;
