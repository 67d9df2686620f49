//! Shared test utilities for fern integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Provide a temporary configuration directory per test.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - `CONFIG_ENCRYPTION_KEY` is set to `TEST_KEY` unless overridden.

use assert_cmd::Command;
use std::path::Path;

pub const TEST_KEY: &str = "integration-test-encryption-key";

/// Returns a hermetic `fern` command rooted at `config_dir`.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `CONFIG_ENCRYPTION_KEY` is set to a fixed test value.
/// - `FERN_CONFIG_DIR` points at `config_dir`.
pub fn fern_cmd(config_dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("fern");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("CONFIG_ENCRYPTION_KEY", TEST_KEY);
    cmd.env("FERN_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");

    cmd
}

/// Writes a raw environment document into `config_dir`.
#[allow(dead_code)]
pub fn write_env(config_dir: &Path, env: &str, json: &str) {
    std::fs::write(config_dir.join(format!("appsettings.{env}.json")), json).unwrap();
}

/// Reads a raw environment document from `config_dir`.
#[allow(dead_code)]
pub fn read_env(config_dir: &Path, env: &str) -> serde_json::Value {
    let content =
        std::fs::read_to_string(config_dir.join(format!("appsettings.{env}.json"))).unwrap();
    serde_json::from_str(&content).unwrap()
}
