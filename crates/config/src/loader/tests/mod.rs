//! Tests for the settings loader.
//!
//! Responsibilities:
//! - Test builder precedence over environment variables.
//! - Test handling of empty and whitespace-only environment variables.
//! - Test `.env` loading and `DOTENV_DISABLED`.
//!
//! Invariants:
//! - Tests use `serial_test` and `global_test_lock()` to prevent environment
//!   variable pollution.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

pub mod env_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
