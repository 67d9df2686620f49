//! Centralized constants for the ConfigFern workspace.
//!
//! This module contains wire-format markers, file naming rules and
//! environment variable names shared by the core and the CLI.

// =============================================================================
// Encrypted Value Wire Format
// =============================================================================

/// Prefix identifying a string value as ciphertext.
pub const ENCRYPTED_PREFIX: &str = "ENC:";

/// AES block size; also the length of the IV stored in front of the ciphertext.
pub const IV_LEN: usize = 16;

/// AES-256 key length in bytes.
pub const KEY_LEN: usize = 32;

/// Filler byte used when the configured secret is shorter than [`KEY_LEN`].
pub const KEY_PAD_BYTE: u8 = b' ';

// =============================================================================
// Paths & Files
// =============================================================================

/// Delimiter between segments of a key path (`ConnectionStrings:Default`).
pub const PATH_DELIMITER: char = ':';

/// File name prefix for persisted environments.
pub const SETTINGS_FILE_PREFIX: &str = "appsettings";

/// File extension for persisted environments.
pub const SETTINGS_FILE_EXTENSION: &str = "json";

// =============================================================================
// Diff Reporting
// =============================================================================

/// Sentinel reported for a key that is absent in one of the compared environments.
pub const NOT_SET: &str = "Not set";

// =============================================================================
// Environment Variables
// =============================================================================

/// Secret used to derive the value encryption key.
pub const ENV_ENCRYPTION_KEY: &str = "CONFIG_ENCRYPTION_KEY";

/// Directory containing the `appsettings.<env>.json` files.
pub const ENV_CONFIG_DIR: &str = "FERN_CONFIG_DIR";

/// Set to `1` or `true` to skip loading `.env`.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
