//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not resolve the encryption secret (see `main()` and `SettingsLoader`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::formatters::OutputFormat;

#[derive(Parser)]
#[command(name = "fern")]
#[command(about = "ConfigFern - Configuration Management Tool", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  fern add --key ConnectionStrings:Default --value 'Server=db' --env dev --encrypted\n  fern list --env dev\n  fern compare --env1 dev --env2 prod\n  fern validate --env prod\n\nThe CONFIG_ENCRYPTION_KEY environment variable must be set.\n"
)]
pub struct Cli {
    /// Directory containing the appsettings.<env>.json files (default: current directory)
    #[arg(long, global = true, env = "FERN_CONFIG_DIR", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Suppress all progress output (spinners).
    ///
    /// Note: Progress indicators always write to STDERR; this flag disables them entirely.
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a configuration entry
    Add {
        /// Configuration key (use ':' for nested keys, e.g., 'ConnectionStrings:DefaultConnection')
        #[arg(long)]
        key: String,

        /// Configuration value
        #[arg(long, allow_hyphen_values = true)]
        value: String,

        /// Environment (e.g., dev, staging, prod)
        #[arg(long)]
        env: String,

        /// Whether the value should be encrypted
        #[arg(long)]
        encrypted: bool,

        /// Description of the configuration entry
        #[arg(long)]
        desc: Option<String>,
    },

    /// Print a single configuration value (decrypted)
    Get {
        /// Configuration key (use ':' for nested keys)
        #[arg(long)]
        key: String,

        /// Environment to read from
        #[arg(long)]
        env: String,
    },

    /// List configuration entries
    List {
        /// Environment to list
        #[arg(long)]
        env: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Compare configurations between environments
    Compare {
        /// First environment
        #[arg(long)]
        env1: String,

        /// Second environment
        #[arg(long)]
        env2: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Validate configuration entries
    Validate {
        /// Environment to validate
        #[arg(long)]
        env: String,
    },

    /// Write an environment's decrypted configuration to a plaintext file
    Export {
        /// Environment to export
        #[arg(long)]
        env: String,

        /// Destination file
        #[arg(long, value_name = "FILE")]
        file: PathBuf,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Encrypt a single value and print the ENC: token
    Encrypt {
        /// Value to encrypt (prompted for when omitted)
        #[arg(long, allow_hyphen_values = true)]
        value: Option<String>,
    },

    /// Decrypt a single ENC: token and print the plaintext
    Decrypt {
        /// Encrypted value (values without the ENC: marker are printed unchanged)
        #[arg(long, allow_hyphen_values = true)]
        value: String,
    },
}
