//! Configuration data model.
//!
//! Responsibilities:
//! - Define the in-memory configuration tree (`ConfigTree`, `ConfigValue`).
//! - Parse and render `:`-delimited key paths (`KeyPath`).
//! - Validate environment names and map them to file names (`Environment`).
//!
//! Does NOT handle:
//! - Encryption of leaf values (see `encryption` module).
//! - Reading or writing files (see `persistence` module).
//! - Merge, diff or validation policies (see `merge`, `diff`, `validation`).
//!
//! Invariants:
//! - A parsed `KeyPath` never contains an empty or whitespace-only segment.
//! - `ConfigTree` preserves key insertion order; equality ignores order.
//! - Arrays are leaves: paths never descend into them.

mod environment;
mod key_path;
mod tree;

pub use environment::Environment;
pub use key_path::KeyPath;
pub(crate) use key_path::join_path;
pub use tree::{ConfigTree, ConfigValue};
