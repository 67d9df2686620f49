//! Formatter tests split by output format.

mod json_tests;

use fern_config::ConfigTree;

/// Parse a tree from inline JSON.
pub fn tree(json: &str) -> ConfigTree {
    serde_json::from_str(json).unwrap()
}
