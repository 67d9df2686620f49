//! JSON formatter tests.

use super::tree;
use crate::formatters::{Formatter, JsonFormatter};
use fern_config::diff::compare;
use serde_json::json;

#[test]
fn test_tree_round_trips_as_json() {
    let source = tree(r#"{"Db":{"Host":"localhost"},"Retries":3}"#);
    let output = JsonFormatter.format_tree("dev", &source).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed, json!({"Db": {"Host": "localhost"}, "Retries": 3}));
}

#[test]
fn test_empty_tree_is_empty_object() {
    let output = JsonFormatter.format_tree("dev", &tree("{}")).unwrap();
    assert_eq!(output, "{}");
}

#[test]
fn test_diff_values_are_keyed_by_environment() {
    let diff = compare(&tree(r#"{"A":1}"#), &tree(r#"{"A":2,"B":true}"#));
    let output = JsonFormatter.format_diff("dev", "prod", &diff).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(
        parsed,
        json!({
            "environments": ["dev", "prod"],
            "differences": [
                {"key": "A", "values": {"dev": 1, "prod": 2}},
                {"key": "B", "values": {"dev": "Not set", "prod": true}}
            ]
        })
    );
}

#[test]
fn test_validation_report() {
    let output = JsonFormatter.format_validation("dev", &[]).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(
        parsed,
        json!({"environment": "dev", "valid": true, "issues": []})
    );
}
