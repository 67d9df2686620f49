//! Merging a caller-supplied tree into the persisted one.
//!
//! Responsibilities:
//! - Retain keys that exist only in the persisted tree.
//! - Merge nested sections recursively.
//! - Keep leaves encrypted once they have been persisted encrypted, even when
//!   the caller supplies plaintext for them.
//!
//! Does NOT handle:
//! - Reading or writing files (see `store.rs`).
//! - Deleting keys: a key missing from `incoming` is never removed.
//!
//! Invariants:
//! - Existing key order is preserved; new keys are appended in caller order.
//! - An incoming value that already carries the `ENC:` marker is stored as-is.
//! - A plaintext string replacing an encrypted string is stored encrypted. If
//!   it equals the current plaintext the existing ciphertext is reused.

use crate::encryption::{Result, ValueCodec, is_encrypted};
use crate::types::{ConfigTree, ConfigValue, join_path};

/// Merges `incoming` into `existing`, returning the tree to persist.
///
/// `existing` must be the raw persisted tree (not decrypted), so that the
/// encryption state of each leaf can be observed.
pub fn merge(existing: ConfigTree, incoming: ConfigTree, codec: &ValueCodec) -> Result<ConfigTree> {
    merge_trees(existing, incoming, codec, "")
}

fn merge_trees(
    existing: ConfigTree,
    mut incoming: ConfigTree,
    codec: &ValueCodec,
    prefix: &str,
) -> Result<ConfigTree> {
    let mut merged = ConfigTree::new();

    for (key, existing_value) in existing {
        let value = match incoming.remove(&key) {
            Some(incoming_value) => {
                let path = join_path(prefix, &key);
                merge_value(existing_value, incoming_value, codec, &path)?
            }
            None => existing_value,
        };
        merged.insert(key, value);
    }

    for (key, value) in incoming {
        tracing::debug!(path = %join_path(prefix, &key), "Adding new configuration key");
        merged.insert(key, value);
    }

    Ok(merged)
}

fn merge_value(
    existing: ConfigValue,
    incoming: ConfigValue,
    codec: &ValueCodec,
    path: &str,
) -> Result<ConfigValue> {
    match (existing, incoming) {
        (ConfigValue::Tree(existing), ConfigValue::Tree(incoming)) => {
            merge_trees(existing, incoming, codec, path).map(ConfigValue::Tree)
        }
        (ConfigValue::String(current), ConfigValue::String(replacement))
            if is_encrypted(&current) && !is_encrypted(&replacement) =>
        {
            keep_encrypted(current, replacement, codec, path).map(ConfigValue::String)
        }
        (existing, incoming) => {
            if existing.is_encrypted() && !incoming.is_tree() {
                tracing::warn!(
                    path,
                    "Non-string value replaces an encrypted value and is stored unencrypted"
                );
            }
            Ok(incoming)
        }
    }
}

fn keep_encrypted(
    current: String,
    replacement: String,
    codec: &ValueCodec,
    path: &str,
) -> Result<String> {
    if matches!(codec.decrypt(&current), Ok(ref plaintext) if *plaintext == replacement) {
        tracing::debug!(path, "Encrypted value unchanged, keeping ciphertext");
        return Ok(current);
    }

    tracing::debug!(path, "Re-encrypting replacement for encrypted value");
    codec.encrypt(&replacement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::KeyPath;
    use secrecy::SecretString;

    fn codec() -> ValueCodec {
        ValueCodec::new(&SecretString::new("merge-test-secret".to_string().into()))
    }

    fn tree(json: &str) -> ConfigTree {
        serde_json::from_str(json).unwrap()
    }

    fn leaf<'a>(tree: &'a ConfigTree, path: &str) -> &'a ConfigValue {
        tree.get_path(&KeyPath::parse(path).unwrap()).unwrap()
    }

    #[test]
    fn test_plaintext_replacement_stays_encrypted() {
        let codec = codec();
        let mut existing = ConfigTree::new();
        existing
            .set_path(&KeyPath::parse("a:b").unwrap(), codec.encrypt("x").unwrap())
            .unwrap();

        let merged = merge(existing, tree(r#"{"a":{"b":"y"}}"#), &codec).unwrap();

        let stored = leaf(&merged, "a:b").as_str().unwrap();
        assert!(is_encrypted(stored));
        assert_eq!(codec.decrypt(stored).unwrap(), "y");
    }

    #[test]
    fn test_unchanged_plaintext_keeps_ciphertext() {
        let codec = codec();
        let ciphertext = codec.encrypt("same").unwrap();
        let mut existing = ConfigTree::new();
        existing.insert("secret", ciphertext.clone());

        let merged = merge(existing, tree(r#"{"secret":"same"}"#), &codec).unwrap();

        assert_eq!(merged.get("secret"), Some(&ConfigValue::String(ciphertext)));
    }

    #[test]
    fn test_pre_encrypted_incoming_kept_verbatim() {
        let codec = codec();
        let incoming_ciphertext = codec.encrypt("new").unwrap();
        let mut existing = ConfigTree::new();
        existing.insert("secret", codec.encrypt("old").unwrap());
        let mut incoming = ConfigTree::new();
        incoming.insert("secret", incoming_ciphertext.clone());

        let merged = merge(existing, incoming, &codec).unwrap();

        assert_eq!(
            merged.get("secret"),
            Some(&ConfigValue::String(incoming_ciphertext))
        );
    }

    #[test]
    fn test_plain_existing_stays_plain() {
        let merged = merge(tree(r#"{"a":"old"}"#), tree(r#"{"a":"new"}"#), &codec()).unwrap();
        assert_eq!(merged.get("a"), Some(&ConfigValue::from("new")));
    }

    #[test]
    fn test_untouched_branches_are_retained() {
        let existing = tree(r#"{"a":{"b":"1","keep":"k"},"c":{"d":[1,2]}}"#);
        let incoming = tree(r#"{"a":{"b":"2"}}"#);

        let merged = merge(existing, incoming, &codec()).unwrap();

        assert_eq!(merged, tree(r#"{"a":{"b":"2","keep":"k"},"c":{"d":[1,2]}}"#));
    }

    #[test]
    fn test_new_keys_are_appended_in_order() {
        let merged = merge(
            tree(r#"{"first":"1","second":"2"}"#),
            tree(r#"{"third":"3","first":"one"}"#),
            &codec(),
        )
        .unwrap();

        let keys: Vec<&String> = merged.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["first", "second", "third"]);
    }

    #[test]
    fn test_incoming_shape_wins_on_type_mismatch() {
        let merged = merge(
            tree(r#"{"a":"scalar","b":{"nested":"x"}}"#),
            tree(r#"{"a":{"now":"tree"},"b":"now scalar"}"#),
            &codec(),
        )
        .unwrap();

        assert_eq!(merged, tree(r#"{"a":{"now":"tree"},"b":"now scalar"}"#));
    }

    #[test]
    fn test_non_string_replacing_encrypted_is_stored_plain() {
        let codec = codec();
        let mut existing = ConfigTree::new();
        existing.insert("port", codec.encrypt("5432").unwrap());

        let merged = merge(existing, tree(r#"{"port":5433}"#), &codec).unwrap();

        assert_eq!(merged.get("port"), Some(&ConfigValue::from(5433)));
    }

    #[test]
    fn test_merge_into_empty_tree() {
        let incoming = tree(r#"{"Db":{"Host":"localhost"}}"#);
        let merged = merge(ConfigTree::new(), incoming.clone(), &codec()).unwrap();
        assert_eq!(merged, incoming);
    }
}
