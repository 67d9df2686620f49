//! Environment variable tests for the settings loader.

use crate::error::ConfigError;
use crate::loader::builder::SettingsLoader;
use crate::loader::env::env_var_or_none;
use secrecy::{ExposeSecret, SecretString};
use serial_test::serial;
use std::path::PathBuf;

use super::env_lock;

#[test]
#[serial]
fn test_reads_key_and_dir_from_env() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("CONFIG_ENCRYPTION_KEY", Some("env-secret")),
            ("FERN_CONFIG_DIR", Some("/srv/config")),
        ],
        || {
            let settings = SettingsLoader::new().from_env().build().unwrap();
            assert_eq!(settings.encryption_key.expose_secret(), "env-secret");
            assert_eq!(settings.config_dir, PathBuf::from("/srv/config"));
        },
    );
}

#[test]
#[serial]
fn test_builder_overrides_env() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("CONFIG_ENCRYPTION_KEY", Some("env-secret")),
            ("FERN_CONFIG_DIR", Some("/srv/config")),
        ],
        || {
            let settings = SettingsLoader::new()
                .with_encryption_key(SecretString::new("explicit".into()))
                .with_config_dir(PathBuf::from("/srv/explicit"))
                .from_env()
                .build()
                .unwrap();
            assert_eq!(settings.encryption_key.expose_secret(), "explicit");
            assert_eq!(settings.config_dir, PathBuf::from("/srv/explicit"));
        },
    );
}

#[test]
#[serial]
fn test_missing_key_is_error() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("CONFIG_ENCRYPTION_KEY", None::<&str>),
            ("FERN_CONFIG_DIR", None),
        ],
        || {
            let err = SettingsLoader::new().from_env().build().unwrap_err();
            match err {
                ConfigError::MissingEncryptionKey { var } => {
                    assert_eq!(var, "CONFIG_ENCRYPTION_KEY")
                }
                other => panic!("unexpected error: {other:?}"),
            }
        },
    );
}

#[test]
#[serial]
fn test_whitespace_key_is_treated_as_unset() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("CONFIG_ENCRYPTION_KEY", Some("   "))], || {
        let result = SettingsLoader::new().from_env().build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingEncryptionKey { .. })
        ));
    });
}

#[test]
#[serial]
fn test_key_surrounding_whitespace_is_preserved() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("CONFIG_ENCRYPTION_KEY", Some("  padded-secret \t"))], || {
        let settings = SettingsLoader::new().from_env().build().unwrap();
        assert_eq!(
            settings.encryption_key.expose_secret(),
            "  padded-secret \t"
        );
    });
}

#[test]
#[serial]
fn test_config_dir_defaults_to_cwd() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("CONFIG_ENCRYPTION_KEY", Some("k")),
            ("FERN_CONFIG_DIR", None),
        ],
        || {
            let settings = SettingsLoader::new().from_env().build().unwrap();
            assert_eq!(settings.config_dir, PathBuf::from("."));
        },
    );
}

#[test]
#[serial]
fn test_env_var_or_none_trims() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("FERN_TEST_TRIM", Some("  padded  "))], || {
        assert_eq!(
            env_var_or_none("FERN_TEST_TRIM").as_deref(),
            Some("padded")
        );
    });
    temp_env::with_vars([("FERN_TEST_TRIM", Some(""))], || {
        assert_eq!(env_var_or_none("FERN_TEST_TRIM"), None);
    });
}
