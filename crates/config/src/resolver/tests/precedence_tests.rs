//! Source precedence tests for `load`.
//!
//! Responsibilities:
//! - Test CLI options > file values > pre-existing environment.
//! - Test that projected values are visible as real environment
//!   variables after the load.
//! - Test uniform coercion regardless of origin.

use std::fs;
use std::path::PathBuf;

use serial_test::serial;
use tempfile::TempDir;

use super::{env_lock, opts};
use crate::resolver::ConfigResolver;
use crate::types::{ConfigValue, OptionValue};

fn write_yaml(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.yml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
#[serial]
fn test_options_override_file_values() {
    let _lock = env_lock().lock().unwrap();
    let dir = TempDir::new().unwrap();
    let path = write_yaml(&dir, "greeting: from-file\ncolor: blue\n");

    temp_env::with_vars(
        [("PFILE_GREETING", None::<&str>), ("PFILE_COLOR", None)],
        || {
            let mut resolver = ConfigResolver::new();
            resolver
                .load(
                    &opts([("--greeting", OptionValue::from("from-cli"))]),
                    "pfile",
                    Some(&path),
                )
                .unwrap();

            assert_eq!(
                resolver.get("greeting").unwrap(),
                Some(ConfigValue::from("from-cli"))
            );
            assert_eq!(
                resolver.get("color").unwrap(),
                Some(ConfigValue::from("blue"))
            );
            // The winning value is what external processes see.
            assert_eq!(std::env::var("PFILE_GREETING").as_deref(), Ok("from-cli"));
        },
    );
}

#[test]
#[serial]
fn test_options_override_preexisting_env() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("PENV_GREETING", Some("from-env"))], || {
        let mut resolver = ConfigResolver::new();
        resolver
            .load(
                &opts([("--greeting", OptionValue::from("from-cli"))]),
                "penv",
                None,
            )
            .unwrap();

        assert_eq!(
            resolver.get("greeting").unwrap(),
            Some(ConfigValue::from("from-cli"))
        );
    });
}

#[test]
#[serial]
fn test_file_overrides_preexisting_env() {
    let _lock = env_lock().lock().unwrap();
    let dir = TempDir::new().unwrap();
    let path = write_yaml(&dir, "color: from-file\n");

    temp_env::with_vars([("PFENV_COLOR", Some("from-env"))], || {
        let mut resolver = ConfigResolver::new();
        resolver.load(&opts([]), "pfenv", Some(&path)).unwrap();

        assert_eq!(
            resolver.get("color").unwrap(),
            Some(ConfigValue::from("from-file"))
        );
    });
}

#[test]
#[serial]
fn test_falsey_option_coerced_through_roundtrip() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [("CTEST2_FOO", None::<&str>), ("CTEST2_BAR", None)],
        || {
            let mut resolver = ConfigResolver::new();
            resolver
                .load(
                    &opts([
                        ("--foo", OptionValue::from("0")),
                        ("--bar", OptionValue::from("hello")),
                    ]),
                    "ctest2",
                    None,
                )
                .unwrap();

            // "0" went out as a string and came back a boolean.
            assert_eq!(
                resolver.get("foo").unwrap(),
                Some(ConfigValue::Bool(false))
            );
            assert_eq!(
                resolver.get("bar").unwrap(),
                Some(ConfigValue::from("hello"))
            );
            assert_eq!(std::env::var("CTEST2_BAR").as_deref(), Ok("hello"));
        },
    );
}

#[test]
#[serial]
fn test_preexisting_namespace_vars_included() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("MSCN_STUFF", Some("4")),
            ("MSCN_BAZ", None),
            ("MSCN_FOO", None),
        ],
        || {
            let mut resolver = ConfigResolver::new();
            resolver
                .load(
                    &opts([
                        ("baz", OptionValue::from("3")),
                        ("foo", OptionValue::from("1")),
                    ]),
                    "mscn",
                    None,
                )
                .unwrap();

            assert_eq!(
                resolver.get("stuff").unwrap(),
                Some(ConfigValue::from("4"))
            );
            assert_eq!(resolver.get("baz").unwrap(), Some(ConfigValue::from("3")));
            assert_eq!(resolver.get("foo").unwrap(), Some(ConfigValue::from("1")));
        },
    );
}

#[test]
#[serial]
fn test_file_booleans_bypass_projection() {
    let _lock = env_lock().lock().unwrap();
    let dir = TempDir::new().unwrap();
    let path = write_yaml(&dir, "verbose: true\nquiet: false\n");

    temp_env::with_vars(
        [("PBOOL_VERBOSE", None::<&str>), ("PBOOL_QUIET", None)],
        || {
            let mut resolver = ConfigResolver::new();
            resolver.load(&opts([]), "pbool", Some(&path)).unwrap();

            // File booleans stay in the store as booleans and never
            // reach the environment (only strings are projected).
            assert_eq!(
                resolver.get("verbose").unwrap(),
                Some(ConfigValue::Bool(true))
            );
            assert_eq!(
                resolver.get("quiet").unwrap(),
                Some(ConfigValue::Bool(false))
            );
            assert!(std::env::var("PBOOL_VERBOSE").is_err());
            assert!(std::env::var("PBOOL_QUIET").is_err());
        },
    );
}

#[test]
#[serial]
fn test_nested_map_survives_and_is_copied_out() {
    let _lock = env_lock().lock().unwrap();
    let dir = TempDir::new().unwrap();
    let path = write_yaml(&dir, "database:\n  host: localhost\n  port: 5432\n");

    temp_env::with_vars([("PNEST_DATABASE", None::<&str>)], || {
        let mut resolver = ConfigResolver::new();
        resolver.load(&opts([]), "pnest", Some(&path)).unwrap();

        let value = resolver.get("database").unwrap().unwrap();
        let mut map = value.as_map().unwrap().clone();
        map.insert("HIJACKED".to_string(), ConfigValue::from("x"));

        // The stored map is unaffected by mutation of the returned copy.
        let again = resolver.get("database").unwrap().unwrap();
        assert!(!again.as_map().unwrap().contains_key("HIJACKED"));
    });
}

#[test]
#[serial]
fn test_get_is_case_insensitive_and_decoration_tolerant() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("PCASE_LOG_LEVEL", None::<&str>)], || {
        let mut resolver = ConfigResolver::new();
        resolver
            .load(
                &opts([("--log-level", OptionValue::from("debug"))]),
                "pcase",
                None,
            )
            .unwrap();

        for key in ["log_level", "LOG_LEVEL", "--log-level", "Log-Level"] {
            assert_eq!(
                resolver.get(key).unwrap(),
                Some(ConfigValue::from("debug")),
                "lookup failed for {key}"
            );
        }
        assert_eq!(resolver.get("missing").unwrap(), None);
        assert_eq!(
            resolver
                .get_or("missing", ConfigValue::from("fallback"))
                .unwrap(),
            ConfigValue::from("fallback")
        );
    });
}
