//! YAML configuration file collaborator.
//!
//! Responsibilities:
//! - Read and parse a YAML document into the `ConfigValue` model.
//! - Reject documents that fall outside the model (sequences, nulls,
//!   tagged values, non-string keys).
//!
//! Does NOT handle:
//! - Key uppercasing for the merge (see core.rs; only top-level keys
//!   are normalized there, nested maps keep their spelling).
//! - Precedence against options or environment values.
//!
//! Invariants:
//! - Read and parse failures are fatal to the calling `load` and carry
//!   the file path.
//! - Numbers are stringified at parse time so the store only ever holds
//!   strings, booleans, and mappings.

use std::collections::BTreeMap;
use std::path::Path;

use serde_yaml::Value;

use super::error::ConfigError;
use crate::types::{ConfigStore, ConfigValue};

/// Parse a YAML configuration file into a flat-or-nested mapping.
///
/// The top-level document must be a mapping. Scalar values become
/// strings (numbers are stringified) or booleans; nested mappings are
/// converted recursively.
pub fn parse_config_file(path: &Path) -> Result<ConfigStore, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let doc: Value = serde_yaml::from_str(&raw).map_err(|source| ConfigError::FileParse {
        path: path.to_path_buf(),
        source,
    })?;
    match doc {
        Value::Mapping(mapping) => convert_mapping(path, mapping),
        _ => Err(ConfigError::InvalidFileValue {
            path: path.to_path_buf(),
            key: "<root>".to_string(),
            message: "top-level document must be a mapping".to_string(),
        }),
    }
}

fn convert_mapping(
    path: &Path,
    mapping: serde_yaml::Mapping,
) -> Result<BTreeMap<String, ConfigValue>, ConfigError> {
    let mut out = BTreeMap::new();
    for (key, value) in mapping {
        let Value::String(key) = key else {
            return Err(ConfigError::InvalidFileValue {
                path: path.to_path_buf(),
                key: format!("{key:?}"),
                message: "mapping keys must be strings".to_string(),
            });
        };
        let converted = convert_value(path, &key, value)?;
        out.insert(key, converted);
    }
    Ok(out)
}

fn convert_value(path: &Path, key: &str, value: Value) -> Result<ConfigValue, ConfigError> {
    match value {
        Value::String(s) => Ok(ConfigValue::Str(s)),
        Value::Bool(b) => Ok(ConfigValue::Bool(b)),
        Value::Number(n) => Ok(ConfigValue::Str(n.to_string())),
        Value::Mapping(m) => Ok(ConfigValue::Map(convert_mapping(path, m)?)),
        Value::Null => Err(invalid(path, key, "null values are not supported")),
        Value::Sequence(_) => Err(invalid(path, key, "sequences are not supported")),
        Value::Tagged(_) => Err(invalid(path, key, "tagged values are not supported")),
    }
}

fn invalid(path: &Path, key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidFileValue {
        path: path.to_path_buf(),
        key: key.to_string(),
        message: message.to_string(),
    }
}
