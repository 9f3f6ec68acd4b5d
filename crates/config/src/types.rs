//! Core value types for the configuration resolver.
//!
//! Responsibilities:
//! - Define the `ConfigValue` model stored in the merged snapshot.
//! - Define the `OptionValue` model for caller-supplied CLI-style options.
//! - Provide the `ConfigStore` / `Options` map aliases.
//!
//! Does NOT handle:
//! - Key normalization (see resolver/env.rs).
//! - Merging or precedence (see resolver/core.rs).
//!
//! Invariants:
//! - A `ConfigValue` is always a string, a boolean, or a nested mapping;
//!   nested mappings only ever originate from file parsing.
//! - Store keys are uppercase; value case is preserved.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single resolved configuration value.
///
/// Strings and booleans come from any of the three sources; nested maps
/// come only from configuration files (environment variables and CLI
/// options are inherently flat).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// A string value, case preserved as supplied.
    Str(String),
    /// A boolean value. An option `true` is projected into the
    /// environment as `"1"` and re-read as the string `"1"`, so boolean
    /// `true` from that path never reaches the store; file-sourced
    /// booleans of either polarity skip projection and are stored as-is.
    Bool(bool),
    /// A nested mapping parsed from a configuration file.
    Map(BTreeMap<String, ConfigValue>),
}

impl ConfigValue {
    /// Returns the string value, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the nested mapping, if this is a mapping.
    pub fn as_map(&self) -> Option<&BTreeMap<String, ConfigValue>> {
        match self {
            ConfigValue::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Str(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::Str(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

/// The merged configuration snapshot: uppercase key to value.
pub type ConfigStore = BTreeMap<String, ConfigValue>;

/// A value in the caller-supplied options mapping, mirroring typical
/// CLI-parser output: a string argument, a flag, or an option that was
/// not passed at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// A string argument.
    Str(String),
    /// A flag. `Bool(true)` is projected as the literal `"1"`;
    /// `Bool(false)` is never projected, which is how "flag not passed"
    /// and "flag explicitly off" end up indistinguishable downstream.
    Bool(bool),
    /// An option the parser knows about but the caller did not supply.
    /// Never projected.
    Absent,
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Str(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Str(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

/// The caller-supplied options mapping. Keys may carry CLI decoration
/// (leading dashes, angle brackets, mixed case); they are normalized
/// during environment projection.
pub type Options = BTreeMap<String, OptionValue>;
