//! Layered configuration resolution with prefix-namespaced addressing.
//!
//! This crate merges configuration from three sources (CLI-style
//! options, a YAML configuration file, and process environment
//! variables) into a single read-only snapshot. CLI options overrule
//! file values, which overrule pre-existing environment variables;
//! every value passes through one boolean-coercion path on its way in.
//! Keys are case-insensitive at the API boundary and addressed under an
//! uppercase `PREFIX_KEY` namespace shared with co-operating processes.
//!
//! Intended use: construct one [`ConfigResolver`] at startup, call
//! [`ConfigResolver::load`] once per subsystem prefix, then read values
//! with [`ConfigResolver::get`] or take a [`ConfigResolver::snapshot`].

mod constants;
mod resolver;
mod types;

pub use resolver::{
    ConfigError, ConfigResolver, coerce_env_value, env_var_name, env_var_or_none,
    normalize_option_name, parse_config_file, project_to_env, read_env_namespace,
};
pub use types::{ConfigStore, ConfigValue, OptionValue, Options};
