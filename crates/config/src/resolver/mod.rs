//! Layered configuration resolution.
//!
//! Responsibilities:
//! - Merge CLI-style options, a YAML configuration file, and process
//!   environment variables into one prefix-namespaced store.
//! - Expose the environment projection/read primitives the merge is
//!   built from.
//! - Enforce the `DOTENV_DISABLED` gate for optional `.env` loading.
//!
//! Does NOT handle:
//! - Presentation of warnings (events go to `tracing`, no subscriber is
//!   installed here).
//! - CLI argument parsing (callers hand in an already-parsed mapping).
//!
//! Invariants / Assumptions:
//! - CLI options overrule config file values, which overrule
//!   pre-existing environment variables.
//! - Keys are case-insensitive at the API boundary and uppercase in the
//!   store; value case is preserved.

mod core;
mod env;
mod error;
mod file;

#[cfg(test)]
mod tests;

pub use self::core::ConfigResolver;
pub use env::{
    coerce_env_value, env_var_name, env_var_or_none, normalize_option_name, project_to_env,
    read_env_namespace,
};
pub use error::ConfigError;
pub use file::parse_config_file;
