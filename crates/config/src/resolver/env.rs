//! Environment variable projection and namespace reading.
//!
//! Responsibilities:
//! - Normalize CLI-style option names to their `PREFIX_KEY` environment form.
//! - Project option mappings into the process environment.
//! - Read a prefix namespace back out of the environment, applying
//!   boolean coercion.
//! - Provide `env_var_or_none` for reading gate variables with
//!   empty/whitespace filtering.
//!
//! Does NOT handle:
//! - File parsing (see file.rs).
//! - Merge order and the shared store (see core.rs).
//!
//! Invariants:
//! - The `PREFIX_KEY` name shape is reproduced bit-exactly; it is an
//!   external contract for scripts reading the same variables.
//! - A `false` or absent option value is never written, not even
//!   transiently. The empty string is a real value and IS written.
//! - The namespace match includes the separator: `APPX_KEY` is not part
//!   of the `APP` namespace.

use std::env;

use crate::constants::{FALSEY_ENV_VALUES, OPTION_NAME_TRIM, PREFIX_SEPARATOR, TRUE_PROJECTION};
use crate::types::{ConfigStore, ConfigValue, OptionValue, Options};

/// Read an environment variable, returning None if unset, empty, or
/// whitespace-only. Returns the trimmed value if present.
///
/// Used for gate variables like `DOTENV_DISABLED`, not for namespace
/// values (those keep empty strings, see `read_env_namespace`).
pub fn env_var_or_none(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Normalize a CLI-style option name to its environment key form:
/// uppercase, strip surrounding `-`, `<`, `>`, and spaces, and replace
/// interior `-` with `_`.
///
/// The same normalization runs at every write and lookup boundary, so
/// `--log-level`, `<LOG-LEVEL>`, and `log_level` all address one key.
pub fn normalize_option_name(name: &str) -> String {
    name.to_uppercase()
        .trim_matches(&OPTION_NAME_TRIM[..])
        .replace('-', "_")
}

/// The full environment variable name for an option under a prefix.
pub fn env_var_name(prefix: &str, name: &str) -> String {
    format!(
        "{}{}{}",
        prefix.to_uppercase(),
        PREFIX_SEPARATOR,
        normalize_option_name(name)
    )
}

/// Project a flat options mapping into the process environment under
/// `PREFIX_`-namespaced names.
///
/// `Bool(true)` projects the literal `"1"`. `Bool(false)` and `Absent`
/// project nothing at all; this is how "flag not passed" is
/// distinguished from a stored value. Strings project verbatim,
/// including the empty string.
pub fn project_to_env(options: &Options, prefix: &str) {
    for (name, value) in options {
        let projected = match value {
            OptionValue::Bool(true) => TRUE_PROJECTION,
            OptionValue::Bool(false) | OptionValue::Absent => continue,
            OptionValue::Str(s) => s.as_str(),
        };
        let var = env_var_name(prefix, name);
        // SAFETY: the resolver is documented as single-threaded,
        // startup-phase only; no other thread touches the environment
        // while a load is in progress.
        unsafe { env::set_var(&var, projected) };
    }
}

/// Coerce a raw environment string into a store value: `"0"`, `"false"`,
/// and `"no"` (case-insensitive) become boolean `false`; everything else
/// stays a string.
pub fn coerce_env_value(raw: &str) -> ConfigValue {
    if FALSEY_ENV_VALUES.contains(&raw.to_lowercase().as_str()) {
        ConfigValue::Bool(false)
    } else {
        ConfigValue::Str(raw.to_string())
    }
}

/// Read every environment variable in the `PREFIX_` namespace into a
/// flat store, stripping the leading `PREFIX_` segment and applying
/// boolean coercion.
///
/// This is the single path through which values of any origin acquire
/// their final coerced form: `load` projects file and option values
/// into the environment and then reads them back through here.
pub fn read_env_namespace(prefix: &str) -> ConfigStore {
    let marker = format!("{}{}", prefix.to_uppercase(), PREFIX_SEPARATOR);
    let mut out = ConfigStore::new();
    for (name, raw) in env::vars() {
        let Some(key) = name.strip_prefix(&marker) else {
            continue;
        };
        out.insert(normalize_option_name(key), coerce_env_value(&raw));
    }
    out
}
