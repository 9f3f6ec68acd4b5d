//! The configuration resolver: precedence pipeline and shared store.
//!
//! Responsibilities:
//! - Own the merged store and the seen-prefix set.
//! - Implement the `load` precedence pipeline and the read API.
//! - Gate optional `.env` loading behind `DOTENV_DISABLED`.
//!
//! Does NOT handle:
//! - Environment projection and coercion mechanics (see env.rs).
//! - YAML conversion (see file.rs).
//!
//! Invariants / Assumptions:
//! - Precedence, low to high: pre-existing environment < file < options.
//!   Options and file values are projected into the environment and
//!   re-read, so all three sources pass through one coercion path.
//! - The store is merged into, never replaced; a `load` for one prefix
//!   never discards another prefix's keys.
//! - A failed `load` leaves the store and the environment untouched.
//! - One resolver instance per process, driven from a single thread
//!   during startup. Multi-threaded hosts must wrap it in a `Mutex`:
//!   `load` performs read-modify-write on both the store and the
//!   process environment with no atomicity between them.

use std::collections::HashSet;
use std::path::Path;

use super::env::{env_var_or_none, normalize_option_name, project_to_env, read_env_namespace};
use super::error::ConfigError;
use super::file::parse_config_file;
use crate::types::{ConfigStore, ConfigValue, OptionValue, Options};

/// Merges CLI-style options, a YAML file, and prefix-namespaced
/// environment variables into one store.
///
/// Construct once at startup, call [`load`](Self::load) once per
/// subsystem prefix, then hand the resolver (or snapshots of it) to the
/// rest of the program read-only. Repeating `load` for a prefix already
/// seen refreshes that prefix's keys in place.
#[derive(Debug, Default)]
pub struct ConfigResolver {
    store: Option<ConfigStore>,
    seen_prefixes: HashSet<String>,
}

impl ConfigResolver {
    /// Create an empty resolver. The store itself is created lazily by
    /// the first `load`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any `load` has completed successfully.
    pub fn is_loaded(&self) -> bool {
        self.store.is_some()
    }

    /// Whether the given prefix has been loaded at least once.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.seen_prefixes.contains(&prefix.to_uppercase())
    }

    /// Check if dotenv loading is disabled via environment variable.
    /// Empty or whitespace-only values count as unset; padding around
    /// the gate value is ignored.
    fn dotenv_disabled() -> bool {
        matches!(
            env_var_or_none("DOTENV_DISABLED").as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// Values landed this way are ordinary pre-existing environment
    /// variables as far as a later `load` is concerned (lowest
    /// precedence). If `DOTENV_DISABLED` is set to "true" or "1", the
    /// `.env` file is not loaded (useful for testing). A missing `.env`
    /// file is silently ignored.
    ///
    /// SAFETY: error messages never include raw .env line contents to
    /// prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Merge one prefix's worth of configuration into the store and
    /// return a snapshot of the full result.
    ///
    /// Per call: seed a working snapshot (from the current store when
    /// refreshing a seen prefix, empty otherwise), merge the file layer,
    /// overlay the options on the string-valued view, project the result
    /// into the environment under `prefix`, then re-read the whole
    /// namespace back with boolean coercion applied and commit. The
    /// round-trip through real environment variables is deliberate: the
    /// projected `PREFIX_KEY` variables are a contract with co-operating
    /// processes.
    ///
    /// A key used by two different prefixes is last-write-wins; the
    /// collision is logged but not arbitrated.
    ///
    /// # Errors
    ///
    /// Fails if the file is missing, unreadable, malformed, or holds
    /// values outside the configuration model. On failure neither the
    /// store nor the environment has been modified.
    pub fn load(
        &mut self,
        options: &Options,
        prefix: &str,
        file: Option<&Path>,
    ) -> Result<ConfigStore, ConfigError> {
        let prefix = prefix.to_uppercase();
        let refresh = self.seen_prefixes.contains(&prefix);
        let mut working = if refresh {
            self.store.clone().unwrap_or_default()
        } else {
            ConfigStore::new()
        };
        tracing::debug!(%prefix, refresh, "loading configuration");

        // File layer. Parse failures abort here, before any mutation.
        if let Some(path) = file {
            let parsed = parse_config_file(path)?;
            tracing::debug!(%prefix, path = %path.display(), keys = parsed.len(), "merged config file");
            for (key, value) in parsed {
                working.insert(normalize_option_name(&key), value);
            }
        }

        // String-valued view of the snapshot with the options overlaid
        // under normalized names, so options win over file values per
        // key. Bools and nested maps stay behind in the snapshot; they
        // are not projectable.
        let mut projection = Options::new();
        for (key, value) in &working {
            if let ConfigValue::Str(s) = value {
                projection.insert(key.clone(), OptionValue::Str(s.clone()));
            }
        }
        for (name, value) in options {
            projection.insert(normalize_option_name(name), value.clone());
        }

        // Round-trip through the environment: the single path by which
        // every string value, whatever its origin, gets coerced.
        project_to_env(&projection, &prefix);
        let env_layer = read_env_namespace(&prefix);
        tracing::debug!(%prefix, keys = env_layer.len(), "read back environment namespace");
        working.extend(env_layer);

        // Commit.
        let store = self.store.get_or_insert_with(ConfigStore::new);
        for (key, value) in working {
            if !refresh && store.contains_key(&key) {
                tracing::warn!(%prefix, %key, "overwriting key previously loaded under another prefix");
            }
            store.insert(key, value);
        }
        self.seen_prefixes.insert(prefix);
        Ok(store.clone())
    }

    /// Look up a single value by case-insensitive key.
    ///
    /// The returned value is a clone; nested maps in particular are
    /// never handed out as aliases of stored state.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NotLoaded`] if no `load` has succeeded yet.
    pub fn get(&self, key: &str) -> Result<Option<ConfigValue>, ConfigError> {
        let store = self.store.as_ref().ok_or(ConfigError::NotLoaded)?;
        Ok(store.get(&normalize_option_name(key)).cloned())
    }

    /// Look up a value, falling back to `default` when the key is absent.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NotLoaded`] if no `load` has succeeded yet.
    pub fn get_or(&self, key: &str, default: ConfigValue) -> Result<ConfigValue, ConfigError> {
        Ok(self.get(key)?.unwrap_or(default))
    }

    /// A copy of the entire store. Mutating the copy never affects the
    /// resolver.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NotLoaded`] if no `load` has succeeded yet.
    pub fn snapshot(&self) -> Result<ConfigStore, ConfigError> {
        self.store.clone().ok_or(ConfigError::NotLoaded)
    }
}
