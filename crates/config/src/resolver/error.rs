//! Error types for configuration resolution.
//!
//! Responsibilities:
//! - Define error variants for all resolution failures.
//!
//! Invariants:
//! - All variants carry context for debugging (paths, key names).
//! - A failed `load` never leaves a partially merged store behind; file
//!   errors surface before any shared state is touched.
//! - Dotenv errors NEVER include raw .env line contents to prevent
//!   secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration resolution.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file is missing or unreadable.
    #[error("failed to read config file at {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML.
    #[error("failed to parse config file at {path}")]
    FileParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The file parsed, but holds a value the configuration model has no
    /// representation for (sequence, null, tagged value, non-string key).
    #[error("unsupported value for '{key}' in {path}: {message}")]
    InvalidFileValue {
        path: PathBuf,
        key: String,
        message: String,
    },

    /// `get` or `snapshot` was called before the first successful `load`.
    #[error("configuration not loaded; call load() before reading values")]
    NotLoaded,

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: only the byte index of the failure is reported, never the
    /// offending line content.
    #[error(
        "failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from the dotenvy crate).
    #[error("failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
