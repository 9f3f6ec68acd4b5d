//! Tests for the configuration resolver.
//!
//! Responsibilities:
//! - Test environment projection, namespace reading, and coercion.
//! - Test file parsing and the value model.
//! - Test source precedence through `load`.
//! - Test per-prefix refresh, multi-prefix composition, and read-path
//!   isolation.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `env_lock()` for additional synchronization.
//! - Every variable a test projects is wrapped in `temp_env::with_vars`
//!   (seeded as `None`) so the process environment is restored on exit.

use std::sync::Mutex;

use crate::types::{OptionValue, Options};

pub mod precedence_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Build an options mapping from literal pairs.
pub fn opts<const N: usize>(pairs: [(&str, OptionValue); N]) -> Options {
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}
