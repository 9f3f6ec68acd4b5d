//! Centralized constants for the resolver.
//!
//! This module contains the literal values that define the environment
//! variable contract, kept in one place so the projection and coercion
//! paths cannot drift apart.

/// String projected into the environment for a boolean `true` option.
pub const TRUE_PROJECTION: &str = "1";

/// Environment values (compared lowercase) that coerce to boolean `false`.
pub const FALSEY_ENV_VALUES: [&str; 3] = ["0", "false", "no"];

/// Characters stripped from the ends of CLI-style option names before
/// projection (docopt-style decoration: `--flag`, `<positional>`).
pub const OPTION_NAME_TRIM: [char; 4] = ['-', '<', '>', ' '];

/// Separator between the prefix and the key in projected variable names.
/// Part of the namespace match: `APPX_KEY` does not belong to `APP`.
pub const PREFIX_SEPARATOR: char = '_';
