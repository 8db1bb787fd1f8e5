//! Project-wide constants.

use log::LevelFilter;

/// Shown at the end of `--help`.
pub const REPO: &str = env!("CARGO_PKG_REPOSITORY");

/// What [`Nil`](crate::show::nil::Nil) shows itself as.
pub const NIL_TEXT: &str = "Nil";

/// Stderr log filter when `--log-level` is not given.
/// Quiet enough that a successful run writes nothing to stderr.
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;
