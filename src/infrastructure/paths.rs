//! Platform path resolution.
//!
//! The application persists nothing except observability output; these helpers
//! locate the platform-appropriate directories for that output and for the
//! optional configuration file.

use std::path::PathBuf;

/// Returns the data directory for White Temple output (trace files).
///
/// Resolves to the platform-local data dir (e.g. `~/.local/share/white-temple`
/// on Linux), falling back to the current directory if the platform dir cannot
/// be determined.
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("white-temple")
}

/// Returns the default configuration file path.
///
/// Resolves to `<config dir>/white-temple/config.toml`. The file is optional;
/// callers treat its absence as an empty configuration.
#[must_use]
pub fn config_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("white-temple")
        .join("config.toml")
}
