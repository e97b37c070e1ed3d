//! Centralized path definitions for movie-rental
//!
//! The only file the application reads is its optional user configuration:
//!
//! ```text
//! <config_dir>/movie-rental/
//! └── config.toml               # Fee schedule, currency label, seed data
//! ```
//!
//! `<config_dir>` is the platform configuration directory (`~/.config` on
//! Linux, `~/Library/Application Support` on macOS, `%APPDATA%` on Windows).

use std::path::PathBuf;

/// Directory name under the platform config directory
const APP_DIR: &str = "movie-rental";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Get the user configuration directory.
///
/// Falls back to `./.movie-rental` when the platform has no config directory.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir().map_or_else(|| PathBuf::from(".").join(format!(".{APP_DIR}")), |d| d.join(APP_DIR))
}

/// Get the user configuration file path.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(CONFIG_FILE)
}
