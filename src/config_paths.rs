//! Where reel keeps its files
//!
//! `config.yaml` and the `logs/` directory share one per-user directory:
//! `$XDG_CONFIG_HOME/reel` (falling back to `~/.config/reel`) on Unix and
//! macOS, the roaming app-data directory on Windows.

use std::path::PathBuf;

const APP_DIR: &str = "reel";
const CONFIG_FILE: &str = "config.yaml";
const LOGS_DIR: &str = "logs";

/// Per-user directory for reel, if the platform has one
pub fn config_dir() -> Option<PathBuf> {
    base_dir().map(|base| base.join(APP_DIR))
}

#[cfg(target_os = "windows")]
fn base_dir() -> Option<PathBuf> {
    dirs::config_dir()
}

#[cfg(not(target_os = "windows"))]
fn base_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
}

/// Table config read by `TableConfig::load`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Directory the rolling `reel.log` files go to
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(LOGS_DIR))
}
