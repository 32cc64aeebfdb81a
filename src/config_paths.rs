//! Where retype keeps its files
//!
//! ```text
//! <config home>/retype/
//!   config.yaml    user preferences (see `config`)
//!   logs/          daily-rotated debug logs, only with `file_logging: true`
//! ```
//!
//! `<config home>` is `$XDG_CONFIG_HOME` or `~/.config` on Unix and macOS,
//! `%APPDATA%` on Windows.

use std::{env, fs, path::PathBuf};

const APP_DIR: &str = "retype";

/// `<config home>/retype`, or None when no home directory can be found
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    let home = env::var_os("APPDATA").map(PathBuf::from);

    #[cfg(not(target_os = "windows"))]
    let home = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")));

    home.map(|home| home.join(APP_DIR))
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the logs directory (and the config directory above it)
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create log directory {}: {}", logs.display(), e))?;
    Ok(logs)
}
