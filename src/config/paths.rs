//! XDG base directories for xcsh: config, data and the default history file.

use directories::BaseDirs;
use std::path::PathBuf;

const APP_DIR: &str = "xcsh";

fn home_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

fn xdg_dir(var: &str, fallback: &[&str]) -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(var).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    home_dir().map(|home| fallback.iter().fold(home, |path, part| path.join(part)))
}

/// `$XDG_CONFIG_HOME`, or `~/.config`
pub fn config_home() -> Option<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", &[".config"])
}

/// `$XDG_DATA_HOME`, or `~/.local/share`
pub fn data_home() -> Option<PathBuf> {
    xdg_dir("XDG_DATA_HOME", &[".local", "share"])
}

/// `<config home>/xcsh`
pub fn config_dir() -> Option<PathBuf> {
    config_home().map(|dir| dir.join(APP_DIR))
}

/// `<data home>/xcsh`
pub fn data_dir() -> Option<PathBuf> {
    data_home().map(|dir| dir.join(APP_DIR))
}

/// `<data home>/xcsh/history`
pub fn default_history_file() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("history"))
}
