// dlrenamer platform paths for Linux
// Config: ~/.config/dlrenamer
// Data:   ~/.local/share/dlrenamer

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for dlrenamer on Linux.
/// Uses `$XDG_CONFIG_HOME/dlrenamer` if set, otherwise `~/.config/dlrenamer`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("dlrenamer")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("dlrenamer")
    }
}

/// Returns the data directory for dlrenamer on Linux.
/// Uses `$XDG_DATA_HOME/dlrenamer` if set, otherwise `~/.local/share/dlrenamer`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("dlrenamer")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("dlrenamer")
    }
}
