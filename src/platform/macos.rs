// dlrenamer platform paths for macOS
// Config: ~/Library/Application Support/DlRenamer
// Data:   ~/Library/Application Support/DlRenamer

use std::env;
use std::path::PathBuf;

/// Returns the home directory on macOS.
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the configuration directory for dlrenamer on macOS.
/// `~/Library/Application Support/DlRenamer`
pub fn get_config_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("DlRenamer")
}

/// Returns the data directory for dlrenamer on macOS.
/// `~/Library/Application Support/DlRenamer`
pub fn get_data_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("DlRenamer")
}
