// dlrenamer platform paths for Windows
// Config: %APPDATA%/DlRenamer
// Data:   %APPDATA%/DlRenamer

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for dlrenamer on Windows.
/// `%APPDATA%/DlRenamer`
pub fn get_config_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("DlRenamer")
}

/// Returns the data directory for dlrenamer on Windows.
/// `%APPDATA%/DlRenamer`
pub fn get_data_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("DlRenamer")
}
