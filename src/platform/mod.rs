// Shelfmark platform paths
// Config and data directories for Linux (XDG), macOS and Windows.
//
// Uses `cfg(target_os)` to pick the platform convention at compile time.

use std::env;
use std::path::PathBuf;

const APP_DIR_UNIX: &str = "shelfmark";
#[cfg(any(target_os = "macos", target_os = "windows"))]
const APP_DIR_DESKTOP: &str = "Shelfmark";

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the platform-specific configuration directory.
///
/// - **Linux**: `$XDG_CONFIG_HOME/shelfmark` or `~/.config/shelfmark`
/// - **macOS**: `~/Library/Application Support/Shelfmark`
/// - **Windows**: `%APPDATA%/Shelfmark`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        home_dir()
            .join("Library")
            .join("Application Support")
            .join(APP_DIR_DESKTOP)
    }
    #[cfg(target_os = "windows")]
    {
        appdata_dir().join(APP_DIR_DESKTOP)
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        match env::var("XDG_CONFIG_HOME") {
            Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join(APP_DIR_UNIX),
            _ => home_dir().join(".config").join(APP_DIR_UNIX),
        }
    }
}

/// Returns the platform-specific data directory (where the database lives).
///
/// - **Linux**: `$XDG_DATA_HOME/shelfmark` or `~/.local/share/shelfmark`
/// - **macOS**: same as the config directory
/// - **Windows**: `%APPDATA%/Shelfmark/data`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        appdata_dir().join(APP_DIR_DESKTOP).join("data")
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        match env::var("XDG_DATA_HOME") {
            Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join(APP_DIR_UNIX),
            _ => home_dir().join(".local").join("share").join(APP_DIR_UNIX),
        }
    }
}

#[cfg(target_os = "windows")]
fn appdata_dir() -> PathBuf {
    env::var("APPDATA")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join("AppData").join("Roaming"))
}
