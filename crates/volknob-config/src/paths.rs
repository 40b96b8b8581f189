//! Platform-specific location of the configuration file.
//!
//! # Directory Structure
//!
//! - Linux: `~/.config/volknob/config.toml`
//! - macOS: `~/Library/Application Support/volknob/config.toml`
//! - Windows: `%APPDATA%\volknob\config.toml`

use std::path::PathBuf;

/// Application name used for directory paths.
const APP_NAME: &str = "volknob";

/// File name of the configuration file.
const CONFIG_FILE: &str = "config.toml";

/// Returns the user-specific configuration directory.
///
/// Returns a fallback path if the config directory cannot be determined.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the path the configuration file is read from by default.
pub fn default_config_path() -> PathBuf {
    user_config_dir().join(CONFIG_FILE)
}

/// Returns the default configuration path if a file exists there.
pub fn find_config() -> Option<PathBuf> {
    let path = default_config_path();
    path.is_file().then_some(path)
}
