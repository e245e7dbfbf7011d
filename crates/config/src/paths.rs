//! Path helpers for the wayfarer data directory

use std::path::PathBuf;

/// Wayfarer data directory (~/.wayfarer)
pub fn data_dir() -> PathBuf {
    dirs::home_dir()
        .expect("could not locate home directory")
        .join(".wayfarer")
}

/// Configuration file location
pub fn config_path() -> PathBuf {
    data_dir().join("config.json")
}
