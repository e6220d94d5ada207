//! Path utilities for autodb.
//!
//! User-level files live under `~/.autodb/`:
//! - `~/.autodb/config.toml` - main configuration

use std::path::PathBuf;

/// Returns the autodb home directory (`~/.autodb/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".autodb")
}

/// Returns the default config file path (`~/.autodb/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}
