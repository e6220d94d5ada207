//! Database location and connection settings.

use serde::Deserialize;

use crate::adapter::outbound::sqlite::database::connection::ConnectionOptions;

/// `[database]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file, or `:memory:`.
    ///
    /// Defaults to "auto.db" in the current directory.
    #[serde(default = "default_database_path")]
    pub path: String,

    /// Log every SQL statement as it executes. Defaults to true.
    #[serde(default = "default_echo")]
    pub echo: bool,

    /// Maximum pooled connections. Ignored for `:memory:`.
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,

    /// How long a writer waits on a locked database.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u32,

    /// How long to wait for the pool to open its connections.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

fn default_database_path() -> String {
    "auto.db".to_string()
}

const fn default_echo() -> bool {
    true
}

const fn default_pool_size() -> u32 {
    5
}

const fn default_busy_timeout_ms() -> u32 {
    5000
}

const fn default_connect_timeout_ms() -> u64 {
    5000
}

impl DatabaseConfig {
    /// Settings for a database at `path`, other fields at their defaults.
    pub fn at(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn connection_options(&self) -> ConnectionOptions {
        ConnectionOptions {
            location: self.path.clone(),
            echo: self.echo,
            pool_size: self.pool_size,
            busy_timeout_ms: self.busy_timeout_ms,
            connect_timeout_ms: self.connect_timeout_ms,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
            echo: default_echo(),
            pool_size: default_pool_size(),
            busy_timeout_ms: default_busy_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}
