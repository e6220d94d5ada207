//! Configuration and connection shared by every command.

use std::path::PathBuf;

use tracing::debug;

use super::command::Cli;
use super::paths;
use crate::app::App;
use crate::error::Result;
use crate::infrastructure::bootstrap::init_app;
use crate::infrastructure::config::settings::Config;

/// The config file a command reads, and whether the user named it.
fn config_path(cli: &Cli) -> (PathBuf, bool) {
    match &cli.config {
        Some(path) => (path.clone(), true),
        None => (paths::default_config(), false),
    }
}

/// Load the effective configuration.
///
/// An explicit `--config` must exist; the default location may be absent,
/// in which case built-in defaults apply. `--database` overrides the path.
///
/// # Errors
/// Returns the read, parse or validation error.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let (path, explicit) = config_path(cli);
    let mut config = if explicit || path.exists() {
        debug!(path = %path.display(), "Loading config");
        Config::load(&path)?
    } else {
        Config::default()
    };

    if let Some(database) = &cli.database {
        config.database.path = database.clone();
        config.validate()?;
    }
    Ok(config)
}

/// Bootstrap an application against the configured database.
///
/// # Errors
/// Returns the connection error from the bootstrap.
pub fn connect(config: &Config) -> Result<App> {
    init_app(config.clone())
}
