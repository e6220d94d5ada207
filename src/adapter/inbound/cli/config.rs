//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::step(1, &format!("Edit {} with your settings", path.display()));
    output::step(
        2,
        &format!("Run: autodb --config {} config validate", path.display()),
    );
    output::step(3, &format!("Run: autodb --config {} connect", path.display()));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(config: &Config) -> Result<()> {
    output::section("Effective Configuration");

    output::section("Database");
    output::field("Path", &config.database.path);
    output::field("Echo", config.database.echo);
    output::field("Pool size", config.database.pool_size);
    output::field("Busy timeout", format!("{}ms", config.database.busy_timeout_ms));
    output::field(
        "Connect timeout",
        format!("{}ms", config.database.connect_timeout_ms),
    );

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(config: &Config) -> Result<()> {
    config.validate()?;
    output::success("Configuration is valid");
    Ok(())
}
