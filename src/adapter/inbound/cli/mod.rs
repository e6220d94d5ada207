//! CLI module graph and command dispatch.

pub mod brand;
pub mod command;
pub mod config;
pub mod connect;
pub mod model;
pub mod output;
pub mod paths;
pub mod seed;
pub mod session;

use self::command::{BrandCommand, Cli, Commands, ConfigCommand, ModelCommand};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Whether the command needs the configuration loaded first.
///
/// `config init` creates the file, so it must not require one.
#[must_use]
pub fn needs_config(command: &Commands) -> bool {
    !matches!(command, Commands::Config(ConfigCommand::Init(_)))
}

/// Run the parsed command against the effective configuration.
///
/// # Errors
/// Returns whatever the command handler returns.
pub fn execute(cli: &Cli, config: &Config) -> Result<()> {
    match &cli.command {
        Commands::Connect => connect::execute(config),
        Commands::Brand(BrandCommand::Add(args)) => brand::execute_add(config, args),
        Commands::Brand(BrandCommand::Show(args)) => brand::execute_show(config, args),
        Commands::Brand(BrandCommand::List(args)) => brand::execute_list(config, args),
        Commands::Brand(BrandCommand::Delete(args)) => brand::execute_delete(config, args),
        Commands::Model(ModelCommand::Add(args)) => model::execute_add(config, args),
        Commands::Model(ModelCommand::Show(args)) => model::execute_show(config, args),
        Commands::Model(ModelCommand::List(args)) => model::execute_list(config, args),
        Commands::Model(ModelCommand::Delete(args)) => model::execute_delete(config, args),
        Commands::Seed(args) => seed::execute(config, args),
        Commands::Config(ConfigCommand::Init(args)) => {
            let path = args
                .path
                .clone()
                .or_else(|| cli.config.clone())
                .unwrap_or_else(paths::default_config);
            config::execute_init(&path, args.force)
        }
        Commands::Config(ConfigCommand::Show) => config::execute_show(config),
        Commands::Config(ConfigCommand::Validate) => config::execute_validate(config),
    }
}
