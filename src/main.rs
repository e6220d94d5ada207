use clap::Parser;
use tracing::{debug, error};

use autodb::adapter::inbound::cli::command::Cli;
use autodb::adapter::inbound::cli::output::{self, OutputConfig};
use autodb::adapter::inbound::cli::{self as cli, session};
use autodb::infrastructure::config::settings::Config;

fn main() {
    let args = Cli::parse();
    output::configure(OutputConfig::new(args.json, args.quiet, args.verbose));

    let config = if cli::needs_config(&args.command) {
        match session::load_config(&args) {
            Ok(config) => config,
            Err(e) => {
                output::error(&format!("Failed to load config: {e}"));
                std::process::exit(1);
            }
        }
    } else {
        Config::default()
    };

    config.init_logging();
    debug!(database = %config.database.path, "autodb starting");

    if let Err(e) = cli::execute(&args, &config) {
        error!(error = %e, "Command failed");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
