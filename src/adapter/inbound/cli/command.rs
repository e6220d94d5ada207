//! Command-line interface definitions.
//!
//! Defines the CLI structure for the autodb application using `clap`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Vehicle brand and model-year catalog
#[derive(Parser, Debug)]
#[command(name = "autodb")]
#[command(version)]
pub struct Cli {
    /// Configuration file [default: ~/.autodb/config.toml if present]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Database file, overriding the configuration
    #[arg(long, global = true)]
    pub database: Option<String>,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the autodb CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Connect to the database, creating tables if needed, and report
    Connect,

    /// Manage brands
    #[command(subcommand)]
    Brand(BrandCommand),

    /// Manage model-years
    #[command(subcommand)]
    Model(ModelCommand),

    /// Load brands and models from a TOML seed file
    Seed(SeedArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `autodb brand`.
#[derive(Subcommand, Debug)]
pub enum BrandCommand {
    /// Add a brand.
    Add(BrandAddArgs),
    /// Show a brand and its models by year.
    Show(BrandNameArg),
    /// List brands.
    List(BrandListArgs),
    /// Delete a brand that no model references.
    Delete(BrandNameArg),
}

/// Subcommands for `autodb model`.
#[derive(Subcommand, Debug)]
pub enum ModelCommand {
    /// Add a model-year to an existing brand.
    Add(ModelAddArgs),
    /// Show a model-year and its brand.
    Show(ModelIdArg),
    /// List model-years.
    List(ModelListArgs),
    /// Delete a model-year.
    Delete(ModelIdArg),
}

/// Subcommands for `autodb config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate a configuration file for correctness.
    Validate,
}

#[derive(Args, Debug)]
pub struct BrandAddArgs {
    /// Brand name (unique)
    #[arg(long)]
    pub name: String,

    /// Year founded
    #[arg(long)]
    pub founded: Option<i32>,

    /// Headquarters location
    #[arg(long)]
    pub headquarters: Option<String>,

    /// Year discontinued
    #[arg(long)]
    pub discontinued: Option<i32>,
}

#[derive(Args, Debug)]
pub struct BrandNameArg {
    /// Brand name
    pub name: String,
}

#[derive(Args, Debug)]
pub struct BrandListArgs {
    /// Only brands founded in this year
    #[arg(long)]
    pub founded: Option<i32>,

    /// Only brands with this headquarters
    #[arg(long)]
    pub headquarters: Option<String>,

    /// Only active brands
    #[arg(long, conflicts_with = "discontinued")]
    pub active: bool,

    /// Only discontinued brands
    #[arg(long)]
    pub discontinued: bool,
}

#[derive(Args, Debug)]
pub struct ModelAddArgs {
    /// Model year
    #[arg(long)]
    pub year: i32,

    /// Name of the owning brand
    #[arg(long)]
    pub brand: String,

    /// Model name
    #[arg(long)]
    pub name: String,
}

#[derive(Args, Debug)]
pub struct ModelIdArg {
    /// Model ID
    pub id: i32,
}

#[derive(Args, Debug)]
pub struct ModelListArgs {
    /// Only this model year
    #[arg(long)]
    pub year: Option<i32>,

    /// Only models of this brand
    #[arg(long)]
    pub brand: Option<String>,

    /// Only models with this name
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Args, Debug)]
pub struct SeedArgs {
    /// Seed file with [[brands]] and [[models]] tables
    pub file: PathBuf,
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Where to write the file [default: ~/.autodb/config.toml]
    pub path: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_model_add() {
        let cli = Cli::try_parse_from([
            "autodb", "model", "add", "--year", "1960", "--brand", "Acme", "--name", "Roadster",
        ])
        .unwrap();
        match cli.command {
            Commands::Model(ModelCommand::Add(args)) => {
                assert_eq!(args.year, 1960);
                assert_eq!(args.brand, "Acme");
                assert_eq!(args.name, "Roadster");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_database_flag_follows_subcommand() {
        let cli =
            Cli::try_parse_from(["autodb", "brand", "list", "--database", "cars.db"]).unwrap();
        assert_eq!(cli.database.as_deref(), Some("cars.db"));
    }

    #[test]
    fn active_and_discontinued_conflict() {
        let result =
            Cli::try_parse_from(["autodb", "brand", "list", "--active", "--discontinued"]);
        assert!(result.is_err());
    }
}
