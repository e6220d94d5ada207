//! Handler for the `seed` command.

use crate::adapter::inbound::cli::command::SeedArgs;
use crate::adapter::inbound::cli::{output, session};
use crate::adapter::outbound::sqlite::seed::{self, Seed};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Execute `seed`.
pub fn execute(config: &Config, args: &SeedArgs) -> Result<()> {
    let fixture = Seed::load(&args.file)?;
    let app = session::connect(config)?;
    let report = seed::apply(app.database()?, &fixture)?;

    output::success("Seeded database");
    output::field("File", args.file.display());
    output::field("Brands", report.brands);
    output::field("Models", report.models);
    Ok(())
}
