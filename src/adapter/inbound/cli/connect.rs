//! Handler for the `connect` command.

use crate::adapter::inbound::cli::{output, session};
use crate::domain::{BrandFilter, ModelFilter};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::store::{BrandStore, ModelStore};

/// Execute `connect`.
pub fn execute(config: &Config) -> Result<()> {
    let mut app = session::connect(config)?;
    let db = app.database()?;

    output::success("Connected to DB.");
    output::field("Location", db.location());
    output::field("Echo", app.config().database.echo);
    if output::verbosity() > 0 {
        output::field("Pool size", db.pool().max_size());
    }
    output::field("Brands", db.brands().list(&BrandFilter::default())?.len());
    output::field("Models", db.models().list(&ModelFilter::default())?.len());

    app.close();
    Ok(())
}
