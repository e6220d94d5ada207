//! Connects an application to its database.

use tracing::{debug, info};

use crate::adapter::outbound::sqlite::Database;
use crate::app::App;
use crate::error::Result;
use crate::infrastructure::config::database::DatabaseConfig;
use crate::infrastructure::config::settings::Config;

/// Point `app` at the configured database and make it ready for use.
///
/// Records the settings on the app's configuration, opens the pool,
/// brings the schema up to date and attaches the handle to `app`.
/// A previously attached database is replaced.
///
/// # Errors
/// Returns the connection or migration error unchanged; `app` keeps its
/// previous settings and database in that case.
pub fn connect_to_db(app: &mut App, database: DatabaseConfig) -> Result<()> {
    let options = database.connection_options();

    let db = Database::open(&options)?;
    app.config_mut().database = database;
    if let Some(previous) = app.attach(db) {
        debug!(location = %previous.location(), "Replaced attached database");
        previous.close();
    }

    info!(location = %options.location, "Connected to DB.");
    Ok(())
}

/// Build a minimal application and connect it, for ad hoc use.
///
/// # Errors
/// Returns the error from [`connect_to_db`].
pub fn init_app(config: Config) -> Result<App> {
    let database = config.database.clone();
    let mut app = App::new(config);
    connect_to_db(&mut app, database)?;
    Ok(app)
}
