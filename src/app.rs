//! The application instance a database is attached to.

use crate::adapter::outbound::sqlite::Database;
use crate::error::{Error, Result};
use crate::infrastructure::config::settings::Config;

/// Holds the configuration and, once bootstrapped, the database handle.
///
/// See [`connect_to_db`](crate::infrastructure::bootstrap::connect_to_db).
#[derive(Debug, Default)]
pub struct App {
    config: Config,
    database: Option<Database>,
}

impl App {
    /// An application that is not yet connected.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            database: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.database.is_some()
    }

    /// The attached database.
    ///
    /// # Errors
    /// Returns [`Error::NotConnected`] before the bootstrap has run.
    pub fn database(&self) -> Result<&Database> {
        self.database.as_ref().ok_or(Error::NotConnected)
    }

    /// Attach a database, returning the one it replaces.
    pub(crate) fn attach(&mut self, database: Database) -> Option<Database> {
        self.database.replace(database)
    }

    /// Detach and close the database. Returns false if none was attached.
    pub fn close(&mut self) -> bool {
        match self.database.take() {
            Some(database) => {
                database.close();
                true
            }
            None => false,
        }
    }
}
