//! Database handle tying the pool to the brand and model stores.

use diesel::SqliteConnection;
use tracing::{debug, info};

use super::database::connection::{create_pool, run_migrations, ConnectionOptions, DbPool};
use super::store::{SqliteBrandStore, SqliteModelStore};
use crate::error::{Error, Result};

/// An open, migrated SQLite database.
///
/// Cloning shares the underlying pool.
#[derive(Clone)]
pub struct Database {
    pool: DbPool,
    location: String,
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("location", &self.location)
            .field("connections", &self.pool.state().connections)
            .finish()
    }
}

impl Database {
    /// Open a pool at the configured location and bring the schema up to date.
    ///
    /// # Errors
    /// Returns the pool's connection error, or the migration failure.
    pub fn open(options: &ConnectionOptions) -> Result<Self> {
        let pool = create_pool(options)?;
        run_migrations(&pool)?;
        info!(location = %options.location, echo = options.echo, "Database ready");
        Ok(Self {
            pool,
            location: options.location.clone(),
        })
    }

    /// Path (or `:memory:`) this database was opened at.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    #[must_use]
    pub fn brands(&self) -> SqliteBrandStore {
        SqliteBrandStore::new(self.pool.clone())
    }

    #[must_use]
    pub fn models(&self) -> SqliteModelStore {
        SqliteModelStore::new(self.pool.clone())
    }

    /// Run `f` inside one `BEGIN IMMEDIATE` transaction; any error rolls
    /// everything back.
    ///
    /// # Errors
    /// Returns the error produced by `f`, or the failure to begin or commit.
    pub fn transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T>,
    {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;
        conn.immediate_transaction(f)
    }

    /// Release the pool. Connections close once every clone is dropped.
    pub fn close(self) {
        debug!(location = %self.location, "Closing database");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::sqlite::store::insert_brand;
    use crate::domain::{BrandFilter, NewBrand};
    use crate::port::outbound::store::BrandStore;

    #[test]
    fn open_in_memory_database_is_usable() {
        let db = Database::open(&ConnectionOptions::in_memory()).unwrap();
        assert_eq!(db.location(), ":memory:");
        db.brands().create(&NewBrand::new("Acme")).unwrap();
        assert_eq!(db.brands().list(&BrandFilter::default()).unwrap().len(), 1);
    }

    #[test]
    fn stores_share_the_same_database() {
        let db = Database::open(&ConnectionOptions::in_memory()).unwrap();
        let writer = db.brands();
        let reader = db.clone().brands();
        writer.create(&NewBrand::new("Acme")).unwrap();
        assert!(reader.find_by_name("Acme").unwrap().is_some());
    }

    #[test]
    fn failed_transaction_rolls_back() {
        let db = Database::open(&ConnectionOptions::in_memory()).unwrap();
        let result: Result<()> = db.transaction(|conn| {
            insert_brand(conn, &NewBrand::new("Acme"))?;
            Err(Error::Parse("abort".to_string()))
        });
        assert!(result.is_err());
        assert!(db.brands().find_by_name("Acme").unwrap().is_none());
    }
}
