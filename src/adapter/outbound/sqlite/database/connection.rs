//! Database connection management using Diesel ORM.
//!
//! Provides connection pooling, migration support, and connection
//! configuration for SQLite databases.

use std::time::Duration;

use diesel::connection::{InstrumentationEvent, SimpleConnection};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};

/// Embedded database migrations compiled from the migrations/ directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Location SQLite treats as a private in-memory database.
pub const IN_MEMORY: &str = ":memory:";

/// Type alias for a SQLite connection pool.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// A connection checked out of a [`DbPool`].
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Settings applied when opening pooled connections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionOptions {
    /// Database file path, or `:memory:`.
    pub location: String,
    /// Log every executed statement.
    pub echo: bool,
    pub pool_size: u32,
    pub busy_timeout_ms: u32,
    pub connect_timeout_ms: u64,
}

impl ConnectionOptions {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            echo: false,
            pool_size: 5,
            busy_timeout_ms: 5000,
            connect_timeout_ms: 5000,
        }
    }

    /// Options for a private in-memory database.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(IN_MEMORY)
    }

    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.location == IN_MEMORY
    }

    /// Every in-memory connection is its own database, so the pool must
    /// hold exactly one.
    fn effective_pool_size(&self) -> u32 {
        if self.is_in_memory() {
            1
        } else {
            self.pool_size.max(1)
        }
    }
}

/// Applies pragmas and query echo to each connection the pool opens.
#[derive(Debug, Clone, Copy)]
struct ConnectionCustomizer {
    busy_timeout_ms: u32,
    echo: bool,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionCustomizer {
    fn on_acquire(
        &self,
        conn: &mut SqliteConnection,
    ) -> std::result::Result<(), diesel::r2d2::Error> {
        configure_sqlite_connection(conn, self.busy_timeout_ms)
            .map_err(diesel::r2d2::Error::QueryError)?;
        if self.echo {
            conn.set_instrumentation(echo_query);
        }
        Ok(())
    }
}

/// Log statements as they execute and failures as they finish.
fn echo_query(event: InstrumentationEvent<'_>) {
    match event {
        InstrumentationEvent::StartQuery { query, .. } => {
            info!(target: "autodb::sql", query = %query, "Executing query");
        }
        InstrumentationEvent::FinishQuery {
            query,
            error: Some(error),
            ..
        } => {
            warn!(target: "autodb::sql", query = %query, error = %error, "Query failed");
        }
        _ => {}
    }
}

/// Create a connection pool for the given options.
///
/// # Errors
/// Returns an error if the pool cannot open its connections.
pub fn create_pool(options: &ConnectionOptions) -> Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(options.location.as_str());
    let mut builder = Pool::<ConnectionManager<SqliteConnection>>::builder()
        .max_size(options.effective_pool_size())
        .connection_timeout(Duration::from_millis(options.connect_timeout_ms))
        .connection_customizer(Box::new(ConnectionCustomizer {
            busy_timeout_ms: options.busy_timeout_ms,
            echo: options.echo,
        }));
    if options.is_in_memory() {
        // The single connection holds the whole database; never reap it.
        builder = builder.idle_timeout(None).max_lifetime(None);
    }
    let pool = builder
        .build(manager)
        .map_err(|e| Error::Connection(e.to_string()))?;
    debug!(
        location = %options.location,
        pool_size = options.effective_pool_size(),
        "Created SQLite pool"
    );
    Ok(pool)
}

/// Run all pending database migrations.
///
/// # Errors
/// Returns an error if migrations fail.
pub fn run_migrations(pool: &DbPool) -> Result<()> {
    let mut conn = pool
        .get()
        .map_err(|e| Error::Connection(e.to_string()))?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| Error::Connection(e.to_string()))?;
    for version in &applied {
        debug!(version = %version, "Applied migration");
    }
    Ok(())
}

/// Configure SQLite connection pragmas.
///
/// Foreign keys are off by default in SQLite and must be switched on per
/// connection for the `models.brand_name` reference to be enforced.
///
/// # Errors
/// Returns an error if a pragma fails to apply.
pub fn configure_sqlite_connection(
    conn: &mut SqliteConnection,
    busy_timeout_ms: u32,
) -> QueryResult<()> {
    conn.batch_execute(&format!(
        "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = {busy_timeout_ms};"
    ))
}
