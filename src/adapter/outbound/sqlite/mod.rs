//! SQLite persistence: connection pool, schema, and the brand and model
//! stores built on it.

pub mod catalog;
pub mod database;
pub mod seed;
pub mod store;

pub use catalog::Database;
pub use store::{SqliteBrandStore, SqliteModelStore};
