//! autodb - a catalog of vehicle brands and their model-years.
//!
//! Two tables, `brands` and `models`, live in a SQLite file managed through
//! Diesel. Every model names its brand, and the database rejects a model
//! whose brand does not exist.
//!
//! # Modules
//!
//! - [`domain`] - Brand and model types, filters and changes
//! - [`port`] - Store traits for brands and models
//! - [`adapter`] - SQLite stores and the CLI
//! - [`infrastructure`] - Configuration and the database bootstrap
//! - [`app`] - The application instance a database attaches to
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use autodb::domain::{NewBrand, NewModel};
//! use autodb::infrastructure::bootstrap::init_app;
//! use autodb::infrastructure::config::settings::Config;
//! use autodb::port::outbound::store::{BrandStore, ModelStore};
//!
//! fn main() -> autodb::error::Result<()> {
//!     let app = init_app(Config::default())?;
//!     let db = app.database()?;
//!
//!     let acme = db.brands().create(&NewBrand::new("Acme").founded(1950))?;
//!     db.models().create(&NewModel::new(1955, "Acme", "Classic"))?;
//!
//!     for model in db.brands().models_of(&acme)? {
//!         println!("{model}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod app;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
