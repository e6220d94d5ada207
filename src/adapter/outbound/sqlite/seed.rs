//! Fixture seeding.
//!
//! A seed file is TOML with `[[brands]]` and `[[models]]` tables:
//!
//! ```toml
//! [[brands]]
//! name = "Acme"
//! founded = 1950
//!
//! [[models]]
//! year = 1955
//! brand_name = "Acme"
//! name = "Classic"
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use super::catalog::Database;
use super::store::{insert_brand, insert_model};
use crate::domain::{NewBrand, NewModel};
use crate::error::{Error, Result};

/// Brands and models to insert together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Seed {
    #[serde(default)]
    pub brands: Vec<NewBrand>,
    #[serde(default)]
    pub models: Vec<NewModel>,
}

impl Seed {
    /// Parse a seed from TOML content.
    ///
    /// # Errors
    /// Returns an error if the TOML is malformed or a required field is missing.
    pub fn parse_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Parse(e.to_string()))
    }

    /// Load a seed from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }
}

/// Rows inserted by [`apply`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub brands: usize,
    pub models: usize,
}

/// Insert every brand, then every model, in one transaction.
///
/// Nothing is kept if any row fails, e.g. a model naming an unknown brand.
///
/// # Errors
/// Returns the first storage error encountered.
pub fn apply(db: &Database, seed: &Seed) -> Result<SeedReport> {
    let report = db.transaction(|conn| {
        for brand in &seed.brands {
            insert_brand(conn, brand)?;
        }
        for model in &seed.models {
            insert_model(conn, model)?;
        }
        Ok(SeedReport {
            brands: seed.brands.len(),
            models: seed.models.len(),
        })
    })?;
    info!(
        brands = report.brands,
        models = report.models,
        location = %db.location(),
        "Seeded database"
    );
    Ok(report)
}
