//! Persistence ports for brands and their model-years.

use crate::domain::{
    Brand, BrandChanges, BrandFilter, BrandId, Model, ModelChanges, ModelFilter, ModelId,
    NewBrand, NewModel,
};
use crate::error::Result;

/// Storage operations for brands.
pub trait BrandStore: Send + Sync {
    /// Insert a brand and return it with its assigned identifier.
    fn create(&self, brand: &NewBrand) -> Result<Brand>;

    /// Get a brand by ID.
    fn get(&self, id: BrandId) -> Result<Option<Brand>>;

    /// Get a brand by its unique name.
    fn find_by_name(&self, name: &str) -> Result<Option<Brand>>;

    /// List brands matching the filter, ordered by ID.
    fn list(&self, filter: &BrandFilter) -> Result<Vec<Brand>>;

    /// Apply changes to a brand. Returns `None` if no such brand exists.
    fn update(&self, id: BrandId, changes: &BrandChanges) -> Result<Option<Brand>>;

    /// Delete a brand by ID. Fails while models still reference it.
    fn delete(&self, id: BrandId) -> Result<bool>;

    /// Models of this brand, ordered by year ascending.
    fn models_of(&self, brand: &Brand) -> Result<Vec<Model>>;
}

/// Storage operations for model-years.
pub trait ModelStore: Send + Sync {
    /// Insert a model and return it with its assigned identifier.
    ///
    /// Fails with a foreign-key violation if `brand_name` names no brand.
    fn create(&self, model: &NewModel) -> Result<Model>;

    /// Get a model by ID.
    fn get(&self, id: ModelId) -> Result<Option<Model>>;

    /// List models matching the filter, ordered by year then ID.
    fn list(&self, filter: &ModelFilter) -> Result<Vec<Model>>;

    /// Apply changes to a model. Returns `None` if no such model exists.
    fn update(&self, id: ModelId, changes: &ModelChanges) -> Result<Option<Model>>;

    /// Delete a model by ID.
    fn delete(&self, id: ModelId) -> Result<bool>;

    /// The brand owning this model.
    fn brand_of(&self, model: &Model) -> Result<Brand>;
}
