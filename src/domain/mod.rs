//! Catalog domain types: brands, their model-years, and identifiers.

pub mod brand;
pub mod id;
pub mod model;

pub use brand::{Brand, BrandChanges, BrandFilter, NewBrand};
pub use id::{BrandId, ModelId};
pub use model::{Model, ModelChanges, ModelFilter, NewModel};
