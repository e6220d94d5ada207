//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::{brands, models};
use crate::domain::{Brand, BrandChanges, BrandId, Model, ModelChanges, ModelId, NewBrand, NewModel};

/// Database row for a brand (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = brands)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BrandRow {
    pub brand_id: i32,
    pub name: String,
    pub founded: Option<i32>,
    pub headquarters: Option<String>,
    pub discontinued: Option<i32>,
}

/// Database row for a brand (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = brands)]
pub struct NewBrandRow<'a> {
    pub name: &'a str,
    pub founded: Option<i32>,
    pub headquarters: Option<&'a str>,
    pub discontinued: Option<i32>,
}

/// Partial update of a brand's optional columns.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = brands)]
pub struct BrandChangeset<'a> {
    pub founded: Option<Option<i32>>,
    pub headquarters: Option<Option<&'a str>>,
    pub discontinued: Option<Option<i32>>,
}

/// Database row for a model-year (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = models)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ModelRow {
    pub model_id: i32,
    pub year: i32,
    pub brand_name: String,
    pub name: String,
}

/// Database row for a model-year (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = models)]
pub struct NewModelRow<'a> {
    pub year: i32,
    pub brand_name: &'a str,
    pub name: &'a str,
}

/// Partial update of a model-year.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = models)]
pub struct ModelChangeset<'a> {
    pub year: Option<i32>,
    pub name: Option<&'a str>,
}

impl From<BrandRow> for Brand {
    fn from(row: BrandRow) -> Self {
        Self {
            id: BrandId::new(row.brand_id),
            name: row.name,
            founded: row.founded,
            headquarters: row.headquarters,
            discontinued: row.discontinued,
        }
    }
}

impl From<ModelRow> for Model {
    fn from(row: ModelRow) -> Self {
        Self {
            id: ModelId::new(row.model_id),
            year: row.year,
            brand_name: row.brand_name,
            name: row.name,
        }
    }
}

impl<'a> From<&'a NewBrand> for NewBrandRow<'a> {
    fn from(brand: &'a NewBrand) -> Self {
        Self {
            name: &brand.name,
            founded: brand.founded,
            headquarters: brand.headquarters.as_deref(),
            discontinued: brand.discontinued,
        }
    }
}

impl<'a> From<&'a NewModel> for NewModelRow<'a> {
    fn from(model: &'a NewModel) -> Self {
        Self {
            year: model.year,
            brand_name: &model.brand_name,
            name: &model.name,
        }
    }
}

impl<'a> From<&'a BrandChanges> for BrandChangeset<'a> {
    fn from(changes: &'a BrandChanges) -> Self {
        Self {
            founded: changes.founded,
            headquarters: changes.headquarters.as_ref().map(Option::as_deref),
            discontinued: changes.discontinued,
        }
    }
}

impl<'a> From<&'a ModelChanges> for ModelChangeset<'a> {
    fn from(changes: &'a ModelChanges) -> Self {
        Self {
            year: changes.year,
            name: changes.name.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_row_converts_to_domain() {
        let brand: Brand = BrandRow {
            brand_id: 3,
            name: "Acme".to_string(),
            founded: Some(1950),
            headquarters: Some("Springfield".to_string()),
            discontinued: None,
        }
        .into();
        assert_eq!(brand.id, BrandId::new(3));
        assert_eq!(brand.headquarters.as_deref(), Some("Springfield"));
        assert!(brand.is_active());
    }

    #[test]
    fn new_brand_row_borrows_optional_text() {
        let brand = NewBrand::new("Acme").headquarters("Springfield");
        let row = NewBrandRow::from(&brand);
        assert_eq!(row.name, "Acme");
        assert_eq!(row.headquarters, Some("Springfield"));
        assert_eq!(row.founded, None);
    }

    #[test]
    fn brand_changeset_keeps_clear_distinct_from_skip() {
        let changes = BrandChanges {
            headquarters: Some(None),
            ..Default::default()
        };
        let set = BrandChangeset::from(&changes);
        assert_eq!(set.headquarters, Some(None));
        assert_eq!(set.founded, None);
    }
}
