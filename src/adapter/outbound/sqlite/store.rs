//! SQLite brand and model stores.
//!
//! Implement the persistence ports over a Diesel connection pool. The free
//! functions take a bare connection so that callers holding a transaction
//! (seeding, for one) can reuse them. Writes begin IMMEDIATE so concurrent
//! writers wait on `busy_timeout`.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use super::database::connection::{DbConnection, DbPool};
use super::database::model::{
    BrandChangeset, BrandRow, ModelChangeset, ModelRow, NewBrandRow, NewModelRow,
};
use super::database::schema::{brands, models};
use crate::domain::{
    Brand, BrandChanges, BrandFilter, BrandId, Model, ModelChanges, ModelFilter, ModelId,
    NewBrand, NewModel,
};
use crate::error::{Error, Result};
use crate::port::outbound::store::{BrandStore, ModelStore};

#[derive(QueryableByName)]
struct LastInsertRowId {
    #[diesel(sql_type = diesel::sql_types::Integer)]
    #[diesel(column_name = "id")]
    id: i32,
}

fn last_insert_rowid(conn: &mut SqliteConnection) -> QueryResult<i32> {
    diesel::sql_query("SELECT last_insert_rowid() AS id")
        .get_result::<LastInsertRowId>(conn)
        .map(|row| row.id)
}

fn checkout(pool: &DbPool) -> Result<DbConnection> {
    pool.get().map_err(|e| Error::Connection(e.to_string()))
}

/// Insert a brand on an existing connection.
pub(crate) fn insert_brand(conn: &mut SqliteConnection, brand: &NewBrand) -> QueryResult<Brand> {
    diesel::insert_into(brands::table)
        .values(NewBrandRow::from(brand))
        .execute(conn)?;
    let id = last_insert_rowid(conn)?;
    let row: BrandRow = brands::table
        .find(id)
        .select(BrandRow::as_select())
        .first(conn)?;
    Ok(row.into())
}

/// Insert a model on an existing connection.
pub(crate) fn insert_model(conn: &mut SqliteConnection, model: &NewModel) -> QueryResult<Model> {
    diesel::insert_into(models::table)
        .values(NewModelRow::from(model))
        .execute(conn)?;
    let id = last_insert_rowid(conn)?;
    let row: ModelRow = models::table
        .find(id)
        .select(ModelRow::as_select())
        .first(conn)?;
    Ok(row.into())
}

fn update_brand(
    conn: &mut SqliteConnection,
    id: BrandId,
    changes: &BrandChanges,
) -> QueryResult<Option<Brand>> {
    let updated = diesel::update(brands::table.find(id.get()))
        .set(BrandChangeset::from(changes))
        .execute(conn)?;
    if updated == 0 {
        return Ok(None);
    }
    let row: BrandRow = brands::table
        .find(id.get())
        .select(BrandRow::as_select())
        .first(conn)?;
    Ok(Some(row.into()))
}

fn update_model(
    conn: &mut SqliteConnection,
    id: ModelId,
    changes: &ModelChanges,
) -> QueryResult<Option<Model>> {
    let updated = diesel::update(models::table.find(id.get()))
        .set(ModelChangeset::from(changes))
        .execute(conn)?;
    if updated == 0 {
        return Ok(None);
    }
    let row: ModelRow = models::table
        .find(id.get())
        .select(ModelRow::as_select())
        .first(conn)?;
    Ok(Some(row.into()))
}

/// SQLite-backed brand store.
#[derive(Clone)]
pub struct SqliteBrandStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteBrandStore {
    /// Create a new SQLite brand store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl BrandStore for SqliteBrandStore {
    fn create(&self, brand: &NewBrand) -> Result<Brand> {
        let mut conn = checkout(&self.pool)?;
        let brand = conn.immediate_transaction(|conn| insert_brand(conn, brand))?;
        debug!(brand_id = %brand.id, name = %brand.name, "Created brand");
        Ok(brand)
    }

    fn get(&self, id: BrandId) -> Result<Option<Brand>> {
        let mut conn = checkout(&self.pool)?;
        let row: Option<BrandRow> = brands::table
            .find(id.get())
            .select(BrandRow::as_select())
            .first(&mut conn)
            .optional()?;
        Ok(row.map(Brand::from))
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Brand>> {
        let mut conn = checkout(&self.pool)?;
        let row: Option<BrandRow> = brands::table
            .filter(brands::name.eq(name))
            .select(BrandRow::as_select())
            .first(&mut conn)
            .optional()?;
        Ok(row.map(Brand::from))
    }

    fn list(&self, filter: &BrandFilter) -> Result<Vec<Brand>> {
        let mut conn = checkout(&self.pool)?;

        let mut query = brands::table.select(BrandRow::as_select()).into_boxed();
        if let Some(name) = &filter.name {
            query = query.filter(brands::name.eq(name));
        }
        if let Some(founded) = filter.founded {
            query = query.filter(brands::founded.eq(founded));
        }
        if let Some(headquarters) = &filter.headquarters {
            query = query.filter(brands::headquarters.eq(headquarters));
        }
        if let Some(discontinued) = filter.discontinued {
            query = query.filter(brands::discontinued.eq(discontinued));
        }
        match filter.active {
            Some(true) => query = query.filter(brands::discontinued.is_null()),
            Some(false) => query = query.filter(brands::discontinued.is_not_null()),
            None => {}
        }

        let rows: Vec<BrandRow> = query.order(brands::brand_id.asc()).load(&mut conn)?;
        Ok(rows.into_iter().map(Brand::from).collect())
    }

    fn update(&self, id: BrandId, changes: &BrandChanges) -> Result<Option<Brand>> {
        if changes.is_empty() {
            return self.get(id);
        }
        let mut conn = checkout(&self.pool)?;
        let brand = conn.immediate_transaction(|conn| update_brand(conn, id, changes))?;
        Ok(brand)
    }

    fn delete(&self, id: BrandId) -> Result<bool> {
        let mut conn = checkout(&self.pool)?;
        let deleted = diesel::delete(brands::table.find(id.get())).execute(&mut conn)?;
        Ok(deleted > 0)
    }

    fn models_of(&self, brand: &Brand) -> Result<Vec<Model>> {
        let mut conn = checkout(&self.pool)?;
        let rows: Vec<ModelRow> = models::table
            .filter(models::brand_name.eq(&brand.name))
            .order((models::year.asc(), models::model_id.asc()))
            .select(ModelRow::as_select())
            .load(&mut conn)?;
        Ok(rows.into_iter().map(Model::from).collect())
    }
}

/// SQLite-backed model store.
#[derive(Clone)]
pub struct SqliteModelStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteModelStore {
    /// Create a new SQLite model store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl ModelStore for SqliteModelStore {
    fn create(&self, model: &NewModel) -> Result<Model> {
        let mut conn = checkout(&self.pool)?;
        let model = conn.immediate_transaction(|conn| insert_model(conn, model))?;
        debug!(
            model_id = %model.id,
            brand = %model.brand_name,
            year = model.year,
            "Created model"
        );
        Ok(model)
    }

    fn get(&self, id: ModelId) -> Result<Option<Model>> {
        let mut conn = checkout(&self.pool)?;
        let row: Option<ModelRow> = models::table
            .find(id.get())
            .select(ModelRow::as_select())
            .first(&mut conn)
            .optional()?;
        Ok(row.map(Model::from))
    }

    fn list(&self, filter: &ModelFilter) -> Result<Vec<Model>> {
        let mut conn = checkout(&self.pool)?;

        let mut query = models::table.select(ModelRow::as_select()).into_boxed();
        if let Some(year) = filter.year {
            query = query.filter(models::year.eq(year));
        }
        if let Some(brand_name) = &filter.brand_name {
            query = query.filter(models::brand_name.eq(brand_name));
        }
        if let Some(name) = &filter.name {
            query = query.filter(models::name.eq(name));
        }

        let rows: Vec<ModelRow> = query
            .order((models::year.asc(), models::model_id.asc()))
            .load(&mut conn)?;
        Ok(rows.into_iter().map(Model::from).collect())
    }

    fn update(&self, id: ModelId, changes: &ModelChanges) -> Result<Option<Model>> {
        if changes.is_empty() {
            return self.get(id);
        }
        let mut conn = checkout(&self.pool)?;
        let model = conn.immediate_transaction(|conn| update_model(conn, id, changes))?;
        Ok(model)
    }

    fn delete(&self, id: ModelId) -> Result<bool> {
        let mut conn = checkout(&self.pool)?;
        let deleted = diesel::delete(models::table.find(id.get())).execute(&mut conn)?;
        Ok(deleted > 0)
    }

    fn brand_of(&self, model: &Model) -> Result<Brand> {
        let mut conn = checkout(&self.pool)?;
        let row: BrandRow = brands::table
            .inner_join(models::table.on(models::brand_name.eq(brands::name)))
            .filter(models::model_id.eq(model.id.get()))
            .select(BrandRow::as_select())
            .first(&mut conn)?;
        Ok(row.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::sqlite::database::connection::{
        create_pool, run_migrations, ConnectionOptions,
    };

    fn setup_test_db() -> DbPool {
        let pool = create_pool(&ConnectionOptions::in_memory()).unwrap();
        run_migrations(&pool).unwrap();
        pool
    }

    fn stores() -> (SqliteBrandStore, SqliteModelStore) {
        let pool = setup_test_db();
        (SqliteBrandStore::new(pool.clone()), SqliteModelStore::new(pool))
    }

    #[test]
    fn create_brand_assigns_id_and_round_trips_fields() {
        let (brands, _) = stores();
        let created = brands
            .create(
                &NewBrand::new("Acme")
                    .founded(1950)
                    .headquarters("Springfield"),
            )
            .unwrap();

        let fetched = brands.find_by_name("Acme").unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.founded, Some(1950));
        assert_eq!(fetched.headquarters.as_deref(), Some("Springfield"));
        assert_eq!(fetched.discontinued, None);
        assert_eq!(brands.get(created.id).unwrap(), Some(created));
    }

    #[test]
    fn find_by_name_misses_return_none() {
        let (brands, _) = stores();
        assert!(brands.find_by_name("Nobody").unwrap().is_none());
        assert!(brands.get(BrandId::new(99)).unwrap().is_none());
    }

    #[test]
    fn duplicate_brand_name_is_rejected() {
        let (brands, _) = stores();
        brands.create(&NewBrand::new("Acme")).unwrap();
        let err = brands.create(&NewBrand::new("Acme")).unwrap_err();
        assert!(err.is_unique_violation(), "unexpected error: {err}");
    }

    #[test]
    fn identifiers_increase_and_are_not_reused() {
        let (brands, _) = stores();
        let first = brands.create(&NewBrand::new("A")).unwrap();
        let second = brands.create(&NewBrand::new("B")).unwrap();
        assert!(second.id > first.id);

        assert!(brands.delete(second.id).unwrap());
        let third = brands.create(&NewBrand::new("C")).unwrap();
        assert!(third.id > second.id);
    }

    #[test]
    fn models_of_brand_are_ordered_by_year() {
        let (brands, models) = stores();
        let acme = brands.create(&NewBrand::new("Acme").founded(1950)).unwrap();
        models.create(&NewModel::new(1960, "Acme", "Roadster")).unwrap();
        models.create(&NewModel::new(1955, "Acme", "Classic")).unwrap();

        let names: Vec<(i32, String)> = brands
            .models_of(&acme)
            .unwrap()
            .into_iter()
            .map(|m| (m.year, m.name))
            .collect();
        assert_eq!(
            names,
            vec![(1955, "Classic".to_string()), (1960, "Roadster".to_string())]
        );
    }

    #[test]
    fn models_of_excludes_other_brands() {
        let (brands, models) = stores();
        let acme = brands.create(&NewBrand::new("Acme")).unwrap();
        brands.create(&NewBrand::new("Zenith")).unwrap();
        models.create(&NewModel::new(1970, "Zenith", "Comet")).unwrap();

        assert!(brands.models_of(&acme).unwrap().is_empty());
    }

    #[test]
    fn brand_of_model_returns_owner() {
        let (brands, models) = stores();
        let acme = brands.create(&NewBrand::new("Acme")).unwrap();
        brands.create(&NewBrand::new("Zenith")).unwrap();
        let roadster = models.create(&NewModel::new(1960, "Acme", "Roadster")).unwrap();

        assert_eq!(models.brand_of(&roadster).unwrap(), acme);
    }

    #[test]
    fn model_with_unknown_brand_fails_referential_integrity() {
        let (_, models) = stores();
        let err = models
            .create(&NewModel::new(2000, "Ghost", "Phantom"))
            .unwrap_err();
        assert!(err.is_foreign_key_violation(), "unexpected error: {err}");
        assert!(models.list(&ModelFilter::default()).unwrap().is_empty());
    }

    #[test]
    fn deleting_referenced_brand_is_rejected() {
        let (brands, models) = stores();
        let acme = brands.create(&NewBrand::new("Acme")).unwrap();
        models.create(&NewModel::new(1960, "Acme", "Roadster")).unwrap();

        let err = brands.delete(acme.id).unwrap_err();
        assert!(err.is_foreign_key_violation(), "unexpected error: {err}");
        assert!(brands.get(acme.id).unwrap().is_some());
    }

    #[test]
    fn list_brands_applies_filters() {
        let (brands, _) = stores();
        brands.create(&NewBrand::new("Acme").founded(1950)).unwrap();
        brands
            .create(&NewBrand::new("Studebaker").founded(1852).discontinued(1967))
            .unwrap();
        brands.create(&NewBrand::new("Zenith").founded(1950)).unwrap();

        let all = brands.list(&BrandFilter::default()).unwrap();
        assert_eq!(all.len(), 3);

        let fifties = brands
            .list(&BrandFilter {
                founded: Some(1950),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(
            fifties.iter().map(|b| b.name.as_str()).collect::<Vec<_>>(),
            vec!["Acme", "Zenith"]
        );

        let gone = brands
            .list(&BrandFilter {
                active: Some(false),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(gone.len(), 1);
        assert_eq!(gone[0].name, "Studebaker");

        let active = brands
            .list(&BrandFilter {
                active: Some(true),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(active.len(), 2);
    }

    #[test]
    fn list_models_filters_by_year_and_brand() {
        let (brands, models) = stores();
        brands.create(&NewBrand::new("Acme")).unwrap();
        brands.create(&NewBrand::new("Zenith")).unwrap();
        models.create(&NewModel::new(1960, "Acme", "Roadster")).unwrap();
        models.create(&NewModel::new(1960, "Zenith", "Comet")).unwrap();
        models.create(&NewModel::new(1961, "Acme", "Roadster")).unwrap();

        let sixty = models
            .list(&ModelFilter {
                year: Some(1960),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(sixty.len(), 2);

        let roadsters = models
            .list(&ModelFilter {
                brand_name: Some("Acme".to_string()),
                name: Some("Roadster".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(
            roadsters.iter().map(|m| m.year).collect::<Vec<_>>(),
            vec![1960, 1961]
        );
    }

    #[test]
    fn update_brand_sets_and_clears_optional_fields() {
        let (brands, _) = stores();
        let acme = brands
            .create(&NewBrand::new("Acme").headquarters("Springfield"))
            .unwrap();

        let updated = brands
            .update(
                acme.id,
                &BrandChanges {
                    discontinued: Some(Some(1999)),
                    headquarters: Some(None),
                    ..Default::default()
                },
            )
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, acme.id);
        assert_eq!(updated.discontinued, Some(1999));
        assert_eq!(updated.headquarters, None);
        assert_eq!(updated.name, "Acme");
    }

    #[test]
    fn update_missing_rows_returns_none() {
        let (brands, models) = stores();
        let changes = BrandChanges {
            founded: Some(Some(1900)),
            ..Default::default()
        };
        assert!(brands.update(BrandId::new(5), &changes).unwrap().is_none());

        let changes = ModelChanges {
            year: Some(2001),
            name: None,
        };
        assert!(models.update(ModelId::new(5), &changes).unwrap().is_none());
    }

    #[test]
    fn empty_update_returns_current_row() {
        let (brands, _) = stores();
        let acme = brands.create(&NewBrand::new("Acme")).unwrap();
        let same = brands
            .update(acme.id, &BrandChanges::default())
            .unwrap()
            .unwrap();
        assert_eq!(same, acme);
    }

    #[test]
    fn update_model_keeps_brand() {
        let (brands, models) = stores();
        brands.create(&NewBrand::new("Acme")).unwrap();
        let model = models.create(&NewModel::new(1960, "Acme", "Roadster")).unwrap();

        let updated = models
            .update(
                model.id,
                &ModelChanges {
                    year: Some(1962),
                    name: Some("Roadster II".to_string()),
                },
            )
            .unwrap()
            .unwrap();
        assert_eq!(updated.year, 1962);
        assert_eq!(updated.name, "Roadster II");
        assert_eq!(updated.brand_name, "Acme");
    }

    #[test]
    fn delete_model_then_brand() {
        let (brands, models) = stores();
        let acme = brands.create(&NewBrand::new("Acme")).unwrap();
        let model = models.create(&NewModel::new(1960, "Acme", "Roadster")).unwrap();

        assert!(models.delete(model.id).unwrap());
        assert!(!models.delete(model.id).unwrap());
        assert!(brands.delete(acme.id).unwrap());
        assert!(brands.list(&BrandFilter::default()).unwrap().is_empty());
    }

    #[test]
    fn brand_of_deleted_model_is_not_found() {
        let (brands, models) = stores();
        brands.create(&NewBrand::new("Acme")).unwrap();
        let model = models.create(&NewModel::new(1960, "Acme", "Roadster")).unwrap();
        models.delete(model.id).unwrap();

        let err = models.brand_of(&model).unwrap_err();
        assert!(matches!(
            err,
            Error::Database(diesel::result::Error::NotFound)
        ));
    }
}
