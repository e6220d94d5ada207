//! Handlers for the `brand` command group.

use crate::adapter::inbound::cli::command::{BrandAddArgs, BrandListArgs, BrandNameArg};
use crate::adapter::inbound::cli::{output, session};
use crate::domain::{Brand, BrandFilter, NewBrand};
use crate::error::{Error, Result};
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::store::BrandStore;

fn print_brand(brand: &Brand) {
    if output::is_json() {
        output::record("brand", brand);
        return;
    }
    output::field("ID", brand.id);
    output::field("Name", &brand.name);
    output::field("Founded", output::optional(brand.founded));
    output::field("Headquarters", output::optional(brand.headquarters.as_deref()));
    output::field("Discontinued", output::optional(brand.discontinued));
    output::detail(brand);
}

fn not_found(name: &str) -> Error {
    Error::NotFound {
        entity: "brand",
        key: name.to_string(),
    }
}

/// Execute `brand add`.
pub fn execute_add(config: &Config, args: &BrandAddArgs) -> Result<()> {
    let app = session::connect(config)?;
    let brand = NewBrand {
        name: args.name.clone(),
        founded: args.founded,
        headquarters: args.headquarters.clone(),
        discontinued: args.discontinued,
    };
    let brand = app.database()?.brands().create(&brand)?;

    output::success("Added brand");
    print_brand(&brand);
    Ok(())
}

/// Execute `brand show`.
pub fn execute_show(config: &Config, args: &BrandNameArg) -> Result<()> {
    let app = session::connect(config)?;
    let brands = app.database()?.brands();
    let brand = brands
        .find_by_name(&args.name)?
        .ok_or_else(|| not_found(&args.name))?;

    output::section("Brand");
    print_brand(&brand);

    output::section("Models");
    let models = brands.models_of(&brand)?;
    if models.is_empty() {
        output::empty("models");
    }
    for model in &models {
        if output::is_json() {
            output::record("model", model);
        } else {
            output::field(
                &model.year.to_string(),
                format!("{} (model {})", model.name, model.id),
            );
        }
    }
    Ok(())
}

/// Execute `brand list`.
pub fn execute_list(config: &Config, args: &BrandListArgs) -> Result<()> {
    let app = session::connect(config)?;
    let filter = BrandFilter {
        founded: args.founded,
        headquarters: args.headquarters.clone(),
        active: match (args.active, args.discontinued) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        },
        ..BrandFilter::default()
    };
    let brands = app.database()?.brands().list(&filter)?;

    output::section("Brands");
    if brands.is_empty() {
        output::empty("brands");
    }
    for brand in &brands {
        output::record("brand", brand);
    }
    Ok(())
}

/// Execute `brand delete`.
pub fn execute_delete(config: &Config, args: &BrandNameArg) -> Result<()> {
    let app = session::connect(config)?;
    let brands = app.database()?.brands();
    let brand = brands
        .find_by_name(&args.name)?
        .ok_or_else(|| not_found(&args.name))?;

    match brands.delete(brand.id) {
        Ok(_) => {
            output::success(&format!("Deleted brand {}", brand.name));
            Ok(())
        }
        Err(e) if e.is_foreign_key_violation() => {
            output::remedy("delete the brand's models first");
            Err(e)
        }
        Err(e) => Err(e),
    }
}
