//! Handlers for the `model` command group.

use crate::adapter::inbound::cli::command::{ModelAddArgs, ModelIdArg, ModelListArgs};
use crate::adapter::inbound::cli::{output, session};
use crate::domain::{Model, ModelFilter, ModelId, NewModel};
use crate::error::{Error, Result};
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::store::ModelStore;

fn print_model(model: &Model) {
    if output::is_json() {
        output::record("model", model);
        return;
    }
    output::field("ID", model.id);
    output::field("Year", model.year);
    output::field("Brand", &model.brand_name);
    output::field("Name", &model.name);
}

fn not_found(id: ModelId) -> Error {
    Error::NotFound {
        entity: "model",
        key: id.to_string(),
    }
}

/// Execute `model add`.
pub fn execute_add(config: &Config, args: &ModelAddArgs) -> Result<()> {
    let app = session::connect(config)?;
    let model = NewModel::new(args.year, &args.brand, &args.name);

    match app.database()?.models().create(&model) {
        Ok(model) => {
            output::success("Added model");
            print_model(&model);
            Ok(())
        }
        Err(e) if e.is_foreign_key_violation() => {
            output::remedy(&format!(
                "add the brand first: autodb brand add --name {:?}",
                args.brand
            ));
            Err(e)
        }
        Err(e) => Err(e),
    }
}

/// Execute `model show`.
pub fn execute_show(config: &Config, args: &ModelIdArg) -> Result<()> {
    let app = session::connect(config)?;
    let models = app.database()?.models();
    let id = ModelId::new(args.id);
    let model = models.get(id)?.ok_or_else(|| not_found(id))?;
    let brand = models.brand_of(&model)?;

    output::section("Model");
    print_model(&model);

    output::section("Brand");
    output::record("brand", &brand);
    Ok(())
}

/// Execute `model list`.
pub fn execute_list(config: &Config, args: &ModelListArgs) -> Result<()> {
    let app = session::connect(config)?;
    let filter = ModelFilter {
        year: args.year,
        brand_name: args.brand.clone(),
        name: args.name.clone(),
    };
    let models = app.database()?.models().list(&filter)?;

    output::section("Models");
    if models.is_empty() {
        output::empty("models");
    }
    for model in &models {
        output::record("model", model);
    }
    Ok(())
}

/// Execute `model delete`.
pub fn execute_delete(config: &Config, args: &ModelIdArg) -> Result<()> {
    let app = session::connect(config)?;
    let id = ModelId::new(args.id);
    if !app.database()?.models().delete(id)? {
        return Err(not_found(id));
    }
    output::success(&format!("Deleted model {id}"));
    Ok(())
}
