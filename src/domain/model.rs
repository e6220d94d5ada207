//! Vehicle model-years.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::id::ModelId;

/// A persisted model-year, owned by the brand whose name it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Model {
    pub id: ModelId,
    pub year: i32,
    pub brand_name: String,
    pub name: String,
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Model model_id={} year={} brand_name={:?} name={:?}>",
            self.id, self.year, self.brand_name, self.name
        )
    }
}

/// A model-year that has not been inserted yet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewModel {
    pub year: i32,
    pub brand_name: String,
    pub name: String,
}

impl NewModel {
    pub fn new(year: i32, brand_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            year,
            brand_name: brand_name.into(),
            name: name.into(),
        }
    }
}

/// Changes to apply to an existing model. The brand is fixed at insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelChanges {
    pub year: Option<i32>,
    pub name: Option<String>,
}

impl ModelChanges {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.name.is_none()
    }
}

/// Query over models. Every field that is set must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelFilter {
    pub year: Option<i32>,
    pub brand_name: Option<String>,
    pub name: Option<String>,
}
