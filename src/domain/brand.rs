//! Vehicle brands.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::id::BrandId;

/// A persisted vehicle brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Brand {
    pub id: BrandId,
    /// Unique name; models refer to their brand by it.
    pub name: String,
    pub founded: Option<i32>,
    pub headquarters: Option<String>,
    /// Year the brand was discontinued. `None` means the brand is active.
    pub discontinued: Option<i32>,
}

impl Brand {
    /// Whether the brand is still active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.discontinued.is_none()
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Brand brand_id={} name={:?} founded={} headquarters={} discontinued={}>",
            self.id,
            self.name,
            OptField(self.founded.as_ref()),
            OptQuoted(self.headquarters.as_deref()),
            OptField(self.discontinued.as_ref()),
        )
    }
}

/// A brand that has not been inserted yet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewBrand {
    pub name: String,
    #[serde(default)]
    pub founded: Option<i32>,
    #[serde(default)]
    pub headquarters: Option<String>,
    #[serde(default)]
    pub discontinued: Option<i32>,
}

impl NewBrand {
    /// Start a new brand with only the required name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            founded: None,
            headquarters: None,
            discontinued: None,
        }
    }

    #[must_use]
    pub fn founded(mut self, year: i32) -> Self {
        self.founded = Some(year);
        self
    }

    #[must_use]
    pub fn headquarters(mut self, headquarters: impl Into<String>) -> Self {
        self.headquarters = Some(headquarters.into());
        self
    }

    #[must_use]
    pub fn discontinued(mut self, year: i32) -> Self {
        self.discontinued = Some(year);
        self
    }
}

/// Changes to apply to an existing brand.
///
/// Outer `None` leaves a column untouched; `Some(None)` clears it.
/// The name is not updatable because models reference it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandChanges {
    pub founded: Option<Option<i32>>,
    pub headquarters: Option<Option<String>>,
    pub discontinued: Option<Option<i32>>,
}

impl BrandChanges {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.founded.is_none() && self.headquarters.is_none() && self.discontinued.is_none()
    }
}

/// Query over brands. Every field that is set must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandFilter {
    pub name: Option<String>,
    pub founded: Option<i32>,
    pub headquarters: Option<String>,
    pub discontinued: Option<i32>,
    /// `Some(true)` keeps only active brands, `Some(false)` only discontinued ones.
    pub active: Option<bool>,
}

/// Renders `Some(v)` as `v` and `None` as `none`.
pub(crate) struct OptField<'a, T>(pub(crate) Option<&'a T>);

impl<T: fmt::Display> fmt::Display for OptField<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => f.write_str("none"),
        }
    }
}

/// Renders `Some(s)` as a quoted string and `None` as `none`.
pub(crate) struct OptQuoted<'a>(pub(crate) Option<&'a str>);

impl fmt::Display for OptQuoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value:?}"),
            None => f.write_str("none"),
        }
    }
}
