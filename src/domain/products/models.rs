//! Product models.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Product category.
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
}

/// Catalog product as served by the product endpoint.
///
/// `price` and `is_available` are live server-side state; callers must not
/// cache them across user-visible decisions.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Current price; served as a decimal string on the wire.
    pub price: Decimal,
    #[serde(default)]
    pub image_url: Option<String>,
    pub is_available: bool,
    #[serde(default)]
    pub category: Option<Category>,
}

impl Product {
    /// Display description, falling back to the category name when the
    /// product has none of its own.
    #[must_use]
    pub fn display_description(&self) -> String {
        self.description
            .clone()
            .or_else(|| self.category.as_ref().map(|category| category.name.clone()))
            .unwrap_or_default()
    }
}
