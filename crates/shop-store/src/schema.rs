//! Catalog document schema, as exported from the hosted database
//!
//! Rows are kept raw: every column is optional so that a row missing its
//! price or attributes still deserializes and can be reported, instead of
//! failing the whole document.
//!
//! # Example JSON
//!
//! ```json
//! {
//!   "products": [
//!     {
//!       "id": 12,
//!       "name": "Notebook Lenovo IdeaPad 3",
//!       "slug": "ideapad-3",
//!       "configurations": [
//!         {
//!           "id": 1,
//!           "attributes": { "ram": "8GB", "ssd": "512GB" },
//!           "price": 1299,
//!           "originalPrice": 1499,
//!           "stock": 4,
//!           "sku": "IP3-8-512",
//!           "order_index": 0,
//!           "active": true
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use shop_meta::RecordId;

/// A whole catalog export
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub products: Vec<ProductEntry>,
}

/// One product and its configuration rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEntry {
    pub id: RecordId,
    pub name: String,
    /// URL-friendly key, used as an alternative lookup key
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub configurations: Vec<RawConfigurationRow>,
}

impl ProductEntry {
    /// Check whether `key` names this product, by id or (case-insensitive) slug.
    pub fn is_keyed_by(&self, key: &str) -> bool {
        self.id.as_str() == key
            || self
                .slug
                .as_deref()
                .is_some_and(|slug| slug.eq_ignore_ascii_case(key))
    }
}

/// A configuration row before validation
///
/// Columns are captured as untyped values and checked in
/// [`validate_row`](crate::validate_row), so a single mistyped cell
/// quarantines its own row instead of failing the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawConfigurationRow {
    #[serde(default)]
    pub id: Option<Value>,
    /// Attribute values may be any scalar; they are normalised to strings
    #[serde(default)]
    pub attributes: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default, alias = "originalPrice")]
    pub original_price: Option<Value>,
    #[serde(default)]
    pub stock: Option<Value>,
    #[serde(default)]
    pub sku: Option<Value>,
    #[serde(default, alias = "orderRank", alias = "order_index")]
    pub order_rank: Option<Value>,
    #[serde(default)]
    pub active: Option<Value>,
}
