//! Configuration records: one purchasable variant of a product.
//!
//! Attribute keys are not declared anywhere. Each product's records carry
//! whatever dimensions the catalog gives them, and a record that lacks a
//! key simply does not offer that dimension.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize};

/// Attribute name to attribute value, e.g. `ram = "16GB"`.
///
/// A missing key means "not applicable", which is different from a key
/// holding an empty string.
pub type Attributes = BTreeMap<String, String>;

/// Opaque record identifier.
///
/// Catalog exports use either integer keys or UUID strings, so both are
/// accepted on input and normalised to their string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

macro_rules! record_id_from_int {
    ($($int:ty),*) => {
        $(
            impl From<$int> for RecordId {
                fn from(value: $int) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

record_id_from_int!(i32, i64, u32, u64);

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(n) => RecordId::from(n),
            RawId::Text(s) => RecordId(s),
        })
    }
}

/// One purchasable variant of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationRecord {
    /// Stable identifier for the record's lifetime
    pub id: RecordId,
    /// Option dimensions this variant offers
    #[serde(default)]
    pub attributes: Attributes,
    /// Current selling price
    pub price: Decimal,
    /// Pre-discount price, display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    /// Units available; zero keeps the record visible but unpurchasable
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub sku: String,
    /// Display ordering among a product's records
    #[serde(default)]
    pub order_rank: i32,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl ConfigurationRecord {
    /// Create an active record with no stock, SKU or discount.
    pub fn new(id: impl Into<RecordId>, attributes: Attributes, price: Decimal) -> Self {
        Self {
            id: id.into(),
            attributes,
            price,
            original_price: None,
            stock: 0,
            sku: String::new(),
            order_rank: 0,
            active: true,
        }
    }

    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = sku.into();
        self
    }

    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    pub fn with_original_price(mut self, original_price: Decimal) -> Self {
        self.original_price = Some(original_price);
        self
    }

    pub fn with_order_rank(mut self, order_rank: i32) -> Self {
        self.order_rank = order_rank;
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Value of one attribute, or `None` when the record does not carry it.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Check whether this record satisfies every key of a (partial) selection.
    ///
    /// Keys absent from the selection are unconstrained. A key the record
    /// lacks never matches, whatever value the selection holds for it.
    pub fn satisfies(&self, selection: &Attributes) -> bool {
        selection
            .iter()
            .all(|(name, value)| self.attribute(name) == Some(value.as_str()))
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Amount taken off the original price, when there is a real discount.
    pub fn discount(&self) -> Option<Decimal> {
        self.original_price
            .filter(|original| *original > self.price)
            .map(|original| original - self.price)
    }

    /// Discount as a whole percentage of the original price.
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        let discount = self.discount()?;
        (discount / original * Decimal::ONE_HUNDRED).round().to_u32()
    }

    /// Human-readable label built from the attribute values, in key order.
    pub fn label(&self) -> String {
        self.attributes
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

/// Parse a `name=value` pair, as typed on the command line.
///
/// The value may be empty (`color=`); the name may not.
pub fn parse_attribute_pair(input: &str) -> crate::Result<(String, String)> {
    match input.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(crate::Error::InvalidSelection {
            input: input.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn record_id_accepts_integers_and_strings() {
        let from_int: RecordId = serde_json::from_str("42").unwrap();
        let from_text: RecordId = serde_json::from_str("\"a1b2\"").unwrap();

        assert_eq!(from_int.as_str(), "42");
        assert_eq!(from_text.as_str(), "a1b2");
        assert_eq!(from_int, RecordId::from(42));
    }

    #[test]
    fn satisfies_requires_every_selected_key() {
        let record = ConfigurationRecord::new(
            1,
            attrs(&[("ram", "8GB"), ("ssd", "512GB")]),
            Decimal::from(1299),
        );

        assert!(record.satisfies(&Attributes::new()));
        assert!(record.satisfies(&attrs(&[("ram", "8GB")])));
        assert!(!record.satisfies(&attrs(&[("ram", "16GB")])));
        assert!(!record.satisfies(&attrs(&[("color", "Negro")])));
    }

    #[test]
    fn empty_string_value_is_not_a_missing_key() {
        let record = ConfigurationRecord::new(1, attrs(&[("color", "")]), Decimal::from(100));

        assert!(record.satisfies(&attrs(&[("color", "")])));
        assert_eq!(record.attribute("color"), Some(""));
        assert_eq!(record.attribute("ram"), None);
    }

    #[test]
    fn discount_only_when_original_price_is_higher() {
        let base = ConfigurationRecord::new(1, Attributes::new(), Decimal::from(750));

        assert_eq!(base.discount(), None);
        assert_eq!(base.clone().with_original_price(Decimal::from(700)).discount(), None);
        assert_eq!(base.clone().with_original_price(Decimal::from(750)).discount(), None);

        let discounted = base.with_original_price(Decimal::from(1000));
        assert_eq!(discounted.discount(), Some(Decimal::from(250)));
        assert_eq!(discounted.discount_percent(), Some(25));
    }

    #[test]
    fn label_joins_values_in_key_order() {
        let record = ConfigurationRecord::new(
            1,
            attrs(&[("ssd", "1TB"), ("ram", "16GB")]),
            Decimal::from(1999),
        );
        assert_eq!(record.label(), "16GB / 1TB");
    }

    #[test]
    fn deserialize_applies_defaults() {
        let record: ConfigurationRecord =
            serde_json::from_str(r#"{"id": 7, "price": "1299.90"}"#).unwrap();

        assert_eq!(record.id.as_str(), "7");
        assert!(record.attributes.is_empty());
        assert_eq!(record.price, Decimal::new(129990, 2));
        assert_eq!(record.stock, 0);
        assert!(record.active);
        assert!(!record.in_stock());
    }

    #[test]
    fn parse_attribute_pair_splits_on_first_equals() {
        assert_eq!(
            parse_attribute_pair("ram=16GB").unwrap(),
            ("ram".to_string(), "16GB".to_string())
        );
        assert_eq!(
            parse_attribute_pair(" model = A=B ").unwrap(),
            ("model".to_string(), "A=B".to_string())
        );
        assert_eq!(
            parse_attribute_pair("color=").unwrap(),
            ("color".to_string(), String::new())
        );
        assert!(parse_attribute_pair("ram").is_err());
        assert!(parse_attribute_pair("=16GB").is_err());
    }
}
