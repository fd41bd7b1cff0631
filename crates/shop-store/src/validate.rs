//! Row validation at the Catalog Store boundary
//!
//! The resolver assumes well-formed records. Everything that could break
//! that assumption is checked here, once, when a snapshot is built.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Map, Value};
use shop_meta::{Attributes, ConfigurationRecord, RecordId};

use crate::schema::RawConfigurationRow;

/// Why a row could not become a [`ConfigurationRecord`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MalformedReason {
    MissingId,
    InvalidId { value: String },
    /// Another row of the same product already uses this id
    DuplicateId,
    MissingPrice,
    InvalidPrice { column: &'static str, value: String },
    NegativePrice { price: Decimal },
    MissingAttributes,
    /// `attributes` is present but not a map
    InvalidAttributes,
    InvalidStock { value: String },
    InvalidColumn { column: &'static str, value: String },
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::MissingId => write!(f, "missing id"),
            MalformedReason::InvalidId { value } => write!(f, "invalid id {}", value),
            MalformedReason::DuplicateId => write!(f, "duplicate id"),
            MalformedReason::MissingPrice => write!(f, "missing price"),
            MalformedReason::InvalidPrice { column, value } => {
                write!(f, "invalid {} {}", column, value)
            }
            MalformedReason::NegativePrice { price } => write!(f, "negative price {}", price),
            MalformedReason::MissingAttributes => write!(f, "missing attributes"),
            MalformedReason::InvalidAttributes => write!(f, "attributes is not a map"),
            MalformedReason::InvalidStock { value } => write!(f, "invalid stock {}", value),
            MalformedReason::InvalidColumn { column, value } => {
                write!(f, "invalid {} {}", column, value)
            }
        }
    }
}

/// A quarantined row: its position in the product's row list, its id if it
/// had one, and the first problem found.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MalformedRecord {
    pub index: usize,
    pub id: Option<RecordId>,
    pub reason: MalformedReason,
}

impl fmt::Display for MalformedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "row {} (id {}): {}", self.index, id, self.reason),
            None => write!(f, "row {}: {}", self.index, self.reason),
        }
    }
}

/// Turn a raw row into a record, or explain why it cannot be one.
///
/// Missing optional columns take their defaults: empty SKU, zero stock,
/// rank zero, active. Prices accept numbers and decimal strings; the
/// integer columns accept integers only.
pub fn validate_row(
    index: usize,
    row: &RawConfigurationRow,
) -> std::result::Result<ConfigurationRecord, MalformedRecord> {
    let raw_id = present(&row.id);
    let parsed_id = raw_id.and_then(parse_id);
    let malformed = |reason| MalformedRecord {
        index,
        id: parsed_id.clone(),
        reason,
    };

    let id = match (raw_id, parsed_id.clone()) {
        (None, _) => return Err(malformed(MalformedReason::MissingId)),
        (Some(value), None) => {
            return Err(malformed(MalformedReason::InvalidId {
                value: value.to_string(),
            }));
        }
        (Some(_), Some(id)) => id,
    };

    let raw_price = present(&row.price).ok_or_else(|| malformed(MalformedReason::MissingPrice))?;
    let price = parse_decimal(raw_price).ok_or_else(|| {
        malformed(MalformedReason::InvalidPrice {
            column: "price",
            value: raw_price.to_string(),
        })
    })?;
    if price < Decimal::ZERO {
        return Err(malformed(MalformedReason::NegativePrice { price }));
    }

    let raw_attributes = match present(&row.attributes) {
        None => return Err(malformed(MalformedReason::MissingAttributes)),
        Some(Value::Object(map)) => map,
        Some(_) => return Err(malformed(MalformedReason::InvalidAttributes)),
    };

    let original_price = match present(&row.original_price) {
        None => None,
        Some(value) => Some(parse_decimal(value).ok_or_else(|| {
            malformed(MalformedReason::InvalidPrice {
                column: "original_price",
                value: value.to_string(),
            })
        })?),
    };

    let stock = match present(&row.stock) {
        None => 0,
        Some(value) => value
            .as_i64()
            .and_then(|stock| u32::try_from(stock).ok())
            .ok_or_else(|| {
                malformed(MalformedReason::InvalidStock {
                    value: value.to_string(),
                })
            })?,
    };

    let order_rank = match present(&row.order_rank) {
        None => 0,
        Some(value) => value
            .as_i64()
            .and_then(|rank| i32::try_from(rank).ok())
            .ok_or_else(|| invalid_column(&malformed, "order_rank", value))?,
    };

    let active = match present(&row.active) {
        None => true,
        Some(value) => value
            .as_bool()
            .ok_or_else(|| invalid_column(&malformed, "active", value))?,
    };

    let sku = match present(&row.sku) {
        None => String::new(),
        Some(Value::String(sku)) => sku.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(value) => return Err(invalid_column(&malformed, "sku", value)),
    };

    if let Some(original) = original_price {
        if original < price {
            tracing::warn!(
                %id,
                %original,
                %price,
                "Original price below selling price; ignoring discount"
            );
        }
    }

    Ok(ConfigurationRecord {
        attributes: normalize_attributes(&id, raw_attributes),
        id,
        price,
        original_price,
        stock,
        sku,
        order_rank,
        active,
    })
}

/// A column counts as missing when absent or `null`.
fn present(value: &Option<Value>) -> Option<&Value> {
    value.as_ref().filter(|value| !value.is_null())
}

fn invalid_column(
    malformed: &impl Fn(MalformedReason) -> MalformedRecord,
    column: &'static str,
    value: &Value,
) -> MalformedRecord {
    malformed(MalformedReason::InvalidColumn {
        column,
        value: value.to_string(),
    })
}

/// Ids are non-empty strings or integers.
fn parse_id(value: &Value) -> Option<RecordId> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(RecordId::from(s.as_str())),
        Value::Number(n) if n.is_i64() || n.is_u64() => Some(RecordId::from(n.to_string())),
        _ => None,
    }
}

/// Money columns are numbers or decimal strings, plain or scientific.
fn parse_decimal(value: &Value) -> Option<Decimal> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return None,
    };
    text.parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

/// Reduce raw attribute values to strings.
///
/// Strings pass through, numbers and booleans are stringified, `null` drops
/// the key (the dimension does not apply), and nested values are dropped
/// with a warning.
fn normalize_attributes(id: &RecordId, raw: &Map<String, Value>) -> Attributes {
    let mut attributes = Attributes::new();

    for (name, value) in raw {
        match value {
            Value::String(s) => {
                attributes.insert(name.clone(), s.clone());
            }
            Value::Number(n) => {
                attributes.insert(name.clone(), n.to_string());
            }
            Value::Bool(b) => {
                attributes.insert(name.clone(), b.to_string());
            }
            Value::Null => {}
            Value::Array(_) | Value::Object(_) => {
                tracing::warn!(%id, attribute = %name, "Dropping non-scalar attribute value");
            }
        }
    }

    attributes
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn row(value: Value) -> RawConfigurationRow {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_complete_row_becomes_record() {
        let raw = row(json!({
            "id": 1,
            "attributes": {"ram": "8GB", "ssd": "512GB"},
            "price": 1299,
            "originalPrice": 1499,
            "stock": 4,
            "sku": "IP3-8-512",
            "order_index": 2,
            "active": false
        }));

        let record = validate_row(0, &raw).unwrap();
        assert_eq!(record.id, RecordId::from(1));
        assert_eq!(record.attribute("ram"), Some("8GB"));
        assert_eq!(record.price, Decimal::from(1299));
        assert_eq!(record.original_price, Some(Decimal::from(1499)));
        assert_eq!(record.stock, 4);
        assert_eq!(record.sku, "IP3-8-512");
        assert_eq!(record.order_rank, 2);
        assert!(!record.active);
    }

    #[test]
    fn test_defaults_for_optional_columns() {
        let record = validate_row(0, &row(json!({"id": 1, "attributes": {}, "price": 0}))).unwrap();

        assert_eq!(record.stock, 0);
        assert_eq!(record.sku, "");
        assert_eq!(record.order_rank, 0);
        assert!(record.active);
        assert_eq!(record.original_price, None);
    }

    #[test]
    fn test_missing_columns_are_reported() {
        let cases = [
            (json!({"attributes": {}, "price": 1}), MalformedReason::MissingId),
            (json!({"id": 1, "attributes": {}}), MalformedReason::MissingPrice),
            (json!({"id": 1, "price": 1}), MalformedReason::MissingAttributes),
            (
                json!({"id": 1, "attributes": {}, "price": -5}),
                MalformedReason::NegativePrice {
                    price: Decimal::from(-5),
                },
            ),
            (
                json!({"id": 1, "attributes": {}, "price": 1, "stock": -1}),
                MalformedReason::InvalidStock {
                    value: "-1".to_string(),
                },
            ),
            (json!({"id": null, "attributes": {}, "price": 1}), MalformedReason::MissingId),
            (json!({"id": 1, "attributes": {}, "price": null}), MalformedReason::MissingPrice),
        ];

        for (index, (value, expected)) in cases.into_iter().enumerate() {
            let err = validate_row(index, &row(value)).unwrap_err();
            assert_eq!(err.index, index);
            assert_eq!(err.reason, expected);
        }
    }

    #[test]
    fn test_attribute_normalization() {
        let raw = row(json!({
            "id": "a",
            "price": 1,
            "attributes": {
                "ram": 16,
                "touch": true,
                "color": "Negro",
                "gpu": null,
                "ports": ["usb-c", "hdmi"]
            }
        }));

        let record = validate_row(0, &raw).unwrap();
        let expected: Attributes = [("color", "Negro"), ("ram", "16"), ("touch", "true")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(record.attributes, expected);
    }

    #[test]
    fn test_display_mentions_row_and_reason() {
        let err = validate_row(4, &row(json!({"id": 9, "attributes": {}}))).unwrap_err();
        assert_eq!(err.to_string(), "row 4 (id 9): missing price");
    }

    #[test]
    fn test_mistyped_columns_are_reported() {
        let cases = [
            (
                json!({"id": 2, "attributes": {"ram": "16GB"}, "price": "consultar"}),
                MalformedReason::InvalidPrice {
                    column: "price",
                    value: "\"consultar\"".to_string(),
                },
            ),
            (
                json!({"id": 2, "attributes": {}, "price": 1, "originalPrice": true}),
                MalformedReason::InvalidPrice {
                    column: "original_price",
                    value: "true".to_string(),
                },
            ),
            (
                json!({"id": 2, "attributes": ["ram", "16GB"], "price": 1}),
                MalformedReason::InvalidAttributes,
            ),
            (
                json!({"id": 2, "attributes": {}, "price": 1, "stock": "4"}),
                MalformedReason::InvalidStock {
                    value: "\"4\"".to_string(),
                },
            ),
            (
                json!({"id": 2, "attributes": {}, "price": 1, "stock": 4.5}),
                MalformedReason::InvalidStock {
                    value: "4.5".to_string(),
                },
            ),
            (
                json!({"id": 2, "attributes": {}, "price": 1, "order_index": "first"}),
                MalformedReason::InvalidColumn {
                    column: "order_rank",
                    value: "\"first\"".to_string(),
                },
            ),
            (
                json!({"id": 2, "attributes": {}, "price": 1, "active": "yes"}),
                MalformedReason::InvalidColumn {
                    column: "active",
                    value: "\"yes\"".to_string(),
                },
            ),
            (
                json!({"id": 2, "attributes": {}, "price": 1, "sku": ["a"]}),
                MalformedReason::InvalidColumn {
                    column: "sku",
                    value: "[\"a\"]".to_string(),
                },
            ),
        ];

        for (value, expected) in cases {
            let err = validate_row(0, &row(value)).unwrap_err();
            assert_eq!(err.id, Some(RecordId::from(2)));
            assert_eq!(err.reason, expected);
        }
    }

    #[test]
    fn test_invalid_id_is_reported_without_id() {
        let err = validate_row(1, &row(json!({"id": {"n": 1}, "attributes": {}, "price": 1})))
            .unwrap_err();

        assert_eq!(err.id, None);
        assert_eq!(
            err.reason,
            MalformedReason::InvalidId {
                value: r#"{"n":1}"#.to_string()
            }
        );
        assert_eq!(err.to_string(), r#"row 1: invalid id {"n":1}"#);
    }

    #[test]
    fn test_decimal_strings_are_prices() {
        let raw = row(json!({
            "id": "x",
            "attributes": {},
            "price": "1549.99",
            "originalPrice": " 1699.99 ",
            "sku": 1001
        }));

        let record = validate_row(0, &raw).unwrap();
        assert_eq!(record.price, Decimal::new(154999, 2));
        assert_eq!(record.original_price, Some(Decimal::new(169999, 2)));
        assert_eq!(record.sku, "1001");
    }

    #[test]
    fn test_mistyped_price_display() {
        let raw = row(json!({"id": 2, "attributes": {}, "price": "consultar"}));
        let err = validate_row(3, &raw).unwrap_err();
        assert_eq!(err.to_string(), r#"row 3 (id 2): invalid price "consultar""#);
    }
}
