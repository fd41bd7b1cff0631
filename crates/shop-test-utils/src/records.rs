//! In-memory configuration records.

use rust_decimal::Decimal;
use shop_meta::{Attributes, ConfigurationRecord};

/// Build an attribute map from `(name, value)` pairs.
pub fn attrs(pairs: &[(&str, &str)]) -> Attributes {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

/// Build an active record with one unit of stock.
pub fn record(id: i64, pairs: &[(&str, &str)], price: i64) -> ConfigurationRecord {
    ConfigurationRecord::new(id, attrs(pairs), Decimal::from(price))
        .with_sku(format!("SKU-{id}"))
        .with_stock(1)
}

/// Three RAM/SSD variants; ids 2 and 3 share `ram = 16GB`.
pub fn ram_ssd_records() -> Vec<ConfigurationRecord> {
    vec![
        record(1, &[("ram", "8GB"), ("ssd", "512GB")], 1299),
        record(2, &[("ram", "16GB"), ("ssd", "512GB")], 1799),
        record(3, &[("ram", "16GB"), ("ssd", "1TB")], 1999),
    ]
}

/// A single record that carries `color` but no `ram` key.
pub fn color_only_records() -> Vec<ConfigurationRecord> {
    vec![record(1, &[("color", "Negro")], 100)]
}
