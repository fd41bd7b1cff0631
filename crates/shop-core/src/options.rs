//! Selectable option values and their display order

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use shop_meta::ConfigurationRecord;

/// Attribute name to the distinct values offered for it, in display order.
pub type AvailableOptions = BTreeMap<String, Vec<String>>;

/// Collect every attribute value that appears in at least one record.
///
/// Values are de-duplicated and sorted with [`natural_cmp`], so `8GB`
/// comes before `16GB`. The order is for display only.
pub fn collect_options(records: &[ConfigurationRecord]) -> AvailableOptions {
    let mut values: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();

    for record in records {
        for (name, value) in &record.attributes {
            values
                .entry(name.as_str())
                .or_default()
                .insert(value.as_str());
        }
    }

    values
        .into_iter()
        .map(|(name, set)| {
            let mut sorted: Vec<String> = set.into_iter().map(str::to_string).collect();
            sorted.sort_by(|a, b| natural_cmp(a, b));
            (name.to_string(), sorted)
        })
        .collect()
}

/// Compare two strings with digit runs ordered by numeric value.
///
/// Non-digit runs compare lexically. Strings that are equal under that
/// rule (`"08"` and `"8"`) fall back to plain lexical order, so the result
/// is a total order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = Chunks::new(a);
    let mut right = Chunks::new(b);

    loop {
        match (left.next(), right.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ordering = compare_chunks(x, y);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}

fn compare_chunks(x: &str, y: &str) -> Ordering {
    let x_numeric = x.starts_with(|c: char| c.is_ascii_digit());
    let y_numeric = y.starts_with(|c: char| c.is_ascii_digit());

    if x_numeric && y_numeric {
        let x_digits = x.trim_start_matches('0');
        let y_digits = y.trim_start_matches('0');
        x_digits
            .len()
            .cmp(&y_digits.len())
            .then_with(|| x_digits.cmp(y_digits))
    } else {
        x.cmp(y)
    }
}

/// Splits a string into alternating runs of ASCII digits and everything else.
struct Chunks<'a> {
    rest: &'a str,
}

impl<'a> Chunks<'a> {
    fn new(s: &'a str) -> Self {
        Self { rest: s }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let first = self.rest.chars().next()?;
        let numeric = first.is_ascii_digit();
        let end = self
            .rest
            .find(|c: char| c.is_ascii_digit() != numeric)
            .unwrap_or(self.rest.len());
        let (chunk, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(chunk)
    }
}
