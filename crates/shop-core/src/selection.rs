//! The user's in-progress choice of attribute values for one product view

use serde::{Deserialize, Serialize};
use shop_meta::{Attributes, RecordId};

/// Chosen attribute values and the record they currently resolve to.
///
/// `chosen` may name fewer keys than any record carries. `active_record_id`
/// is `None` until the selection resolves to a record, and goes back to
/// `None` whenever a change leaves the selection unmatched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub chosen: Attributes,
    pub active_record_id: Option<RecordId>,
}

impl SelectionState {
    /// An empty selection with no active record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.chosen.get(name).map(String::as_str)
    }

    pub fn is_chosen(&self, name: &str, value: &str) -> bool {
        self.value(name) == Some(value)
    }

    pub fn is_matched(&self) -> bool {
        self.active_record_id.is_some()
    }

    /// Render the chosen values as `name=value` pairs, for messages.
    pub fn describe(&self) -> String {
        if self.chosen.is_empty() {
            return "(nothing selected)".to_string();
        }
        self.chosen
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
