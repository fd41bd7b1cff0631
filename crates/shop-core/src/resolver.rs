//! Configuration resolution over one product's record set
//!
//! The `Resolver` answers three questions about an immutable, ordered list
//! of active configuration records:
//!
//! - which values each attribute can take,
//! - which values remain selectable given a partial selection,
//! - which single record a selection resolves to.
//!
//! It keeps no state between calls. The caller owns the
//! [`SelectionState`] and threads it through [`Resolver::apply_selection`].

use shop_meta::{Attributes, ConfigurationRecord, MatchPolicy};

use crate::options::{AvailableOptions, collect_options};
use crate::selection::SelectionState;

/// Pure resolution functions over a borrowed record set
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    records: &'a [ConfigurationRecord],
    policy: MatchPolicy,
}

impl<'a> Resolver<'a> {
    /// Create a resolver with the default first-match policy.
    ///
    /// # Arguments
    ///
    /// * `records` - Active records for one product, in display order
    pub fn new(records: &'a [ConfigurationRecord]) -> Self {
        Self::with_policy(records, MatchPolicy::default())
    }

    pub fn with_policy(records: &'a [ConfigurationRecord], policy: MatchPolicy) -> Self {
        Self { records, policy }
    }

    pub fn records(&self) -> &'a [ConfigurationRecord] {
        self.records
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Every value each attribute takes in at least one record.
    pub fn available_options(&self) -> AvailableOptions {
        collect_options(self.records)
    }

    /// The cheapest record; the first one in input order on a price tie.
    pub fn default_record(&self) -> Option<&'a ConfigurationRecord> {
        self.default_position().and_then(|index| self.records.get(index))
    }

    /// Position of [`default_record`](Self::default_record) in the record set.
    pub fn default_position(&self) -> Option<usize> {
        // `min_by_key` keeps the first of several equal minimums.
        self.records
            .iter()
            .enumerate()
            .min_by_key(|(_, record)| record.price)
            .map(|(index, _)| index)
    }

    /// Initial selection: the cheapest record's full attribute map.
    ///
    /// Returns `None` for an empty record set.
    pub fn select_default(&self) -> Option<SelectionState> {
        let record = self.default_record()?;
        tracing::debug!(
            record = %record.id,
            price = %record.price,
            "Selected default configuration"
        );
        Some(SelectionState {
            chosen: record.attributes.clone(),
            active_record_id: Some(record.id.clone()),
        })
    }

    /// All records satisfying a selection, in input order.
    pub fn matches<'s>(
        &self,
        selection: &'s Attributes,
    ) -> impl Iterator<Item = &'a ConfigurationRecord> + use<'a, 's> {
        self.records
            .iter()
            .filter(move |record| record.satisfies(selection))
    }

    /// The record a selection resolves to.
    ///
    /// A record matches when it carries every selected key with an equal
    /// value; unselected keys are unconstrained. When several records
    /// match, [`MatchPolicy::FirstMatch`] returns the first in input order
    /// and [`MatchPolicy::RequireUnique`] returns `None`.
    pub fn find_match(&self, selection: &Attributes) -> Option<&'a ConfigurationRecord> {
        self.match_position(selection)
            .and_then(|index| self.records.get(index))
    }

    /// Position of [`find_match`](Self::find_match)'s record in the record set.
    ///
    /// Positions identify a record even when the catalog repeats an id.
    pub fn match_position(&self, selection: &Attributes) -> Option<usize> {
        let mut candidates = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.satisfies(selection));
        let (first, record) = candidates.next()?;

        match self.policy {
            MatchPolicy::FirstMatch => Some(first),
            MatchPolicy::RequireUnique => {
                if candidates.next().is_some() {
                    tracing::debug!(
                        first = %record.id,
                        "Selection is ambiguous; no unique configuration"
                    );
                    None
                } else {
                    Some(first)
                }
            }
        }
    }

    /// Whether choosing `value` for `name` keeps the selection satisfiable.
    ///
    /// True exactly when some record matches the current selection with
    /// `name` set to `value`. Ambiguity does not make a value unavailable,
    /// whatever the match policy.
    pub fn is_value_available(&self, selection: &Attributes, name: &str, value: &str) -> bool {
        let hypothetical = merged(selection, name, value);
        self.matches(&hypothetical).next().is_some()
    }

    /// Set `name` to `value` in the selection and resolve it again.
    ///
    /// The merged selection is always returned, even when it matches
    /// nothing; in that case the active record is cleared.
    pub fn apply_selection(
        &self,
        state: &SelectionState,
        name: &str,
        value: &str,
    ) -> SelectionState {
        let chosen = merged(&state.chosen, name, value);
        let active_record_id = self.find_match(&chosen).map(|record| record.id.clone());

        match &active_record_id {
            Some(id) => tracing::debug!(%name, %value, record = %id, "Selection matched"),
            None => tracing::debug!(%name, %value, "Selection matches no configuration"),
        }

        SelectionState {
            chosen,
            active_record_id,
        }
    }
}

fn merged(selection: &Attributes, name: &str, value: &str) -> Attributes {
    let mut merged = selection.clone();
    merged.insert(name.to_string(), value.to_string());
    merged
}

/// Per attribute, every value appearing in at least one record.
pub fn derive_available_options(records: &[ConfigurationRecord]) -> AvailableOptions {
    Resolver::new(records).available_options()
}

/// Default selection for a record set; `None` when it is empty.
pub fn select_default(records: &[ConfigurationRecord]) -> Option<SelectionState> {
    Resolver::new(records).select_default()
}

/// First record satisfying every chosen attribute.
pub fn find_match<'a>(
    records: &'a [ConfigurationRecord],
    chosen: &Attributes,
) -> Option<&'a ConfigurationRecord> {
    Resolver::new(records).find_match(chosen)
}

/// Whether `name = value` keeps `chosen` satisfiable by some record.
pub fn is_value_available(
    records: &[ConfigurationRecord],
    chosen: &Attributes,
    name: &str,
    value: &str,
) -> bool {
    Resolver::new(records).is_value_available(chosen, name, value)
}

/// Merge `name = value` into a selection and re-resolve its record.
pub fn apply_selection(
    records: &[ConfigurationRecord],
    state: &SelectionState,
    name: &str,
    value: &str,
) -> SelectionState {
    Resolver::new(records).apply_selection(state, name, value)
}
