//! Per-product selection state machine and its view model
//!
//! ```text
//!   Uninitialized --load--> Empty            (no active records)
//!   Uninitialized --load--> Defaulted --select--> Matched <--select--> Unmatched
//! ```
//!
//! `load` always starts over from `Uninitialized`; there is no terminal
//! phase.

use rust_decimal::Decimal;
use serde::Serialize;
use shop_meta::{Attributes, ConfigurationRecord, MatchPolicy, RecordId};
use shop_store::ProductSnapshot;

use crate::options::AvailableOptions;
use crate::resolver::Resolver;
use crate::selection::SelectionState;
use crate::{Error, Result};

/// Where a product view is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewPhase {
    /// No record set loaded yet
    Uninitialized,
    /// Loaded, but there are no configurations to offer
    Empty,
    /// Loaded and preselected with the cheapest configuration
    Defaulted,
    /// The user's selection resolves to a configuration
    Matched,
    /// The user's selection resolves to nothing
    Unmatched,
}

/// Summary of a view for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewStatus {
    Ready,
    NoConfigurations,
    NoMatch,
    NotLoaded,
}

impl From<ViewPhase> for ViewStatus {
    fn from(phase: ViewPhase) -> Self {
        match phase {
            ViewPhase::Uninitialized => ViewStatus::NotLoaded,
            ViewPhase::Empty => ViewStatus::NoConfigurations,
            ViewPhase::Defaulted | ViewPhase::Matched => ViewStatus::Ready,
            ViewPhase::Unmatched => ViewStatus::NoMatch,
        }
    }
}

/// One option button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionValue {
    pub value: String,
    pub available: bool,
    pub selected: bool,
}

/// The option buttons for one attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionGroup {
    pub name: String,
    pub values: Vec<OptionValue>,
}

/// The configuration currently selected, as shown to a shopper
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveConfiguration {
    pub id: RecordId,
    pub sku: String,
    pub label: String,
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<u32>,
    pub stock: u32,
    pub in_stock: bool,
}

impl From<&ConfigurationRecord> for ActiveConfiguration {
    fn from(record: &ConfigurationRecord) -> Self {
        Self {
            id: record.id.clone(),
            sku: record.sku.clone(),
            label: record.label(),
            price: record.price,
            // Only surfaced when it is a real discount
            original_price: record.discount().and(record.original_price),
            discount_percent: record.discount_percent(),
            stock: record.stock,
            in_stock: record.in_stock(),
        }
    }
}

/// Everything a presentation layer needs to render one product view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    pub status: ViewStatus,
    pub phase: ViewPhase,
    pub options: Vec<OptionGroup>,
    pub active: Option<ActiveConfiguration>,
    pub selection: Attributes,
}

/// Selection state for one product, from load until the view is discarded.
#[derive(Debug, Clone)]
pub struct ProductView {
    product: Option<String>,
    records: Vec<ConfigurationRecord>,
    selection: SelectionState,
    /// Position of the active record in `records`
    active: Option<usize>,
    phase: ViewPhase,
    policy: MatchPolicy,
}

impl ProductView {
    pub fn new(policy: MatchPolicy) -> Self {
        Self {
            product: None,
            records: Vec::new(),
            selection: SelectionState::new(),
            active: None,
            phase: ViewPhase::Uninitialized,
            policy,
        }
    }

    /// Create a view already loaded with a catalog snapshot.
    pub fn from_snapshot(snapshot: ProductSnapshot, policy: MatchPolicy) -> Self {
        let mut view = Self::new(policy);
        view.load_snapshot(snapshot);
        view
    }

    /// Replace the record set and preselect the cheapest configuration.
    ///
    /// `records` must already be active-only and in display order.
    pub fn load(&mut self, records: Vec<ConfigurationRecord>) -> ViewPhase {
        self.reset();
        self.records = records;

        let resolver = self.resolver();
        match resolver.select_default() {
            Some(state) => {
                self.active = resolver.default_position();
                self.selection = state;
                self.phase = ViewPhase::Defaulted;
            }
            None => {
                tracing::debug!(product = ?self.product, "No configurations available");
                self.phase = ViewPhase::Empty;
            }
        }

        self.phase
    }

    /// Load a snapshot built by the catalog store, keeping its product name.
    pub fn load_snapshot(&mut self, snapshot: ProductSnapshot) -> ViewPhase {
        let product = snapshot.product.name;
        let phase = self.load(snapshot.records);
        self.product = Some(product);
        phase
    }

    /// Drop the record set and selection.
    pub fn reset(&mut self) {
        self.product = None;
        self.records.clear();
        self.selection = SelectionState::new();
        self.active = None;
        self.phase = ViewPhase::Uninitialized;
    }

    /// Handle "user selected `value` for `name`".
    ///
    /// Has no effect before a record set is loaded or when it is empty.
    pub fn select(&mut self, name: &str, value: &str) -> ViewPhase {
        match self.phase {
            ViewPhase::Uninitialized | ViewPhase::Empty => {
                tracing::debug!(%name, %value, phase = ?self.phase, "Ignoring selection");
                return self.phase;
            }
            ViewPhase::Defaulted | ViewPhase::Matched | ViewPhase::Unmatched => {}
        }

        if !self.records.iter().any(|r| r.attribute(name).is_some()) {
            tracing::debug!(%name, "No configuration carries this attribute");
        }

        let resolver = self.resolver();
        let selection = resolver.apply_selection(&self.selection, name, value);
        self.active = resolver.match_position(&selection.chosen);
        self.selection = selection;
        self.phase = if self.active.is_some() {
            ViewPhase::Matched
        } else {
            ViewPhase::Unmatched
        };
        self.phase
    }

    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    pub fn product(&self) -> Option<&str> {
        self.product.as_deref()
    }

    pub fn records(&self) -> &[ConfigurationRecord] {
        &self.records
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// The record the current selection resolves to, if any.
    pub fn active_record(&self) -> Option<&ConfigurationRecord> {
        self.active.and_then(|index| self.records.get(index))
    }

    /// The active record, for callers that cannot proceed without one.
    pub fn require_active(&self) -> Result<&ConfigurationRecord> {
        match self.phase {
            ViewPhase::Uninitialized => Err(Error::NotLoaded),
            ViewPhase::Empty => Err(Error::EmptyCatalog),
            _ => self
                .active_record()
                .ok_or_else(|| Error::NoMatchForSelection {
                    selection: self.selection.describe(),
                }),
        }
    }

    pub fn available_options(&self) -> AvailableOptions {
        self.resolver().available_options()
    }

    /// Whether the option button `name = value` should be enabled.
    pub fn option_availability(&self, name: &str, value: &str) -> bool {
        self.resolver()
            .is_value_available(&self.selection.chosen, name, value)
    }

    pub fn view_model(&self) -> ViewModel {
        let resolver = self.resolver();
        let options = resolver
            .available_options()
            .into_iter()
            .map(|(name, values)| {
                let values = values
                    .into_iter()
                    .map(|value| OptionValue {
                        available: resolver.is_value_available(
                            &self.selection.chosen,
                            &name,
                            &value,
                        ),
                        selected: self.selection.is_chosen(&name, &value),
                        value,
                    })
                    .collect();
                OptionGroup { name, values }
            })
            .collect();

        ViewModel {
            product: self.product.clone(),
            status: ViewStatus::from(self.phase),
            phase: self.phase,
            options,
            active: self.active_record().map(ActiveConfiguration::from),
            selection: self.selection.chosen.clone(),
        }
    }

    fn resolver(&self) -> Resolver<'_> {
        Resolver::with_policy(&self.records, self.policy)
    }
}

impl Default for ProductView {
    fn default() -> Self {
        Self::new(MatchPolicy::default())
    }
}
