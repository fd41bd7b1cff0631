//! Configuration resolution for the notebook configurator
//!
//! This crate sits above the data model and the catalog store and provides:
//!
//! - **Resolver**: pure derivation of selectable options, the default
//!   selection, and the record matching a (partial) selection
//! - **ProductView**: the per-product selection state machine and the view
//!   model handed to a presentation layer
//! - **Settings resolution**: layered merge of global, project and local
//!   `config.toml` files
//!
//! # Architecture
//!
//! ```text
//!                 CLI / storefront
//!                        |
//!                    shop-core
//!                        |
//!              +---------+---------+
//!              |                   |
//!          shop-store          shop-meta
//! ```
//!
//! # Example
//!
//! ```
//! use rust_decimal::Decimal;
//! use shop_core::{ProductView, ViewPhase};
//! use shop_meta::{Attributes, ConfigurationRecord, MatchPolicy};
//!
//! let ram = |v: &str| Attributes::from([("ram".to_string(), v.to_string())]);
//! let records = vec![
//!     ConfigurationRecord::new(1, ram("8GB"), Decimal::from(1299)),
//!     ConfigurationRecord::new(2, ram("16GB"), Decimal::from(1799)),
//! ];
//!
//! let mut view = ProductView::new(MatchPolicy::FirstMatch);
//! assert_eq!(view.load(records), ViewPhase::Defaulted);
//! assert_eq!(view.select("ram", "16GB"), ViewPhase::Matched);
//! assert_eq!(view.active_record().unwrap().id.as_str(), "2");
//! ```

pub mod config;
pub mod error;
pub mod options;
pub mod resolver;
pub mod selection;
pub mod view;

pub use config::SettingsResolver;
pub use error::{Error, Result};
pub use options::{AvailableOptions, natural_cmp};
pub use resolver::{
    Resolver, apply_selection, derive_available_options, find_match, is_value_available,
    select_default,
};
pub use selection::SelectionState;
pub use view::{
    ActiveConfiguration, OptionGroup, OptionValue, ProductView, ViewModel, ViewPhase, ViewStatus,
};
