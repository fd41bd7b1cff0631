//! Catalog data model for the notebook configurator.
//!
//! This crate holds the types every other layer agrees on: configuration
//! records, their open-ended attribute maps, and the settings enums that
//! tune how records are loaded and matched.

pub mod config;
pub mod error;
pub mod record;

pub use config::{
    CatalogSettings, DisplaySettings, MalformedPolicy, MatchPolicy, ResolverSettings, Settings,
};
pub use error::{Error, Result};
pub use record::{Attributes, ConfigurationRecord, RecordId, parse_attribute_pair};
