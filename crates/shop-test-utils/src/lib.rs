//! Shared test fixtures for the notebook configurator workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`records`]: in-memory configuration records and known scenarios
//! - [`catalog`]: [`TestCatalog`] for catalog documents on disk

pub mod catalog;
pub mod records;

pub use catalog::TestCatalog;
pub use records::{attrs, record};
