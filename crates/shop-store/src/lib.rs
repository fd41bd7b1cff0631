//! Catalog Store boundary for the notebook configurator
//!
//! Loads catalog documents exported from the hosted database, validates
//! every configuration row, and hands the resolver a clean per-product
//! snapshot: active records only, ordered by `order_rank`.

pub mod catalog;
pub mod document;
pub mod error;
pub mod schema;
pub mod validate;

pub use catalog::{Catalog, ProductSnapshot, ProductSummary};
pub use document::{DocumentFormat, DocumentStore, MAX_DOCUMENT_SIZE};
pub use error::{Error, Result};
pub use schema::{CatalogDocument, ProductEntry, RawConfigurationRow};
pub use validate::{MalformedReason, MalformedRecord, validate_row};
