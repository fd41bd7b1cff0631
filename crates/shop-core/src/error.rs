//! Error types for shop-core

use std::path::PathBuf;

/// Result type for shop-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in shop-core operations
///
/// An empty catalog and an unmatched selection are ordinary view states;
/// they only become errors when a caller demands an active record.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The product has no active configurations
    #[error("No configurations available")]
    EmptyCatalog,

    /// The current selection matches no configuration
    #[error("No configuration matches the selection {selection}")]
    NoMatchForSelection { selection: String },

    /// The view has no record set loaded yet
    #[error("Product view has not been loaded")]
    NotLoaded,

    /// A settings layer could not be parsed
    #[error("Invalid settings at {path}: {message}")]
    InvalidSettings { path: PathBuf, message: String },

    // Transparent wrappers for underlying crate errors
    /// Catalog store error from shop-store
    #[error(transparent)]
    Store(#[from] shop_store::Error),

    /// Model error from shop-meta
    #[error(transparent)]
    Meta(#[from] shop_meta::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
