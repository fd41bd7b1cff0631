//! Error types for shop-store

use std::path::PathBuf;

/// Result type for shop-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a catalog
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} catalog at {path}: {message}")]
    DocumentParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported catalog format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Catalog file too large: {path} is {size} bytes (max {max})")]
    DocumentTooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("Product not found: {key}")]
    ProductNotFound { key: String },

    #[error("Product {product} has {count} malformed configuration row(s); first: {first}")]
    MalformedRecords {
        product: String,
        count: usize,
        first: String,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
