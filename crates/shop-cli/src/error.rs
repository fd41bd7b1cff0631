//! Error types for shop-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from shop-core
    #[error(transparent)]
    Core(#[from] shop_core::Error),

    /// Error from shop-store
    #[error(transparent)]
    Store(#[from] shop_store::Error),

    /// Error from shop-meta
    #[error(transparent)]
    Meta(#[from] shop_meta::Error),

    /// JSON output error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
