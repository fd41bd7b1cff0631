//! Error types for shop-meta

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid match policy: {value}")]
    InvalidMatchPolicy { value: String },

    #[error("Invalid malformed-record policy: {value}")]
    InvalidMalformedPolicy { value: String },

    #[error("Invalid selection '{input}': expected name=value")]
    InvalidSelection { input: String },
}
