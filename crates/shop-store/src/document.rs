//! Format-agnostic catalog document loading

use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{Error, Result};

/// Largest catalog document accepted, in bytes.
pub const MAX_DOCUMENT_SIZE: u64 = 8 * 1024 * 1024;

/// Serialization format of a catalog document, detected from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
    Yaml,
}

impl DocumentFormat {
    /// Detect the format from a file extension.
    ///
    /// - `.json` -> JSON
    /// - `.toml` -> TOML
    /// - `.yaml`, `.yml` -> YAML
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");

        match extension.to_lowercase().as_str() {
            "json" => Ok(DocumentFormat::Json),
            "toml" => Ok(DocumentFormat::Toml),
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Json => write!(f, "JSON"),
            DocumentFormat::Toml => write!(f, "TOML"),
            DocumentFormat::Yaml => write!(f, "YAML"),
        }
    }
}

/// Loads catalog documents, whatever their on-disk format.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    max_size: u64,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self {
            max_size: MAX_DOCUMENT_SIZE,
        }
    }

    /// Create a store with a custom size ceiling.
    pub fn with_max_size(max_size: u64) -> Self {
        Self { max_size }
    }

    /// Load and deserialize a document; format comes from the extension.
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let format = DocumentFormat::from_path(path)?;
        let content = self.read_text(path)?;
        Self::parse(&content, format).map_err(|message| Error::DocumentParse {
            path: path.to_path_buf(),
            format: format.to_string(),
            message,
        })
    }

    /// Deserialize document text in the given format.
    pub fn parse<T: DeserializeOwned>(
        content: &str,
        format: DocumentFormat,
    ) -> std::result::Result<T, String> {
        match format {
            DocumentFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            DocumentFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            DocumentFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        }
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        let metadata = fs::metadata(path).map_err(|e| Error::io(path, e))?;
        if metadata.len() > self.max_size {
            return Err(Error::DocumentTooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                max: self.max_size,
            });
        }

        tracing::debug!(?path, size = metadata.len(), "Reading catalog document");
        fs::read_to_string(path).map_err(|e| Error::io(path, e))
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}
