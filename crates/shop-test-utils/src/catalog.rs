//! [`TestCatalog`] for catalog documents written to a temporary directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// A temporary directory holding catalog documents.
///
/// The directory is removed when the value is dropped.
pub struct TestCatalog {
    dir: TempDir,
}

impl TestCatalog {
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    pub fn new() -> Self {
        let dir = TempDir::new()
            .unwrap_or_else(|e| panic!("TestCatalog: failed to create temp dir: {e}"));
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write raw text to `name` inside the directory and return its path.
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("TestCatalog: failed to create {}: {e}", parent.display())
            });
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("TestCatalog: failed to write {}: {e}", path.display()));
        path
    }

    /// Write a JSON document and return its path.
    pub fn write_json(&self, name: &str, document: &Value) -> PathBuf {
        let content = serde_json::to_string_pretty(document)
            .unwrap_or_else(|e| panic!("TestCatalog: failed to serialize {name}: {e}"));
        self.write(name, &content)
    }

    /// Write [`sample_document`] as `catalog.json` and return its path.
    pub fn with_sample(&self) -> PathBuf {
        self.write_json("catalog.json", &sample_document())
    }
}

impl Default for TestCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// A small storefront catalog:
///
/// - `ideapad-3` (id 1): three RAM/SSD variants, one discounted, one out of
///   stock, plus an inactive and a malformed row
/// - `hp-15` (id 2): a single colour variant without a `ram` key
/// - `macbook-air` (id 3): no configurations at all
pub fn sample_document() -> Value {
    json!({
        "products": [
            {
                "id": 1,
                "name": "Notebook Lenovo IdeaPad 3",
                "slug": "ideapad-3",
                "configurations": [
                    {
                        "id": 1,
                        "attributes": {"ram": "8GB", "ssd": "512GB"},
                        "price": 1299,
                        "originalPrice": 1499,
                        "stock": 4,
                        "sku": "IP3-8-512",
                        "order_index": 0
                    },
                    {
                        "id": 2,
                        "attributes": {"ram": "16GB", "ssd": "512GB"},
                        "price": 1799,
                        "stock": 2,
                        "sku": "IP3-16-512",
                        "order_index": 1
                    },
                    {
                        "id": 3,
                        "attributes": {"ram": "16GB", "ssd": "1TB"},
                        "price": 1999,
                        "stock": 0,
                        "sku": "IP3-16-1TB",
                        "order_index": 2
                    },
                    {
                        "id": 4,
                        "attributes": {"ram": "32GB", "ssd": "1TB"},
                        "price": 2499,
                        "stock": 1,
                        "sku": "IP3-32-1TB",
                        "order_index": 3,
                        "active": false
                    },
                    {
                        "id": 5,
                        "attributes": {"ram": "4GB", "ssd": "256GB"},
                        "sku": "IP3-4-256",
                        "order_index": 4
                    }
                ]
            },
            {
                "id": 2,
                "name": "Notebook HP 15",
                "slug": "hp-15",
                "configurations": [
                    {
                        "id": 20,
                        "attributes": {"color": "Negro"},
                        "price": 100,
                        "stock": 3,
                        "sku": "HP15-NEGRO"
                    }
                ]
            },
            {
                "id": 3,
                "name": "MacBook Air",
                "slug": "macbook-air",
                "configurations": []
            }
        ]
    })
}
