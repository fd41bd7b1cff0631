//! Catalog loading and per-product snapshots

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;
use shop_meta::{ConfigurationRecord, MalformedPolicy, RecordId};

use crate::document::DocumentStore;
use crate::schema::{CatalogDocument, ProductEntry};
use crate::validate::{MalformedReason, MalformedRecord, validate_row};
use crate::{Error, Result};

/// Listing entry for one product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSummary {
    pub id: RecordId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Raw configuration rows, before validation and filtering
    pub rows: usize,
}

impl From<&ProductEntry> for ProductSummary {
    fn from(entry: &ProductEntry) -> Self {
        Self {
            id: entry.id.clone(),
            name: entry.name.clone(),
            slug: entry.slug.clone(),
            rows: entry.configurations.len(),
        }
    }
}

/// One product's records, ready for the resolver.
///
/// `records` holds only well-formed, active rows ordered by `order_rank`
/// (rows sharing a rank keep their catalog order). Ids are unique within a
/// snapshot; a row reusing an earlier row's id is quarantined.
#[derive(Debug, Clone, Serialize)]
pub struct ProductSnapshot {
    pub product: ProductSummary,
    pub records: Vec<ConfigurationRecord>,
    /// Rows dropped for being malformed
    pub quarantined: Vec<MalformedRecord>,
    /// Number of well-formed rows dropped for being inactive
    pub inactive: usize,
}

impl ProductSnapshot {
    /// Validate, filter and order a product's rows.
    pub fn build(entry: &ProductEntry, policy: MalformedPolicy) -> Result<Self> {
        let mut records = Vec::with_capacity(entry.configurations.len());
        let mut quarantined = Vec::new();
        let mut inactive = 0;
        let mut seen = HashSet::new();

        for (index, row) in entry.configurations.iter().enumerate() {
            let validated = validate_row(index, row).and_then(|record| {
                if seen.insert(record.id.clone()) {
                    Ok(record)
                } else {
                    Err(MalformedRecord {
                        index,
                        id: Some(record.id),
                        reason: MalformedReason::DuplicateId,
                    })
                }
            });

            match validated {
                Ok(record) if record.active => records.push(record),
                Ok(_) => inactive += 1,
                Err(malformed) => {
                    tracing::warn!(product = %entry.id, "Quarantining configuration {}", malformed);
                    quarantined.push(malformed);
                }
            }
        }

        if policy == MalformedPolicy::Reject {
            if let Some(first) = quarantined.first() {
                return Err(Error::MalformedRecords {
                    product: entry.id.to_string(),
                    count: quarantined.len(),
                    first: first.to_string(),
                });
            }
        }

        // Stable sort: equal ranks keep catalog order.
        records.sort_by_key(|record| record.order_rank);

        tracing::debug!(
            product = %entry.id,
            records = records.len(),
            quarantined = quarantined.len(),
            inactive,
            "Built product snapshot"
        );

        Ok(Self {
            product: ProductSummary::from(entry),
            records,
            quarantined,
            inactive,
        })
    }

    /// True when no record survived validation and filtering.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A loaded catalog document
#[derive(Debug, Clone)]
pub struct Catalog {
    source: Option<PathBuf>,
    products: Vec<ProductEntry>,
    policy: MalformedPolicy,
}

impl Catalog {
    /// Load a catalog from a `.json`, `.toml` or `.yaml` file.
    pub fn load(path: &Path) -> Result<Self> {
        Self::load_with(&DocumentStore::new(), path)
    }

    /// Load a catalog through a specific document store.
    pub fn load_with(store: &DocumentStore, path: &Path) -> Result<Self> {
        let document: CatalogDocument = store.load(path)?;
        tracing::debug!(?path, products = document.products.len(), "Loaded catalog");

        let mut catalog = Self::from_document(document);
        catalog.source = Some(path.to_path_buf());
        Ok(catalog)
    }

    pub fn from_document(document: CatalogDocument) -> Self {
        Self {
            source: None,
            products: document.products,
            policy: MalformedPolicy::default(),
        }
    }

    /// Set what happens to malformed rows when snapshots are built.
    pub fn with_policy(mut self, policy: MalformedPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> MalformedPolicy {
        self.policy
    }

    /// File the catalog was loaded from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// All products, in document order.
    pub fn products(&self) -> Vec<ProductSummary> {
        self.products.iter().map(ProductSummary::from).collect()
    }

    /// Find a product by id or slug.
    pub fn find(&self, key: &str) -> Option<&ProductEntry> {
        self.products.iter().find(|product| product.is_keyed_by(key))
    }

    /// Build the resolver input for one product.
    pub fn snapshot(&self, key: &str) -> Result<ProductSnapshot> {
        let entry = self.find(key).ok_or_else(|| Error::ProductNotFound {
            key: key.to_string(),
        })?;
        ProductSnapshot::build(entry, self.policy)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
