use async_trait::async_trait;

use crate::error::CatalogError;
use crate::snapshot::CatalogSnapshot;

/// Seam over the external catalog store.
///
/// One call returns the full snapshot — ingredients and category metadata
/// together — so a caller can never mix data from different generations.
/// Transport, pagination, and authentication live behind this trait and are
/// not the cache's concern.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn fetch_catalog(&self) -> Result<CatalogSnapshot, CatalogError>;
}

/// Store backed by a fixed in-process snapshot.
///
/// Used for the builtin vocabulary, file-loaded catalogs, and tests.
#[derive(Debug, Clone)]
pub struct StaticStore {
    snapshot: CatalogSnapshot,
}

impl StaticStore {
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self { snapshot }
    }
}

#[async_trait]
impl CatalogStore for StaticStore {
    async fn fetch_catalog(&self) -> Result<CatalogSnapshot, CatalogError> {
        Ok(self.snapshot.clone())
    }
}
