use thiserror::Error;

/// Errors produced by the catalog layer.
///
/// `Clone` is required so a single failed in-flight fetch can be delivered
/// to every caller awaiting the shared handle.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The external store could not deliver a catalog.
    #[error("catalog fetch failed: {0}")]
    Fetch(String),
    /// The fetched data violates a catalog invariant.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
}
