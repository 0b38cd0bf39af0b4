//! Canonical ingredient catalog layer.
//!
//! This crate owns the vocabulary every other stage speaks: canonical
//! ingredient IDs, their bilingual display names and alias tables, the
//! category/subcategory presentation metadata, and the cache that delivers
//! all of it from an external store.
//!
//! ## What we guarantee
//!
//! - A [`CatalogSnapshot`] is validated and ordered at construction; no
//!   consumer can observe a half-written or misordered catalog.
//! - Ingredients and category metadata are fetched and committed together,
//!   so a snapshot never mixes generations.
//! - [`CatalogCache`] is single-flight: any number of concurrent cold-start
//!   readers share exactly one outbound fetch and see the same outcome.
//! - A failed fetch never poisons the cache; the next read retries.
//!
//! ## Invariants worth knowing
//!
//! - `id` is the only identifier stored in inventories or compared across
//!   recipes. Names and aliases are lookup data, nothing more.
//! - The catalog is read-only here; it is created and updated exclusively by
//!   the external store behind [`CatalogStore`].
//!
//! Bottom line: hand any stage an `Arc<CatalogSnapshot>` and it can rely on
//! it completely.

mod builtin;
mod cache;
mod error;
mod ingredient;
mod snapshot;
mod store;

pub use crate::builtin::builtin_catalog;
pub use crate::cache::CatalogCache;
pub use crate::error::CatalogError;
pub use crate::ingredient::{CanonicalIngredient, Category, CategoryMeta, Lang, SubcategoryMeta};
pub use crate::snapshot::CatalogSnapshot;
pub use crate::store::{CatalogStore, StaticStore};
