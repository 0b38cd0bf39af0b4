//! Umbrella crate for the cocktail catalog core.
//!
//! Stitches the three stages together so callers can work against a single
//! API surface:
//!
//! - `catalog` — the canonical ingredient vocabulary and its single-flight
//!   fetch cache
//! - `normalizer` — free-text ingredient canonicalization over that
//!   vocabulary
//! - `matcher` — recipe-inventory classification into "make it now" and
//!   "one ingredient away"
//!
//! Data flows one way: catalog → normalizer → matcher → presentation. The
//! only asynchronous boundary is the catalog fetch; everything downstream is
//! pure synchronous computation, recomputed whenever the inventory or the
//! recipe list changes.

pub use catalog::{
    builtin_catalog, CanonicalIngredient, CatalogCache, CatalogError, CatalogSnapshot,
    CatalogStore, Category, CategoryMeta, Lang, StaticStore, SubcategoryMeta,
};
pub use matcher::{
    IngredientLine, Inventory, MatchEngine, MatchOptions, MatchResult, MissingOne, Recipe,
    RecipeError,
};
pub use normalizer::{normalize, IngredientIndex, Normalizer};

use std::sync::Arc;

use thiserror::Error;

/// Errors that can surface from the assembled pipeline.
///
/// Matching and normalization are infallible by contract; only catalog
/// delivery and recipe data loading can fail.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("catalog failure: {0}")]
    Catalog(#[from] CatalogError),
    #[error("recipe data failure: {0}")]
    Recipe(#[from] RecipeError),
    #[error("recipe data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Composition root owning the catalog cache.
///
/// One `Bar` per application; hand out clones of the inner cache if other
/// components need direct catalog access. Matching runs against whatever
/// snapshot the cache currently serves.
pub struct Bar {
    cache: CatalogCache,
}

impl Bar {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self::with_cache(CatalogCache::new(store))
    }

    /// A bar backed by the builtin vocabulary; useful for offline operation
    /// and demos.
    pub fn with_builtin_catalog() -> Self {
        Self::new(Arc::new(StaticStore::new(builtin_catalog())))
    }

    pub fn with_cache(cache: CatalogCache) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &CatalogCache {
        &self.cache
    }

    /// Current catalog snapshot, fetching on first use.
    pub async fn snapshot(&self) -> Result<Arc<CatalogSnapshot>, PipelineError> {
        Ok(self.cache.get().await?)
    }

    /// Drops the warm snapshot and refetches from the store.
    pub async fn refresh(&self) -> Result<Arc<CatalogSnapshot>, PipelineError> {
        Ok(self.cache.force_refresh().await?)
    }

    /// Classifies `recipes` against `inventory` using the current catalog.
    pub async fn match_recipes(
        &self,
        recipes: &[Recipe],
        inventory: &Inventory,
        options: MatchOptions,
    ) -> Result<MatchResult, PipelineError> {
        let snapshot = self.cache.get().await?;
        if snapshot.is_empty() {
            tracing::warn!("matching against an empty catalog; nothing will canonicalize");
        }
        let engine = MatchEngine::new(snapshot, options);
        Ok(engine.match_recipes(recipes, inventory))
    }
}

/// Parses and validates a recipe collection from JSON.
///
/// This is the data-load boundary where the bilingual-list invariant is
/// enforced; a single malformed recipe rejects the batch.
pub fn load_recipes(json: &str) -> Result<Vec<Recipe>, PipelineError> {
    let recipes: Vec<Recipe> = serde_json::from_str(json)?;
    for recipe in &recipes {
        recipe.validate()?;
    }
    Ok(recipes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_recipes_accepts_well_formed_data() {
        let json = r#"[{
            "id": "gin-tonic",
            "name_en": "Gin Tonic",
            "name_zh": "琴通寧",
            "ingredients_en": [{"name": "Gin", "amount": "45ml"},
                               {"name": "Tonic Water", "amount": "120ml"}],
            "ingredients_zh": [{"name": "琴酒", "amount": "45ml"},
                               {"name": "通寧水", "amount": "120ml"}]
        }]"#;
        let recipes = load_recipes(json).expect("valid recipe json");
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].ingredients(Lang::Zh)[1].name, "通寧水");
    }

    #[test]
    fn load_recipes_rejects_mismatched_language_lists() {
        let json = r#"[{
            "id": "gin-tonic",
            "name_en": "Gin Tonic",
            "name_zh": "琴通寧",
            "ingredients_en": [{"name": "Gin"}],
            "ingredients_zh": []
        }]"#;
        let err = load_recipes(json).expect_err("mismatch must be rejected");
        assert!(matches!(
            err,
            PipelineError::Recipe(RecipeError::MismatchedLanguageLists { .. })
        ));
    }

    #[test]
    fn load_recipes_rejects_malformed_json() {
        let err = load_recipes("not json").expect_err("parse failure");
        assert!(matches!(err, PipelineError::Parse(_)));
    }
}
