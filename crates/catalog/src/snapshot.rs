use std::collections::HashSet;

use serde::Serialize;

use crate::error::CatalogError;
use crate::ingredient::{CanonicalIngredient, CategoryMeta, SubcategoryMeta};

/// One atomically-committed catalog fetch result.
///
/// Ingredients and category metadata always travel together so no consumer
/// can observe a catalog/metadata generation mismatch. Construction validates
/// the catalog invariants and fixes the iteration order to
/// (category sort key, id), which both presentation and the normalizer's
/// substring pass rely on for determinism.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CatalogSnapshot {
    ingredients: Vec<CanonicalIngredient>,
    categories: Vec<CategoryMeta>,
    subcategories: Vec<SubcategoryMeta>,
}

impl CatalogSnapshot {
    /// Validates and orders a fetched catalog.
    ///
    /// Rejected: duplicate ids, empty ids, ids that are not lowercase-snake
    /// tokens, and empty localized names.
    pub fn new(
        ingredients: Vec<CanonicalIngredient>,
        categories: Vec<CategoryMeta>,
        subcategories: Vec<SubcategoryMeta>,
    ) -> Result<Self, CatalogError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(ingredients.len());
        for ingredient in &ingredients {
            if ingredient.id.is_empty() {
                return Err(CatalogError::InvalidCatalog(
                    "ingredient with empty id".into(),
                ));
            }
            if !ingredient
                .id
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
            {
                return Err(CatalogError::InvalidCatalog(format!(
                    "ingredient id is not a lowercase-snake token: {:?}",
                    ingredient.id
                )));
            }
            if ingredient.name_en.is_empty() || ingredient.name_zh.is_empty() {
                return Err(CatalogError::InvalidCatalog(format!(
                    "ingredient {} has an empty localized name",
                    ingredient.id
                )));
            }
            if !seen.insert(ingredient.id.as_str()) {
                return Err(CatalogError::InvalidCatalog(format!(
                    "duplicate ingredient id: {}",
                    ingredient.id
                )));
            }
        }

        let mut ingredients = ingredients;
        ingredients.sort_by(|a, b| {
            (a.category.sort_key(), a.id.as_str()).cmp(&(b.category.sort_key(), b.id.as_str()))
        });

        let mut categories = categories;
        categories.sort_by_key(|c| c.sort_key);
        let mut subcategories = subcategories;
        subcategories.sort_by_key(|s| s.sort_key);

        Ok(Self {
            ingredients,
            categories,
            subcategories,
        })
    }

    /// Snapshot with no entries. Callers should treat this as a
    /// loading/error state: nothing will canonicalize against it.
    pub fn empty() -> Self {
        Self {
            ingredients: Vec::new(),
            categories: Vec::new(),
            subcategories: Vec::new(),
        }
    }

    /// Entries in (category sort key, id) order.
    pub fn ingredients(&self) -> &[CanonicalIngredient] {
        &self.ingredients
    }

    /// Label lookup by canonical id.
    pub fn ingredient(&self, id: &str) -> Option<&CanonicalIngredient> {
        self.ingredients.iter().find(|i| i.id == id)
    }

    pub fn categories(&self) -> &[CategoryMeta] {
        &self.categories
    }

    pub fn subcategories(&self) -> &[SubcategoryMeta] {
        &self.subcategories
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}
