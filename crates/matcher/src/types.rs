use std::collections::HashSet;

use catalog::Lang;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One ingredient requirement of a recipe.
///
/// `name` is free text in a single language and is adversarial input to the
/// normalizer; `amount` is an opaque display string, never interpreted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngredientLine {
    pub name: String,
    #[serde(default)]
    pub amount: String,
}

/// A recipe with its bilingual ingredient lists and display fields.
///
/// The English and Chinese lists describe the same logical ingredients in
/// the same order. That parallelism is not structurally enforced by the
/// shape, so [`Recipe::validate`] must run at data-load time; matching
/// itself only ever walks the English list and never indexes across the two.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recipe {
    pub id: String,
    pub name_en: String,
    pub name_zh: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub ingredients_en: Vec<IngredientLine>,
    pub ingredients_zh: Vec<IngredientLine>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Recipe {
    pub fn name(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.name_en,
            Lang::Zh => &self.name_zh,
        }
    }

    pub fn ingredients(&self, lang: Lang) -> &[IngredientLine] {
        match lang {
            Lang::En => &self.ingredients_en,
            Lang::Zh => &self.ingredients_zh,
        }
    }

    /// Checks the invariants a loaded recipe must satisfy.
    pub fn validate(&self) -> Result<(), RecipeError> {
        if self.id.trim().is_empty() {
            return Err(RecipeError::MissingId);
        }
        if self.ingredients_en.len() != self.ingredients_zh.len() {
            return Err(RecipeError::MismatchedLanguageLists {
                id: self.id.clone(),
                en: self.ingredients_en.len(),
                zh: self.ingredients_zh.len(),
            });
        }
        Ok(())
    }
}

/// Errors raised when validating recipe data at load time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecipeError {
    #[error("recipe has an empty id")]
    MissingId,
    #[error("recipe {id}: language ingredient lists differ in length (en {en}, zh {zh})")]
    MismatchedLanguageLists { id: String, en: usize, zh: usize },
}

/// The set of canonical ingredient IDs a user owns.
///
/// Mutated only through the explicit operations here; the matcher consumes
/// it as an immutable snapshot per computation. Persistence and sync live
/// with an external collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Inventory(HashSet<String>);

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(ids.into_iter().map(Into::into).collect())
    }

    pub fn add(&mut self, id: impl Into<String>) -> bool {
        self.0.insert(id.into())
    }

    pub fn remove(&mut self, id: &str) -> bool {
        self.0.remove(id)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Tuning for one match pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchOptions {
    /// Language used for missing-ingredient labels. Matching itself always
    /// runs on canonical IDs and is unaffected.
    #[serde(default)]
    pub display_lang: Lang,
    /// IDs assumed universally on hand; a line resolving to any of these is
    /// satisfied without inventory support.
    #[serde(default = "MatchOptions::default_ignorable")]
    pub ignorable: Vec<String>,
}

impl MatchOptions {
    pub(crate) fn default_ignorable() -> Vec<String> {
        vec!["ice".to_string(), "water".to_string()]
    }
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            display_lang: Lang::default(),
            ignorable: Self::default_ignorable(),
        }
    }
}

/// A recipe one real ingredient short, with the display label for the gap.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MissingOne {
    pub recipe: Recipe,
    pub missing_label: String,
}

/// Result of one match pass. Derived and ephemeral — recompute whenever the
/// inventory or the recipe list changes, never persist.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct MatchResult {
    pub available: Vec<Recipe>,
    pub missing_one: Vec<MissingOne>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str) -> IngredientLine {
        IngredientLine {
            name: name.into(),
            amount: String::new(),
        }
    }

    #[test]
    fn mismatched_language_lists_rejected() {
        let recipe = Recipe {
            id: "gin-tonic".into(),
            name_en: "Gin Tonic".into(),
            name_zh: "琴通寧".into(),
            description: None,
            ingredients_en: vec![line("Gin"), line("Tonic Water")],
            ingredients_zh: vec![line("琴酒")],
            tags: Vec::new(),
        };
        assert_eq!(
            recipe.validate(),
            Err(RecipeError::MismatchedLanguageLists {
                id: "gin-tonic".into(),
                en: 2,
                zh: 1,
            })
        );
    }

    #[test]
    fn inventory_mutates_only_through_explicit_ops() {
        let mut inventory = Inventory::new();
        assert!(inventory.add("gin"));
        assert!(!inventory.add("gin"));
        assert!(inventory.contains("gin"));
        assert!(inventory.remove("gin"));
        assert!(inventory.is_empty());

        let mut seeded = Inventory::from_ids(["gin", "tonic"]);
        assert_eq!(seeded.len(), 2);
        seeded.clear();
        assert!(seeded.is_empty());
    }

    #[test]
    fn default_ignorable_set_is_ice_and_water() {
        let options = MatchOptions::default();
        assert_eq!(options.ignorable, vec!["ice", "water"]);
        assert_eq!(options.display_lang, Lang::En);
    }
}
