use std::sync::Arc;

use catalog::{CatalogSnapshot, Lang};
use normalizer::{strip_parentheticals, Normalizer};

use crate::types::{IngredientLine, Inventory, MatchOptions, MatchResult, MissingOne, Recipe};


/// Outcome for one whole recipe.
enum Classification {
    Available,
    MissingOne(String),
    OutOfReach,
}

/// Classifies recipes against an inventory snapshot.
///
/// Matching always evaluates the English ingredient list: canonical IDs are
/// language-agnostic, so the working language is an implementation constant
/// and only missing-ingredient labels honor `MatchOptions::display_lang`.
///
/// The pass is pure computation — no I/O, no suspension, no shared mutable
/// state — and each recipe is classified independently of the others.
pub struct MatchEngine {
    normalizer: Normalizer,
    options: MatchOptions,
}

impl MatchEngine {
    pub fn new(snapshot: Arc<CatalogSnapshot>, options: MatchOptions) -> Self {
        Self::with_normalizer(Normalizer::new(snapshot), options)
    }

    pub fn with_normalizer(normalizer: Normalizer, options: MatchOptions) -> Self {
        Self {
            normalizer,
            options,
        }
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Runs one synchronous match pass.
    ///
    /// Per recipe: zero missing lines → available; exactly one → missing-one
    /// with the label of the single gap; two or more → out of reach, shown
    /// in neither bucket. Input order is preserved within each bucket.
    pub fn match_recipes(&self, recipes: &[Recipe], inventory: &Inventory) -> MatchResult {
        let mut result = MatchResult::default();
        let mut out_of_reach = 0usize;

        for recipe in recipes {
            match self.classify(recipe, inventory) {
                Classification::Available => result.available.push(recipe.clone()),
                Classification::MissingOne(missing_label) => result.missing_one.push(MissingOne {
                    recipe: recipe.clone(),
                    missing_label,
                }),
                Classification::OutOfReach => out_of_reach += 1,
            }
        }

        tracing::debug!(
            recipes = recipes.len(),
            available = result.available.len(),
            missing_one = result.missing_one.len(),
            out_of_reach,
            inventory = inventory.len(),
            "classified recipes"
        );
        result
    }

    fn classify(&self, recipe: &Recipe, inventory: &Inventory) -> Classification {
        let mut missing_count = 0usize;
        let mut first_missing: Option<String> = None;

        for line in &recipe.ingredients_en {
            let candidates = self.normalizer.normalize(&line.name, Lang::En);
            // A blank name carries no requirement.
            if candidates.is_empty() {
                continue;
            }
            // Any-of: a compound line is satisfied by any one alternative.
            if candidates.iter().any(|id| inventory.contains(id)) {
                continue;
            }
            if candidates
                .iter()
                .any(|id| self.options.ignorable.iter().any(|ignorable| ignorable == id))
            {
                continue;
            }
            // Duplicate lines each count on their own; no dedup across the
            // recipe.
            missing_count += 1;
            if first_missing.is_none() {
                first_missing = Some(self.missing_label(line, &candidates));
            }
        }

        match (missing_count, first_missing) {
            (0, _) => Classification::Available,
            (1, Some(missing_label)) => Classification::MissingOne(missing_label),
            _ => Classification::OutOfReach,
        }
    }

    /// Display label for a missing line: the localized catalog name of the
    /// first candidate the catalog knows, else the line text with
    /// parentheticals removed.
    fn missing_label(&self, line: &IngredientLine, candidates: &[String]) -> String {
        for id in candidates {
            if self.normalizer.snapshot().ingredient(id).is_some() {
                return self
                    .normalizer
                    .label(id, self.options.display_lang)
                    .to_string();
            }
        }

        let stripped = strip_parentheticals(line.name.trim());
        let stripped = stripped.trim();
        if stripped.is_empty() {
            line.name.trim().to_string()
        } else {
            stripped.to_string()
        }
    }
}
