//! Ingredient canonicalization layer.
//!
//! Maps arbitrary recipe ingredient text — bilingual, hand-authored,
//! frequently dirty — onto the canonical IDs of a closed vocabulary. This
//! is deliberately a rule-based normalizer over curated tables, not a
//! natural-language parser.
//!
//! ## The ladder
//!
//! Each fragment of a line is resolved by the first rule that succeeds:
//!
//! 1. exact match on the catalog name for the language
//! 2. exact match in the per-language alias table
//! 3. substring containment (the fragment *contains* a name or alias)
//! 4. fallback: the fragment text itself becomes a pseudo-ID
//!
//! The ordering is fixed and load-bearing; see
//! [`IngredientIndex::resolve_fragment`].
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock, no shared mutable state. Same (name, lang, snapshot)
//! in, same ordered ID list out, on any machine. Dirty input never errors:
//! an unrecognized ingredient degrades to a pseudo-ID that simply never
//! matches a real inventory entry.

mod engine;
mod index;
mod text;

pub use crate::engine::{normalize, Normalizer};
pub use crate::index::IngredientIndex;
pub use crate::text::{split_alternatives, strip_parentheticals};

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{builtin_catalog, Lang};
    use std::sync::Arc;

    #[test]
    fn every_builtin_name_round_trips_to_its_own_id() {
        let snapshot = Arc::new(builtin_catalog());
        let normalizer = Normalizer::new(Arc::clone(&snapshot));

        for ingredient in snapshot.ingredients() {
            let via_en = normalizer.normalize(&ingredient.name_en, Lang::En);
            assert_eq!(
                via_en,
                vec![ingredient.id.clone()],
                "en name {:?} must resolve to {}",
                ingredient.name_en,
                ingredient.id
            );

            let via_zh = normalizer.normalize(&ingredient.name_zh, Lang::Zh);
            assert_eq!(
                via_zh,
                vec![ingredient.id.clone()],
                "zh name {:?} must resolve to {}",
                ingredient.name_zh,
                ingredient.id
            );
        }
    }
}
