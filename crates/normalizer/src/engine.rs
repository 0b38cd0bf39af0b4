use std::sync::Arc;

use catalog::{CatalogSnapshot, Lang};

use crate::index::IngredientIndex;
use crate::text::{split_alternatives, strip_parentheticals};

/// Canonicalizes one free-text ingredient name into an ordered,
/// deduplicated list of candidate IDs.
///
/// Pipeline: strip parentheticals → split alternatives → resolve each
/// fragment through the index ladder. A fragment nothing resolves becomes
/// its own pseudo-ID (the trimmed fragment text) — it will simply never
/// equal a real canonical ID. Empty input yields an empty list; any
/// non-empty input yields at least one entry.
///
/// Pure function of (name, lang, index): no I/O, no shared state, safe to
/// call redundantly and memoize by input.
pub fn normalize(name: &str, lang: Lang, index: &IngredientIndex) -> Vec<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let stripped = strip_parentheticals(trimmed);
    let stripped = stripped.trim();
    // Stripping can consume the whole line ("(garnish)"); fall back to the
    // original text rather than losing the ingredient.
    let base = if stripped.is_empty() { trimmed } else { stripped };

    let mut ids: Vec<String> = Vec::new();
    for fragment in split_alternatives(base, lang) {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            continue;
        }
        let id = match index.resolve_fragment(fragment, lang) {
            Some(id) => id.to_string(),
            None => {
                tracing::debug!(fragment, lang = lang.as_str(), "unresolved ingredient fragment");
                fragment.to_string()
            }
        };
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}

/// Normalizer bound to one catalog snapshot.
///
/// Construction builds the lookup index once; every call after that is pure
/// computation over it.
pub struct Normalizer {
    index: IngredientIndex,
}

impl Normalizer {
    pub fn new(snapshot: Arc<CatalogSnapshot>) -> Self {
        Self {
            index: IngredientIndex::build(snapshot),
        }
    }

    pub fn normalize(&self, name: &str, lang: Lang) -> Vec<String> {
        normalize(name, lang, &self.index)
    }

    /// Localized display name for a canonical ID, falling back to the ID
    /// itself when the catalog has no such entry (pseudo-IDs land here).
    pub fn label<'a>(&'a self, id: &'a str, lang: Lang) -> &'a str {
        self.index
            .snapshot()
            .ingredient(id)
            .map(|ingredient| ingredient.name(lang))
            .unwrap_or(id)
    }

    pub fn index(&self) -> &IngredientIndex {
        &self.index
    }

    pub fn snapshot(&self) -> &CatalogSnapshot {
        self.index.snapshot()
    }
}
