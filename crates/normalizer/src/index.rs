use std::sync::Arc;

use catalog::{CatalogSnapshot, Lang};
use fxhash::FxHashMap;

/// Prebuilt lookup view over one catalog snapshot.
///
/// Three structures per language, mirroring the resolution ladder:
/// exact-name map, exact-alias map, and the ordered needle list for the
/// substring pass. English keys are lowercased; Chinese keys are matched
/// verbatim (no casing). First writer wins on key collisions so resolution
/// follows snapshot order, the same order the substring scan walks.
pub struct IngredientIndex {
    snapshot: Arc<CatalogSnapshot>,
    by_name_en: FxHashMap<String, usize>,
    by_name_zh: FxHashMap<String, usize>,
    alias_en: FxHashMap<String, usize>,
    alias_zh: FxHashMap<String, usize>,
    /// (needle, entry index) pairs in entry-major snapshot order:
    /// each entry's name first, then its aliases.
    needles_en: Vec<(String, usize)>,
    needles_zh: Vec<(String, usize)>,
}

impl IngredientIndex {
    pub fn build(snapshot: Arc<CatalogSnapshot>) -> Self {
        let mut by_name_en = FxHashMap::default();
        let mut by_name_zh = FxHashMap::default();
        let mut alias_en = FxHashMap::default();
        let mut alias_zh = FxHashMap::default();
        let mut needles_en = Vec::new();
        let mut needles_zh = Vec::new();

        for (idx, ingredient) in snapshot.ingredients().iter().enumerate() {
            let name_en = ingredient.name_en.to_lowercase();
            by_name_en.entry(name_en.clone()).or_insert(idx);
            by_name_zh
                .entry(ingredient.name_zh.clone())
                .or_insert(idx);

            needles_en.push((name_en, idx));
            needles_zh.push((ingredient.name_zh.clone(), idx));

            for alias in &ingredient.aliases_en {
                let alias = alias.to_lowercase();
                alias_en.entry(alias.clone()).or_insert(idx);
                needles_en.push((alias, idx));
            }
            for alias in &ingredient.aliases_zh {
                alias_zh.entry(alias.clone()).or_insert(idx);
                needles_zh.push((alias.clone(), idx));
            }
        }

        Self {
            snapshot,
            by_name_en,
            by_name_zh,
            alias_en,
            alias_zh,
            needles_en,
            needles_zh,
        }
    }

    pub fn snapshot(&self) -> &CatalogSnapshot {
        &self.snapshot
    }

    /// Resolves one fragment through the fixed ladder:
    /// exact name, then exact alias, then substring containment
    /// (fragment contains a name or alias, scanned in snapshot order).
    /// `None` means the fragment is unrecognized.
    ///
    /// The ladder order is a correctness contract: reordering changes
    /// real-world matches, e.g. "Espresso" must hit its exact name before
    /// any shorter needle gets a chance.
    pub fn resolve_fragment(&self, fragment: &str, lang: Lang) -> Option<&str> {
        match lang {
            Lang::En => {
                let key = fragment.to_lowercase();
                self.by_name_en
                    .get(&key)
                    .or_else(|| self.alias_en.get(&key))
                    .copied()
                    .or_else(|| {
                        self.needles_en
                            .iter()
                            .find(|(needle, _)| key.contains(needle.as_str()))
                            .map(|(_, idx)| *idx)
                    })
                    .map(|idx| self.id_at(idx))
            }
            Lang::Zh => self
                .by_name_zh
                .get(fragment)
                .or_else(|| self.alias_zh.get(fragment))
                .copied()
                .or_else(|| {
                    self.needles_zh
                        .iter()
                        .find(|(needle, _)| fragment.contains(needle.as_str()))
                        .map(|(_, idx)| *idx)
                })
                .map(|idx| self.id_at(idx)),
        }
    }

    fn id_at(&self, idx: usize) -> &str {
        &self.snapshot.ingredients()[idx].id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::builtin_catalog;

    fn index() -> IngredientIndex {
        IngredientIndex::build(Arc::new(builtin_catalog()))
    }

    #[test]
    fn exact_name_beats_substring() {
        // "Espresso" must resolve through its exact name, never through a
        // shorter needle contained in it.
        assert_eq!(index().resolve_fragment("Espresso", Lang::En), Some("espresso"));
    }

    #[test]
    fn alias_beats_substring() {
        // "Tequila Cider" is a curated alias of apple cider; the substring
        // pass would have claimed it for tequila.
        assert_eq!(
            index().resolve_fragment("Tequila Cider", Lang::En),
            Some("hard_cider")
        );
    }

    #[test]
    fn substring_pass_catches_descriptive_phrases() {
        assert_eq!(
            index().resolve_fragment("Iced Americano", Lang::En),
            Some("black_coffee")
        );
        assert_eq!(index().resolve_fragment("冰美式咖啡", Lang::Zh), Some("black_coffee"));
    }

    #[test]
    fn unknown_fragment_is_none() {
        assert_eq!(index().resolve_fragment("Dragonfruit Foam", Lang::En), None);
    }

    #[test]
    fn chinese_lookup_is_verbatim() {
        assert_eq!(index().resolve_fragment("烏龍茶", Lang::Zh), Some("oolong_tea"));
        assert_eq!(index().resolve_fragment("波本", Lang::Zh), Some("whiskey"));
    }
}
