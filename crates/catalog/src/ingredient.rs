use serde::{Deserialize, Serialize};

/// Language tag for the bilingual catalog.
///
/// The catalog carries English and Traditional Chinese names side by side;
/// matching itself is language-agnostic because it operates on canonical IDs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Zh,
}

impl Lang {
    pub fn as_str(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Zh => "zh",
        }
    }
}

/// Presentation grouping for an ingredient.
///
/// Categories only drive display ordering and the shelf-picker layout; the
/// matching engine never branches on them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    BaseSpirit,
    Liqueur,
    OtherAlcohol,
    Mixer,
    Essential,
    Garnish,
    Other,
}

impl Category {
    /// Declared sort key. Snapshot ordering is (sort key, id).
    pub fn sort_key(self) -> u8 {
        match self {
            Category::BaseSpirit => 0,
            Category::Liqueur => 1,
            Category::OtherAlcohol => 2,
            Category::Mixer => 3,
            Category::Essential => 4,
            Category::Garnish => 5,
            Category::Other => 6,
        }
    }

    pub fn all() -> [Category; 7] {
        [
            Category::BaseSpirit,
            Category::Liqueur,
            Category::OtherAlcohol,
            Category::Mixer,
            Category::Essential,
            Category::Garnish,
            Category::Other,
        ]
    }
}

/// One entry of the canonical ingredient vocabulary.
///
/// The `id` is the only identifier ever stored in an inventory or compared
/// across recipes; names and aliases exist purely to map free recipe text
/// onto it. English and Chinese alias tables are maintained independently —
/// an alias is never assumed to be symmetric across languages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanonicalIngredient {
    /// Stable lowercase-snake token, globally unique within a snapshot.
    pub id: String,
    pub name_en: String,
    pub name_zh: String,
    /// Known synonyms, brand names, and spellings (English, lowercase).
    #[serde(default)]
    pub aliases_en: Vec<String>,
    /// Known synonyms and brand names (Chinese, matched verbatim).
    #[serde(default)]
    pub aliases_zh: Vec<String>,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
}

impl CanonicalIngredient {
    /// Localized display name.
    pub fn name(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.name_en,
            Lang::Zh => &self.name_zh,
        }
    }

    /// Alias table for one language.
    pub fn aliases(&self, lang: Lang) -> &[String] {
        match lang {
            Lang::En => &self.aliases_en,
            Lang::Zh => &self.aliases_zh,
        }
    }
}

/// Display metadata for a category. Passed through to presentation, never
/// consulted by matching.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryMeta {
    pub category: Category,
    pub sort_key: u8,
    pub title_en: String,
    pub title_zh: String,
}

impl CategoryMeta {
    pub fn title(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.title_en,
            Lang::Zh => &self.title_zh,
        }
    }
}

/// Display metadata for a subcategory within a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubcategoryMeta {
    pub id: String,
    pub category: Category,
    pub sort_key: u8,
    pub title_en: String,
    pub title_zh: String,
}

impl SubcategoryMeta {
    pub fn title(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.title_en,
            Lang::Zh => &self.title_zh,
        }
    }
}
