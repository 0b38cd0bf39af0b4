//! Recipe-inventory matching layer.
//!
//! Sits on top of the catalog and normalizer crates and answers the one
//! question the product cares about: given what the user owns, which recipes
//! can they make right now, and which are exactly one real ingredient away?
//!
//! ## Core types
//!
//! - [`Recipe`] / [`IngredientLine`]: bilingual recipe data as loaded from
//!   the external recipe source. [`Recipe::validate`] guards the
//!   parallel-list invariant at load time.
//! - [`Inventory`]: the user's set of canonical ingredient IDs, consumed as
//!   an immutable snapshot per pass.
//! - [`MatchOptions`]: label language + the always-on-hand ignorable IDs.
//! - [`MatchEngine`]: runs the pass; [`MatchResult`] holds the `available`
//!   and `missing_one` buckets. Recipes missing two or more ingredients are
//!   simply not shown — that is policy, not an error.
//!
//! Matching never fails on dirty text: unresolvable ingredients degrade to
//! pseudo-IDs upstream and surface here as missing lines with the raw text
//! as their label.

pub mod engine;
pub mod types;

pub use crate::engine::MatchEngine;
pub use crate::types::{
    IngredientLine, Inventory, MatchOptions, MatchResult, MissingOne, Recipe, RecipeError,
};
