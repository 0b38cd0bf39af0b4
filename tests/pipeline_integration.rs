//! End-to-end pipeline: catalog → normalizer → matcher through `Bar`.

use std::sync::Arc;

use barmatch::{
    load_recipes, Bar, CatalogSnapshot, Inventory, Lang, MatchOptions, StaticStore,
};

const RECIPES: &str = r#"[
  {
    "id": "gin-tonic",
    "name_en": "Gin Tonic",
    "name_zh": "琴通寧",
    "ingredients_en": [
      {"name": "Gin", "amount": "45ml"},
      {"name": "Tonic Water", "amount": "120ml"},
      {"name": "Ice", "amount": "full glass"}
    ],
    "ingredients_zh": [
      {"name": "琴酒", "amount": "45ml"},
      {"name": "通寧水", "amount": "120ml"},
      {"name": "冰塊", "amount": "滿杯"}
    ]
  },
  {
    "id": "oolong-highball",
    "name_en": "Oolong Highball",
    "name_zh": "烏龍Highball",
    "ingredients_en": [
      {"name": "Whiskey", "amount": "45ml"},
      {"name": "Sugar-free Oolong Tea (Tea Pot brand)", "amount": "150ml"}
    ],
    "ingredients_zh": [
      {"name": "威士忌", "amount": "45ml"},
      {"name": "無糖烏龍茶 (茶裏王等)", "amount": "150ml"}
    ]
  },
  {
    "id": "shochu-soda",
    "name_en": "Shochu Soda",
    "name_zh": "燒酒蘇打",
    "ingredients_en": [
      {"name": "Shochu or Vodka", "amount": "60ml"},
      {"name": "Club Soda", "amount": "120ml"}
    ],
    "ingredients_zh": [
      {"name": "燒酒或伏特加", "amount": "60ml"},
      {"name": "蘇打水", "amount": "120ml"}
    ]
  },
  {
    "id": "negroni",
    "name_en": "Negroni",
    "name_zh": "內格羅尼",
    "ingredients_en": [
      {"name": "Gin", "amount": "30ml"},
      {"name": "Campari", "amount": "30ml"},
      {"name": "Sweet Vermouth", "amount": "30ml"}
    ],
    "ingredients_zh": [
      {"name": "琴酒", "amount": "30ml"},
      {"name": "金巴利", "amount": "30ml"},
      {"name": "甜香艾酒", "amount": "30ml"}
    ]
  }
]"#;

#[tokio::test]
async fn classifies_the_demo_shelf_correctly() {
    let bar = Bar::with_builtin_catalog();
    let recipes = load_recipes(RECIPES).expect("demo recipes are valid");
    let inventory = Inventory::from_ids(["gin", "tonic", "whiskey", "vodka", "soda"]);

    let result = bar
        .match_recipes(&recipes, &inventory, MatchOptions::default())
        .await
        .expect("pipeline runs");

    let available: Vec<&str> = result.available.iter().map(|r| r.id.as_str()).collect();
    // gin-tonic: everything stocked, ice is ignorable.
    // shochu-soda: "Shochu or Vodka" satisfied by vodka alone (any-of).
    assert_eq!(available, vec!["gin-tonic", "shochu-soda"]);

    // oolong-highball misses exactly the tea; negroni misses two and is
    // shown in neither bucket.
    assert_eq!(result.missing_one.len(), 1);
    assert_eq!(result.missing_one[0].recipe.id, "oolong-highball");
    assert_eq!(result.missing_one[0].missing_label, "Oolong Tea");
}

#[tokio::test]
async fn labels_follow_the_display_language() {
    let bar = Bar::with_builtin_catalog();
    let recipes = load_recipes(RECIPES).expect("demo recipes are valid");
    let inventory = Inventory::from_ids(["whiskey"]);

    let options = MatchOptions {
        display_lang: Lang::Zh,
        ..MatchOptions::default()
    };
    let result = bar
        .match_recipes(&recipes, &inventory, options)
        .await
        .expect("pipeline runs");

    let highball = result
        .missing_one
        .iter()
        .find(|m| m.recipe.id == "oolong-highball")
        .expect("one short of the highball");
    assert_eq!(highball.missing_label, "烏龍茶");
}

#[tokio::test]
async fn empty_catalog_is_a_distinct_degraded_state() {
    let bar = Bar::new(Arc::new(StaticStore::new(CatalogSnapshot::empty())));
    let recipes = load_recipes(RECIPES).expect("demo recipes are valid");
    let inventory = Inventory::from_ids(["gin", "tonic", "whiskey", "vodka", "soda"]);

    let snapshot = bar.snapshot().await.expect("empty snapshot loads");
    assert!(snapshot.is_empty(), "callers can detect the degraded state");

    let result = bar
        .match_recipes(&recipes, &inventory, MatchOptions::default())
        .await
        .expect("matching still runs");
    // Nothing canonicalizes, so nothing matches the inventory.
    assert!(result.available.is_empty());
}

#[tokio::test]
async fn refresh_serves_the_new_snapshot_to_matching() {
    let bar = Bar::with_builtin_catalog();
    let before = bar.snapshot().await.expect("first fetch");
    let after = bar.refresh().await.expect("refresh");

    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(before.len(), after.len());
}
