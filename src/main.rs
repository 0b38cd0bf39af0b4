use std::error::Error;

use barmatch::{load_recipes, Bar, Inventory, Lang, MatchOptions};
use tracing_subscriber::EnvFilter;

/// Small bundled recipe set for the demo run. Real deployments load recipes
/// from the external recipe source instead.
const DEMO_RECIPES: &str = r#"[
  {
    "id": "gin-tonic",
    "name_en": "Gin Tonic",
    "name_zh": "琴通寧",
    "ingredients_en": [
      {"name": "Gin", "amount": "45ml"},
      {"name": "Tonic Water", "amount": "120ml"},
      {"name": "Lime", "amount": "1 wedge"},
      {"name": "Ice", "amount": "full glass"}
    ],
    "ingredients_zh": [
      {"name": "琴酒", "amount": "45ml"},
      {"name": "通寧水", "amount": "120ml"},
      {"name": "萊姆", "amount": "1片"},
      {"name": "冰塊", "amount": "滿杯"}
    ]
  },
  {
    "id": "oolong-highball",
    "name_en": "Oolong Highball",
    "name_zh": "烏龍Highball",
    "ingredients_en": [
      {"name": "Whiskey", "amount": "45ml"},
      {"name": "Sugar-free Oolong Tea (Tea Pot brand)", "amount": "150ml"},
      {"name": "Ice", "amount": "full glass"}
    ],
    "ingredients_zh": [
      {"name": "威士忌", "amount": "45ml"},
      {"name": "無糖烏龍茶 (茶裏王等)", "amount": "150ml"},
      {"name": "冰塊", "amount": "滿杯"}
    ]
  },
  {
    "id": "screwdriver",
    "name_en": "Screwdriver",
    "name_zh": "螺絲起子",
    "ingredients_en": [
      {"name": "Vodka", "amount": "45ml"},
      {"name": "Orange Juice", "amount": "120ml"},
      {"name": "Ice", "amount": "full glass"}
    ],
    "ingredients_zh": [
      {"name": "伏特加", "amount": "45ml"},
      {"name": "柳橙汁", "amount": "120ml"},
      {"name": "冰塊", "amount": "滿杯"}
    ]
  },
  {
    "id": "bloody-mary",
    "name_en": "Bloody Mary",
    "name_zh": "血腥瑪麗",
    "ingredients_en": [
      {"name": "Vodka", "amount": "45ml"},
      {"name": "Tomato Juice", "amount": "90ml"},
      {"name": "Worcestershire", "amount": "2 dashes"},
      {"name": "Tabasco", "amount": "2 dashes"},
      {"name": "Celery Stalk", "amount": "1"}
    ],
    "ingredients_zh": [
      {"name": "伏特加", "amount": "45ml"},
      {"name": "番茄汁", "amount": "90ml"},
      {"name": "伍斯特醬", "amount": "少許"},
      {"name": "辣椒醬", "amount": "少許"},
      {"name": "芹菜棒", "amount": "1根"}
    ]
  }
]"#;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Ingredient IDs from the command line become the inventory; without
    // arguments a small home bar is assumed.
    let args: Vec<String> = std::env::args().skip(1).collect();
    let inventory = if args.is_empty() {
        Inventory::from_ids(["gin", "whiskey", "tonic", "lemon"])
    } else {
        Inventory::from_ids(args)
    };

    let bar = Bar::with_builtin_catalog();
    let recipes = load_recipes(DEMO_RECIPES)?;
    let result = bar
        .match_recipes(&recipes, &inventory, MatchOptions::default())
        .await?;

    println!("Inventory: {}", inventory.ids().collect::<Vec<_>>().join(", "));
    println!();
    println!("You can make now ({}):", result.available.len());
    for recipe in &result.available {
        println!("  {}", recipe.name(Lang::En));
    }
    println!();
    println!("One ingredient away ({}):", result.missing_one.len());
    for entry in &result.missing_one {
        println!(
            "  {} — missing {}",
            entry.recipe.name(Lang::En),
            entry.missing_label
        );
    }

    Ok(())
}
