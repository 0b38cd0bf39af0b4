//! Builtin ingredient vocabulary.
//!
//! The hand-maintained bilingual catalog the app ships with: canonical IDs,
//! English/Chinese display names, and the per-language alias tables that
//! absorb synonyms, brand names, and merged historical entries. This is the
//! data the normalizer's behavior lives in — the tables are curated against
//! real recipe text and intentionally keep their quirks (e.g. cordial- and
//! juice-based lime both collapse into `lemon`).

use crate::ingredient::{CanonicalIngredient, Category, CategoryMeta, SubcategoryMeta};
use crate::snapshot::CatalogSnapshot;

struct Row {
    id: &'static str,
    en: &'static str,
    zh: &'static str,
    category: Category,
    subcategory: Option<&'static str>,
    aliases_en: &'static [&'static str],
    aliases_zh: &'static [&'static str],
}

const fn row(
    id: &'static str,
    en: &'static str,
    zh: &'static str,
    category: Category,
    subcategory: Option<&'static str>,
    aliases_en: &'static [&'static str],
    aliases_zh: &'static [&'static str],
) -> Row {
    Row {
        id,
        en,
        zh,
        category,
        subcategory,
        aliases_en,
        aliases_zh,
    }
}

use Category::{BaseSpirit, Essential, Garnish, Liqueur, Mixer, OtherAlcohol};

#[rustfmt::skip]
const ROWS: &[Row] = &[
    // Base spirits
    row("whiskey", "Whiskey", "威士忌", BaseSpirit, None,
        &["bourbon", "rye whiskey", "mini whiskey bottle", "whisky"],
        &["小樣酒（威士忌）", "小樣酒", "波本威士忌", "波本", "黑麥威士忌"]),
    row("gin", "Gin", "琴酒", BaseSpirit, None, &[], &[]),
    row("vodka", "Vodka", "伏特加", BaseSpirit, None,
        &["vodka citron"], &["檸檬伏特加"]),
    row("rum", "Rum", "蘭姆酒", BaseSpirit, None,
        &["white rum", "aged rum"], &["白蘭姆酒", "陳年蘭姆酒"]),
    row("tequila", "Tequila", "龍舌蘭", BaseSpirit, None,
        &["tequila blanco"], &["銀龍舌蘭", "金龍舌蘭"]),
    row("brandy", "Brandy", "白蘭地", BaseSpirit, None,
        &["cognac"], &["干邑白蘭地"]),

    // Liqueurs & fortified
    row("liqueur", "Liqueur", "利口酒", Liqueur, None, &[], &[]),
    row("vermouth", "Vermouth", "香艾酒", Liqueur, None,
        &["sweet vermouth"], &["甜香艾酒"]),
    row("dry_vermouth", "Dry Vermouth", "不甜香艾酒", Liqueur, None, &[], &[]),
    // The display name is a compound; the alias table is what makes each
    // half resolvable after splitting.
    row("cointreau", "Cointreau/Curacao", "橙酒/柑橘酒", Liqueur, None,
        &["cointreau", "triple sec", "orange curacao", "blue curacao", "curacao"],
        &["君度橙酒", "橙酒", "白柑橘酒", "藍柑橘酒", "柑橘酒", "柑橘香甜酒"]),
    // Kept for catalog completeness; its exact names win over the
    // cointreau aliases above.
    row("curacao", "Blue Curacao", "藍柑橘酒", Liqueur, None, &[], &[]),
    row("jagermeister", "Jägermeister", "野格利口酒", Liqueur, None,
        &["jagermeister", "jager"], &["野格"]),
    row("grand_marnier", "Grand Marnier", "柑曼怡", Liqueur, None, &[], &[]),
    row("amaretto", "Amaretto", "杏仁酒", Liqueur, None, &[], &[]),
    row("coffee_liqueur", "Coffee Liqueur", "咖啡酒", Liqueur, None,
        &[], &["咖啡香甜酒"]),
    row("cocoa_liqueur", "Cocoa Liqueur", "可可酒", Liqueur, None,
        &["creme de cacao"], &["可可香甜酒", "可可"]),
    row("baileys", "Irish Cream", "奶酒", Liqueur, None,
        &["baileys"], &["貝禮詩奶酒"]),
    row("campari", "Campari", "金巴利", Liqueur, None, &[], &[]),
    row("aperol", "Aperol", "艾佩羅", Liqueur, None, &[], &[]),
    row("malibu", "Malibu", "馬利寶", Liqueur, None, &[], &[]),

    // Other alcohol
    row("kaoliang", "Kaoliang", "高粱酒", OtherAlcohol, None,
        &["sorghum"], &["高粱"]),
    row("white_wine", "White Wine", "白酒", OtherAlcohol, None, &[], &[]),
    row("wine", "Red Wine", "紅酒", OtherAlcohol, None, &[], &[]),
    row("beer", "Beer", "啤酒", OtherAlcohol, None,
        &["lager beer", "lager"], &["拉格啤酒"]),
    row("soju", "Soju", "燒酒", OtherAlcohol, None,
        &["shochu"], &["韓國燒酒", "原味燒酒"]),
    row("sake", "Sake", "清酒", OtherAlcohol, None, &[], &[]),
    row("champagne", "Champagne", "香檳", OtherAlcohol, None, &[], &[]),
    row("hard_cider", "Apple Cider", "蘋果酒", OtherAlcohol, None,
        &["cider", "somersby", "tequila cider"], &[]),
    row("prosecco", "Prosecco", "Prosecco氣泡酒", OtherAlcohol, None, &[], &[]),

    // Mixers
    row("soda", "Soda Water", "氣泡水", Mixer, Some("soda"),
        &["club soda", "sparkling water", "soda", "lemon sparkling water", "lemon soda", "cc lemon"],
        &["蘇打水", "檸檬氣泡水", "檸檬汽水", "CC檸檬"]),
    row("tonic", "Tonic Water", "通寧水", Mixer, Some("soda"), &[], &[]),
    row("coke", "Coke", "可樂", Mixer, Some("soda"), &["coca-cola"], &[]),
    row("sprite", "Sprite", "雪碧", Mixer, Some("soda"),
        &["7-up", "seven up"], &["七喜"]),
    row("ginger_ale", "Ginger Ale", "薑汁汽水", Mixer, Some("soda"), &[], &[]),
    row("grapefruit_soda", "Grapefruit Soda", "葡萄柚汽水", Mixer, Some("soda"),
        &[], &["葡萄柚氣泡水"]),
    row("apple_soda", "Apple Sidra", "蘋果西打", Mixer, Some("soda"),
        &[], &["西打"]),
    row("sarsaparilla", "Sarsaparilla", "沙士", Mixer, Some("soda"),
        &["root beer"], &[]),
    row("ginger_beer", "Ginger Beer", "薑汁啤酒", Mixer, Some("soda"), &[], &[]),
    row("orange_juice", "Orange Juice", "柳橙汁", Mixer, Some("juice"), &[], &[]),
    row("cranberry_juice", "Cranberry Juice", "蔓越莓汁", Mixer, Some("juice"), &[], &[]),
    row("tomato_juice", "Tomato Juice", "番茄汁", Mixer, Some("juice"), &[], &[]),
    row("guava_juice", "Guava Juice", "芭樂汁", Mixer, Some("juice"), &[], &[]),
    row("peach_juice", "Peach Juice", "水蜜桃汁", Mixer, Some("juice"), &[], &[]),
    row("grape_juice", "Grape Juice", "葡萄汁", Mixer, Some("juice"), &[], &[]),
    row("tea", "Black Tea", "紅茶", Mixer, Some("tea"),
        &["tea", "assam", "minechine"], &["麥香", "茶"]),
    row("oolong_tea", "Oolong Tea", "烏龍茶", Mixer, Some("tea"),
        &["oolong"], &["烏龍"]),
    row("green_tea", "Green Tea", "綠茶", Mixer, Some("tea"), &[], &[]),
    row("milk_tea", "Milk Tea", "奶茶", Mixer, Some("tea"),
        &["hot milk tea"], &["熱奶茶"]),
    row("ginger_tea", "Ginger Tea", "薑茶", Mixer, Some("tea"),
        &["hot ginger tea"], &["熱薑茶"]),
    row("barley_tea", "Barley Tea", "麥仔茶", Mixer, Some("tea"), &[], &[]),
    row("lemon_tea", "Lemon Tea", "檸檬紅茶", Mixer, Some("tea"),
        &["lemon iced tea"], &[]),
    row("plum_green_tea", "Plum Green Tea", "梅子綠茶", Mixer, Some("tea"),
        &[], &["梅子綠"]),
    row("espresso", "Espresso", "濃縮咖啡", Mixer, Some("coffee"),
        &["coffee", "hot coffee"], &["咖啡", "熱咖啡", "濃縮"]),
    row("black_coffee", "Black Coffee", "黑咖啡", Mixer, Some("coffee"),
        &["americano"], &["美式咖啡", "冰美式", "美式"]),
    row("milk", "Milk", "牛奶", Mixer, Some("dairy"), &[], &[]),
    row("calpis", "Calpis", "可爾必思", Mixer, Some("dairy"),
        &["concentrate"], &[]),
    row("yakult", "Yakult", "養樂多", Mixer, Some("dairy"), &[], &[]),
    row("soy_milk", "Soy Milk", "豆漿", Mixer, Some("dairy"),
        &["soymilk"], &["無糖豆漿"]),
    row("hot_chocolate", "Hot Chocolate", "熱可可", Mixer, None, &[], &[]),
    row("energy_drink", "Energy Drink", "能量飲料", Mixer, None,
        &["red bull"], &[]),
    row("sports_drink", "Sports Drink", "運動飲料", Mixer, None,
        &["pocari", "pocari sweat"], &["寶礦力", "舒跑"]),
    row("grass_jelly", "Grass Jelly", "燒仙草", Mixer, None,
        &["hot grass jelly"], &[]),
    row("pudding", "Pudding", "布丁", Mixer, None,
        &["uni-president pudding", "uni-president"], &["統一布丁"]),
    row("melon_popsicle", "Melon Popsicle", "哈密瓜冰棒", Mixer, None,
        &["melona", "honeydew melon popsicle"], &["Melona", "冰棒", "哈密瓜"]),
    row("grenadine", "Grenadine", "紅石榴糖漿", Mixer, None, &[], &[]),
    row("orgeat", "Orgeat", "杏仁糖漿", Mixer, None, &["orgeat syrup"], &[]),
    row("aloe", "Aloe Drink", "蘆薈飲", Mixer, None, &["aloe"], &["蘆薈"]),
    row("plum", "Sour Plum", "梅子 (話梅)", Mixer, None,
        &["plum"], &["梅子", "話梅"]),

    // Essentials
    row("ice", "Ice", "冰塊", Essential, None, &[], &[]),
    row("water", "Water", "水", Essential, None,
        &["hot water", "cold water"], &[]),
    row("sugar", "Sugar", "糖", Essential, None,
        &["sugar cube", "simple syrup", "sugar syrup", "rich syrup", "syrup"],
        &["方糖", "半糖", "糖水", "糖漿", "砂糖"]),
    row("salt", "Salt", "鹽", Essential, None, &[], &[]),
    row("bitters", "Bitters", "苦精", Essential, None,
        &["angostura bitters"], &[]),
    row("worcestershire", "Worcestershire", "伍斯特醬", Essential, None, &[], &[]),
    row("hot_sauce", "Tabasco", "辣椒醬", Essential, None, &[], &[]),
    row("lemon", "Lemon/Lime", "檸檬/萊姆", Essential, None,
        &["lemon", "lime", "lemon juice", "lime juice", "fresh lime juice",
          "lime cordial", "lemon twist", "lemon peel", "twist", "peel"],
        &["檸檬", "萊姆", "檸檬汁", "新鮮檸檬汁", "萊姆汁", "莱姆汁", "黃檸檬", "檸檬皮"]),
    row("cream", "Heavy Cream", "鮮奶油", Essential, None, &["cream"], &[]),
    row("butter", "Butter", "奶油(Butter)", Essential, None, &[], &["奶油"]),
    row("honey", "Honey", "蜂蜜", Essential, None, &[], &[]),
    row("egg", "Egg", "蛋", Essential, None,
        &["egg yolk", "egg white"], &["蛋黃", "蛋白"]),
    row("marshmallow", "Marshmallow", "棉花糖", Essential, None,
        &["marshmallows"], &[]),
    row("peach_puree", "Peach Puree", "白桃果泥", Essential, None, &[], &[]),

    // Garnish
    row("mint", "Mint", "薄荷", Garnish, None, &["mint leaves"], &["薄荷葉"]),
    row("cucumber", "Cucumber", "小黃瓜", Garnish, None, &[], &[]),
    row("celery", "Celery", "芹菜", Garnish, None, &["celery stalk"], &["芹菜棒"]),
    row("olive", "Olive", "橄欖", Garnish, None, &[], &[]),
    row("nutmeg", "Nutmeg", "豆蔻", Garnish, None, &[], &[]),
];

fn category_meta() -> Vec<CategoryMeta> {
    let titles: [(Category, &str, &str); 7] = [
        (Category::BaseSpirit, "Base Spirits", "基酒"),
        (Category::Liqueur, "Liqueurs", "利口酒"),
        (Category::OtherAlcohol, "Other Alcohol", "其他酒類"),
        (Category::Mixer, "Mixers & Others", "調和飲料"),
        (Category::Essential, "Essentials", "基本材料"),
        (Category::Garnish, "Garnish", "裝飾"),
        (Category::Other, "Other", "其他"),
    ];
    titles
        .into_iter()
        .map(|(category, en, zh)| CategoryMeta {
            category,
            sort_key: category.sort_key(),
            title_en: en.to_string(),
            title_zh: zh.to_string(),
        })
        .collect()
}

fn subcategory_meta() -> Vec<SubcategoryMeta> {
    let titles: [(&str, &str, &str); 5] = [
        ("soda", "Sodas", "汽水"),
        ("juice", "Juices", "果汁"),
        ("tea", "Teas", "茶飲"),
        ("coffee", "Coffee", "咖啡"),
        ("dairy", "Dairy & Cultured", "乳製品"),
    ];
    titles
        .into_iter()
        .enumerate()
        .map(|(i, (id, en, zh))| SubcategoryMeta {
            id: id.to_string(),
            category: Category::Mixer,
            sort_key: i as u8,
            title_en: en.to_string(),
            title_zh: zh.to_string(),
        })
        .collect()
}

/// The full builtin snapshot.
pub fn builtin_catalog() -> CatalogSnapshot {
    let ingredients = ROWS
        .iter()
        .map(|r| CanonicalIngredient {
            id: r.id.to_string(),
            name_en: r.en.to_string(),
            name_zh: r.zh.to_string(),
            aliases_en: r.aliases_en.iter().map(|a| a.to_string()).collect(),
            aliases_zh: r.aliases_zh.iter().map(|a| a.to_string()).collect(),
            category: r.category,
            subcategory: r.subcategory.map(str::to_string),
        })
        .collect();

    CatalogSnapshot::new(ingredients, category_meta(), subcategory_meta())
        .expect("builtin catalog satisfies the catalog invariants")
}
