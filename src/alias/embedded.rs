//! Built-in alias data.
//!
//! The entity rows are a small slice of the full catalog, enough to keep resolution working
//! (with reduced coverage) when the dataset file is missing. Category mappings are always taken
//! from here.

use super::types::{Catalog, CategoryMappings, EntityId, EntityKind, ExactAliasTable};

const LIQUORS: &[(EntityId, &str)] = &[
    (39, "absinthe"),
    (40, "absolut_citron_vodka"),
    (75, "ale"),
    (96, "almond_flavored_liqueur"),
    (100, "almond_liqueur"),
    (120, "amaretto_liqueur"),
    (122, "amber_beer"),
    (123, "amber_rum"),
    (159, "apple_brandy"),
    (167, "apple_liqueur"),
    (177, "apricot_brandy"),
    (184, "apricot_liqueur"),
    (194, "armagnac"),
    (311, "banana_liqueur"),
    (423, "beer"),
    (519, "blackberry_brandy"),
    (521, "blackberry_liqueur"),
    (524, "blackberry_wine"),
    (652, "bourbon"),
    (653, "bourbon_whiskey"),
    (662, "brandy"),
    (755, "brut_champagne"),
    (777, "burgundy_wine"),
    (827, "cabernet_sauvignon_wine"),
    (1069, "champagne"),
    (1079, "chardonnay_wine"),
    (1112, "cherry_brandy"),
    (1115, "cherry_flavored_liqueur"),
    (1137, "chianti_wine"),
    (1246, "chinese_rice_wine"),
    (1251, "chinese_wine"),
    (1317, "chocolate_liqueur"),
    (1361, "cider"),
    (1441, "coconut_liqueur"),
    (1448, "coconut_rum"),
    (1462, "coffee_flavored_liqueur"),
    (1465, "coffee_liqueur"),
    (1467, "cognac"),
    (1468, "cointreau_liqueur"),
    (1627, "corona_beer"),
    (1821, "dark_jamaican_rum"),
    (1830, "dark_rum"),
    (2102, "dry_champagne"),
    (2112, "dry_gin"),
    (2119, "dry_marsala_wine"),
    (2135, "dry_red_wine"),
    (2149, "dry_vermouth"),
    (2151, "dry_white_vermouth"),
    (2152, "dry_white_wine"),
    (2153, "dry_wine"),
    (2204, "elderflower_liqueur"),
    (2413, "framboise_liqueur"),
];

const INGREDIENTS: &[(EntityId, &str)] = &[
    (88, "almond"),
    (158, "apple"),
    (175, "apricot"),
    (223, "avocado"),
    (302, "banana"),
    (328, "basil"),
    (361, "beef"),
    (518, "blackberry"),
    (547, "blueberry"),
    (668, "bread"),
    (781, "butter"),
    (805, "buttermilk"),
    (823, "cabbage"),
    (885, "candy_bar"),
    (966, "caper"),
    (1005, "carrot"),
    (1014, "cashew_nut"),
    (1041, "celery"),
    (1083, "cheddar_cheese"),
    (1089, "cheese"),
    (1111, "cherry"),
    (1125, "cherry_tomato"),
    (1138, "chicken"),
    (1204, "chickpea"),
    (1266, "chocolate"),
    (1368, "cinnamon"),
    (1458, "coffee"),
    (1595, "corn"),
    (1598, "corn_chip"),
    (1631, "cottage_cheese"),
    (1645, "crab"),
    (1664, "cranberry"),
    (1681, "cream"),
    (1682, "cream_cheese"),
    (1768, "cucumber"),
    (1845, "date"),
    (1895, "dill"),
    (2188, "egg"),
    (2200, "eggplant"),
    (2320, "feta_cheese"),
    (2331, "fig"),
    (2364, "fish"),
    (2396, "flour"),
    (2430, "french_fry"),
    (2547, "fresh_pea"),
    (2591, "fresh_tomato"),
];

/// `(korean_alias, canonical_name)` rows.
const EXACT_ALIASES: &[(&str, &str)] = &[
    ("버번", "bourbon"),
    ("버번 위스키", "bourbon_whiskey"),
    ("꼬냑", "cognac"),
    ("압생트", "absinthe"),
    ("에일", "ale"),
    ("레드 와인", "dry_red_wine"),
    ("화이트 와인", "dry_white_wine"),
    ("샤르도네", "chardonnay_wine"),
    ("까베르네 소비뇽", "cabernet_sauvignon_wine"),
    ("키안티", "chianti_wine"),
    ("드라이 진", "dry_gin"),
    ("다크 럼", "dark_rum"),
    ("코코넛 럼", "coconut_rum"),
    ("드라이 베르무트", "dry_vermouth"),
    ("코로나", "corona_beer"),
    ("소고기", "beef"),
    ("닭고기", "chicken"),
    ("체다 치즈", "cheddar_cheese"),
    ("크림치즈", "cream_cheese"),
    ("코티지 치즈", "cottage_cheese"),
    ("페타 치즈", "feta_cheese"),
    ("방울토마토", "cherry_tomato"),
    ("감자튀김", "french_fry"),
    ("캐슈", "cashew_nut"),
];

const LIQUOR_CATEGORIES: &[(&str, &[&str])] = &[
    ("위스키", &["whiskey", "whisky", "bourbon", "scotch"]),
    ("보드카", &["vodka", "absolut"]),
    ("럼", &["rum", "dark_rum", "jamaican_rum"]),
    ("진", &["gin", "dry_gin"]),
    ("브랜디", &["brandy", "cognac", "armagnac"]),
    ("맥주", &["beer", "ale", "lager", "corona"]),
    ("와인", &["wine", "chardonnay", "cabernet", "burgundy", "chianti"]),
    ("테킬라", &["tequila"]),
    ("사케", &["sake"]),
    ("소주", &["soju"]),
    ("리큐어", &["liqueur", "amaretto", "cointreau"]),
    ("샴페인", &["champagne", "brut"]),
    ("사이다", &["cider"]),
    ("코냑", &["cognac"]),
    ("아마레또", &["amaretto"]),
    ("커피리큐어", &["coffee_liqueur", "coffee_flavored_liqueur"]),
    ("초콜릿리큐어", &["chocolate_liqueur"]),
];

const INGREDIENT_CATEGORIES: &[(&str, &[&str])] = &[
    ("치즈", &["cheese", "cheddar", "mozzarella", "brie", "feta", "cottage"]),
    ("고기", &["beef", "pork", "chicken", "meat"]),
    ("생선", &["fish", "salmon", "tuna"]),
    ("과일", &["apple", "orange", "lemon", "lime", "berry"]),
    ("사과", &["apple"]),
    ("바나나", &["banana"]),
    ("블루베리", &["blueberry"]),
    ("딸기", &["strawberry"]),
    ("체리", &["cherry"]),
    ("포도", &["grape"]),
    ("레몬", &["lemon"]),
    ("라임", &["lime"]),
    ("오렌지", &["orange"]),
    ("채소", &["vegetable", "onion", "garlic", "pepper"]),
    ("토마토", &["tomato", "cherry_tomato"]),
    ("당근", &["carrot"]),
    ("셀러리", &["celery"]),
    ("오이", &["cucumber"]),
    ("아보카도", &["avocado"]),
    ("향신료", &["spice", "pepper", "salt", "herb"]),
    ("바질", &["basil"]),
    ("딜", &["dill"]),
    ("계피", &["cinnamon"]),
    ("초콜릿", &["chocolate"]),
    ("커피", &["coffee"]),
    ("견과류", &["nut", "almond", "walnut", "cashew"]),
    ("아몬드", &["almond"]),
    ("캐슈넛", &["cashew_nut"]),
    ("해산물", &["seafood", "shrimp", "crab"]),
    ("게", &["crab"]),
    ("새우", &["shrimp"]),
    ("버섯", &["mushroom"]),
    ("올리브", &["olive"]),
    ("케이퍼", &["caper"]),
    ("빵", &["bread"]),
    ("버터", &["butter"]),
    ("크림", &["cream", "cream_cheese"]),
    ("달걀", &["egg"]),
    ("밀가루", &["flour"]),
    ("옥수수", &["corn"]),
    ("감자", &["potato"]),
    ("고구마", &["sweet_potato"]),
    ("콩", &["bean", "chickpea"]),
    ("완두콩", &["pea", "fresh_pea"]),
    ("가지", &["eggplant"]),
    ("무화과", &["fig"]),
    ("대추", &["date"]),
    ("크랜베리", &["cranberry"]),
    ("양배추", &["cabbage"]),
    ("우유", &["milk", "buttermilk"]),
];

pub(crate) fn catalog() -> Catalog {
    let mut catalog = Catalog::new();
    for &(id, name) in LIQUORS {
        catalog.insert(EntityKind::Liquor, name, id);
    }
    for &(id, name) in INGREDIENTS {
        catalog.insert(EntityKind::Ingredient, name, id);
    }
    catalog
}

pub(crate) fn exact_aliases() -> ExactAliasTable {
    EXACT_ALIASES.iter().copied().collect()
}

pub(crate) fn category_mappings() -> CategoryMappings {
    let mut mappings = CategoryMappings::new();
    for &(term, fragments) in LIQUOR_CATEGORIES {
        mappings.insert(EntityKind::Liquor, term, fragments);
    }
    for &(term, fragments) in INGREDIENT_CATEGORIES {
        mappings.insert(EntityKind::Ingredient, term, fragments);
    }
    mappings
}
