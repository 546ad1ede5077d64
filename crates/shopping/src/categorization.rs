use std::{collections::HashMap, fmt, str::FromStr};

use platewise_i18n::{MessageKey, translate};
use platewise_shared::{Language, shopping::ShoppingListItem};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Grocery store aisle, in the order a shopper walks them.
#[derive(
    EnumString, Display, AsRefStr, VariantArray, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "snake_case")]
pub enum Category {
    FruitsAndVegetables,
    Bakery,
    Butcher,
    Seafood,
    DairyAndEggs,
    Refrigerated,
    Grocery,
    SnacksAndConfectionery,
    Frozen,
    Other,
}

impl Category {
    pub fn sort_order(&self) -> u32 {
        match self {
            Category::FruitsAndVegetables => 10,
            Category::Bakery => 20,
            Category::Butcher => 30,
            Category::Seafood => 40,
            Category::DairyAndEggs => 50,
            Category::Refrigerated => 60,
            Category::Grocery => 70,
            Category::SnacksAndConfectionery => 80,
            Category::Frozen => 90,
            Category::Other => 100,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::FruitsAndVegetables => "🥬",
            Category::Bakery => "🥖",
            Category::Butcher => "🥩",
            Category::Seafood => "🐟",
            Category::DairyAndEggs => "🥛",
            Category::Refrigerated => "🧀",
            Category::Grocery => "🥫",
            Category::SnacksAndConfectionery => "🍫",
            Category::Frozen => "🧊",
            Category::Other => "📦",
        }
    }

    fn label_key(&self) -> MessageKey {
        match self {
            Category::FruitsAndVegetables => MessageKey::CategoryFruitsAndVegetables,
            Category::Bakery => MessageKey::CategoryBakery,
            Category::Butcher => MessageKey::CategoryButcher,
            Category::Seafood => MessageKey::CategorySeafood,
            Category::DairyAndEggs => MessageKey::CategoryDairyAndEggs,
            Category::Refrigerated => MessageKey::CategoryRefrigerated,
            Category::Grocery => MessageKey::CategoryGrocery,
            Category::SnacksAndConfectionery => MessageKey::CategorySnacksAndConfectionery,
            Category::Frozen => MessageKey::CategoryFrozen,
            Category::Other => MessageKey::CategoryOther,
        }
    }
}

/// Opaque identifier of a category within a [`CategoryCatalog`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryKey(String);

impl CategoryKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Category> for CategoryKey {
    fn from(value: Category) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for CategoryKey {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Presentation settings of a category section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryConfig {
    pub icon: String,
    pub label: String,
    pub sort_order: u32,
}

/// Maps items to categories and categories to their presentation.
pub trait CategoryCatalog: Send + Sync {
    fn category_of(&self, item: &ShoppingListItem) -> CategoryKey;

    fn config_of(&self, key: &CategoryKey, language: Language) -> CategoryConfig;
}

/// Aisle catalog backed by [`CategorizationService`], with optional
/// per-ingredient overrides.
#[derive(Clone, Debug, Default)]
pub struct DefaultCatalog {
    overrides: HashMap<String, Category>,
}

impl DefaultCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_override(mut self, ingredient_id: impl Into<String>, category: Category) -> Self {
        self.overrides.insert(ingredient_id.into(), category);
        self
    }
}

impl CategoryCatalog for DefaultCatalog {
    fn category_of(&self, item: &ShoppingListItem) -> CategoryKey {
        self.overrides
            .get(&item.ingredient_id)
            .copied()
            .unwrap_or_else(|| CategorizationService::categorize(&item.display_name))
            .into()
    }

    fn config_of(&self, key: &CategoryKey, language: Language) -> CategoryConfig {
        let category = Category::from_str(key.as_str()).unwrap_or(Category::Other);

        CategoryConfig {
            icon: category.icon().to_owned(),
            label: translate(category.label_key(), language),
            sort_order: category.sort_order(),
        }
    }
}

/// Categorization Service
///
/// Stateless domain service that maps ingredient names to grocery store
/// aisles using predefined mappings. Unknown names land in
/// [`Category::Other`].
pub struct CategorizationService;

impl CategorizationService {
    /// Categorize an ingredient by name
    ///
    /// Matching is case-insensitive. A plural that is not listed is retried in
    /// its singular form.
    pub fn categorize(ingredient_name: &str) -> Category {
        let normalized = ingredient_name.trim().to_lowercase();

        if let Some(category) = Self::lookup(&normalized) {
            return category;
        }

        let singular = normalized
            .strip_suffix("es")
            .and_then(Self::lookup)
            .or_else(|| normalized.strip_suffix('s').and_then(Self::lookup));

        singular.unwrap_or(Category::Other)
    }

    fn lookup(name: &str) -> Option<Category> {
        if Self::is_fruit_or_vegetable(name) {
            return Some(Category::FruitsAndVegetables);
        }

        if Self::is_dairy_or_egg(name) {
            return Some(Category::DairyAndEggs);
        }

        if Self::is_butcher(name) {
            return Some(Category::Butcher);
        }

        if Self::is_seafood(name) {
            return Some(Category::Seafood);
        }

        // Frozen before grocery so "frozen peas" doesn't match on "peas"
        if Self::is_frozen(name) {
            return Some(Category::Frozen);
        }

        if Self::is_grocery(name) {
            return Some(Category::Grocery);
        }

        if Self::is_bakery(name) {
            return Some(Category::Bakery);
        }

        if Self::is_refrigerated(name) {
            return Some(Category::Refrigerated);
        }

        if Self::is_snack(name) {
            return Some(Category::SnacksAndConfectionery);
        }

        None
    }

    fn is_fruit_or_vegetable(name: &str) -> bool {
        matches!(
            name,
            // Vegetables
            "tomato" | "tomatoes"
                | "onion"
                | "red onion"
                | "garlic"
                | "lettuce"
                | "carrot"
                | "celery"
                | "bell pepper"
                | "cucumber"
                | "zucchini"
                | "courgette"
                | "broccoli"
                | "cauliflower"
                | "spinach"
                | "kale"
                | "cabbage"
                | "potato" | "potatoes"
                | "sweet potato" | "sweet potatoes"
                | "mushroom"
                | "green beans"
                | "peas"
                | "corn"
                | "avocado"
                | "eggplant"
                | "aubergine"
                | "squash"
                | "leek"
                | "jalapeño" | "jalapeno"
                | "ginger"
                // Herbs
                | "cilantro"
                | "parsley"
                | "basil"
                | "mint"
                | "thyme"
                | "rosemary"
                // Fruits
                | "apple"
                | "banana"
                | "orange"
                | "lemon"
                | "lime"
                | "strawberry" | "strawberries"
                | "blueberry" | "blueberries"
                | "raspberry" | "raspberries"
                | "grape"
                | "mango" | "mangoes"
                | "pear"
                | "pineapple"
                | "watermelon"
        )
    }

    fn is_dairy_or_egg(name: &str) -> bool {
        matches!(
            name,
            "milk"
                | "cream"
                | "heavy cream"
                | "whipping cream"
                | "sour cream"
                | "butter"
                | "cheese"
                | "cheddar cheese"
                | "mozzarella" | "mozzarella cheese"
                | "parmesan" | "parmesan cheese"
                | "feta" | "feta cheese"
                | "goat cheese"
                | "cream cheese"
                | "yogurt"
                | "greek yogurt"
                | "cottage cheese"
                | "ricotta" | "ricotta cheese"
                | "egg" | "eggs"
        )
    }

    fn is_butcher(name: &str) -> bool {
        matches!(
            name,
            // Poultry
            "chicken"
                | "chicken breast"
                | "chicken thigh"
                | "turkey"
                | "duck"
                // Beef
                | "beef"
                | "ground beef"
                | "minced beef"
                | "steak"
                | "brisket"
                // Pork
                | "pork"
                | "bacon"
                | "sausage"
                | "pork chop"
                // Other
                | "lamb"
                | "veal"
        )
    }

    fn is_seafood(name: &str) -> bool {
        matches!(
            name,
            "fish"
                | "salmon"
                | "tuna"
                | "cod"
                | "tilapia"
                | "shrimp"
                | "prawns"
                | "lobster"
                | "crab"
                | "scallops"
                | "mussels"
        )
    }

    fn is_grocery(name: &str) -> bool {
        matches!(
            name,
            // Grains & Pasta
            "flour"
                | "all-purpose flour"
                | "bread flour"
                | "rice"
                | "white rice"
                | "brown rice"
                | "risotto rice"
                | "pasta"
                | "spaghetti"
                | "penne"
                | "oats"
                | "quinoa"
                | "couscous"
                | "lentils"
                // Baking
                | "sugar"
                | "brown sugar"
                | "powdered sugar"
                | "baking powder"
                | "baking soda"
                | "yeast"
                | "vanilla extract"
                | "cocoa powder"
                // Oils & Condiments
                | "olive oil"
                | "vegetable oil"
                | "coconut oil"
                | "vinegar"
                | "balsamic vinegar"
                | "soy sauce"
                | "ketchup"
                | "mustard"
                | "mayonnaise"
                | "hot sauce"
                // Spices
                | "salt"
                | "pepper"
                | "black pepper"
                | "paprika"
                | "cumin"
                | "turmeric"
                | "cinnamon"
                | "nutmeg"
                | "oregano"
                | "chili powder"
                // Canned/Jarred
                | "tomato sauce"
                | "tomato paste"
                | "canned tomatoes"
                | "chicken broth"
                | "vegetable broth"
                | "beans"
                | "black beans"
                | "kidney beans"
                | "chickpeas"
                | "coconut milk"
                | "peanut butter"
                | "jam"
                | "honey"
                // Nuts & Seeds
                | "almonds"
                | "walnuts"
                | "cashews"
                | "peanuts"
                | "chia seeds"
        )
    }

    fn is_frozen(name: &str) -> bool {
        matches!(
            name,
            "frozen vegetables"
                | "frozen peas"
                | "frozen spinach"
                | "frozen berries"
                | "frozen shrimp"
                | "ice cream"
                | "frozen pizza"
                | "frozen french fries"
                | "puff pastry"
        )
    }

    fn is_bakery(name: &str) -> bool {
        matches!(
            name,
            "bread"
                | "baguette"
                | "ciabatta"
                | "sourdough"
                | "whole wheat bread"
                | "tortillas"
                | "pita bread"
                | "bagels"
                | "croissant"
                | "buns"
                | "burger buns"
        )
    }

    fn is_refrigerated(name: &str) -> bool {
        matches!(
            name,
            "tofu"
                | "tempeh"
                | "hummus"
                | "fresh pasta"
                | "gnocchi"
                | "ham"
                | "salami"
                | "pesto"
                | "orange juice"
        )
    }

    fn is_snack(name: &str) -> bool {
        matches!(
            name,
            "chocolate"
                | "dark chocolate"
                | "chocolate chips"
                | "cookies"
                | "crackers"
                | "chips"
                | "popcorn"
                | "granola bars"
        )
    }
}
