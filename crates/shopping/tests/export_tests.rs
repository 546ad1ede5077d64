use platewise_shared::{
    Language,
    shopping::{ShoppingList, ShoppingListItem, ShoppingListSummary, Unit},
};
use platewise_shopping::{
    CategoryCatalog, CategoryConfig, CategoryKey, ExportOptions, IngredientDictionary,
    ShoppingListExporter, generate_shopping_list_text,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use time::macros::datetime;

fn item(name: &str, quantity: Decimal, unit: Unit, price: Decimal) -> ShoppingListItem {
    ShoppingListItem {
        ingredient_id: format!("ing-{}", name.replace(' ', "-")),
        display_name: name.to_owned(),
        total_quantity: quantity,
        unit,
        estimated_price_in_currency: price,
        owned: false,
        deleted: false,
    }
}

fn list(items: Vec<ShoppingListItem>) -> ShoppingList {
    ShoppingList {
        plan_id: "plan-42".to_owned(),
        generated_at: datetime!(2024-06-15 08:30 UTC),
        items,
        summary: ShoppingListSummary::default(),
    }
}

fn weekly_list() -> ShoppingList {
    let mut eggs = item("eggs", dec!(6), Unit::Piece, dec!(2.49));
    eggs.owned = true;

    let mut flour = item("flour", dec!(1), Unit::Kg, dec!(0.99));
    flour.deleted = true;

    list(vec![
        item("rice", dec!(500), Unit::G, dec!(1.20)),
        item("tomato", dec!(1000), Unit::G, dec!(2.40)),
        item("milk", dec!(1000), Unit::Ml, dec!(1.19)),
        flour,
        eggs,
    ])
}

#[test]
fn test_unowned_list_text() {
    let text = generate_shopping_list_text(
        &weekly_list(),
        Language::En,
        true,
        &ExportOptions::default(),
    );

    let expected = [
        "🛒 Shopping list",
        "------------------------------",
        "",
        "🥬 Fruits & vegetables",
        "- tomato: 1 kg (2.40 €)",
        "",
        "🥛 Dairy & eggs",
        "- milk: 1 l (1.19 €)",
        "",
        "🥫 Pantry",
        "- rice: 500 g (1.20 €)",
        "",
        "------------------------------",
        "Total: 4.79 €",
        "Items: 3",
    ]
    .join("\n");

    assert_eq!(text, expected);
}

#[test]
fn test_owned_items_included_when_requested() {
    let text = generate_shopping_list_text(
        &weekly_list(),
        Language::En,
        false,
        &ExportOptions::default(),
    );

    assert!(text.contains("🥛 Dairy & eggs\n- milk: 1 l (1.19 €)\n- eggs: 6 pcs (2.49 €)"));
    assert!(text.ends_with("Total: 7.28 €\nItems: 4"));
}

#[test]
fn test_deleted_items_never_rendered() {
    for only_unowned in [true, false] {
        let text = generate_shopping_list_text(
            &weekly_list(),
            Language::En,
            only_unowned,
            &ExportOptions::default(),
        );

        assert!(!text.contains("flour"));
        assert!(!text.contains("0.99"));
    }
}

#[test]
fn test_sections_follow_sort_order() {
    let text = generate_shopping_list_text(
        &weekly_list(),
        Language::En,
        true,
        &ExportOptions::default(),
    );

    let fruits = text.find("Fruits & vegetables").unwrap();
    let dairy = text.find("Dairy & eggs").unwrap();
    let pantry = text.find("Pantry").unwrap();

    assert!(fruits < dairy);
    assert!(dairy < pantry);
}

#[test]
fn test_empty_list() {
    let text = generate_shopping_list_text(
        &list(vec![]),
        Language::En,
        true,
        &ExportOptions::default(),
    );

    assert_eq!(
        text,
        "🛒 Shopping list\n------------------------------\n\n------------------------------\nTotal: 0.00 €\nItems: 0"
    );
}

#[test]
fn test_all_items_owned() {
    let mut milk = item("milk", dec!(1), Unit::L, dec!(1.19));
    milk.owned = true;

    let text = generate_shopping_list_text(
        &list(vec![milk]),
        Language::En,
        true,
        &ExportOptions::default(),
    );

    assert!(!text.contains("milk"));
    assert!(text.ends_with("Total: 0.00 €\nItems: 0"));
}

#[test]
fn test_output_is_deterministic() {
    let list = weekly_list();
    let exporter = ShoppingListExporter::new();

    let first = exporter.generate(&list, Language::Fr, false);
    for _ in 0..5 {
        assert_eq!(exporter.generate(&list, Language::Fr, false), first);
    }
}

#[test]
fn test_german_text() {
    let text = generate_shopping_list_text(
        &weekly_list(),
        Language::De,
        false,
        &ExportOptions::default(),
    );

    assert!(text.starts_with("🛒 Einkaufsliste\n"));
    assert!(text.contains("🥬 Obst & Gemüse\n- Tomaten: 1 kg (2.40 €)"));
    assert!(text.contains("- Milch: 1 l (1.19 €)"));
    assert!(text.contains("- Eier: 6 Stk. (2.49 €)"));
    assert!(text.contains("🥫 Vorrat\n- Reis: 500 g (1.20 €)"));
    assert!(text.ends_with("Summe: 7.28 €\nArtikel: 4"));
}

#[test]
fn test_unknown_ingredient_keeps_canonical_name() {
    let list = list(vec![item("za'atar", dec!(50), Unit::G, dec!(3.10))]);
    let text = generate_shopping_list_text(&list, Language::De, true, &ExportOptions::default());

    assert!(text.contains("📦 Sonstiges\n- za'atar: 50 g (3.10 €)"));
}

#[test]
fn test_currency_symbol() {
    let exporter = ShoppingListExporter::new().with_currency_symbol("CHF");
    let text = exporter.generate(&weekly_list(), Language::En, true);

    assert!(text.contains("- rice: 500 g (1.20 CHF)"));
    assert!(text.contains("Total: 4.79 CHF"));
}

#[test]
fn test_custom_translator() {
    let mut dictionary = IngredientDictionary::default();
    dictionary.insert("rice", Language::En, "Basmati rice");

    let exporter = ShoppingListExporter::new().with_translator(dictionary);
    let text = exporter.generate(&weekly_list(), Language::En, true);

    assert!(text.contains("- Basmati rice: 500 g (1.20 €)"));
    assert!(text.contains("- milk: 1 l (1.19 €)"));
}

/// Buckets items by first letter, vowels first.
struct AlphabetCatalog;

impl CategoryCatalog for AlphabetCatalog {
    fn category_of(&self, item: &ShoppingListItem) -> CategoryKey {
        let letter = item.display_name.chars().next().unwrap_or('?');
        CategoryKey::new(letter.to_string())
    }

    fn config_of(&self, key: &CategoryKey, _language: Language) -> CategoryConfig {
        let vowel = key.as_str().starts_with(['a', 'e', 'i', 'o', 'u']);

        CategoryConfig {
            icon: "#".to_owned(),
            label: key.as_str().to_uppercase(),
            sort_order: if vowel { 1 } else { 2 },
        }
    }
}

#[test]
fn test_custom_catalog_ordering_and_ties() {
    let list = list(vec![
        item("tomato", dec!(2), Unit::Piece, dec!(1)),
        item("milk", dec!(1), Unit::L, dec!(1)),
        item("onion", dec!(3), Unit::Piece, dec!(1)),
        item("apple", dec!(4), Unit::Piece, dec!(1)),
        item("mango", dec!(1), Unit::Piece, dec!(1)),
    ]);

    let exporter = ShoppingListExporter::new().with_catalog(AlphabetCatalog);
    let sections = exporter.group(&list, Language::En, true);

    let keys: Vec<&str> = sections.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, ["a", "o", "m", "t"]);

    let m_items: Vec<&str> = sections[2]
        .items
        .iter()
        .map(|i| i.display_name.as_str())
        .collect();
    assert_eq!(m_items, ["milk", "mango"]);

    let text = exporter.generate(&list, Language::En, true);
    assert!(text.contains("# A\n- apple: 4 pcs (1.00 €)"));
}

#[test]
fn test_footer_matches_rendered_items() {
    let list = weekly_list();
    let exporter = ShoppingListExporter::new();

    for only_unowned in [true, false] {
        let sections = exporter.group(&list, Language::En, only_unowned);
        let rendered: Vec<&ShoppingListItem> =
            sections.iter().flat_map(|s| s.items.iter().copied()).collect();
        let total: Decimal = rendered.iter().map(|i| i.estimated_price_in_currency).sum();

        let text = exporter.generate(&list, Language::En, only_unowned);
        assert!(text.ends_with(&format!("Total: {total:.2} €\nItems: {}", rendered.len())));
    }
}

#[test]
fn test_default_options_skip_owned_items() {
    let options = ExportOptions::default();
    assert!(options.only_unowned);

    let exporter = ShoppingListExporter::new();
    let list = weekly_list();

    assert_eq!(
        exporter.render(&list, Language::En),
        generate_shopping_list_text(&list, Language::En, true, &options)
    );
    assert!(!exporter.render(&list, Language::En).contains("eggs"));
    assert!(
        ShoppingListExporter::new()
            .with_only_unowned(false)
            .render(&list, Language::En)
            .contains("eggs")
    );
}
