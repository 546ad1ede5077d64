//! Grouped, localized plain-text rendering of a shopping list.

use std::sync::Arc;

use platewise_i18n::{MessageKey, translate};
use platewise_shared::{
    Language,
    shopping::{ShoppingList, ShoppingListItem},
};
use rust_decimal::Decimal;

use crate::{
    categorization::{CategoryCatalog, CategoryConfig, CategoryKey, DefaultCatalog},
    format::{format_price, format_quantity},
    ingredient::{IngredientDictionary, IngredientTranslator, translate_ingredient},
};

const SEPARATOR: &str = "------------------------------";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "€";

/// Items of one category, in input order.
#[derive(Clone, Debug)]
pub struct CategorySection<'a> {
    pub key: CategoryKey,
    pub config: CategoryConfig,
    pub items: Vec<&'a ShoppingListItem>,
}

/// Collaborators and defaults used to render a list.
#[derive(Clone)]
pub struct ExportOptions {
    pub catalog: Arc<dyn CategoryCatalog>,
    pub translator: Arc<dyn IngredientTranslator>,
    pub currency_symbol: String,
    pub only_unowned: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            catalog: Arc::new(DefaultCatalog::new()),
            translator: Arc::new(IngredientDictionary::embedded()),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_owned(),
            only_unowned: true,
        }
    }
}

#[derive(Clone, Default)]
pub struct ShoppingListExporter {
    options: ExportOptions,
}

impl From<ExportOptions> for ShoppingListExporter {
    fn from(options: ExportOptions) -> Self {
        Self { options }
    }
}

impl ShoppingListExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(mut self, catalog: impl CategoryCatalog + 'static) -> Self {
        self.options.catalog = Arc::new(catalog);
        self
    }

    pub fn with_translator(mut self, translator: impl IngredientTranslator + 'static) -> Self {
        self.options.translator = Arc::new(translator);
        self
    }

    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.options.currency_symbol = symbol.into();
        self
    }

    pub fn with_only_unowned(mut self, only_unowned: bool) -> Self {
        self.options.only_unowned = only_unowned;
        self
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// [`Self::generate`] with the configured `only_unowned` default.
    pub fn render(&self, list: &ShoppingList, language: Language) -> String {
        self.generate(list, language, self.options.only_unowned)
    }

    /// Included items partitioned by category, sections ordered by ascending
    /// sort order (ties by key).
    pub fn group<'a>(
        &self,
        list: &'a ShoppingList,
        language: Language,
        only_unowned: bool,
    ) -> Vec<CategorySection<'a>> {
        let mut sections: Vec<CategorySection<'a>> = Vec::new();

        for item in list.included_items(only_unowned) {
            let key = self.options.catalog.category_of(item);

            match sections.iter_mut().find(|section| section.key == key) {
                Some(section) => section.items.push(item),
                None => sections.push(CategorySection {
                    config: self.options.catalog.config_of(&key, language),
                    key,
                    items: vec![item],
                }),
            }
        }

        sections.sort_by(|a, b| {
            a.config
                .sort_order
                .cmp(&b.config.sort_order)
                .then_with(|| a.key.cmp(&b.key))
        });

        sections
    }

    /// Render the list as shareable text.
    ///
    /// Deleted items are always left out, owned ones too when `only_unowned`.
    /// The footer totals cover exactly the rendered items.
    pub fn generate(&self, list: &ShoppingList, language: Language, only_unowned: bool) -> String {
        let sections = self.group(list, language, only_unowned);

        let mut lines = vec![
            format!("🛒 {}", translate(MessageKey::ShoppingListTitle, language)),
            SEPARATOR.to_owned(),
        ];

        for section in &sections {
            lines.push(String::new());
            lines.push(format!("{} {}", section.config.icon, section.config.label));

            for item in &section.items {
                lines.push(self.item_line(item, language));
            }
        }

        let (total, count) = list
            .included_items(only_unowned)
            .fold((Decimal::ZERO, 0usize), |(total, count), item| {
                (total + item.estimated_price_in_currency, count + 1)
            });

        lines.push(String::new());
        lines.push(SEPARATOR.to_owned());
        lines.push(format!(
            "{}: {}",
            translate(MessageKey::Total, language),
            format_price(total, &self.options.currency_symbol)
        ));
        lines.push(format!("{}: {count}", translate(MessageKey::Items, language)));

        tracing::debug!(
            plan_id = %list.plan_id,
            %language,
            sections = sections.len(),
            items = count,
            "generated shopping list text"
        );

        lines.join("\n")
    }

    fn item_line(&self, item: &ShoppingListItem, language: Language) -> String {
        format!(
            "- {}: {} ({})",
            translate_ingredient(
                self.options.translator.as_ref(),
                &item.display_name,
                language
            ),
            format_quantity(item.total_quantity, item.unit, language),
            format_price(item.estimated_price_in_currency, &self.options.currency_symbol)
        )
    }
}

/// Render `list` with the collaborators in `options`.
pub fn generate_shopping_list_text(
    list: &ShoppingList,
    language: Language,
    only_unowned: bool,
    options: &ExportOptions,
) -> String {
    ShoppingListExporter::from(options.clone()).generate(list, language, only_unowned)
}
