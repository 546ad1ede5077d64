use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::OffsetDateTime;

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Serialize,
    Deserialize,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    G,
    Kg,
    Ml,
    L,
    Piece,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListItem {
    pub ingredient_id: String,
    pub display_name: String,
    pub total_quantity: Decimal,
    pub unit: Unit,
    pub estimated_price_in_currency: Decimal,
    #[serde(default)]
    pub owned: bool,
    #[serde(default)]
    pub deleted: bool,
}

impl ShoppingListItem {
    /// Whether the item belongs in a view, deleted items never do.
    pub fn is_included(&self, only_unowned: bool) -> bool {
        !self.deleted && !(only_unowned && self.owned)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListSummary {
    pub total_items: usize,
    pub total_cost: Decimal,
    #[serde(default)]
    pub owned_items: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    pub plan_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub generated_at: OffsetDateTime,
    pub items: Vec<ShoppingListItem>,
    #[serde(default)]
    pub summary: ShoppingListSummary,
}

impl ShoppingList {
    /// Recomputes the aggregate totals over every non-deleted item.
    pub fn summarize(&self) -> ShoppingListSummary {
        self.items
            .iter()
            .filter(|item| !item.deleted)
            .fold(ShoppingListSummary::default(), |mut summary, item| {
                summary.total_items += 1;
                summary.total_cost += item.estimated_price_in_currency;
                if item.owned {
                    summary.owned_items += 1;
                }
                summary
            })
    }

    pub fn included_items(&self, only_unowned: bool) -> impl Iterator<Item = &ShoppingListItem> {
        self.items
            .iter()
            .filter(move |item| item.is_included(only_unowned))
    }
}
