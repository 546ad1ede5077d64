use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::Date;

use crate::{Language, shopping::ShoppingList};

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    #[default]
    Dinner,
    Snack,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub slot: MealSlot,
    pub recipe_id: String,
    pub recipe_name: String,
    #[serde(default = "default_servings")]
    pub servings: u16,
}

fn default_servings() -> u16 {
    1
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanDay {
    pub date: Date,
    #[serde(default)]
    pub meals: Vec<Meal>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub id: String,
    pub start_date: Date,
    #[serde(default)]
    pub days: Vec<MealPlanDay>,
    #[serde(default)]
    pub shopping_list: Option<ShoppingList>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMealPlanRequest {
    pub start_date: Date,
    pub days: u8,
    pub household_size: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<Decimal>,
    pub language: Language,
}
