mod client;
mod error;

pub use client::MealPlanClient;
pub use error::MealPlanError;
pub use platewise_shared::mealplan::{GenerateMealPlanRequest, MealPlan};
