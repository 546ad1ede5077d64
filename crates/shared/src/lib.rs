mod language;
pub mod mealplan;
pub mod shopping;
pub mod streak;

pub use language::*;
