//! Message catalogs and locale detection.

mod detect;

pub use detect::*;
pub use platewise_shared::Language;

use strum::{AsRefStr, VariantArray};

rust_i18n::i18n!("locales", fallback = "en");

/// Every message the application renders. Each key exists in the English
/// catalog, which makes [`translate`] total.
#[derive(AsRefStr, VariantArray, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum MessageKey {
    ShoppingListTitle,
    ShareSubject,
    Total,
    Items,
    UnitPiece,
    CategoryFruitsAndVegetables,
    CategoryBakery,
    CategoryButcher,
    CategorySeafood,
    CategoryDairyAndEggs,
    CategoryRefrigerated,
    CategoryGrocery,
    CategorySnacksAndConfectionery,
    CategoryFrozen,
    CategoryOther,
    CopiedToClipboard,
    CopyFailed,
}

/// Look up `key` in the catalog for `language`, falling back to English.
pub fn translate(key: MessageKey, language: Language) -> String {
    rust_i18n::t!(key.as_ref(), locale = language.code()).to_string()
}
