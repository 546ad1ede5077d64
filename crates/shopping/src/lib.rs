pub mod budget;
pub mod categorization;
pub mod clipboard;
pub mod export;
pub mod format;
pub mod ingredient;
pub mod share;

pub use budget::{BudgetLevel, BudgetUsage, budget_usage};
pub use categorization::{
    CategorizationService, Category, CategoryCatalog, CategoryConfig, CategoryKey, DefaultCatalog,
};
pub use clipboard::{
    ClipboardBackend, ClipboardError, CopyMethod, Osc52Clipboard, SystemClipboard,
    copy_to_clipboard,
};
pub use export::{
    CategorySection, ExportOptions, ShoppingListExporter, generate_shopping_list_text,
};
pub use ingredient::{IngredientDictionary, IngredientTranslator, translate_ingredient};
pub use share::{ShareChannel, ShareError, mail_share_url, message_share_url, open_share_target};
