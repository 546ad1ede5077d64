use std::io::Write;

use platewise_i18n::{MessageKey, translate};
use platewise_shared::{Language, shopping::ShoppingList};
use platewise_shopping::{
    ExportOptions, Osc52Clipboard, ShareChannel, SystemClipboard, budget_usage,
    copy_to_clipboard, format::format_price, generate_shopping_list_text, mail_share_url,
    message_share_url, open_share_target,
};
use rust_decimal::Decimal;

use crate::AppError;

pub struct Options {
    pub language: Language,
    pub only_unowned: bool,
    pub currency_symbol: String,
    pub budget: Option<Decimal>,
}

/// Shopping list text for the list JSON in `input`.
pub fn render(input: &str, options: &Options) -> Result<String, AppError> {
    let list: ShoppingList = serde_json::from_str(input)?;

    let export = ExportOptions {
        currency_symbol: options.currency_symbol.clone(),
        ..ExportOptions::default()
    };

    Ok(generate_shopping_list_text(
        &list,
        options.language,
        options.only_unowned,
        &export,
    ))
}

/// One-line budget summary, `None` without a budget.
pub fn budget_line(input: &str, options: &Options) -> Result<Option<String>, AppError> {
    let Some(budget) = options.budget else {
        return Ok(None);
    };

    let list: ShoppingList = serde_json::from_str(input)?;
    let usage = budget_usage(list.summarize().total_cost, budget);
    let percent = usage
        .percent
        .map(|percent| format!("{}%", percent.normalize()))
        .unwrap_or_else(|| "-".to_owned());

    Ok(Some(format!(
        "{} / {} ({percent}, {})",
        format_price(usage.spent, &options.currency_symbol),
        format_price(usage.budget, &options.currency_symbol),
        usage.level
    )))
}

pub fn run(
    input: &str,
    options: &Options,
    share: Option<ShareChannel>,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let text = render(input, options)?;
    writeln!(out, "{text}")?;

    if let Some(line) = budget_line(input, options)? {
        eprintln!("{line}");
    }

    match share {
        None => {}
        Some(ShareChannel::Message) => open_share_target(&message_share_url(&text))?,
        Some(ShareChannel::Mail) => {
            let subject = translate(MessageKey::ShareSubject, options.language);
            open_share_target(&mail_share_url(&subject, &text))?;
        }
        Some(ShareChannel::Clipboard) => {
            let primary = SystemClipboard::detect();
            let fallback = Osc52Clipboard::terminal();

            match copy_to_clipboard(&primary, &fallback, &text) {
                Ok(method) => {
                    tracing::info!(?method, "shopping list copied");
                    eprintln!("{}", translate(MessageKey::CopiedToClipboard, options.language));
                }
                Err(err) => {
                    eprintln!("{}", translate(MessageKey::CopyFailed, options.language));
                    return Err(err.into());
                }
            }
        }
    }

    Ok(())
}
