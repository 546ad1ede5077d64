use platewise_i18n::{MessageKey, translate};
use platewise_shared::{Language, shopping::Unit};
use rust_decimal::Decimal;

const THOUSAND: Decimal = Decimal::ONE_THOUSAND;

/// Quantity with its unit suffix; grams and millilitres switch to kg and l
/// from 1000 upward.
pub fn format_quantity(quantity: Decimal, unit: Unit, language: Language) -> String {
    let (value, suffix) = match unit {
        Unit::G if quantity >= THOUSAND => (quantity / THOUSAND, "kg".to_owned()),
        Unit::Ml if quantity >= THOUSAND => (quantity / THOUSAND, "l".to_owned()),
        Unit::Piece => (quantity, translate(MessageKey::UnitPiece, language)),
        unit => (quantity, unit.to_string()),
    };

    format!("{} {suffix}", trim_decimal(value))
}

/// Fixed two-decimal amount followed by the currency symbol.
pub fn format_price(amount: Decimal, currency_symbol: &str) -> String {
    format!("{:.2} {currency_symbol}", amount.round_dp(2))
}

fn trim_decimal(value: Decimal) -> Decimal {
    value.round_dp(2).normalize()
}
