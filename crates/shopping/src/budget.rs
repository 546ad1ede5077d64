use rust_decimal::Decimal;
use serde::Serialize;
use strum::{AsRefStr, Display};

const TIGHT_FROM: Decimal = Decimal::from_parts(80, 0, 0, false, 0);

#[derive(Serialize, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BudgetLevel {
    Comfortable,
    Tight,
    Over,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetUsage {
    pub spent: Decimal,
    pub budget: Decimal,
    /// Share of the budget spent, `None` for a zero budget.
    pub percent: Option<Decimal>,
    pub remaining: Decimal,
    pub level: BudgetLevel,
}

/// How much of `budget` the estimated `spent` amount uses.
pub fn budget_usage(spent: Decimal, budget: Decimal) -> BudgetUsage {
    let percent = (!budget.is_zero()).then(|| (spent * Decimal::ONE_HUNDRED / budget).round_dp(1));

    let level = match percent {
        None if spent > Decimal::ZERO => BudgetLevel::Over,
        None => BudgetLevel::Comfortable,
        Some(p) if p > Decimal::ONE_HUNDRED => BudgetLevel::Over,
        Some(p) if p >= TIGHT_FROM => BudgetLevel::Tight,
        Some(_) => BudgetLevel::Comfortable,
    };

    BudgetUsage {
        spent,
        budget,
        percent,
        remaining: budget - spent,
        level,
    }
}
