use platewise_streak::{DayProgress, calculate_streak, today_local};
use time::Date;

use crate::AppError;

/// Streak statistics for the completions in `input`, as pretty JSON.
pub fn run(input: &str, today: Option<Date>) -> Result<String, AppError> {
    let days: Vec<DayProgress> = serde_json::from_str(input)?;
    let today = today.unwrap_or_else(today_local);

    let info = calculate_streak(&days, today);
    tracing::debug!(
        days = days.len(),
        current = info.current_streak,
        longest = info.longest_streak,
        "streak computed"
    );

    Ok(serde_json::to_string_pretty(&info)?)
}
