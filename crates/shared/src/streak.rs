use serde::{Deserialize, Serialize};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

const CALENDAR_DAY: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// A day the user marked as completed in their meal plan.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DayProgress {
    /// ISO-8601 date, optionally followed by a time component.
    pub date: String,
}

impl DayProgress {
    pub fn new(date: impl Into<String>) -> Self {
        Self { date: date.into() }
    }

    /// Calendar day of this record, ignoring any time-of-day suffix.
    pub fn calendar_day(&self) -> Result<Date, time::error::Parse> {
        let value = self.date.trim();
        let day = value.get(..10).unwrap_or(value);

        Date::parse(day, CALENDAR_DAY)
    }
}

impl From<Date> for DayProgress {
    fn from(value: Date) -> Self {
        Self {
            date: value.format(CALENDAR_DAY).unwrap_or_else(|_| value.to_string()),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StreakInfo {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_completed_date: Option<Date>,
    pub streak_active: bool,
}
