//! Consecutive-day streak statistics over meal-plan completions.

use std::collections::BTreeSet;

use time::{Date, OffsetDateTime};

pub use platewise_shared::streak::{DayProgress, StreakInfo};

/// Compute streak statistics relative to `today`.
///
/// The current streak only counts while the most recent completion is today or
/// yesterday. The longest streak is historical and does not depend on `today`,
/// so it may exceed the current one.
pub fn calculate_streak(completed_days: &[DayProgress], today: Date) -> StreakInfo {
    let days = completed_days
        .iter()
        .filter_map(|day| match day.calendar_day() {
            Ok(date) => Some(date),
            Err(err) => {
                tracing::warn!(date = %day.date, %err, "skipping day with invalid date");
                None
            }
        })
        .collect::<BTreeSet<_>>();

    let Some(&last_completed) = days.last() else {
        return StreakInfo::default();
    };

    let streak_active = last_completed == today || today.previous_day() == Some(last_completed);

    let current_streak = if streak_active {
        count_back_from(&days, last_completed)
    } else {
        0
    };

    StreakInfo {
        current_streak,
        longest_streak: longest_run(&days),
        last_completed_date: Some(last_completed),
        streak_active,
    }
}

/// Same as [`calculate_streak`], anchored to the local calendar day.
pub fn calculate_streak_now(completed_days: &[DayProgress]) -> StreakInfo {
    calculate_streak(completed_days, today_local())
}

/// Today in the local UTC offset, UTC when the offset cannot be determined.
pub fn today_local() -> Date {
    match OffsetDateTime::now_local() {
        Ok(now) => now.date(),
        Err(err) => {
            tracing::debug!(%err, "local offset unavailable, using UTC");
            OffsetDateTime::now_utc().date()
        }
    }
}

fn count_back_from(days: &BTreeSet<Date>, start: Date) -> u32 {
    let mut count = 0;
    let mut cursor = Some(start);

    while let Some(day) = cursor {
        if !days.contains(&day) {
            break;
        }

        count += 1;
        cursor = day.previous_day();
    }

    count
}

fn longest_run(days: &BTreeSet<Date>) -> u32 {
    let mut longest = 0;
    let mut run = 0;
    let mut previous: Option<Date> = None;

    for &day in days {
        run = match previous {
            Some(prev) if prev.next_day() == Some(day) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(day);
    }

    longest
}
