//! Maps a collection schedule and today's date to a [`DisplayIntent`]

use chrono::NaiveDate;

use crate::intent::DisplayIntent;
use crate::schedule::{Category, CategorySet, Day, Schedule};

/// Resolve what the strip should show for `today`
///
/// Priority, highest first:
/// 1. today is a holiday: [`DisplayIntent::HolidayThenCollection`] when
///    tomorrow has collections, [`DisplayIntent::HolidayOnly`] otherwise
/// 2. today has collections, then tomorrow has collections:
///    [`DisplayIntent::TodayOrTomorrowCollection`]
/// 3. the earliest later day with collections:
///    [`DisplayIntent::UpcomingCollection`]
/// 4. [`DisplayIntent::Idle`]
///
/// A missing day counts as a day without categories.
pub fn resolve(schedule: &Schedule, today: NaiveDate) -> DisplayIntent {
    let tomorrow = today.succ_opt();

    let mut today_hit: Option<CategorySet> = None;
    let mut tomorrow_hit: Option<CategorySet> = None;
    let mut upcoming: Option<Day> = None;

    for day in schedule.days() {
        if day.date == today {
            if day.categories.contains(Category::Holiday) {
                let next = tomorrow
                    .and_then(|date| schedule.day(date))
                    .map(|d| d.categories.without(Category::Holiday))
                    .unwrap_or_default();
                return if next.is_empty() {
                    DisplayIntent::HolidayOnly
                } else {
                    DisplayIntent::HolidayThenCollection(next)
                };
            }
            if day.has_categories() {
                today_hit = Some(day.categories);
            }
            continue;
        }

        if !day.has_categories() {
            continue;
        }

        match tomorrow {
            Some(tomorrow) if day.date == tomorrow => {
                tomorrow_hit.get_or_insert(day.categories);
            }
            Some(tomorrow) if day.date > tomorrow => {
                if upcoming.is_none_or(|u| day.date < u.date) {
                    upcoming = Some(*day);
                }
            }
            _ => {}
        }
    }

    if let Some(categories) = today_hit.or(tomorrow_hit) {
        return DisplayIntent::TodayOrTomorrowCollection(categories);
    }

    upcoming
        .map(|day| DisplayIntent::UpcomingCollection(day.categories))
        .unwrap_or(DisplayIntent::Idle)
}
