mod tests {
    use chrono::NaiveDate;
    use waste_signal::schedule::{Category, CategorySet, Day, Schedule};
    use waste_signal::{DisplayIntent, resolve};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn day(d: NaiveDate, tags: &[&str]) -> Day {
        Day::new(d, CategorySet::from_tags(tags))
    }

    fn schedule(days: &[Day]) -> Schedule {
        Schedule::from_days(days).unwrap()
    }

    fn set(categories: &[Category]) -> CategorySet {
        categories.iter().copied().collect()
    }

    #[test]
    fn test_collection_today() {
        let s = schedule(&[day(date(2024, 6, 3), &["garbage"])]);
        assert_eq!(
            resolve(&s, date(2024, 6, 3)),
            DisplayIntent::TodayOrTomorrowCollection(set(&[Category::Garbage]))
        );
    }

    #[test]
    fn test_holiday_then_collection() {
        let s = schedule(&[
            day(date(2024, 6, 3), &["holiday"]),
            day(date(2024, 6, 4), &["recycling"]),
        ]);
        assert_eq!(
            resolve(&s, date(2024, 6, 3)),
            DisplayIntent::HolidayThenCollection(set(&[Category::Recycling]))
        );
    }

    #[test]
    fn test_upcoming_collection() {
        let s = schedule(&[day(date(2024, 6, 10), &["organics"])]);
        assert_eq!(
            resolve(&s, date(2024, 6, 3)),
            DisplayIntent::UpcomingCollection(set(&[Category::Organics]))
        );
    }

    #[test]
    fn test_empty_schedule_is_idle() {
        assert_eq!(
            resolve(&Schedule::new(), date(2024, 6, 3)),
            DisplayIntent::Idle
        );
    }

    #[test]
    fn test_holiday_without_tomorrow_entry() {
        let s = schedule(&[day(date(2024, 6, 3), &["holiday"])]);
        assert_eq!(resolve(&s, date(2024, 6, 3)), DisplayIntent::HolidayOnly);
    }

    #[test]
    fn test_holiday_with_empty_tomorrow() {
        let s = schedule(&[
            day(date(2024, 6, 3), &["holiday"]),
            day(date(2024, 6, 4), &[]),
            day(date(2024, 6, 5), &["garbage"]),
        ]);
        assert_eq!(resolve(&s, date(2024, 6, 3)), DisplayIntent::HolidayOnly);
    }

    #[test]
    fn test_holiday_tomorrow_drops_holiday_tag() {
        let s = schedule(&[
            day(date(2024, 6, 3), &["holiday", "garbage"]),
            day(date(2024, 6, 4), &["holiday", "garbage", "organics"]),
        ]);
        assert_eq!(
            resolve(&s, date(2024, 6, 3)),
            DisplayIntent::HolidayThenCollection(set(&[Category::Garbage, Category::Organics]))
        );

        let s = schedule(&[
            day(date(2024, 6, 3), &["holiday"]),
            day(date(2024, 6, 4), &["holiday"]),
        ]);
        assert_eq!(resolve(&s, date(2024, 6, 3)), DisplayIntent::HolidayOnly);
    }

    #[test]
    fn test_holiday_across_week_boundary() {
        // Sunday holiday, Monday starts a new week
        let s = schedule(&[
            day(date(2024, 6, 9), &["holiday"]),
            day(date(2024, 6, 10), &["garbage", "recycling"]),
        ]);
        assert_eq!(s.weeks().len(), 2);
        assert_eq!(
            resolve(&s, date(2024, 6, 9)),
            DisplayIntent::HolidayThenCollection(set(&[Category::Garbage, Category::Recycling]))
        );
    }

    #[test]
    fn test_today_wins_over_tomorrow() {
        let s = schedule(&[
            day(date(2024, 6, 3), &["garbage"]),
            day(date(2024, 6, 4), &["recycling", "organics"]),
        ]);
        assert_eq!(
            resolve(&s, date(2024, 6, 3)),
            DisplayIntent::TodayOrTomorrowCollection(set(&[Category::Garbage]))
        );

        // Listing order does not matter
        let s = schedule(&[
            day(date(2024, 6, 4), &["recycling"]),
            day(date(2024, 6, 3), &["garbage"]),
        ]);
        assert_eq!(
            resolve(&s, date(2024, 6, 3)),
            DisplayIntent::TodayOrTomorrowCollection(set(&[Category::Garbage]))
        );
    }

    #[test]
    fn test_collection_tomorrow() {
        let s = schedule(&[
            day(date(2024, 6, 3), &[]),
            day(date(2024, 6, 4), &["recycling"]),
            day(date(2024, 6, 5), &["garbage"]),
        ]);
        assert_eq!(
            resolve(&s, date(2024, 6, 3)),
            DisplayIntent::TodayOrTomorrowCollection(set(&[Category::Recycling]))
        );
    }

    #[test]
    fn test_tomorrow_across_month_end() {
        let s = schedule(&[day(date(2024, 7, 1), &["organics"])]);
        assert_eq!(
            resolve(&s, date(2024, 6, 30)),
            DisplayIntent::TodayOrTomorrowCollection(set(&[Category::Organics]))
        );
    }

    #[test]
    fn test_upcoming_picks_nearest_day() {
        let s = schedule(&[
            day(date(2024, 6, 3), &[]),
            day(date(2024, 6, 12), &["garbage"]),
            day(date(2024, 6, 6), &["recycling"]),
            day(date(2024, 6, 7), &["organics"]),
        ]);
        assert_eq!(
            resolve(&s, date(2024, 6, 3)),
            DisplayIntent::UpcomingCollection(set(&[Category::Recycling]))
        );
    }

    #[test]
    fn test_past_collections_are_idle() {
        let s = schedule(&[
            day(date(2024, 6, 3), &["garbage"]),
            day(date(2024, 6, 4), &["recycling"]),
            day(date(2024, 6, 20), &[]),
        ]);
        assert_eq!(resolve(&s, date(2024, 6, 10)), DisplayIntent::Idle);
    }

    #[test]
    fn test_holiday_in_the_past_is_ignored() {
        let s = schedule(&[
            day(date(2024, 6, 3), &["holiday"]),
            day(date(2024, 6, 5), &["garbage"]),
        ]);
        assert_eq!(
            resolve(&s, date(2024, 6, 4)),
            DisplayIntent::TodayOrTomorrowCollection(set(&[Category::Garbage]))
        );
    }
}
