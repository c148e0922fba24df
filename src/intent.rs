use crate::schedule::CategorySet;

const INTENT_NAME_IDLE: &str = "idle";
const INTENT_NAME_PROCESSING: &str = "processing";
const INTENT_NAME_ERROR_FALLBACK: &str = "error_fallback";
const INTENT_NAME_HOLIDAY_ONLY: &str = "holiday_only";
const INTENT_NAME_HOLIDAY_THEN_COLLECTION: &str = "holiday_then_collection";
const INTENT_NAME_TODAY_OR_TOMORROW: &str = "today_or_tomorrow_collection";
const INTENT_NAME_UPCOMING: &str = "upcoming_collection";

/// What the strip should be showing
///
/// Every value is complete on its own: a new evaluation replaces the
/// previous intent instead of patching it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayIntent {
    /// Strip off
    #[default]
    Idle,
    /// Work in progress
    Processing,
    /// Schedule could not be obtained
    ErrorFallback,
    /// Today is a holiday, nothing is collected tomorrow
    HolidayOnly,
    /// Today is a holiday, the shifted collection happens tomorrow
    HolidayThenCollection(CategorySet),
    /// Collection today or tomorrow
    TodayOrTomorrowCollection(CategorySet),
    /// Next collection is more than one day out
    UpcomingCollection(CategorySet),
}

impl DisplayIntent {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => INTENT_NAME_IDLE,
            Self::Processing => INTENT_NAME_PROCESSING,
            Self::ErrorFallback => INTENT_NAME_ERROR_FALLBACK,
            Self::HolidayOnly => INTENT_NAME_HOLIDAY_ONLY,
            Self::HolidayThenCollection(_) => INTENT_NAME_HOLIDAY_THEN_COLLECTION,
            Self::TodayOrTomorrowCollection(_) => INTENT_NAME_TODAY_OR_TOMORROW,
            Self::UpcomingCollection(_) => INTENT_NAME_UPCOMING,
        }
    }

    /// Categories carried by the intent, empty for unparameterized ones
    pub const fn categories(self) -> CategorySet {
        match self {
            Self::HolidayThenCollection(set)
            | Self::TodayOrTomorrowCollection(set)
            | Self::UpcomingCollection(set) => set,
            Self::Idle | Self::Processing | Self::ErrorFallback | Self::HolidayOnly => {
                CategorySet::EMPTY
            }
        }
    }
}
