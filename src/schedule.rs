//! Collection schedule data model
//!
//! A [`Schedule`] is an ordered list of [`Week`]s, each holding the [`Day`]s
//! of one calendar week. Storage is fixed-capacity so a schedule can live on
//! the stack of an embedded task.

use chrono::{Datelike, Days, NaiveDate};
use heapless::Vec;

use crate::error::CapacityError;

/// Maximum number of weeks a schedule holds (one calendar month spans at most six)
pub const MAX_WEEKS: usize = 6;

/// Maximum number of days in a week
pub const DAYS_PER_WEEK: usize = 7;

const CATEGORY_NAME_GARBAGE: &str = "garbage";
const CATEGORY_NAME_ORGANICS: &str = "organics";
const CATEGORY_NAME_RECYCLING: &str = "recycling";
const CATEGORY_NAME_HOLIDAY: &str = "holiday";

/// Collection category tag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Category {
    Garbage = 0,
    Organics = 1,
    Recycling = 2,
    /// Not a collection: the regular pickup is shifted
    Holiday = 3,
}

impl Category {
    /// Categories that own a zone on the strip, in zone order
    pub const COLLECTIONS: [Self; 3] = [Self::Garbage, Self::Organics, Self::Recycling];

    const ALL: [Self; 4] = [Self::Garbage, Self::Organics, Self::Recycling, Self::Holiday];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Garbage => CATEGORY_NAME_GARBAGE,
            Self::Organics => CATEGORY_NAME_ORGANICS,
            Self::Recycling => CATEGORY_NAME_RECYCLING,
            Self::Holiday => CATEGORY_NAME_HOLIDAY,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            CATEGORY_NAME_GARBAGE => Some(Self::Garbage),
            CATEGORY_NAME_ORGANICS => Some(Self::Organics),
            CATEGORY_NAME_RECYCLING => Some(Self::Recycling),
            CATEGORY_NAME_HOLIDAY => Some(Self::Holiday),
            _ => None,
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Set of categories present on a day
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CategorySet {
    bits: u8,
}

impl CategorySet {
    pub const EMPTY: Self = Self { bits: 0 };

    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Build a set from string tags, ignoring unknown ones
    pub fn from_tags(tags: &[&str]) -> Self {
        tags.iter()
            .filter_map(|tag| Category::parse_from_str(tag))
            .collect()
    }

    #[must_use]
    pub const fn with(self, category: Category) -> Self {
        Self {
            bits: self.bits | category.bit(),
        }
    }

    #[must_use]
    pub const fn without(self, category: Category) -> Self {
        Self {
            bits: self.bits & !category.bit(),
        }
    }

    pub fn insert(&mut self, category: Category) {
        *self = self.with(category);
    }

    pub fn remove(&mut self, category: Category) {
        *self = self.without(category);
    }

    pub const fn contains(self, category: Category) -> bool {
        self.bits & category.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = Category> {
        Category::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl core::fmt::Debug for CategorySet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set()
            .entries(self.iter().map(Category::as_str))
            .finish()
    }
}

/// One calendar day of the schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Day {
    pub date: NaiveDate,
    pub categories: CategorySet,
}

impl Day {
    pub const fn new(date: NaiveDate, categories: CategorySet) -> Self {
        Self { date, categories }
    }

    /// Check if anything is tagged on this day
    pub const fn has_categories(&self) -> bool {
        !self.categories.is_empty()
    }
}

/// Days of one calendar week, in date order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Week {
    days: Vec<Day, DAYS_PER_WEEK>,
}

impl Week {
    pub const fn new() -> Self {
        Self { days: Vec::new() }
    }

    pub fn push(&mut self, day: Day) -> Result<(), CapacityError> {
        self.days.push(day).map_err(|_| CapacityError)
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// Monday of the week, if it has any day
    pub fn start(&self) -> Option<NaiveDate> {
        self.days.first().map(|day| week_start(day.date))
    }
}

/// Collection calendar, grouped by week
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    weeks: Vec<Week, MAX_WEEKS>,
}

impl Schedule {
    pub const fn new() -> Self {
        Self { weeks: Vec::new() }
    }

    /// Build a schedule from days, grouping them into Monday-based weeks
    pub fn from_days(days: &[Day]) -> Result<Self, CapacityError> {
        let mut schedule = Self::new();
        for day in days {
            schedule.insert_day(*day)?;
        }
        Ok(schedule)
    }

    pub fn push_week(&mut self, week: Week) -> Result<(), CapacityError> {
        self.weeks.push(week).map_err(|_| CapacityError)
    }

    /// Add a day to the week it belongs to, opening a new week when needed
    pub fn insert_day(&mut self, day: Day) -> Result<(), CapacityError> {
        let start = week_start(day.date);
        if let Some(week) = self.weeks.iter_mut().find(|w| w.start() == Some(start)) {
            return week.push(day);
        }
        let mut week = Week::new();
        week.push(day)?;
        self.push_week(week)
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// All days in week order, then day order
    pub fn days(&self) -> impl Iterator<Item = &Day> + Clone {
        self.weeks.iter().flat_map(|week| week.days.iter())
    }

    pub fn day(&self, date: NaiveDate) -> Option<&Day> {
        self.days().find(|day| day.date == date)
    }

    pub fn is_empty(&self) -> bool {
        self.days().next().is_none()
    }

    /// Check if any day carries at least one category
    pub fn has_collections(&self) -> bool {
        self.days().any(Day::has_categories)
    }
}

/// Monday of the week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday();
    date.checked_sub_days(Days::new(u64::from(offset)))
        .unwrap_or(date)
}
