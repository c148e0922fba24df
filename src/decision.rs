//! Decision flow
//!
//! Obtains a schedule, resolves it and publishes the intent. Fetching and
//! storage stay behind the [`ScheduleSource`] and [`ScheduleStore`] seams.

use core::fmt::Debug;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};

use crate::config::DeciderConfig;
use crate::error::ScheduleError;
use crate::intent::DisplayIntent;
use crate::resolver::resolve;
use crate::schedule::Schedule;
use crate::state::AnimationState;

/// Remote origin of the collection calendar
pub trait ScheduleSource {
    type Error: Debug;

    fn fetch_schedule(&mut self) -> Result<Schedule, Self::Error>;
}

/// Local copy of the last fetched calendar
pub trait ScheduleStore {
    /// Load the cached schedule, empty if there is none
    fn load_schedule(&mut self) -> Schedule;

    fn save_schedule(&mut self, schedule: &Schedule);
}

/// Publishes a fresh [`DisplayIntent`] for a given day
pub struct Decider<'a, S, C> {
    source: S,
    store: C,
    state: &'a AnimationState,
    config: DeciderConfig,
}

impl<'a, S: ScheduleSource, C: ScheduleStore> Decider<'a, S, C> {
    pub const fn new(
        source: S,
        store: C,
        state: &'a AnimationState,
        config: &DeciderConfig,
    ) -> Self {
        Self {
            source,
            store,
            state,
            config: *config,
        }
    }

    /// When the next daily [`refresh`](Self::refresh) is due
    pub fn next_refresh_at(&self, now: NaiveDateTime) -> NaiveDateTime {
        next_refresh_at(now, self.config.refresh_at)
    }

    /// Re-evaluate the schedule for `today`
    ///
    /// Shows [`DisplayIntent::Processing`] while working. The calendar is
    /// fetched when `force_fetch` is set or on the first and last day of the
    /// month, otherwise the cached copy is used. A failed fetch or a schedule
    /// without collections gets one refetch; if that does not help,
    /// [`DisplayIntent::ErrorFallback`] is shown.
    pub fn refresh(
        &mut self,
        today: NaiveDate,
        force_fetch: bool,
    ) -> Result<DisplayIntent, ScheduleError> {
        self.state.set(DisplayIntent::Processing);

        let first = if force_fetch || is_month_boundary(today) {
            info!("decision: fetching schedule");
            self.fetch_and_save()
        } else {
            info!("decision: loading cached schedule");
            Some(self.store.load_schedule())
        };

        let schedule = match first.filter(Schedule::has_collections) {
            Some(schedule) => schedule,
            None => {
                warn!("decision: no collections found, fetching again");
                match self.fetch_and_save().filter(Schedule::has_collections) {
                    Some(schedule) => schedule,
                    None => {
                        error!("decision: no collections after refetch");
                        self.state.set(DisplayIntent::ErrorFallback);
                        return Err(ScheduleError::Unavailable);
                    }
                }
            }
        };

        let intent = resolve(&schedule, today);
        self.state.set(intent);
        Ok(intent)
    }

    fn fetch_and_save(&mut self) -> Option<Schedule> {
        match self.source.fetch_schedule() {
            Ok(schedule) => {
                self.store.save_schedule(&schedule);
                Some(schedule)
            }
            Err(err) => {
                error!("decision: fetch failed: {:?}", err);
                None
            }
        }
    }

    pub fn into_parts(self) -> (S, C) {
        (self.source, self.store)
    }
}

/// Check if `date` is the first or the last day of its month
pub fn is_month_boundary(date: NaiveDate) -> bool {
    date.day() == 1
        || date
            .succ_opt()
            .is_none_or(|next| next.month() != date.month())
}

/// Next time at or after `now` the daily refresh is due
///
/// Today's refresh time when it has not passed yet, tomorrow's otherwise.
pub fn next_refresh_at(now: NaiveDateTime, at: NaiveTime) -> NaiveDateTime {
    let today = now.date().and_time(at);
    if now <= today {
        return today;
    }
    now.date()
        .checked_add_days(Days::new(1))
        .map_or(today, |tomorrow| tomorrow.and_time(at))
}
