//! Error types
//!
//! The resolver never fails. Errors only come from schedule storage limits,
//! the decision flow and strip writes.

use core::fmt;

/// Returned when a [`Week`](crate::schedule::Week) or
/// [`Schedule`](crate::schedule::Schedule) is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityError;

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("schedule storage is full")
    }
}

/// Errors surfaced by the decision flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleError {
    /// Neither the cache nor a refetch produced a schedule with collections
    Unavailable,
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => f.write_str("collection schedule unavailable"),
        }
    }
}

/// A single strip flush failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStepFailed<E>(pub E);

impl<E: fmt::Debug> fmt::Display for RenderStepFailed<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "render step failed: {:?}", self.0)
    }
}
