//! Single-slot shared display state
//!
//! The decision side writes the latest [`DisplayIntent`], the renderer reads
//! it once per animation step. Built on `critical-section`, so it is safe
//! across threads, tasks and interrupts.

use core::cell::Cell;

use critical_section::Mutex;

use crate::intent::DisplayIntent;

/// Holds exactly one current intent
///
/// There is no queue: an intent overwritten before the renderer reads it is
/// never observed. The last committed [`set`](Self::set) always wins.
pub struct AnimationState {
    inner: Mutex<Cell<DisplayIntent>>,
}

impl AnimationState {
    /// Create a state holding [`DisplayIntent::Idle`]
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(DisplayIntent::Idle)),
        }
    }

    /// Replace the current intent
    ///
    /// Never waits for the renderer to pick the change up.
    pub fn set(&self, intent: DisplayIntent) {
        info!("state: set {}", intent.as_str());
        critical_section::with(|cs| self.inner.borrow(cs).set(intent));
    }

    /// Get the most recently set intent
    pub fn get(&self) -> DisplayIntent {
        critical_section::with(|cs| self.inner.borrow(cs).get())
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}
