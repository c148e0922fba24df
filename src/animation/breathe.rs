//! Breathing effect
//!
//! Brightness rises along a quarter sine from the floor to full level,
//! then falls back the same way, looping until the intent changes.

use embassy_time::Duration;

use super::{Animation, Step};
use crate::color::{Rgb, dim};
use crate::math8::breathe8;

#[derive(Debug, Clone)]
pub struct BreatheAnimation {
    color: Rgb,
    floor: u8,
    steps: u16,
    interval: Duration,
    /// Position in the rise-then-fall cycle
    position: u32,
}

impl BreatheAnimation {
    pub const fn new(color: Rgb, floor: u8, steps: u16, interval: Duration) -> Self {
        Self {
            color,
            floor,
            steps,
            interval,
            position: 0,
        }
    }

    /// Frames in one rise-then-fall cycle
    fn cycle_len(&self) -> u32 {
        2 * (u32::from(self.steps) + 1)
    }

    /// Brightness level at the current position
    #[allow(clippy::cast_possible_truncation)]
    fn level(&self) -> u8 {
        let steps = u32::from(self.steps);
        let rise = if self.position <= steps {
            self.position
        } else {
            self.cycle_len() - 1 - self.position
        };
        breathe8(rise as u16, self.steps, self.floor)
    }
}

impl Animation for BreatheAnimation {
    fn step(&mut self, leds: &mut [Rgb]) -> Step {
        leds.fill(dim(self.color, self.level()));
        self.position = (self.position + 1) % self.cycle_len();
        Step::Next(self.interval)
    }
}
