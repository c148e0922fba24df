use embassy_time::Duration;

use super::{Animation, Step};
use crate::color::Rgb;

/// Blinks a color a fixed number of times, then completes
#[derive(Debug, Clone)]
pub struct BlinkAnimation {
    on: Rgb,
    off: Rgb,
    count: u8,
    interval: Duration,
    /// Half-blinks shown so far
    shown: u16,
}

impl BlinkAnimation {
    pub const fn new(on: Rgb, off: Rgb, count: u8, interval: Duration) -> Self {
        Self {
            on,
            off,
            count,
            interval,
            shown: 0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.shown >= 2 * u16::from(self.count)
    }
}

impl Animation for BlinkAnimation {
    fn step(&mut self, leds: &mut [Rgb]) -> Step {
        if self.is_finished() {
            info!("blink: finished after {} blinks", self.count);
            return Step::Complete;
        }
        let color = if self.shown.is_multiple_of(2) {
            self.on
        } else {
            self.off
        };
        leds.fill(color);
        self.shown += 1;
        Step::Next(self.interval)
    }
}
