use super::{Animation, Step};
use crate::color::Rgb;

/// Fills all LEDs with one color, once
#[derive(Debug, Clone)]
pub struct SolidAnimation {
    color: Rgb,
}

impl SolidAnimation {
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }
}

impl Animation for SolidAnimation {
    fn step(&mut self, leds: &mut [Rgb]) -> Step {
        leds.fill(self.color);
        Step::Hold
    }
}
