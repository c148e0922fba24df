//! Animation routines with compile-time known variants
//!
//! Every [`DisplayIntent`] maps to exactly one routine. Routines are stored
//! in an enum to avoid heap allocations; each implements [`Animation`].
//!
//! A routine is a sequence of steps. Each step paints a whole frame and
//! tells the renderer when the next step is due, so the renderer can read
//! the display state between any two steps.

mod blink;
mod blocks;
mod breathe;
mod fade;
mod solid;

use embassy_time::Duration;

pub use blink::BlinkAnimation;
pub use blocks::ZoneBlocksAnimation;
pub use breathe::BreatheAnimation;
pub use fade::ZoneFadeAnimation;
pub use solid::SolidAnimation;

use crate::color::Rgb;
use crate::config::RendererConfig;
use crate::intent::DisplayIntent;

/// Outcome of one animation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Show the frame, run the next step after the delay
    Next(Duration),
    /// Show the frame and keep it until the intent changes
    Hold,
    /// The routine is over and painted nothing; render idle from now on
    Complete,
}

pub trait Animation {
    /// Paint the next frame into `leds`
    fn step(&mut self, leds: &mut [Rgb]) -> Step;
}

/// Animation slot - enum containing all possible routines
#[derive(Debug, Clone)]
pub enum AnimationSlot {
    /// Strip off
    Off(SolidAnimation),
    /// Breathing while work is in progress
    Breathe(BreatheAnimation),
    /// Error blinks, then off
    Blink(BlinkAnimation),
    /// Static single color
    Solid(SolidAnimation),
    /// Cyclic per-zone fade
    ZoneFade(ZoneFadeAnimation),
    /// Static per-zone colors
    ZoneBlocks(ZoneBlocksAnimation),
}

impl AnimationSlot {
    /// Routine rendering `intent`, positioned at its first step
    pub fn for_intent(intent: DisplayIntent, config: &RendererConfig) -> Self {
        let palette = &config.palette;
        let timings = &config.timings;
        match intent {
            DisplayIntent::Idle => Self::off(config),
            DisplayIntent::Processing => Self::Breathe(BreatheAnimation::new(
                palette.processing,
                timings.breathe_floor,
                timings.breathe_steps,
                timings.breathe_interval,
            )),
            DisplayIntent::ErrorFallback => Self::Blink(BlinkAnimation::new(
                palette.error,
                palette.off,
                timings.blink_count,
                timings.blink_interval,
            )),
            DisplayIntent::HolidayOnly => Self::Solid(SolidAnimation::new(palette.holiday)),
            DisplayIntent::HolidayThenCollection(categories)
            | DisplayIntent::TodayOrTomorrowCollection(categories) => {
                Self::ZoneFade(ZoneFadeAnimation::new(categories, config))
            }
            DisplayIntent::UpcomingCollection(categories) => {
                Self::ZoneBlocks(ZoneBlocksAnimation::new(categories, config))
            }
        }
    }

    /// Idle routine: all pixels off
    pub fn off(config: &RendererConfig) -> Self {
        Self::Off(SolidAnimation::new(config.palette.off))
    }

    /// Run the next step of the current routine
    pub fn step(&mut self, leds: &mut [Rgb]) -> Step {
        match self {
            Self::Off(animation) | Self::Solid(animation) => animation.step(leds),
            Self::Breathe(animation) => animation.step(leds),
            Self::Blink(animation) => animation.step(leds),
            Self::ZoneFade(animation) => animation.step(leds),
            Self::ZoneBlocks(animation) => animation.step(leds),
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Off(_) => "off",
            Self::Breathe(_) => "breathe",
            Self::Blink(_) => "blink",
            Self::Solid(_) => "solid",
            Self::ZoneFade(_) => "zone_fade",
            Self::ZoneBlocks(_) => "zone_blocks",
        }
    }
}
