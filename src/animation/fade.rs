//! Cyclic zone fade
//!
//! One cycle:
//! 1. all zones rest on the base color
//! 2. zones fade to their target one after another
//! 3. the targets are held
//! 4. all zones fade back to the base color together
//!
//! A zone's target is its category color when that category is collected,
//! the "no collection" color otherwise.

use embassy_time::Duration;

use super::{Animation, Step};
use crate::color::{Rgb, blend_colors};
use crate::config::RendererConfig;
use crate::math8::progress8;
use crate::schedule::{Category, CategorySet};
use crate::zones::{ZoneLayout, fill_zones};

const ZONES: usize = Category::COLLECTIONS.len();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FadePhase {
    Rest,
    FadeIn { zone: usize, step: u16 },
    FadeOut { step: u16 },
}

#[derive(Debug, Clone)]
pub struct ZoneFadeAnimation {
    base: Rgb,
    targets: [Rgb; ZONES],
    current: [Rgb; ZONES],
    layout: ZoneLayout,
    steps: u16,
    interval: Duration,
    rest: Duration,
    hold: Duration,
    phase: FadePhase,
}

impl ZoneFadeAnimation {
    pub fn new(categories: CategorySet, config: &RendererConfig) -> Self {
        let palette = &config.palette;
        let targets = Category::COLLECTIONS
            .map(|category| palette.zone_color(category, categories, palette.no_collection));
        Self {
            base: palette.base,
            targets,
            current: [palette.base; ZONES],
            layout: config.layout,
            steps: config.timings.fade_steps,
            interval: config.timings.fade_interval,
            rest: config.timings.fade_rest,
            hold: config.timings.fade_hold,
            phase: FadePhase::Rest,
        }
    }

    /// Target color of each zone, in zone order
    pub const fn targets(&self) -> &[Rgb; ZONES] {
        &self.targets
    }
}

impl Animation for ZoneFadeAnimation {
    fn step(&mut self, leds: &mut [Rgb]) -> Step {
        let (next_phase, delay) = match self.phase {
            FadePhase::Rest => {
                self.current = [self.base; ZONES];
                (FadePhase::FadeIn { zone: 0, step: 0 }, self.rest)
            }
            FadePhase::FadeIn { zone, step } => {
                let amount = progress8(step, self.steps);
                self.current[zone] = blend_colors(self.base, self.targets[zone], amount);
                if step < self.steps {
                    (FadePhase::FadeIn { zone, step: step + 1 }, self.interval)
                } else if zone + 1 < ZONES {
                    (
                        FadePhase::FadeIn {
                            zone: zone + 1,
                            step: 0,
                        },
                        self.interval,
                    )
                } else {
                    (FadePhase::FadeOut { step: 0 }, self.hold)
                }
            }
            FadePhase::FadeOut { step } => {
                let amount = progress8(step, self.steps);
                for (current, target) in self.current.iter_mut().zip(self.targets) {
                    *current = blend_colors(target, self.base, amount);
                }
                if step < self.steps {
                    (FadePhase::FadeOut { step: step + 1 }, self.interval)
                } else {
                    (FadePhase::Rest, self.interval)
                }
            }
        };

        fill_zones(leds, &self.current, self.layout);
        self.phase = next_phase;
        Step::Next(delay)
    }
}
