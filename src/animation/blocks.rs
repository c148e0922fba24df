use super::{Animation, Step};
use crate::color::Rgb;
use crate::config::RendererConfig;
use crate::schedule::{Category, CategorySet};
use crate::zones::{ZoneLayout, fill_zones};

/// Static zones: category color when collected, base color otherwise
#[derive(Debug, Clone)]
pub struct ZoneBlocksAnimation {
    colors: [Rgb; Category::COLLECTIONS.len()],
    layout: ZoneLayout,
}

impl ZoneBlocksAnimation {
    pub fn new(categories: CategorySet, config: &RendererConfig) -> Self {
        let palette = &config.palette;
        Self {
            colors: Category::COLLECTIONS
                .map(|category| palette.zone_color(category, categories, palette.base)),
            layout: config.layout,
        }
    }
}

impl Animation for ZoneBlocksAnimation {
    fn step(&mut self, leds: &mut [Rgb]) -> Step {
        fill_zones(leds, &self.colors, self.layout);
        Step::Hold
    }
}
