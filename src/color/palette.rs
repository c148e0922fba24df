//! Named colors for collection categories and display states

use super::{Rgb, rgb_from_u32};
use crate::schedule::{Category, CategorySet};

pub const COLOR_GARBAGE: Rgb = Rgb { r: 50, g: 0, b: 90 };
pub const COLOR_ORGANICS: Rgb = Rgb { r: 0, g: 128, b: 0 };
pub const COLOR_RECYCLING: Rgb = Rgb { r: 0, g: 0, b: 255 };
pub const COLOR_HOLIDAY: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const COLOR_ERROR: Rgb = Rgb { r: 255, g: 0, b: 0 };
/// Shown in a zone whose category is not collected
pub const COLOR_NO_COLLECTION: Rgb = rgb_from_u32(0xFF_A5_00);
/// Neutral color zones fade from
pub const COLOR_BASE: Rgb = Rgb { r: 255, g: 255, b: 255 };
pub const COLOR_PROCESSING: Rgb = Rgb { r: 255, g: 255, b: 255 };
pub const COLOR_OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Colors used by every animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub garbage: Rgb,
    pub organics: Rgb,
    pub recycling: Rgb,
    pub holiday: Rgb,
    pub error: Rgb,
    pub no_collection: Rgb,
    pub base: Rgb,
    pub processing: Rgb,
    pub off: Rgb,
}

impl Palette {
    pub const DEFAULT: Self = Self {
        garbage: COLOR_GARBAGE,
        organics: COLOR_ORGANICS,
        recycling: COLOR_RECYCLING,
        holiday: COLOR_HOLIDAY,
        error: COLOR_ERROR,
        no_collection: COLOR_NO_COLLECTION,
        base: COLOR_BASE,
        processing: COLOR_PROCESSING,
        off: COLOR_OFF,
    };

    /// Color of a category
    pub const fn category(&self, category: Category) -> Rgb {
        match category {
            Category::Garbage => self.garbage,
            Category::Organics => self.organics,
            Category::Recycling => self.recycling,
            Category::Holiday => self.holiday,
        }
    }

    /// Color of a category's zone: its own color when collected, `fallback` otherwise
    pub fn zone_color(&self, category: Category, collected: CategorySet, fallback: Rgb) -> Rgb {
        if collected.contains(category) {
            self.category(category)
        } else {
            fallback
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}
