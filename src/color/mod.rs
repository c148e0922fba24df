mod palette;
mod utils;

use smart_leds::RGB8;

pub use palette::{
    COLOR_BASE, COLOR_ERROR, COLOR_GARBAGE, COLOR_HOLIDAY, COLOR_NO_COLLECTION, COLOR_OFF,
    COLOR_ORGANICS, COLOR_PROCESSING, COLOR_RECYCLING, Palette,
};
pub use utils::{blend_colors, dim, mirror_half, rgb_from_u32};

pub type Rgb = RGB8;
