//! Strip partitioning into per-category zones

use crate::color::{Rgb, mirror_half};

/// How zones are laid out along the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoneLayout {
    /// One run per zone, first zone at index 0
    Sequential,
    /// Zones fill the first half and are mirrored onto the second,
    /// so the first zone sits at both ends of the strip
    #[default]
    Mirrored,
}

/// Get the center of the array
pub const fn center_of<T>(arr: &[T]) -> usize {
    let count = arr.len();
    let mut center_len = count / 2;
    if !count.is_multiple_of(2) {
        center_len += 1;
    }

    if center_len <= count {
        return center_len;
    }
    count
}

/// Index of the zone owning `index` when `len` LEDs are split into `zones` runs
pub const fn zone_index(index: usize, len: usize, zones: usize) -> usize {
    if len == 0 || zones == 0 {
        return 0;
    }
    let zone = index * zones / len;
    if zone < zones { zone } else { zones - 1 }
}

/// Paint `colors[i]` over zone `i`
pub fn fill_zones(leds: &mut [Rgb], colors: &[Rgb], layout: ZoneLayout) {
    match layout {
        ZoneLayout::Sequential => fill_sequential(leds, colors),
        ZoneLayout::Mirrored => {
            let center = center_of(leds);
            fill_sequential(&mut leds[..center], colors);
            mirror_half(leds);
        }
    }
}

fn fill_sequential(leds: &mut [Rgb], colors: &[Rgb]) {
    if colors.is_empty() {
        return;
    }
    let len = leds.len();
    for (i, led) in leds.iter_mut().enumerate() {
        *led = colors[zone_index(i, len, colors.len())];
    }
}
