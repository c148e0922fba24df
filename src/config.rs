//! Renderer and decision configuration

use chrono::NaiveTime;
use embassy_time::Duration;

use crate::color::Palette;
use crate::zones::ZoneLayout;

/// Default number of LEDs on the strip
pub const DEFAULT_LED_COUNT: usize = 48;

/// Longest time the renderer sleeps before reading the state again
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Timings of the animation routines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTimings {
    /// Steps of one breathing rise (the fall mirrors it)
    pub breathe_steps: u16,
    /// Delay between breathing steps
    pub breathe_interval: Duration,
    /// Lowest breathing level (0-255)
    pub breathe_floor: u8,
    /// Number of error blinks before the strip goes dark
    pub blink_count: u8,
    /// Duration of each blink half (on, then off)
    pub blink_interval: Duration,
    /// Steps of one zone fade
    pub fade_steps: u16,
    /// Delay between fade steps
    pub fade_interval: Duration,
    /// Time spent on the base color before zones fade in
    pub fade_rest: Duration,
    /// Time spent on the category colors before fading back
    pub fade_hold: Duration,
}

impl AnimationTimings {
    pub const DEFAULT: Self = Self {
        breathe_steps: 50,
        breathe_interval: Duration::from_millis(50),
        breathe_floor: 51,
        blink_count: 5,
        blink_interval: Duration::from_millis(500),
        fade_steps: 100,
        fade_interval: Duration::from_millis(20),
        fade_rest: Duration::from_secs(1),
        fade_hold: Duration::from_secs(5),
    };
}

impl Default for AnimationTimings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RendererConfig {
    /// LEDs driven, clamped to the renderer's frame buffer and the strip
    /// length. Strip pixels past this count are kept off.
    pub led_count: usize,
    pub layout: ZoneLayout,
    pub palette: Palette,
    pub timings: AnimationTimings,
    /// Upper bound on the time between two state reads
    pub poll_interval: Duration,
}

impl RendererConfig {
    pub const DEFAULT: Self = Self {
        led_count: DEFAULT_LED_COUNT,
        layout: ZoneLayout::Mirrored,
        palette: Palette::DEFAULT,
        timings: AnimationTimings::DEFAULT,
        poll_interval: DEFAULT_POLL_INTERVAL,
    };
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Daily schedule re-evaluation time
pub const DEFAULT_REFRESH_AT: NaiveTime = match NaiveTime::from_hms_opt(6, 0, 0) {
    Some(time) => time,
    None => NaiveTime::MIN,
};

/// Configuration for the decision flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeciderConfig {
    /// Time of day the schedule is re-evaluated
    pub refresh_at: NaiveTime,
}

impl DeciderConfig {
    pub const DEFAULT: Self = Self {
        refresh_at: DEFAULT_REFRESH_AT,
    };
}

impl Default for DeciderConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
