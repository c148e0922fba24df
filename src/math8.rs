/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16;
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    );
    partial = partial.wrapping_add(0x8000);

    (partial >> 16) as u8
}

/// Progress (0-255) of `step` within a routine of `steps` steps
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn progress8(step: u16, steps: u16) -> u8 {
    if steps == 0 || step >= steps {
        return 255;
    }
    ((step as u32 * 255) / steps as u32) as u8
}

/// Breathing curve level (0-255) at `step` of a `steps`-long rise
///
/// Follows a quarter sine from `floor` up to full brightness, so the
/// output never drops below `floor`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn breathe8(step: u16, steps: u16, floor: u8) -> u8 {
    let ratio = if steps == 0 {
        1.0
    } else {
        f32::from(step.min(steps)) / f32::from(steps)
    };
    let wave = libm::sinf(core::f32::consts::FRAC_PI_2 * ratio);
    let floor = f32::from(floor);
    let level = floor + (255.0 - floor) * wave;
    libm::roundf(level).clamp(0.0, 255.0) as u8
}
