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

    let mut partial: u32 = (a as u32) << 16; // a * 65536
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    ); // (b - a) * amount_of_b * 257
    partial = partial.wrapping_add(0x8000); // + 32768 for rounding

    (partial >> 16) as u8
}

/// Ease in out cubic
///
/// Symmetric acceleration/deceleration curve on [0, 1]:
/// `4t³` below the midpoint, `1 - ((-2t + 2)³) / 2` above it.
/// Monotonic, with `f(0) = 0`, `f(0.5) = 0.5`, `f(1) = 1`.
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - (u * u * u) / 2.0
    }
}

/// Map a raw morph progress (0.0-1.0) to an eased 8-bit intensity
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn eased_intensity(progress: f32) -> u8 {
    let eased = ease_in_out_cubic(progress);
    libm::roundf(eased * 255.0).clamp(0.0, 255.0) as u8
}
