use smart_leds::RGB8;

use crate::math8::scale8;
use crate::segments::DIGIT_COUNT;

pub type Rgb = RGB8;

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Scale a color by an 8-bit brightness (0-255 = 0.0-1.0)
///
/// Linear dimming: every channel is scaled by the same factor.
#[inline]
pub const fn scale_color(color: Rgb, brightness: u8) -> Rgb {
    Rgb {
        r: scale8(color.r, brightness),
        g: scale8(color.g, brightness),
        b: scale8(color.b, brightness),
    }
}

/// Fixed color per numeral 0-9
///
/// Colors never interpolate during a morph; only per-segment
/// brightness does. The palette keeps adjacent numerals apart in hue.
pub const DIGIT_COLORS: [Rgb; DIGIT_COUNT] = [
    rgb_from_u32(0xE6194B), // 0 red
    rgb_from_u32(0xF58231), // 1 orange
    rgb_from_u32(0xFFE119), // 2 yellow
    rgb_from_u32(0x3CB44B), // 3 green
    rgb_from_u32(0x42D4F4), // 4 cyan
    rgb_from_u32(0x4363D8), // 5 blue
    rgb_from_u32(0x911EB4), // 6 purple
    rgb_from_u32(0xF032E6), // 7 magenta
    rgb_from_u32(0xFFFFFF), // 8 white
    rgb_from_u32(0x469990), // 9 teal
];
