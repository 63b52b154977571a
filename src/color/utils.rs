pub use smart_leds::hsv::hsv2rgb;

use crate::{
    color::Rgb,
    math8::{blend8, qadd8, scale8},
};

/// Blend two RGB colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
pub fn blend_colors(a: Rgb, b: Rgb, amount_of_b: u8) -> Rgb {
    Rgb {
        r: blend8(a.r, b.r, amount_of_b),
        g: blend8(a.g, b.g, amount_of_b),
        b: blend8(a.b, b.b, amount_of_b),
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Fill every LED with one color
pub fn fill_solid(leds: &mut [Rgb], color: Rgb) {
    for led in leds {
        *led = color;
    }
}

/// Dim every LED toward black by `amount` (0 = unchanged, 255 = black)
pub fn fade_to_black_by(leds: &mut [Rgb], amount: u8) {
    let keep = 255 - amount;
    for led in leds {
        led.r = scale8(led.r, keep);
        led.g = scale8(led.g, keep);
        led.b = scale8(led.b, keep);
    }
}

/// Per-channel saturating add, used for additive blending
#[inline]
pub const fn add_saturating(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: qadd8(a.r, b.r),
        g: qadd8(a.g, b.g),
        b: qadd8(a.b, b.b),
    }
}
