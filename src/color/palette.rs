//! Fixed 16-entry color palettes

use crate::{
    color::{Rgb, blend_colors, rgb_from_u32},
    math8::scale8,
};

/// Sixteen evenly spaced colors sampled with linear blending
pub type Palette16 = [Rgb; 16];

/// Create a palette from a list of hex colors (0xRRGGBB format)
macro_rules! hex_palette {
    ($($color:expr),*) => {
        [
            $(rgb_from_u32($color)),*
        ]
    };
}

/// Black through red and yellow to white
#[allow(clippy::unreadable_literal)]
pub const HEAT_COLORS: Palette16 = hex_palette![
    0x000000, 0x330000, 0x660000, 0x990000, 0xCC0000, 0xFF0000, 0xFF3300, 0xFF6600,
    0xFF9900, 0xFFCC00, 0xFFFF00, 0xFFFF33, 0xFFFF66, 0xFFFF99, 0xFFFFCC, 0xFFFFFF
];

/// Deep blues, sea greens and aqua
#[allow(clippy::unreadable_literal)]
pub const OCEAN_COLORS: Palette16 = hex_palette![
    0x191970, // Midnight blue
    0x00008B, // Dark blue
    0x191970, // Midnight blue
    0x000080, // Navy
    0x00008B, // Dark blue
    0x0000CD, // Medium blue
    0x2E8B57, // Sea green
    0x008080, // Teal
    0x5F9EA0, // Cadet blue
    0x0000FF, // Blue
    0x008B8B, // Dark cyan
    0x6495ED, // Cornflower blue
    0x7FFFD4, // Aquamarine
    0x2E8B57, // Sea green
    0x00FFFF, // Aqua
    0x87CEFA  // Light sky blue
];

/// Sample `palette` at `index` (0-255), blending between neighbouring entries
///
/// The top of the range blends back toward the first entry, like a color wheel.
pub fn color_from_palette(palette: &Palette16, index: u8, brightness: u8) -> Rgb {
    let entry = usize::from(index >> 4);
    let fraction = (index & 0x0F) << 4;

    let current = palette[entry];
    let next = palette[(entry + 1) % palette.len()];
    let color = if fraction == 0 {
        current
    } else {
        blend_colors(current, next, fraction)
    };

    if brightness == 255 {
        return color;
    }
    Rgb {
        r: scale8(color.r, brightness),
        g: scale8(color.g, brightness),
        b: scale8(color.b, brightness),
    }
}
