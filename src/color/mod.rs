mod gradient;
mod palette;
mod utils;

use smart_leds::RGB8;
use smart_leds::hsv::Hsv as HSV;

pub use gradient::fill_rainbow;
pub use palette::{HEAT_COLORS, OCEAN_COLORS, Palette16, color_from_palette};
pub use utils::{
    add_saturating, blend_colors, fade_to_black_by, fill_solid, hsv2rgb, rgb_from_u32,
};

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
