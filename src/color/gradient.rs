use smart_leds::hsv::hsv2rgb;

use crate::color::{Hsv, Rgb};

/// Fill the strip with a rainbow starting at `start_hue`
///
/// Each following LED advances the hue by `delta_hue`, wrapping around
/// the color wheel.
pub fn fill_rainbow(leds: &mut [Rgb], start_hue: u8, delta_hue: u8) {
    let mut hue = start_hue;
    for led in leds {
        *led = hsv2rgb(Hsv {
            hue,
            sat: 255,
            val: 255,
        });
        hue = hue.wrapping_add(delta_hue);
    }
}
