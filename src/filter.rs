//! Output filters applied to a copy of the pixel buffer right before a push
//!
//! The pixel buffer itself is never filtered: effects like Confetti and
//! Juggle fade what they drew on the previous frame, so scaling in place
//! would compound.

use crate::color::Rgb;
use crate::math8::{map_range, scale8};
use crate::state::{MAX_BRIGHTNESS, clamp_brightness};

pub(crate) trait Filter {
    /// Apply the filter to an output frame
    fn apply(&self, frame: &mut [Rgb]);
}

/// Maps the logical 0-100 brightness onto the hardware brightness ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessFilter {
    max_brightness: u8,
    scale: u8,
}

impl BrightnessFilter {
    pub const fn new(max_brightness: u8) -> Self {
        Self {
            max_brightness,
            scale: 0,
        }
    }

    /// Hardware scale for a logical brightness
    pub const fn hardware_scale(&self, brightness: u8) -> u8 {
        map_range(
            clamp_brightness(brightness),
            0,
            MAX_BRIGHTNESS,
            0,
            self.max_brightness,
        )
    }

    /// Set the scale from a logical brightness
    pub fn set_brightness(&mut self, brightness: u8) {
        self.scale = self.hardware_scale(brightness);
    }

    /// Scale at the hardware ceiling, bypassing the logical brightness
    pub fn set_full(&mut self) {
        self.scale = self.max_brightness;
    }

    pub const fn scale(&self) -> u8 {
        self.scale
    }

    pub const fn max_brightness(&self) -> u8 {
        self.max_brightness
    }
}

impl Filter for BrightnessFilter {
    fn apply(&self, frame: &mut [Rgb]) {
        if self.scale == u8::MAX {
            return;
        }
        for pixel in frame.iter_mut() {
            pixel.r = scale8(pixel.r, self.scale);
            pixel.g = scale8(pixel.g, self.scale);
            pixel.b = scale8(pixel.b, self.scale);
        }
    }
}
