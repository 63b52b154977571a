//! Externally visible light state and its value ranges

use crate::{color::Rgb, effect::EffectId};

/// Highest logical brightness
pub const MAX_BRIGHTNESS: u8 = 100;
pub const MIN_SPEED: u8 = 1;
pub const MAX_SPEED: u8 = 7;
/// Number of distinct speed settings
pub const SPEED_LEVELS: usize = (MAX_SPEED - MIN_SPEED + 1) as usize;

/// Clamp a logical brightness to `0..=100`
pub const fn clamp_brightness(brightness: u8) -> u8 {
    if brightness > MAX_BRIGHTNESS {
        MAX_BRIGHTNESS
    } else {
        brightness
    }
}

/// Clamp a speed to `1..=7`
pub const fn clamp_speed(speed: u8) -> u8 {
    if speed < MIN_SPEED {
        MIN_SPEED
    } else if speed > MAX_SPEED {
        MAX_SPEED
    } else {
        speed
    }
}

/// Index of `speed` into a speed table, clamping out-of-range values
pub const fn speed_index(speed: u8) -> usize {
    (clamp_speed(speed) - MIN_SPEED) as usize
}

/// Snapshot of the light as seen by the command API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightState {
    pub on: bool,
    /// Logical brightness, 0-100
    pub brightness: u8,
    pub color: Rgb,
    pub effect: EffectId,
    /// Effect speed, 1-7
    pub speed: u8,
}

impl Default for LightState {
    fn default() -> Self {
        Self {
            on: false,
            brightness: MAX_BRIGHTNESS,
            color: Rgb { r: 255, g: 0, b: 0 },
            effect: EffectId::None,
            speed: 4,
        }
    }
}

impl LightState {
    /// Copy of this state with every numeric field clamped to its range
    #[must_use]
    pub const fn clamped(self) -> Self {
        Self {
            brightness: clamp_brightness(self.brightness),
            speed: clamp_speed(self.speed),
            ..self
        }
    }
}
