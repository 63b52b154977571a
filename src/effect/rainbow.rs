//! Rainbow effect
//!
//! A full hue gradient spread over the strip that rotates with every update.

use super::{Cadence, Effect, EffectContext, SPEED_INTERVALS_MS};
use crate::color::{Rgb, fill_rainbow};

#[derive(Debug, Clone, Default)]
pub struct RainbowEffect {
    hue: u8,
}

impl RainbowEffect {
    pub const fn new() -> Self {
        Self { hue: 0 }
    }

    /// Hue step between neighbouring LEDs so one wheel spans the strip
    fn delta_hue(len: usize) -> u8 {
        let len = u8::try_from(len.max(1)).unwrap_or(u8::MAX);
        (u8::MAX / len).max(1)
    }
}

impl Effect for RainbowEffect {
    fn cadence(&self) -> Cadence {
        Cadence::Speed(&SPEED_INTERVALS_MS)
    }

    fn update(&mut self, _ctx: &mut EffectContext<'_>, leds: &mut [Rgb]) {
        self.hue = self.hue.wrapping_add(1);
        fill_rainbow(leds, self.hue, Self::delta_hue(leds.len()));
    }

    fn reset(&mut self) {
        self.hue = 0;
    }
}
