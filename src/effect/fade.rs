//! Fade effect
//!
//! Slowly walks the whole strip around the color wheel.

use super::{Cadence, Effect, EffectContext, SPEED_INTERVALS_MS};
use crate::color::{Hsv, Rgb, fill_solid, hsv2rgb};

#[derive(Debug, Clone, Default)]
pub struct FadeEffect {
    hue: u8,
}

impl FadeEffect {
    pub const fn new() -> Self {
        Self { hue: 0 }
    }
}

impl Effect for FadeEffect {
    fn cadence(&self) -> Cadence {
        Cadence::Speed(&SPEED_INTERVALS_MS)
    }

    fn update(&mut self, _ctx: &mut EffectContext<'_>, leds: &mut [Rgb]) {
        self.hue = self.hue.wrapping_add(1);
        let color = hsv2rgb(Hsv {
            hue: self.hue,
            sat: 255,
            val: 255,
        });
        fill_solid(leds, color);
    }

    fn reset(&mut self) {
        self.hue = 0;
    }
}
