//! Confetti effect
//!
//! Randomly placed colored speckles that fade out smoothly.

use super::{Cadence, Effect, EffectContext, SPEED_INTERVALS_MS};
use crate::color::{Hsv, Rgb, add_saturating, fade_to_black_by, hsv2rgb};

/// How much each update dims the strip
const FADE_AMOUNT: u8 = 10;
/// Maximum hue offset of a speckle from the cycling base hue
const HUE_SPREAD: u8 = 64;

#[derive(Debug, Clone, Default)]
pub struct ConfettiEffect {
    hue: u8,
}

impl ConfettiEffect {
    pub const fn new() -> Self {
        Self { hue: 0 }
    }
}

impl Effect for ConfettiEffect {
    fn cadence(&self) -> Cadence {
        Cadence::Speed(&SPEED_INTERVALS_MS)
    }

    fn update(&mut self, ctx: &mut EffectContext<'_>, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }
        fade_to_black_by(leds, FADE_AMOUNT);

        let len = u16::try_from(leds.len()).unwrap_or(u16::MAX);
        let position = usize::from(ctx.rng.random16_below(len));
        let hue = self.hue.wrapping_add(ctx.rng.random8_below(HUE_SPREAD));
        let speckle = hsv2rgb(Hsv {
            hue,
            sat: 200,
            val: 255,
        });
        if let Some(led) = leds.get_mut(position) {
            *led = add_saturating(*led, speckle);
        }

        self.hue = self.hue.wrapping_add(1);
    }

    fn reset(&mut self) {
        self.hue = 0;
    }
}
