//! Cylon scanner effect
//!
//! A single bright pixel bouncing between the strip ends, leaving a short
//! fading trail behind it.

use super::{Cadence, Effect, EffectContext, SPEED_INTERVALS_MS};
use crate::color::{Hsv, Rgb, fade_to_black_by, hsv2rgb};

const TRAIL_FADE: u8 = 20;

#[derive(Debug, Clone)]
pub struct CylonEffect {
    position: usize,
    forward: bool,
    hue: u8,
}

impl Default for CylonEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl CylonEffect {
    pub const fn new() -> Self {
        Self {
            position: 0,
            forward: true,
            hue: 0,
        }
    }

    /// Pixel lit by the next update
    pub const fn position(&self) -> usize {
        self.position
    }

    pub const fn is_moving_forward(&self) -> bool {
        self.forward
    }

    fn advance(&mut self, len: usize) {
        let last = len - 1;
        if self.forward {
            if self.position >= last {
                self.forward = false;
                self.position = last.saturating_sub(1);
            } else {
                self.position += 1;
            }
        } else if self.position == 0 {
            self.forward = true;
            self.position = last.min(1);
        } else {
            self.position -= 1;
        }
    }
}

impl Effect for CylonEffect {
    fn cadence(&self) -> Cadence {
        Cadence::Speed(&SPEED_INTERVALS_MS)
    }

    fn update(&mut self, _ctx: &mut EffectContext<'_>, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }
        let len = leds.len();
        self.position = self.position.min(len - 1);

        fade_to_black_by(leds, TRAIL_FADE);
        leds[self.position] = hsv2rgb(Hsv {
            hue: self.hue,
            sat: 255,
            val: 255,
        });
        self.hue = self.hue.wrapping_add(1);
        self.advance(len);
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}
