//! Juggle effect
//!
//! Eight colored dots weaving in and out of sync with each other. Their beat
//! rates grow with the speed setting, the update rate itself is fixed.

use embassy_time::Duration;

use super::{Cadence, Effect, EffectContext};
use crate::{
    color::{Hsv, Rgb, add_saturating, fade_to_black_by, hsv2rgb},
    math8::beatsin16,
    state::clamp_speed,
};

const DOT_COUNT: u16 = 8;
const FADE_AMOUNT: u8 = 20;
const HUE_STEP: u8 = 32;
/// Beat rate of the slowest dot at speed 1
const BASE_BPM: u16 = 6;
const UPDATE_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Default)]
pub struct JuggleEffect;

impl JuggleEffect {
    pub const fn new() -> Self {
        Self
    }
}

impl Effect for JuggleEffect {
    fn cadence(&self) -> Cadence {
        Cadence::Fixed(UPDATE_INTERVAL)
    }

    fn update(&mut self, ctx: &mut EffectContext<'_>, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }
        fade_to_black_by(leds, FADE_AMOUNT);

        let last = u16::try_from(leds.len() - 1).unwrap_or(u16::MAX);
        let base_bpm = BASE_BPM + u16::from(clamp_speed(ctx.speed));
        let mut hue: u8 = 0;
        for dot in 0..DOT_COUNT {
            let phase = dot.wrapping_mul(u16::MAX / DOT_COUNT);
            let position = beatsin16(base_bpm + dot, 0, last, ctx.now, phase);
            if let Some(led) = leds.get_mut(usize::from(position)) {
                let color = hsv2rgb(Hsv {
                    hue,
                    sat: 200,
                    val: 255,
                });
                *led = add_saturating(*led, color);
            }
            hue = hue.wrapping_add(HUE_STEP);
        }
    }
}
