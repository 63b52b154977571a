//! Fire effect (`Fire2012`)
//!
//! One-dimensional heat simulation: every cell cools a little, heat drifts
//! away from the base, random sparks ignite near the base, and each cell's
//! heat is looked up in a black-red-yellow-white palette.

use embassy_time::Duration;

use super::{Cadence, Effect, EffectContext};
use crate::{
    color::{HEAT_COLORS, Rgb, color_from_palette},
    math8::{qadd8, qsub8, scale8},
};

/// Average cooling per update; higher values give shorter flames
const COOLING: u16 = 55;
/// Chance (out of 255) that a new spark ignites on an update
const SPARKING: u8 = 120;
/// Sparks ignite within this many cells of the base
const SPARK_ZONE: u8 = 7;
const UPDATE_INTERVAL: Duration = Duration::from_millis(16);

/// Fire effect with one heat cell per LED
#[derive(Debug, Clone)]
pub struct FireEffect<const N: usize> {
    heat: [u8; N],
    mirrored: bool,
}

impl<const N: usize> Default for FireEffect<N> {
    fn default() -> Self {
        Self::new(false)
    }
}

impl<const N: usize> FireEffect<N> {
    /// Create a cold fire; `mirrored` puts the base at the far end of the strip
    pub const fn new(mirrored: bool) -> Self {
        Self {
            heat: [0; N],
            mirrored,
        }
    }

    /// Heat map of the first `len` cells
    pub fn heat(&self, len: usize) -> &[u8] {
        &self.heat[..len.min(N)]
    }

    #[allow(clippy::cast_possible_truncation)]
    fn simulate(&mut self, ctx: &mut EffectContext<'_>, len: usize) {
        let heat = &mut self.heat[..len];

        // Cool down every cell a little
        let len_u16 = u16::try_from(len).unwrap_or(u16::MAX);
        let max_cooling = ((COOLING * 10) / len_u16 + 2).min(255) as u8;
        for cell in heat.iter_mut() {
            *cell = qsub8(*cell, ctx.rng.random8_below(max_cooling));
        }

        // Heat drifts up and diffuses
        for k in (2..len).rev() {
            let sum = u16::from(heat[k - 1]) + 2 * u16::from(heat[k - 2]);
            heat[k] = (sum / 3) as u8;
        }

        // Randomly ignite new sparks near the base
        if ctx.rng.random8() < SPARKING {
            let zone = u8::try_from(len).unwrap_or(u8::MAX).min(SPARK_ZONE);
            let y = usize::from(ctx.rng.random8_below(zone));
            heat[y] = qadd8(heat[y], ctx.rng.random8_range(160, 255));
        }
    }
}

impl<const N: usize> Effect for FireEffect<N> {
    fn cadence(&self) -> Cadence {
        Cadence::Fixed(UPDATE_INTERVAL)
    }

    fn update(&mut self, ctx: &mut EffectContext<'_>, leds: &mut [Rgb]) {
        let len = leds.len().min(N);
        if len == 0 {
            return;
        }
        self.simulate(ctx, len);

        for (j, cell) in self.heat[..len].iter().enumerate() {
            // Stay below 255 so the hottest cells do not wrap back to black
            let color = color_from_palette(&HEAT_COLORS, scale8(*cell, 240), 255);
            let index = if self.mirrored { len - 1 - j } else { j };
            leds[index] = color;
        }
    }

    fn reset(&mut self) {
        self.heat = [0; N];
    }
}
