//! Blue noise effect
//!
//! Samples a slowly drifting 2D value-noise field along the strip and maps
//! it through an ocean palette, giving a calm water-like shimmer.

use embassy_time::Duration;

use super::{Cadence, Effect, EffectContext};
use crate::{
    color::{OCEAN_COLORS, Rgb, color_from_palette},
    math8::{beatsin8, blend8, ease_in_out_quad},
};

/// Spatial distance between neighbouring LEDs in noise space (8.8 fixed-point)
const SCALE: u16 = 30;
/// Beat rate of the drift speed oscillation
const DRIFT_BPM: u8 = 10;
const UPDATE_INTERVAL: Duration = Duration::from_millis(20);

#[derive(Debug, Clone, Default)]
pub struct BlueNoiseEffect {
    offset: u16,
}

impl BlueNoiseEffect {
    pub const fn new() -> Self {
        Self { offset: 0 }
    }

    /// Current drift of the noise field
    pub const fn offset(&self) -> u16 {
        self.offset
    }

    /// Simple deterministic hash for noise generation
    #[inline]
    const fn hash(x: u64) -> u32 {
        // SplitMix64-style mixing, then fold down to u32.
        let mut z = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        #[allow(clippy::cast_possible_truncation)]
        {
            (z ^ (z >> 31)) as u32
        }
    }

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    const fn lattice(cell_x: u64, cell_y: u64) -> u8 {
        (Self::hash((cell_x << 32) | cell_y) & 0xFF) as u8
    }

    /// Smooth 2D value noise over 8.8 fixed-point coordinates, 0-255
    #[allow(clippy::cast_possible_truncation)]
    pub fn noise8(x: u16, y: u16) -> u8 {
        let cell_x = u64::from(x >> 8);
        let cell_y = u64::from(y >> 8);
        let fx = ease_in_out_quad((x & 0xFF) as u8);
        let fy = ease_in_out_quad((y & 0xFF) as u8);

        let top = blend8(
            Self::lattice(cell_x, cell_y),
            Self::lattice(cell_x + 1, cell_y),
            fx,
        );
        let bottom = blend8(
            Self::lattice(cell_x, cell_y + 1),
            Self::lattice(cell_x + 1, cell_y + 1),
            fx,
        );
        blend8(top, bottom, fy)
    }
}

impl Effect for BlueNoiseEffect {
    fn cadence(&self) -> Cadence {
        Cadence::Fixed(UPDATE_INTERVAL)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn update(&mut self, ctx: &mut EffectContext<'_>, leds: &mut [Rgb]) {
        for (i, led) in leds.iter_mut().enumerate() {
            let x = (i as u16).wrapping_mul(SCALE);
            let y = self.offset.wrapping_add(x);
            let index = Self::noise8(x, y);
            *led = color_from_palette(&OCEAN_COLORS, index, 255);
        }

        let drift = beatsin8(DRIFT_BPM, 1, 4, ctx.now, 0);
        self.offset = self.offset.wrapping_add(u16::from(drift));
    }

    fn reset(&mut self) {
        self.offset = 0;
    }
}
