//! Flash effect
//!
//! Cycles the whole strip through red, green and blue, one color per update.

use super::{Cadence, Effect, EffectContext, SLOW_SPEED_INTERVALS_MS};
use crate::color::{Rgb, fill_solid};

const FLASH_COLORS: [Rgb; 3] = [
    Rgb { r: 255, g: 0, b: 0 },
    Rgb { r: 0, g: 255, b: 0 },
    Rgb { r: 0, g: 0, b: 255 },
];

#[derive(Debug, Clone, Default)]
pub struct FlashEffect {
    phase: u8,
}

impl FlashEffect {
    pub const fn new() -> Self {
        Self { phase: 0 }
    }

    /// Index into the color sequence that the next update shows
    pub const fn phase(&self) -> u8 {
        self.phase
    }
}

impl Effect for FlashEffect {
    fn cadence(&self) -> Cadence {
        Cadence::Speed(&SLOW_SPEED_INTERVALS_MS)
    }

    fn update(&mut self, _ctx: &mut EffectContext<'_>, leds: &mut [Rgb]) {
        let color = FLASH_COLORS[usize::from(self.phase) % FLASH_COLORS.len()];
        fill_solid(leds, color);
        self.phase = (self.phase + 1) % 3;
    }

    fn reset(&mut self) {
        self.phase = 0;
    }
}
