//! 8-bit and 16-bit integer math helpers (ported from `FastLED`)
//!
//! Everything here is integer arithmetic except the sine tables, which are
//! evaluated through `libm`.

use core::f32::consts::TAU;

use embassy_time::Instant;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Scale a 16-bit value by a 16-bit factor (0-65535 = 0.0-1.0)
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn scale16(value: u16, scale: u16) -> u16 {
    ((value as u32 * (1 + scale as u32)) >> 16) as u16
}

/// Saturating 8-bit add
#[inline]
pub const fn qadd8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

/// Saturating 8-bit subtract
#[inline]
pub const fn qsub8(a: u8, b: u8) -> u8 {
    a.saturating_sub(b)
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16; // a * 65536
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    ); // (b - a) * amount_of_b * 257
    partial = partial.wrapping_add(0x8000); // + 32768 for rounding

    (partial >> 16) as u8
}

/// Re-map `value` from `[in_min, in_max]` onto `[out_min, out_max]`
///
/// Same contract as Arduino `map()`: integer math, truncating, no clamping
/// beyond what the output type forces.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn map_range(value: u8, in_min: u8, in_max: u8, out_min: u8, out_max: u8) -> u8 {
    if in_max == in_min {
        return out_min;
    }
    let value = value as i32;
    let mapped = (value - in_min as i32) * (out_max as i32 - out_min as i32)
        / (in_max as i32 - in_min as i32)
        + out_min as i32;
    if mapped < 0 {
        0
    } else if mapped > 255 {
        255
    } else {
        mapped as u8
    }
}

/// Sine of an 8-bit angle (256 = full turn), mapped to 0-255
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_lossless
)]
pub fn sin8(theta: u8) -> u8 {
    let radians = f32::from(theta) * TAU / 256.0;
    let value = libm::sinf(radians) * 127.5 + 128.0;
    value.clamp(0.0, 255.0) as u8
}

/// Sine of a 16-bit angle (65536 = full turn), mapped to -32767..=32767
#[allow(clippy::cast_possible_truncation)]
pub fn sin16(theta: u16) -> i16 {
    let radians = f32::from(theta) * TAU / 65536.0;
    (libm::sinf(radians) * 32767.0) as i16
}

/// Sawtooth wave that wraps 256 times per `bpm`-rate beat period
#[allow(clippy::cast_possible_truncation)]
pub fn beat8(bpm: u8, now: Instant) -> u8 {
    (beat16(u16::from(bpm), now) >> 8) as u8
}

/// Sawtooth wave, 0-65535, completing `bpm` cycles per minute
#[allow(clippy::cast_possible_truncation)]
pub fn beat16(bpm: u16, now: Instant) -> u16 {
    // Reduce to one period first so long uptimes cannot overflow.
    let phase_ms = now.as_millis().wrapping_mul(u64::from(bpm)) % 60_000;
    (phase_ms * 65_536 / 60_000) as u16
}

/// Sine wave oscillating between `low` and `high` at `bpm` beats per minute
pub fn beatsin8(bpm: u8, low: u8, high: u8, now: Instant, phase: u8) -> u8 {
    let beat = beat8(bpm, now).wrapping_add(phase);
    let wave = sin8(beat);
    low.saturating_add(scale8(wave, high.saturating_sub(low)))
}

/// 16-bit sine wave oscillating between `low` and `high`
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn beatsin16(bpm: u16, low: u16, high: u16, now: Instant, phase: u16) -> u16 {
    let beat = beat16(bpm, now).wrapping_add(phase);
    let wave = (i32::from(sin16(beat)) + 32_768) as u16;
    low.saturating_add(scale16(wave, high.saturating_sub(low)))
}

/// Ease in out quadratic
pub const fn ease_in_out_quad(i: u8) -> u8 {
    let j = if i & 0x80 != 0 { 255 - i } else { i };
    let jj = scale8(j, j);
    let jj2 = jj << 1;
    if i & 0x80 == 0 { jj2 } else { 255 - jj2 }
}

/// Deterministic pseudo-random generator (`FastLED` `random16` LCG)
#[derive(Debug, Clone, Copy)]
pub struct Prng {
    seed: u16,
}

impl Default for Prng {
    fn default() -> Self {
        Self::new(1337)
    }
}

impl Prng {
    pub const fn new(seed: u16) -> Self {
        Self { seed }
    }

    pub const fn random16(&mut self) -> u16 {
        self.seed = self.seed.wrapping_mul(2053).wrapping_add(13849);
        self.seed
    }

    /// Random value in `0..limit` (0 when `limit` is 0)
    #[allow(clippy::cast_possible_truncation)]
    pub const fn random16_below(&mut self, limit: u16) -> u16 {
        ((self.random16() as u32 * limit as u32) >> 16) as u16
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn random8(&mut self) -> u8 {
        let r = self.random16();
        ((r & 0xFF) as u8).wrapping_add((r >> 8) as u8)
    }

    /// Random value in `0..limit` (0 when `limit` is 0)
    #[allow(clippy::cast_possible_truncation)]
    pub const fn random8_below(&mut self, limit: u8) -> u8 {
        ((self.random8() as u16 * limit as u16) >> 8) as u8
    }

    /// Random value in `min..max`
    pub const fn random8_range(&mut self, min: u8, max: u8) -> u8 {
        if max <= min {
            return min;
        }
        min + self.random8_below(max - min)
    }
}
