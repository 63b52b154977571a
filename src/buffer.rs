//! Capacity-bounded pixel buffer
//!
//! Storage is sized to the hardware maximum, but every accessor is bounded
//! by the configured strip length (`active_count`). Pixels past it are never
//! exposed, rendered or transmitted.

use crate::color::{BLACK, Rgb};

/// Pixel storage for one logical strip
#[derive(Debug, Clone)]
pub struct PixelBuffer<const CAPACITY: usize> {
    pixels: [Rgb; CAPACITY],
    active_count: usize,
}

impl<const CAPACITY: usize> PixelBuffer<CAPACITY> {
    /// Create a black buffer; `active_count` is clamped to `CAPACITY`
    pub const fn new(active_count: usize) -> Self {
        let active_count = if active_count > CAPACITY {
            CAPACITY
        } else {
            active_count
        };
        Self {
            pixels: [BLACK; CAPACITY],
            active_count,
        }
    }

    /// Number of active pixels
    pub const fn len(&self) -> usize {
        self.active_count
    }

    pub const fn is_empty(&self) -> bool {
        self.active_count == 0
    }

    /// Hardware maximum
    pub const fn capacity(&self) -> usize {
        CAPACITY
    }

    /// Size in bytes of one wire frame covering the active pixels
    pub const fn as_bytes_len(&self) -> usize {
        self.active_count * 3
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels[..self.active_count]
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels[..self.active_count]
    }

    /// Pixel at `index`, `None` past the active range
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.pixels().get(index).copied()
    }

    /// Set one pixel; returns `false` (and writes nothing) past the active range
    pub fn set(&mut self, index: usize, color: Rgb) -> bool {
        match self.pixels_mut().get_mut(index) {
            Some(pixel) => {
                *pixel = color;
                true
            }
            None => false,
        }
    }

    pub fn fill(&mut self, color: Rgb) {
        self.pixels_mut().fill(color);
    }

    pub fn clear(&mut self) {
        self.fill(BLACK);
    }

    /// Copy the active pixels of `other`; lengths must match to copy anything
    pub fn copy_from(&mut self, other: &Self) -> bool {
        if other.active_count != self.active_count {
            return false;
        }
        self.pixels_mut().copy_from_slice(other.pixels());
        true
    }
}
