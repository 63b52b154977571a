//! Frame push scheduling.
//!
//! The scheduler never renders anything. The controller tells it whether the
//! light is animating this tick, and it decides whether the buffer goes out:
//! always when a push was forced, otherwise at most once per frame period
//! while something is animating. A static strip is not pushed at all.

use embassy_time::{Duration, Instant};

use crate::OutputDriver;
use crate::color::{BLACK, Rgb};
use crate::filter::{BrightnessFilter, Filter};

/// Throttles pushes to the frame rate and owns the output driver
pub struct FrameScheduler<D: OutputDriver, const MAX_LEDS: usize> {
    driver: D,
    brightness: BrightnessFilter,
    output: [Rgb; MAX_LEDS],
    frame_duration: Duration,
    last_push: Option<Instant>,
    forced: bool,
    pushes: u32,
}

impl<D: OutputDriver, const MAX_LEDS: usize> FrameScheduler<D, MAX_LEDS> {
    pub const fn new(driver: D, brightness: BrightnessFilter, frame_duration: Duration) -> Self {
        Self {
            driver,
            brightness,
            output: [BLACK; MAX_LEDS],
            frame_duration,
            last_push: None,
            forced: false,
            pushes: 0,
        }
    }

    /// Push on the next tick regardless of the frame rate
    pub fn request_push(&mut self) {
        self.forced = true;
    }

    pub const fn is_push_requested(&self) -> bool {
        self.forced
    }

    /// Whether a push is due at `now`
    pub fn is_due(&self, now: Instant, animating: bool) -> bool {
        if self.forced {
            return true;
        }
        if !animating {
            return false;
        }
        match self.last_push {
            None => true,
            Some(last) => now
                .checked_duration_since(last)
                .is_none_or(|elapsed| elapsed >= self.frame_duration),
        }
    }

    /// Push `pixels` if due; returns whether a push happened
    pub fn tick(&mut self, now: Instant, animating: bool, pixels: &[Rgb]) -> bool {
        if !self.is_due(now, animating) {
            return false;
        }
        self.push(now, pixels);
        true
    }

    /// Scale `pixels` into the output frame and hand it to the driver
    pub fn push(&mut self, now: Instant, pixels: &[Rgb]) {
        let len = pixels.len().min(MAX_LEDS);
        let frame = &mut self.output[..len];
        frame.copy_from_slice(&pixels[..len]);
        self.brightness.apply(frame);
        self.driver.write(frame);

        self.last_push = Some(now);
        self.forced = false;
        self.pushes = self.pushes.wrapping_add(1);
    }

    /// Brightness stage applied at push time
    pub fn brightness_mut(&mut self) -> &mut BrightnessFilter {
        &mut self.brightness
    }

    pub const fn brightness(&self) -> &BrightnessFilter {
        &self.brightness
    }

    /// Number of frames handed to the driver so far
    pub const fn pushes(&self) -> u32 {
        self.pushes
    }

    pub const fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}
