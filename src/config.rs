//! Startup configuration
//!
//! Built once by the firmware's configuration loader and handed to
//! [`LightController::new`](crate::LightController::new).

use embassy_time::Duration;

use crate::{color::Rgb, effect::EffectOptions, state::LightState, transition::StepTiming};

/// Default target frame rate (60 FPS).
pub const DEFAULT_FPS: u32 = 60;

/// Default brightness and color transition: 30 steps over 500 ms
pub const DEFAULT_STEP_TIMING: StepTiming = StepTiming::new(30, Duration::from_millis(500));

/// LED chipset driving the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripType {
    /// Four-wire SPI strip with a clock line
    Apa102,
    Ws2811,
    Ws2812b,
}

impl StripType {
    /// Resolve the chipset the way the configuration file describes it
    ///
    /// A clock pin always means APA102; otherwise `"WS2811"` selects WS2811
    /// and anything else falls back to WS2812B.
    pub fn resolve(name: &str, clock_pin: Option<u8>) -> Self {
        if clock_pin.is_some_and(|pin| pin > 0) {
            return Self::Apa102;
        }
        match name {
            "WS2811" => Self::Ws2811,
            _ => Self::Ws2812b,
        }
    }

    /// Byte order the chipset expects when none is configured
    pub const fn default_color_order(self) -> ColorOrder {
        match self {
            Self::Apa102 => ColorOrder::Rgb,
            Self::Ws2811 | Self::Ws2812b => ColorOrder::Grb,
        }
    }
}

/// Order in which the three channel bytes go on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorOrder {
    Rgb,
    Rbg,
    Grb,
    Gbr,
    Brg,
    Bgr,
}

impl ColorOrder {
    /// Parse an order name such as `"GRB"` (case-sensitive)
    pub fn parse_from_str(s: &str) -> Option<Self> {
        Some(match s {
            "RGB" => Self::Rgb,
            "RBG" => Self::Rbg,
            "GRB" => Self::Grb,
            "GBR" => Self::Gbr,
            "BRG" => Self::Brg,
            "BGR" => Self::Bgr,
            _ => return None,
        })
    }

    /// Channel bytes of `color` in wire order
    pub const fn arrange(self, color: Rgb) -> [u8; 3] {
        let Rgb { r, g, b } = color;
        match self {
            Self::Rgb => [r, g, b],
            Self::Rbg => [r, b, g],
            Self::Grb => [g, r, b],
            Self::Gbr => [g, b, r],
            Self::Brg => [b, r, g],
            Self::Bgr => [b, g, r],
        }
    }
}

/// How the strip is wired to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripWiring {
    pub strip_type: StripType,
    pub color_order: ColorOrder,
    pub data_pin: u8,
    pub clock_pin: Option<u8>,
}

impl Default for StripWiring {
    fn default() -> Self {
        Self::resolve("WS2812B", "GRB", 5, None)
    }
}

impl StripWiring {
    /// Build the wiring from raw configuration values
    ///
    /// Unknown color orders fall back to the chipset default.
    pub fn resolve(type_name: &str, color_order: &str, data_pin: u8, clock_pin: Option<u8>) -> Self {
        let strip_type = StripType::resolve(type_name, clock_pin);
        let color_order = match strip_type {
            StripType::Apa102 => ColorOrder::Rgb,
            _ => ColorOrder::parse_from_str(color_order)
                .unwrap_or(strip_type.default_color_order()),
        };
        Self {
            strip_type,
            color_order,
            data_pin,
            clock_pin: clock_pin.filter(|pin| *pin > 0),
        }
    }
}

/// Step timings of the brightness and color transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTimings {
    pub brightness: StepTiming,
    pub color: StepTiming,
}

impl Default for TransitionTimings {
    fn default() -> Self {
        Self {
            brightness: DEFAULT_STEP_TIMING,
            color: DEFAULT_STEP_TIMING,
        }
    }
}

/// Configuration for the light controller
#[derive(Debug, Clone)]
pub struct LightConfig {
    /// Number of LEDs on the strip; clamped to the buffer capacity
    pub led_count: u16,
    pub wiring: StripWiring,
    /// Hardware brightness at logical brightness 100
    pub max_brightness: u8,
    /// State at power-up
    pub initial: LightState,
    pub timings: TransitionTimings,
    /// Upper bound on hardware pushes per second
    pub frame_rate: u32,
    pub effects: EffectOptions,
    /// Seed of the effect random generator
    pub seed: u16,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            led_count: 60,
            wiring: StripWiring::default(),
            max_brightness: 255,
            initial: LightState::default(),
            timings: TransitionTimings::default(),
            frame_rate: DEFAULT_FPS,
            effects: EffectOptions::default(),
            seed: 1337,
        }
    }
}

impl LightConfig {
    #[must_use]
    pub fn with_led_count(mut self, led_count: u16) -> Self {
        self.led_count = led_count;
        self
    }

    #[must_use]
    pub fn with_max_brightness(mut self, max_brightness: u8) -> Self {
        self.max_brightness = max_brightness;
        self
    }

    #[must_use]
    pub fn with_initial_state(mut self, initial: LightState) -> Self {
        self.initial = initial;
        self
    }

    #[must_use]
    pub fn with_timings(mut self, timings: TransitionTimings) -> Self {
        self.timings = timings;
        self
    }

    #[must_use]
    pub fn with_frame_rate(mut self, frame_rate: u32) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    #[must_use]
    pub fn with_fire_mirrored(mut self, mirrored: bool) -> Self {
        self.effects.fire_mirrored = mirrored;
        self
    }

    /// Duration of one frame at the configured frame rate
    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.frame_rate.max(1)))
    }
}
