//! Effect system with compile-time known effect variants
//!
//! Built-in effects live in the [`EffectSlot`] enum to avoid heap allocations;
//! switching effects builds a fresh slot, which doubles as the effect's
//! scratch-state constructor. A small number of user effects can be
//! registered at runtime as trait objects.
//!
//! Every effect declares a [`Cadence`]: the minimum time between two updates,
//! either looked up from a per-speed table or fixed.

mod blue_noise;
mod confetti;
mod cylon;
mod fade;
mod fire;
mod flash;
mod juggle;
mod rainbow;

pub use blue_noise::BlueNoiseEffect;
pub use confetti::ConfettiEffect;
pub use cylon::CylonEffect;
pub use fade::FadeEffect;
pub use fire::FireEffect;
pub use flash::FlashEffect;
pub use juggle::JuggleEffect;
pub use rainbow::RainbowEffect;

use embassy_time::{Duration, Instant};
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    color::Rgb,
    math8::Prng,
    state::{SPEED_LEVELS, speed_index},
};

const EFFECT_NAME_NONE: &str = "None";
const EFFECT_NAME_FLASH: &str = "Flash";
const EFFECT_NAME_FADE: &str = "Fade";
const EFFECT_NAME_CONFETTI: &str = "Confetti";
const EFFECT_NAME_JUGGLE: &str = "Juggle";
const EFFECT_NAME_RAINBOW: &str = "Rainbow";
const EFFECT_NAME_CYLON: &str = "Cylon";
const EFFECT_NAME_FIRE: &str = "Fire";
const EFFECT_NAME_BLUE_NOISE: &str = "BlueNoise";
const EFFECT_NAME_VISUALIZE: &str = "Visualize";

/// Maximum number of runtime-registered effects
pub const MAX_CUSTOM_EFFECTS: usize = 4;

/// Update interval in milliseconds for each speed level (1..=7)
pub type SpeedTable = [u16; SPEED_LEVELS];

/// Default speed table for animated effects
pub const SPEED_INTERVALS_MS: SpeedTable = [150, 100, 70, 50, 30, 20, 10];

/// Speed table for effects that show whole-strip color changes
pub const SLOW_SPEED_INTERVALS_MS: SpeedTable = [2000, 1500, 1000, 750, 500, 250, 100];

/// Minimum time between two updates of an effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    /// Interval depends on the speed setting
    Speed(&'static SpeedTable),
    /// Interval tuned for smooth motion, speed is ignored
    Fixed(Duration),
}

impl Cadence {
    /// Interval for the given speed; out-of-range speeds are clamped
    pub fn interval(self, speed: u8) -> Duration {
        match self {
            Self::Speed(table) => Duration::from_millis(u64::from(table[speed_index(speed)])),
            Self::Fixed(interval) => interval,
        }
    }
}

/// Inputs an effect may read while updating
pub struct EffectContext<'r> {
    pub now: Instant,
    pub speed: u8,
    pub rng: &'r mut Prng,
}

/// A procedural effect
pub trait Effect {
    /// How often the effect wants to be updated
    fn cadence(&self) -> Cadence;

    /// Compute the next frame in place
    ///
    /// `leds` still holds the previous frame, so effects may fade or
    /// accumulate on top of it.
    fn update(&mut self, ctx: &mut EffectContext<'_>, leds: &mut [Rgb]);

    /// Reset scratch state
    fn reset(&mut self) {}
}

/// Known effect ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EffectId {
    /// No effect, the strip shows the static color
    #[default]
    None,
    Flash,
    Fade,
    Confetti,
    Juggle,
    Rainbow,
    Cylon,
    Fire,
    BlueNoise,
    /// Frames are streamed in from the network
    Visualize,
    /// Runtime-registered effect, by registration index
    Custom(u8),
}

impl EffectId {
    /// Built-in effects in the order they are advertised
    pub const ALL: [Self; 10] = [
        Self::None,
        Self::Flash,
        Self::Fade,
        Self::Confetti,
        Self::Juggle,
        Self::Rainbow,
        Self::Cylon,
        Self::Fire,
        Self::BlueNoise,
        Self::Visualize,
    ];

    /// Name of a built-in effect; custom effects are named by the dispatcher
    pub const fn as_str(self) -> Option<&'static str> {
        Some(match self {
            Self::None => EFFECT_NAME_NONE,
            Self::Flash => EFFECT_NAME_FLASH,
            Self::Fade => EFFECT_NAME_FADE,
            Self::Confetti => EFFECT_NAME_CONFETTI,
            Self::Juggle => EFFECT_NAME_JUGGLE,
            Self::Rainbow => EFFECT_NAME_RAINBOW,
            Self::Cylon => EFFECT_NAME_CYLON,
            Self::Fire => EFFECT_NAME_FIRE,
            Self::BlueNoise => EFFECT_NAME_BLUE_NOISE,
            Self::Visualize => EFFECT_NAME_VISUALIZE,
            Self::Custom(_) => return None,
        })
    }

    /// Parse a built-in effect name (case-sensitive)
    pub fn parse_from_str(s: &str) -> Option<Self> {
        Some(match s {
            EFFECT_NAME_NONE => Self::None,
            EFFECT_NAME_FLASH => Self::Flash,
            EFFECT_NAME_FADE => Self::Fade,
            EFFECT_NAME_CONFETTI => Self::Confetti,
            EFFECT_NAME_JUGGLE => Self::Juggle,
            EFFECT_NAME_RAINBOW => Self::Rainbow,
            EFFECT_NAME_CYLON => Self::Cylon,
            EFFECT_NAME_FIRE => Self::Fire,
            EFFECT_NAME_BLUE_NOISE => Self::BlueNoise,
            EFFECT_NAME_VISUALIZE => Self::Visualize,
            _ => return None,
        })
    }

    /// Whether this id selects an effect at all
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Whether frames come from the dispatcher (not from the visualizer)
    pub const fn is_procedural(self) -> bool {
        !matches!(self, Self::None | Self::Visualize)
    }

    /// Build the scratch state for this effect
    pub const fn to_slot<const N: usize>(self, options: EffectOptions) -> EffectSlot<N> {
        match self {
            Self::None => EffectSlot::None,
            Self::Flash => EffectSlot::Flash(FlashEffect::new()),
            Self::Fade => EffectSlot::Fade(FadeEffect::new()),
            Self::Confetti => EffectSlot::Confetti(ConfettiEffect::new()),
            Self::Juggle => EffectSlot::Juggle(JuggleEffect::new()),
            Self::Rainbow => EffectSlot::Rainbow(RainbowEffect::new()),
            Self::Cylon => EffectSlot::Cylon(CylonEffect::new()),
            Self::Fire => EffectSlot::Fire(FireEffect::new(options.fire_mirrored)),
            Self::BlueNoise => EffectSlot::BlueNoise(BlueNoiseEffect::new()),
            Self::Visualize => EffectSlot::Visualize,
            Self::Custom(index) => EffectSlot::Custom(index),
        }
    }
}

/// Construction options shared by built-in effects
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EffectOptions {
    /// Run the fire from the far end of the strip
    pub fire_mirrored: bool,
}

/// Effect slot - enum containing the active effect and its scratch state
#[derive(Debug, Clone)]
pub enum EffectSlot<const N: usize> {
    None,
    Flash(FlashEffect),
    Fade(FadeEffect),
    Confetti(ConfettiEffect),
    Juggle(JuggleEffect),
    Rainbow(RainbowEffect),
    Cylon(CylonEffect),
    Fire(FireEffect<N>),
    BlueNoise(BlueNoiseEffect),
    Visualize,
    Custom(u8),
}

impl<const N: usize> EffectSlot<N> {
    /// Get the effect ID for external observation
    pub const fn id(&self) -> EffectId {
        match self {
            Self::None => EffectId::None,
            Self::Flash(_) => EffectId::Flash,
            Self::Fade(_) => EffectId::Fade,
            Self::Confetti(_) => EffectId::Confetti,
            Self::Juggle(_) => EffectId::Juggle,
            Self::Rainbow(_) => EffectId::Rainbow,
            Self::Cylon(_) => EffectId::Cylon,
            Self::Fire(_) => EffectId::Fire,
            Self::BlueNoise(_) => EffectId::BlueNoise,
            Self::Visualize => EffectId::Visualize,
            Self::Custom(index) => EffectId::Custom(*index),
        }
    }

    /// Borrow the built-in effect, if the slot holds one
    pub fn builtin(&mut self) -> Option<&mut dyn Effect> {
        let effect: &mut dyn Effect = match self {
            Self::Flash(effect) => effect,
            Self::Fade(effect) => effect,
            Self::Confetti(effect) => effect,
            Self::Juggle(effect) => effect,
            Self::Rainbow(effect) => effect,
            Self::Cylon(effect) => effect,
            Self::Fire(effect) => effect,
            Self::BlueNoise(effect) => effect,
            Self::None | Self::Visualize | Self::Custom(_) => return None,
        };
        Some(effect)
    }
}

/// Error returned when a custom effect cannot be registered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterError {
    /// All custom effect slots are taken
    Full,
    /// The name is already used by another effect
    DuplicateName,
}

struct CustomEffect<'a> {
    name: &'static str,
    effect: &'a mut dyn Effect,
}

/// Runs the active effect at its cadence
pub struct EffectDispatcher<'a, const N: usize> {
    slot: EffectSlot<N>,
    options: EffectOptions,
    custom: Vec<CustomEffect<'a>, MAX_CUSTOM_EFFECTS>,
    rng: Prng,
    last_update: Option<Instant>,
}

impl<'a, const N: usize> EffectDispatcher<'a, N> {
    pub fn new(options: EffectOptions, seed: u16) -> Self {
        Self {
            slot: EffectSlot::None,
            options,
            custom: Vec::new(),
            rng: Prng::new(seed),
            last_update: None,
        }
    }

    /// Register a user effect under `name`
    pub fn register(
        &mut self,
        name: &'static str,
        effect: &'a mut dyn Effect,
    ) -> Result<EffectId, RegisterError> {
        if self.resolve(name).is_some() {
            return Err(RegisterError::DuplicateName);
        }
        let index = u8::try_from(self.custom.len()).map_err(|_| RegisterError::Full)?;
        self.custom
            .push(CustomEffect { name, effect })
            .map_err(|_| RegisterError::Full)?;

        #[cfg(feature = "esp32-log")]
        println!("[EffectDispatcher.register] {} registered as custom #{}", name, index);
        Ok(EffectId::Custom(index))
    }

    /// Currently selected effect
    pub const fn current(&self) -> EffectId {
        self.slot.id()
    }

    /// Scratch state of the current effect
    pub const fn slot(&self) -> &EffectSlot<N> {
        &self.slot
    }

    /// Whether `id` names a built-in or a registered custom effect
    pub fn is_known(&self, id: EffectId) -> bool {
        match id {
            EffectId::Custom(index) => usize::from(index) < self.custom.len(),
            _ => true,
        }
    }

    /// Switch to `id` with fresh scratch state
    ///
    /// Unknown custom ids select [`EffectId::None`]. Returns the effect that
    /// was actually selected.
    pub fn switch(&mut self, id: EffectId) -> EffectId {
        let id = if self.is_known(id) { id } else { EffectId::None };
        self.slot = id.to_slot(self.options);
        if let EffectId::Custom(index) = id {
            if let Some(custom) = self.custom.get_mut(usize::from(index)) {
                custom.effect.reset();
            }
        }
        self.last_update = None;

        #[cfg(feature = "esp32-log")]
        println!("[EffectDispatcher.switch] switched to {:?}", id);
        id
    }

    /// Find an effect by its (case-sensitive) name
    pub fn resolve(&self, name: &str) -> Option<EffectId> {
        EffectId::parse_from_str(name).or_else(|| {
            self.custom
                .iter()
                .position(|custom| custom.name == name)
                .and_then(|index| u8::try_from(index).ok())
                .map(EffectId::Custom)
        })
    }

    /// Name of a built-in or registered effect
    pub fn name_of(&self, id: EffectId) -> Option<&'static str> {
        match id {
            EffectId::Custom(index) => self.custom.get(usize::from(index)).map(|c| c.name),
            builtin => builtin.as_str(),
        }
    }

    /// All effect names, built-ins first, in registration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        EffectId::ALL
            .iter()
            .filter_map(|id| id.as_str())
            .chain(self.custom.iter().map(|custom| custom.name))
    }

    /// Cadence of the current effect, `None` when nothing is computed
    pub fn cadence(&mut self) -> Option<Cadence> {
        match &mut self.slot {
            EffectSlot::Custom(index) => self
                .custom
                .get(usize::from(*index))
                .map(|custom| custom.effect.cadence()),
            slot => slot.builtin().map(|effect| effect.cadence()),
        }
    }

    /// Run the current effect if its cadence allows it
    ///
    /// Returns `true` when the buffer was updated.
    pub fn update(&mut self, now: Instant, speed: u8, leds: &mut [Rgb]) -> bool {
        let Some(cadence) = self.cadence() else {
            return false;
        };
        if let Some(last) = self.last_update {
            let elapsed = now
                .checked_duration_since(last)
                .unwrap_or(Duration::from_ticks(0));
            if elapsed < cadence.interval(speed) {
                return false;
            }
        }

        let mut ctx = EffectContext {
            now,
            speed,
            rng: &mut self.rng,
        };
        match &mut self.slot {
            EffectSlot::Custom(index) => {
                let Some(custom) = self.custom.get_mut(usize::from(*index)) else {
                    return false;
                };
                custom.effect.update(&mut ctx, leds);
            }
            slot => {
                let Some(effect) = slot.builtin() else {
                    return false;
                };
                effect.update(&mut ctx, leds);
            }
        }
        self.last_update = Some(now);
        true
    }
}
