//! Inbound light commands
//!
//! The messaging layer converts whatever it receives into [`LightCommand`]s
//! and sends them through a [`CommandChannel`]. The controller drains the
//! channel once, at the start of each tick.

use heapless::String;

use crate::channel::{Channel, Receiver, Sender};
use crate::color::Rgb;
use crate::effect::EffectId;

/// Longest effect name accepted over the wire
pub const MAX_EFFECT_NAME_LEN: usize = 24;

/// Effect name as received from the messaging layer
pub type EffectName = String<MAX_EFFECT_NAME_LEN>;

/// A single change requested by the outside world
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightCommand {
    TurnOn,
    TurnOff,
    /// Logical brightness, clamped to 0-100
    SetBrightness(u8),
    SetColor(Rgb),
    SetEffect(EffectId),
    /// Effect looked up by its case-sensitive name
    SetEffectByName(EffectName),
    /// Effect speed, clamped to 1-7
    SetSpeed(u8),
    /// Run the identify blink
    Identify,
}

impl LightCommand {
    /// Build a [`LightCommand::SetEffectByName`], `None` if `name` is too long
    pub fn effect_by_name(name: &str) -> Option<Self> {
        let mut owned = EffectName::new();
        owned.push_str(name).ok()?;
        Some(Self::SetEffectByName(owned))
    }
}

/// Type alias for the command channel
pub type CommandChannel<const SIZE: usize> = Channel<LightCommand, SIZE>;

/// Type alias for command sender
pub type CommandSender<'a, const SIZE: usize> = Sender<'a, LightCommand, SIZE>;

/// Type alias for command receiver
pub type CommandReceiver<'a, const SIZE: usize> = Receiver<'a, LightCommand, SIZE>;
