//! JSON command and state payloads
//!
//! Command payloads carry any subset of
//! `{"state","brightness","color":{"r","g","b"},"effect","speed","identify"}`
//! and decode into an ordered list of [`LightCommand`]s. State and effect
//! list payloads encode into caller-provided buffers.

use heapless::Vec;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::command::LightCommand;
use crate::effect::EffectId;
use crate::state::{LightState, clamp_brightness, clamp_speed};

/// Most commands a single payload can produce
pub const MAX_PAYLOAD_COMMANDS: usize = 6;

/// Most names an effect list payload can carry
pub const MAX_LISTED_EFFECTS: usize = 16;

/// Commands decoded from one payload, in application order
pub type CommandBatch = Vec<LightCommand, MAX_PAYLOAD_COMMANDS>;

/// Error returned by payload encoding and decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolError {
    /// The payload is not a valid command object
    Malformed,
    /// The output buffer cannot hold the encoded payload
    BufferTooSmall,
    /// More items than the fixed-capacity output can hold
    TooManyCommands,
}

/// RGB color as it appears in payloads
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPayload {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl From<ColorPayload> for Rgb {
    fn from(color: ColorPayload) -> Self {
        Self {
            r: color.r,
            g: color.g,
            b: color.b,
        }
    }
}

impl From<Rgb> for ColorPayload {
    fn from(color: Rgb) -> Self {
        Self {
            r: color.r,
            g: color.g,
            b: color.b,
        }
    }
}

/// Command payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommandPayload<'a> {
    /// `"ON"` or `"OFF"`
    #[serde(default, borrow)]
    pub state: Option<&'a str>,
    /// Logical brightness (0-100)
    #[serde(default)]
    pub brightness: Option<u8>,
    #[serde(default)]
    pub color: Option<ColorPayload>,
    /// Effect name
    #[serde(default, borrow)]
    pub effect: Option<&'a str>,
    /// Effect speed (1-7)
    #[serde(default)]
    pub speed: Option<u8>,
    #[serde(default)]
    pub identify: Option<bool>,
}

impl CommandPayload<'_> {
    /// Check if this is a turn on command
    pub fn is_on(&self) -> bool {
        self.state == Some("ON")
    }

    /// Check if this is a turn off command
    pub fn is_off(&self) -> bool {
        self.state == Some("OFF")
    }

    /// Convert into commands: effect, color, brightness, speed, state, identify
    ///
    /// Brightness and speed are clamped to their ranges.
    pub fn to_commands(&self) -> Result<CommandBatch, ProtocolError> {
        let mut commands = CommandBatch::new();
        let mut push = |command| {
            commands
                .push(command)
                .map_err(|_| ProtocolError::TooManyCommands)
        };

        if let Some(name) = self.effect {
            push(
                LightCommand::effect_by_name(name)
                    .unwrap_or(LightCommand::SetEffect(EffectId::None)),
            )?;
        }
        if let Some(color) = self.color {
            push(LightCommand::SetColor(color.into()))?;
        }
        if let Some(brightness) = self.brightness {
            push(LightCommand::SetBrightness(clamp_brightness(brightness)))?;
        }
        if let Some(speed) = self.speed {
            push(LightCommand::SetSpeed(clamp_speed(speed)))?;
        }
        if self.is_on() {
            push(LightCommand::TurnOn)?;
        } else if self.is_off() {
            push(LightCommand::TurnOff)?;
        }
        if self.identify == Some(true) {
            push(LightCommand::Identify)?;
        }
        Ok(commands)
    }
}

/// Decode a JSON command payload
pub fn decode_command(payload: &[u8]) -> Result<CommandBatch, ProtocolError> {
    let (command, _) = serde_json_core::from_slice::<CommandPayload<'_>>(payload)
        .map_err(|_| ProtocolError::Malformed)?;
    command.to_commands()
}

/// State payload
#[derive(Debug, Clone, Serialize)]
pub struct StatePayload<'a> {
    pub state: &'a str,
    pub brightness: u8,
    pub color: ColorPayload,
    pub effect: &'a str,
    pub speed: u8,
}

impl<'a> StatePayload<'a> {
    pub fn new(state: &LightState, effect: &'a str) -> Self {
        Self {
            state: if state.on { "ON" } else { "OFF" },
            brightness: state.brightness,
            color: state.color.into(),
            effect,
            speed: state.speed,
        }
    }
}

/// Encode the state payload into `buf`, returning the encoded length
pub fn encode_state(
    state: &LightState,
    effect: &str,
    buf: &mut [u8],
) -> Result<usize, ProtocolError> {
    serde_json_core::to_slice(&StatePayload::new(state, effect), buf)
        .map_err(|_| ProtocolError::BufferTooSmall)
}

/// Encode effect names as a JSON array into `buf`
pub fn encode_effect_list<'n>(
    names: impl IntoIterator<Item = &'n str>,
    buf: &mut [u8],
) -> Result<usize, ProtocolError> {
    let mut list: Vec<&str, MAX_LISTED_EFFECTS> = Vec::new();
    for name in names {
        list.push(name).map_err(|_| ProtocolError::TooManyCommands)?;
    }
    serde_json_core::to_slice(&list.as_slice(), buf).map_err(|_| ProtocolError::BufferTooSmall)
}
