#![no_std]

pub mod buffer;
pub mod channel;
pub mod color;
pub mod command;
pub mod config;
pub mod controller;
pub mod effect;
pub mod filter;
pub mod frame_scheduler;
pub mod identify;
pub mod math8;
pub mod protocol;
pub mod state;
pub mod transition;
pub mod visualizer;

pub use buffer::PixelBuffer;
pub use command::{CommandChannel, CommandReceiver, CommandSender, EffectName, LightCommand};
pub use config::{ColorOrder, LightConfig, StripType, StripWiring, TransitionTimings};
pub use controller::{Diagnostics, LightController};
pub use effect::{Cadence, Effect, EffectContext, EffectDispatcher, EffectId, RegisterError};
pub use frame_scheduler::FrameScheduler;
pub use identify::{IdentifySequencer, SequenceStep};
pub use protocol::{ProtocolError, decode_command, encode_effect_list, encode_state};
pub use state::LightState;
pub use transition::{StepTiming, StepTransition};
pub use visualizer::{DatagramSource, IngestOutcome, VisualizerIngest};

pub use color::{Hsv, Rgb};
pub use math8::{Prng, ease_in_out_quad};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The light controller is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    ///
    /// `colors` is already brightness-scaled and covers only the active
    /// pixels. Channel ordering is up to the driver, see
    /// [`ColorOrder::arrange`].
    fn write(&mut self, colors: &[Rgb]);
}
