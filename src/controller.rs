//! Light controller - the main orchestrator
//!
//! Owns the pixel buffer, both transitions, the effect dispatcher, the
//! visualizer ingest and the frame scheduler. Commands are applied either
//! directly through the command methods or by draining the command channel
//! at the start of [`LightController::tick`]; both happen on the loop's
//! thread, so the buffer has a single writer.
//!
//! One tick runs, in order: command drain, identify sequencer, brightness
//! and color transitions, visualizer ingest or effect update, push decision.

use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::buffer::PixelBuffer;
use crate::color::{BLACK, Rgb};
use crate::command::{CommandReceiver, LightCommand};
use crate::config::LightConfig;
use crate::effect::{Effect, EffectDispatcher, EffectId, RegisterError};
use crate::filter::BrightnessFilter;
use crate::frame_scheduler::FrameScheduler;
use crate::identify::{IdentifySequencer, IdentifyTick};
use crate::state::{LightState, clamp_brightness, clamp_speed};
use crate::transition::{BrightnessTransition, ColorTransition, TransitionTick};
use crate::visualizer::{DatagramSource, IngestOutcome, VisualizerIngest};

/// Counters for diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Diagnostics {
    /// Frames handed to the output driver
    pub frames_pushed: u32,
    /// Visualizer frames copied into the buffer
    pub visualizer_frames: u32,
    /// Visualizer frames dropped for having the wrong size or arriving short
    pub visualizer_rejected: u32,
}

/// Top-level light engine
pub struct LightController<
    'a,
    D: OutputDriver,
    S: DatagramSource,
    const MAX_LEDS: usize,
    const QUEUE_SIZE: usize,
> {
    // External dependencies and configuration
    commands: CommandReceiver<'a, QUEUE_SIZE>,
    source: S,
    config: LightConfig,

    // Internal state
    state: LightState,
    buffer: PixelBuffer<MAX_LEDS>,
    brightness: BrightnessTransition,
    color: ColorTransition,
    fresh_frame: bool,
    blank_pending: bool,

    // Internal dependencies
    effects: EffectDispatcher<'a, MAX_LEDS>,
    visualizer: VisualizerIngest<MAX_LEDS>,
    identify: IdentifySequencer<MAX_LEDS>,
    scheduler: FrameScheduler<D, MAX_LEDS>,
}

impl<'a, D: OutputDriver, S: DatagramSource, const MAX_LEDS: usize, const QUEUE_SIZE: usize>
    LightController<'a, D, S, MAX_LEDS, QUEUE_SIZE>
{
    /// Create a controller in the configured initial state
    ///
    /// The first tick pushes the initial frame.
    pub fn new(
        config: LightConfig,
        commands: CommandReceiver<'a, QUEUE_SIZE>,
        driver: D,
        source: S,
    ) -> Self {
        let mut state = config.initial.clamped();
        let mut buffer = PixelBuffer::new(usize::from(config.led_count));

        let mut effects = EffectDispatcher::new(config.effects, config.seed);
        state.effect = effects.switch(state.effect);

        let initial_color = if state.effect.is_active() {
            BLACK
        } else {
            buffer.fill(state.color);
            state.color
        };
        let initial_brightness = if state.on { state.brightness } else { 0 };

        let mut filter = BrightnessFilter::new(config.max_brightness);
        filter.set_brightness(initial_brightness);
        let mut scheduler = FrameScheduler::new(driver, filter, config.frame_duration());
        scheduler.request_push();

        Self {
            commands,
            source,
            state,
            buffer,
            brightness: BrightnessTransition::new(initial_brightness, config.timings.brightness),
            color: ColorTransition::new(initial_color, config.timings.color),
            fresh_frame: false,
            blank_pending: false,
            effects,
            visualizer: VisualizerIngest::new(),
            identify: IdentifySequencer::new(),
            scheduler,
            config,
        }
    }

    /// Apply one command
    pub fn apply(&mut self, command: LightCommand) {
        match command {
            LightCommand::TurnOn => self.turn_on(),
            LightCommand::TurnOff => self.turn_off(),
            LightCommand::SetBrightness(brightness) => self.set_brightness(brightness),
            LightCommand::SetColor(color) => self.set_color(color),
            LightCommand::SetEffect(id) => self.set_effect(id),
            LightCommand::SetEffectByName(name) => self.set_effect_by_name(&name),
            LightCommand::SetSpeed(speed) => self.set_speed(speed),
            LightCommand::Identify => self.identify(),
        }
    }

    /// Turn the light on, fading up to the stored brightness
    pub fn turn_on(&mut self) {
        self.state.on = true;
        self.brightness.transition_to(self.state.brightness);
    }

    /// Turn the light off, fading down to 0 and keeping the stored brightness
    pub fn turn_off(&mut self) {
        self.state.on = false;
        self.brightness.transition_to(0);
    }

    /// Store a new brightness; fades to it only while the light is on
    pub fn set_brightness(&mut self, brightness: u8) {
        let brightness = clamp_brightness(brightness);
        self.state.brightness = brightness;
        if self.state.on {
            self.brightness.transition_to(brightness);
        }
    }

    /// Show a static color
    ///
    /// An active effect is stopped and the color is written at once. With no
    /// effect the color fades from the one currently shown.
    pub fn set_color(&mut self, color: Rgb) {
        self.state.color = color;

        if self.state.effect.is_active() {
            self.select_effect(EffectId::None);
            self.color.set_immediate(color);
            self.frame_mut().fill(color);
            self.scheduler.request_push();
        } else {
            self.color.transition_to(color);
        }

        if !self.state.on {
            self.turn_on();
        }
    }

    /// Switch effect, blanking the strip before the effect takes over
    ///
    /// Any running color transition is dropped. Unknown custom ids select
    /// [`EffectId::None`].
    pub fn set_effect(&mut self, id: EffectId) {
        self.select_effect(id);
        self.color.set_immediate(BLACK);
        self.frame_mut().clear();
        self.blank_pending = true;

        if !self.state.on {
            self.turn_on();
        }
    }

    /// Switch effect by its case-sensitive name
    ///
    /// An unknown name selects [`EffectId::None`], leaving the strip blank.
    pub fn set_effect_by_name(&mut self, name: &str) {
        let id = self.effects.resolve(name).unwrap_or_else(|| {
            #[cfg(feature = "esp32-log")]
            println!("[LightController.set_effect_by_name] unknown effect: {}", name);
            EffectId::None
        });
        self.set_effect(id);
    }

    /// Store the effect speed; used from the next effect update on
    pub fn set_speed(&mut self, speed: u8) {
        self.state.speed = clamp_speed(speed);
    }

    /// Start (or restart) the identify blink
    pub fn identify(&mut self) {
        self.identify.start(&self.buffer);
    }

    /// Register a user effect, selectable by name or by the returned id
    pub fn register_effect(
        &mut self,
        name: &'static str,
        effect: &'a mut dyn Effect,
    ) -> Result<EffectId, RegisterError> {
        self.effects.register(name, effect)
    }

    /// Snapshot of the externally visible state
    pub const fn state(&self) -> LightState {
        self.state
    }

    /// Name of the selected effect
    pub fn effect_name(&self) -> Option<&'static str> {
        self.effects.name_of(self.state.effect)
    }

    /// All selectable effect names, built-ins first
    pub fn effect_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.effects.names()
    }

    /// Run one loop iteration
    ///
    /// Returns `true` when a frame was pushed to the driver.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.process_commands();
        if self.blank_pending {
            // The blanked strip goes out before the new effect draws anything.
            // While identify owns the strip the blank sits in its snapshot and
            // goes out with the restore push instead.
            self.blank_pending = false;
            if !self.identify.is_running() {
                self.scheduler.push(now, self.buffer.pixels());
            }
        }

        let identifying = self.process_identify(now);
        self.process_transitions(now);

        if !identifying {
            self.process_frame_source(now);
        }

        let scale = self.brightness.current();
        let filter = self.scheduler.brightness_mut();
        if self.identify.is_running() {
            filter.set_full();
        } else {
            filter.set_brightness(scale);
        }

        let animating = self.is_animating();
        let pushed = self.scheduler.tick(now, animating, self.buffer.pixels());
        if pushed {
            self.fresh_frame = false;
        }
        pushed
    }

    /// Drain the command channel (non-blocking)
    fn process_commands(&mut self) {
        while let Ok(command) = self.commands.try_receive() {
            self.apply(command);
        }
    }

    /// Advance the identify blink; returns whether it owns the buffer
    fn process_identify(&mut self, now: Instant) -> bool {
        match self.identify.tick(now, &mut self.buffer) {
            IdentifyTick::Idle => false,
            IdentifyTick::Holding => true,
            IdentifyTick::Step(_) | IdentifyTick::Finished => {
                self.scheduler.request_push();
                self.identify.is_running()
            }
        }
    }

    /// Step brightness, then color; completed transitions force a push
    fn process_transitions(&mut self, now: Instant) {
        if self.brightness.tick(now) == TransitionTick::Completed {
            self.scheduler.request_push();
        }

        let tick = self.color.tick(now);
        if tick.changed() && !self.state.effect.is_active() {
            let color = self.color.current();
            self.frame_mut().fill(color);
        }
        if tick == TransitionTick::Completed {
            self.scheduler.request_push();
        }
    }

    /// Fill the buffer from the visualizer or the current effect
    fn process_frame_source(&mut self, now: Instant) {
        match self.state.effect {
            EffectId::None => {}
            EffectId::Visualize => {
                let outcome = self
                    .visualizer
                    .poll(&mut self.source, self.buffer.pixels_mut());
                if outcome == IngestOutcome::Accepted {
                    self.fresh_frame = true;
                }
            }
            _ => {
                if self.state.on || self.brightness.is_running() {
                    self.effects
                        .update(now, self.state.speed, self.buffer.pixels_mut());
                }
            }
        }
    }

    /// Whether the strip changes on its own and needs frame-rate pushes
    fn is_animating(&self) -> bool {
        self.brightness.is_running()
            || self.color.is_running()
            || (self.state.on && self.state.effect.is_procedural())
            || self.fresh_frame
            || self.identify.is_running()
    }

    fn select_effect(&mut self, id: EffectId) {
        self.state.effect = self.effects.switch(id);
        self.fresh_frame = false;
    }

    /// Buffer that static color writes go to
    ///
    /// While identify runs it owns the live buffer, so writes land in the
    /// snapshot it restores afterwards.
    fn frame_mut(&mut self) -> &mut PixelBuffer<MAX_LEDS> {
        if self.identify.is_running() {
            self.identify.snapshot_mut()
        } else {
            &mut self.buffer
        }
    }

    /// Push and visualizer counters
    pub fn diagnostics(&self) -> Diagnostics {
        Diagnostics {
            frames_pushed: self.scheduler.pushes(),
            visualizer_frames: self.visualizer.accepted(),
            visualizer_rejected: self.visualizer.rejected(),
        }
    }

    /// Configuration the controller was built with
    pub const fn config(&self) -> &LightConfig {
        &self.config
    }

    /// Pixel buffer as the effects and transitions left it (unscaled)
    pub const fn buffer(&self) -> &PixelBuffer<MAX_LEDS> {
        &self.buffer
    }

    /// Logical brightness transition (0-100)
    pub const fn brightness_transition(&self) -> &BrightnessTransition {
        &self.brightness
    }

    /// Static color transition
    pub const fn color_transition(&self) -> &ColorTransition {
        &self.color
    }

    /// Effect dispatcher with built-in and registered effects
    pub const fn effects(&self) -> &EffectDispatcher<'a, MAX_LEDS> {
        &self.effects
    }

    /// Whether the identify blink currently owns the strip
    pub const fn is_identifying(&self) -> bool {
        self.identify.is_running()
    }

    /// Hardware scale applied on the next push
    pub const fn output_scale(&self) -> u8 {
        self.scheduler.brightness().scale()
    }

    /// Output driver
    pub const fn driver(&self) -> &D {
        self.scheduler.driver()
    }

    /// Output driver, mutably
    pub fn driver_mut(&mut self) -> &mut D {
        self.scheduler.driver_mut()
    }

    /// Visualizer datagram source
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Visualizer datagram source, mutably
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
