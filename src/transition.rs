//! Stepwise value transitions
//!
//! A transition moves a value from its current state to a target in a fixed
//! number of equal-length steps. Every channel of the value gets its own
//! [`StepPlan`]: the integer quotient of the delta is applied on each step and
//! the leftover remainder is spread Bresenham-style across the steps, so the
//! sum of all increments is exactly the delta and no step jumps by more than
//! one unit over its neighbours.

use embassy_time::{Duration, Instant};

use crate::color::Rgb;

/// Maximum number of channels a transition value may have
const MAX_CHANNELS: usize = 3;

/// Number of steps and total duration of a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepTiming {
    pub steps: u16,
    pub duration: Duration,
}

impl StepTiming {
    pub const fn new(steps: u16, duration: Duration) -> Self {
        Self { steps, duration }
    }

    /// Wall-clock time between two consecutive steps
    pub const fn step_duration(self) -> Duration {
        let steps = if self.steps == 0 { 1 } else { self.steps as u64 };
        Duration::from_ticks(self.duration.as_ticks() / steps)
    }

    const fn step_count(self) -> u16 {
        if self.steps == 0 { 1 } else { self.steps }
    }
}

/// Per-channel increment schedule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepPlan {
    /// Truncated `delta / steps`
    pub amount: i16,
    /// `delta % steps`, same sign as the delta
    pub remainder: i16,
}

impl StepPlan {
    /// Plan `steps` increments that move `start` to `target`
    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    pub const fn new(start: u8, target: u8, steps: u16) -> Self {
        let steps = if steps == 0 { 1 } else { steps as i32 };
        let delta = target as i32 - start as i32;
        Self {
            amount: (delta / steps) as i16,
            remainder: (delta % steps) as i16,
        }
    }

    /// Increment applied on step `index` (1-based) out of `steps`
    ///
    /// Step `i` receives a one-unit correction when
    /// `floor(i * |r| / steps)` grows past `floor((i - 1) * |r| / steps)`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn increment(self, index: u16, steps: u16) -> i16 {
        if index == 0 {
            return 0;
        }
        let steps = if steps == 0 { 1 } else { steps as u32 };
        let index = index as u32;
        let remainder = self.remainder.unsigned_abs() as u32;

        let before = (index - 1) * remainder / steps;
        let after = index * remainder / steps;
        if after > before {
            self.amount + self.correction_sign()
        } else {
            self.amount
        }
    }

    const fn correction_sign(self) -> i16 {
        if self.amount != 0 {
            self.amount.signum()
        } else {
            self.remainder.signum()
        }
    }

    const fn is_zero(self) -> bool {
        self.amount == 0 && self.remainder == 0
    }
}

/// A value that can be eased channel by channel
pub trait Channels: Copy + PartialEq {
    /// Number of independent 8-bit channels
    const COUNT: usize;

    fn channel(&self, index: usize) -> u8;

    fn set_channel(&mut self, index: usize, value: u8);
}

impl Channels for u8 {
    const COUNT: usize = 1;

    fn channel(&self, _index: usize) -> u8 {
        *self
    }

    fn set_channel(&mut self, _index: usize, value: u8) {
        *self = value;
    }
}

impl Channels for Rgb {
    const COUNT: usize = 3;

    fn channel(&self, index: usize) -> u8 {
        match index {
            0 => self.r,
            1 => self.g,
            _ => self.b,
        }
    }

    fn set_channel(&mut self, index: usize, value: u8) {
        match index {
            0 => self.r = value,
            1 => self.g = value,
            _ => self.b = value,
        }
    }
}

/// Transition lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    /// No pending work
    Idle,
    /// A target was requested; planning happens on the next tick
    Pending,
    /// Steps are being applied
    Running,
}

/// What a call to [`StepTransition::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionTick {
    /// Nothing changed
    Idle,
    /// The transition was planned and started; no step was applied yet
    Started,
    /// One step was applied
    Stepped,
    /// The final step was applied (or there was nothing to do); the value
    /// now equals the target and should be pushed right away
    Completed,
}

impl TransitionTick {
    /// Whether the current value changed on this tick
    pub const fn changed(self) -> bool {
        matches!(self, Self::Stepped | Self::Completed)
    }
}

/// Stepwise transition of a [`Channels`] value
#[derive(Debug, Clone)]
pub struct StepTransition<T: Channels> {
    current: T,
    target: T,
    timing: StepTiming,
    plans: [StepPlan; MAX_CHANNELS],
    step_index: u16,
    phase: TransitionPhase,
    last_step: Instant,
}

/// Logical brightness transition (0-100)
pub type BrightnessTransition = StepTransition<u8>;

/// Color transition
pub type ColorTransition = StepTransition<Rgb>;

impl<T: Channels> StepTransition<T> {
    pub fn new(initial: T, timing: StepTiming) -> Self {
        Self {
            current: initial,
            target: initial,
            timing,
            plans: [StepPlan::default(); MAX_CHANNELS],
            step_index: 0,
            phase: TransitionPhase::Idle,
            last_step: Instant::from_ticks(0),
        }
    }

    /// Currently applied value
    pub const fn current(&self) -> T {
        self.current
    }

    /// Value the transition is heading to
    pub const fn target(&self) -> T {
        self.target
    }

    pub const fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub const fn timing(&self) -> StepTiming {
        self.timing
    }

    /// Index of the next step to apply (1-based while running)
    pub const fn step_index(&self) -> u16 {
        self.step_index
    }

    /// Increment schedule of one channel
    pub fn plan(&self, channel: usize) -> StepPlan {
        self.plans.get(channel).copied().unwrap_or_default()
    }

    /// Whether a transition is pending or running
    pub const fn is_active(&self) -> bool {
        !matches!(self.phase, TransitionPhase::Idle)
    }

    /// Whether the transition is applying steps
    pub const fn is_running(&self) -> bool {
        matches!(self.phase, TransitionPhase::Running)
    }

    /// Request a transition toward `target`
    ///
    /// Replaces any in-flight transition; the new one starts from the value
    /// applied so far.
    pub fn transition_to(&mut self, target: T) {
        self.target = target;
        self.phase = TransitionPhase::Pending;
    }

    /// Jump to `value` and drop any in-flight transition
    pub fn set_immediate(&mut self, value: T) {
        self.current = value;
        self.target = value;
        self.step_index = 0;
        self.phase = TransitionPhase::Idle;
    }

    /// Advance the transition state machine
    pub fn tick(&mut self, now: Instant) -> TransitionTick {
        match self.phase {
            TransitionPhase::Idle => TransitionTick::Idle,
            TransitionPhase::Pending => self.start(now),
            TransitionPhase::Running => self.step(now),
        }
    }

    fn start(&mut self, now: Instant) -> TransitionTick {
        let steps = self.timing.step_count();
        let mut idle = true;
        for (index, plan) in self.plans.iter_mut().enumerate().take(T::COUNT) {
            *plan = StepPlan::new(self.current.channel(index), self.target.channel(index), steps);
            idle &= plan.is_zero();
        }

        if idle {
            self.current = self.target;
            self.step_index = 0;
            self.phase = TransitionPhase::Idle;
            return TransitionTick::Completed;
        }

        self.step_index = 1;
        self.last_step = now;
        self.phase = TransitionPhase::Running;
        TransitionTick::Started
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn step(&mut self, now: Instant) -> TransitionTick {
        let elapsed = now
            .checked_duration_since(self.last_step)
            .unwrap_or(Duration::from_ticks(0));
        if elapsed < self.timing.step_duration() {
            return TransitionTick::Idle;
        }

        let steps = self.timing.step_count();
        for (index, plan) in self.plans.iter().enumerate().take(T::COUNT) {
            let value = i16::from(self.current.channel(index)) + plan.increment(self.step_index, steps);
            self.current.set_channel(index, value.clamp(0, 255) as u8);
        }
        self.step_index += 1;
        self.last_step = now;

        if self.step_index > steps {
            self.current = self.target;
            self.step_index = 0;
            self.phase = TransitionPhase::Idle;
            return TransitionTick::Completed;
        }
        TransitionTick::Stepped
    }
}
