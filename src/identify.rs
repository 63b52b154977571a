//! Non-blocking identify blink
//!
//! A queue of `{color, duration}` steps advanced from the light loop. The
//! buffer is snapshotted when the sequence starts and restored when the
//! last step has elapsed.

use embassy_time::{Duration, Instant};
use heapless::Deque;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::buffer::PixelBuffer;
use crate::color::{BLACK, Rgb};

/// Maximum number of steps in one sequence
pub const MAX_SEQUENCE_STEPS: usize = 8;

/// One blink step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceStep {
    pub color: Rgb,
    pub duration: Duration,
}

impl SequenceStep {
    pub const fn new(color: Rgb, duration: Duration) -> Self {
        Self { color, duration }
    }
}

const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
const STEP_DURATION: Duration = Duration::from_millis(500);

/// Green, off, green, off
pub const IDENTIFY_SEQUENCE: [SequenceStep; 4] = [
    SequenceStep::new(GREEN, STEP_DURATION),
    SequenceStep::new(BLACK, STEP_DURATION),
    SequenceStep::new(GREEN, STEP_DURATION),
    SequenceStep::new(BLACK, STEP_DURATION),
];

/// What a call to [`IdentifySequencer::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifyTick {
    /// No sequence is running
    Idle,
    /// The current step is still showing
    Holding,
    /// A new step was written into the buffer
    Step(Rgb),
    /// The sequence ended and the buffer was restored
    Finished,
}

#[derive(Debug, Clone, Copy)]
struct ActiveStep {
    step: SequenceStep,
    started_at: Instant,
}

/// Timed blink sequence that temporarily owns the pixel buffer
#[derive(Debug, Clone)]
pub struct IdentifySequencer<const N: usize> {
    steps: Deque<SequenceStep, MAX_SEQUENCE_STEPS>,
    active: Option<ActiveStep>,
    snapshot: PixelBuffer<N>,
    running: bool,
}

impl<const N: usize> IdentifySequencer<N> {
    pub const fn new() -> Self {
        Self {
            steps: Deque::new(),
            active: None,
            snapshot: PixelBuffer::new(0),
            running: false,
        }
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Buffer contents that will be restored when the sequence ends
    ///
    /// Writes that arrive while the sequence runs go here so they survive
    /// the restore.
    pub fn snapshot_mut(&mut self) -> &mut PixelBuffer<N> {
        &mut self.snapshot
    }

    /// Number of steps not yet shown
    pub fn remaining(&self) -> usize {
        self.steps.len()
    }

    /// Start the default identify sequence
    pub fn start(&mut self, buffer: &PixelBuffer<N>) {
        self.start_with(&IDENTIFY_SEQUENCE, buffer);
    }

    /// Start a custom sequence; steps past [`MAX_SEQUENCE_STEPS`] are dropped
    ///
    /// Restarting a running sequence keeps the first snapshot.
    pub fn start_with(&mut self, steps: &[SequenceStep], buffer: &PixelBuffer<N>) {
        if !self.running {
            self.snapshot = buffer.clone();
        }
        self.steps.clear();
        for step in steps {
            if self.steps.push_back(*step).is_err() {
                break;
            }
        }
        self.active = None;
        self.running = true;

        #[cfg(feature = "esp32-log")]
        println!("[IdentifySequencer.start] {} steps", self.steps.len());
    }

    /// Advance the sequence, writing into `buffer` when the step changes
    pub fn tick(&mut self, now: Instant, buffer: &mut PixelBuffer<N>) -> IdentifyTick {
        if !self.running {
            return IdentifyTick::Idle;
        }

        if let Some(active) = self.active {
            let elapsed = now
                .checked_duration_since(active.started_at)
                .unwrap_or(Duration::from_ticks(0));
            if elapsed < active.step.duration {
                return IdentifyTick::Holding;
            }
        }

        match self.steps.pop_front() {
            Some(step) => {
                buffer.fill(step.color);
                self.active = Some(ActiveStep {
                    step,
                    started_at: now,
                });
                IdentifyTick::Step(step.color)
            }
            None => {
                buffer.copy_from(&self.snapshot);
                self.active = None;
                self.running = false;

                #[cfg(feature = "esp32-log")]
                println!("[IdentifySequencer.tick] finished, buffer restored");
                IdentifyTick::Finished
            }
        }
    }
}

impl<const N: usize> Default for IdentifySequencer<N> {
    fn default() -> Self {
        Self::new()
    }
}
