//! Visualizer frame ingest
//!
//! Pre-rendered frames arrive as raw datagrams of `len * 3` bytes: one
//! `(r, g, b)` triple per active pixel, in pixel order, no header. A frame
//! of any other size, or one that arrives short, is dropped and the
//! transport is flushed so the next read starts on a datagram boundary.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{BLACK, Rgb};

/// Datagram transport feeding the visualizer
pub trait DatagramSource {
    /// Size in bytes of the next pending datagram, 0 when none is pending
    fn pending(&mut self) -> usize;

    /// Read up to `buf.len()` bytes of the pending datagram
    ///
    /// Returns the number of bytes read.
    fn read(&mut self, buf: &mut [u8]) -> usize;

    /// Discard everything still buffered by the transport
    fn flush(&mut self);
}

/// Result of one ingest poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    /// No datagram was pending
    Empty,
    /// A full frame was copied into the buffer
    Accepted,
    /// A datagram of `len` bytes was dropped (wrong size or short read)
    Rejected { len: usize },
}

/// Validates datagrams and copies them into the pixel buffer
///
/// A datagram is read into a staging frame and committed only once all of
/// it arrived; `pixels` never holds a partial frame.
#[derive(Debug, Clone)]
pub struct VisualizerIngest<const N: usize> {
    staging: [Rgb; N],
    accepted: u32,
    rejected: u32,
}

impl<const N: usize> VisualizerIngest<N> {
    pub const fn new() -> Self {
        Self {
            staging: [BLACK; N],
            accepted: 0,
            rejected: 0,
        }
    }

    /// Poll `source` once, writing an exact-size frame into `pixels`
    ///
    /// Mismatched or short frames leave `pixels` untouched.
    pub fn poll<S: DatagramSource>(&mut self, source: &mut S, pixels: &mut [Rgb]) -> IngestOutcome {
        let len = source.pending();
        if len == 0 {
            return IngestOutcome::Empty;
        }

        let expected = pixels.len() * 3;
        if len != expected || pixels.len() > N {
            #[cfg(feature = "esp32-log")]
            println!(
                "[VisualizerIngest.poll] dropped frame of {} bytes, expected {}",
                len, expected
            );
            return self.reject(source, len);
        }

        let frame = &mut self.staging[..pixels.len()];
        if !read_frame(source, frame) {
            #[cfg(feature = "esp32-log")]
            println!("[VisualizerIngest.poll] short read in frame of {} bytes", len);
            return self.reject(source, len);
        }

        pixels.copy_from_slice(frame);
        self.accepted = self.accepted.wrapping_add(1);
        IngestOutcome::Accepted
    }

    fn reject<S: DatagramSource>(&mut self, source: &mut S, len: usize) -> IngestOutcome {
        source.flush();
        self.rejected = self.rejected.wrapping_add(1);
        IngestOutcome::Rejected { len }
    }

    /// Frames copied into the buffer
    pub const fn accepted(&self) -> u32 {
        self.accepted
    }

    /// Frames dropped for having the wrong size or arriving short
    pub const fn rejected(&self) -> u32 {
        self.rejected
    }
}

/// Fill `frame` from `(r, g, b)` triples; false when the source ran dry
fn read_frame<S: DatagramSource>(source: &mut S, frame: &mut [Rgb]) -> bool {
    let mut triple = [0u8; 3];
    for pixel in frame.iter_mut() {
        if source.read(&mut triple) < triple.len() {
            return false;
        }
        let [r, g, b] = triple;
        *pixel = Rgb { r, g, b };
    }
    true
}

impl<const N: usize> Default for VisualizerIngest<N> {
    fn default() -> Self {
        Self::new()
    }
}
