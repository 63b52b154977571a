//! Bounded command queue for `no_std` environments.
//!
//! Multi-sender safe queue built on `critical-section` and `heapless::Deque`.
//! Producers (network handlers, interrupt code) push; the light loop drains
//! the queue once per tick.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// Error returned when trying to send to a full channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError<T>(pub T);

/// Error returned when trying to receive from an empty channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// A bounded, interrupt-safe channel backed by a fixed-size `heapless::Deque`.
pub struct Channel<T, const SIZE: usize> {
    inner: Mutex<RefCell<Deque<T, SIZE>>>,
}

impl<T, const SIZE: usize> Channel<T, SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Sender handle; any number of senders may coexist.
    pub const fn sender(&self) -> Sender<'_, T, SIZE> {
        Sender { channel: self }
    }

    /// Receiver handle for the draining side.
    pub const fn receiver(&self) -> Receiver<'_, T, SIZE> {
        Receiver { channel: self }
    }

    /// Enqueue `value`, handing it back when the queue is full.
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(value).map_err(TrySendError)
        })
    }

    /// Dequeue the oldest value.
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }

    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().is_empty())
    }

    pub fn is_full(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().is_full())
    }

    /// Drop every queued value.
    pub fn clear(&self) {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().clear());
    }

    pub const fn capacity(&self) -> usize {
        SIZE
    }
}

impl<T, const SIZE: usize> Default for Channel<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// A sender handle for a [`Channel`].
#[derive(Clone, Copy)]
pub struct Sender<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Sender<'_, T, SIZE> {
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        self.channel.try_send(value)
    }

    pub fn is_full(&self) -> bool {
        self.channel.is_full()
    }
}

/// A receiver handle for a [`Channel`].
#[derive(Clone, Copy)]
pub struct Receiver<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Receiver<'_, T, SIZE> {
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        self.channel.try_receive()
    }

    pub fn is_empty(&self) -> bool {
        self.channel.is_empty()
    }

    pub fn len(&self) -> usize {
        self.channel.len()
    }
}
