//! One independently animated run of LEDs and its animation queue.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::animation::{Animation, Runner, RunState};
use crate::buffer::PixelBuffer;
use crate::color::Colors;
use crate::frame::FrameAccess;

/// Handle to a stream allocated from a [`Strip`](crate::Strip).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StreamId(pub(crate) usize);

impl StreamId {
    /// Position of the stream in strip allocation order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A contiguous run of LEDs with its own pixel storage and animation queue.
///
/// Queued animations run strictly one at a time; the head of the queue is
/// driven every tick until it finishes, then the next one starts on the
/// following tick. The stream tracks whether anything mutated its pixels
/// since the last flush so the strip can skip writes for quiet frames.
pub struct Stream<const W: usize = 3> {
    buffer: PixelBuffer<W>,
    pending: VecDeque<Runner<W>>,
    saved: Option<Vec<u8>>,
    dirty: bool,
}

impl<const W: usize> Stream<W> {
    pub(crate) fn new(led_count: usize) -> Self {
        Self {
            buffer: PixelBuffer::new(led_count),
            pending: VecDeque::new(),
            saved: None,
            dirty: false,
        }
    }

    /// Creates a stream backed by its own storage, outside any strip.
    ///
    /// Useful for driving animations by hand; such a stream is never
    /// flushed anywhere.
    #[must_use]
    pub fn standalone(led_count: usize) -> Self {
        Self::new(led_count)
    }

    /// Appends an animation to the queue. It starts once everything queued
    /// before it has finished.
    pub fn enqueue(&mut self, animation: impl Animation<W> + Send + 'static) {
        self.pending.push_back(Runner::new(animation));
    }

    /// Drives the head animation by one tick.
    ///
    /// A finished head is dropped; its successor starts on the next call.
    /// Returns the head's resulting state, or `None` for an empty queue.
    /// The owning strip calls this every tick; standalone streams call it
    /// directly.
    pub fn tick_animation(&mut self) -> Option<RunState> {
        let mut runner = self.pending.pop_front()?;
        let state = runner.poll(self);
        if state != RunState::Finished {
            self.pending.push_front(runner);
        }
        Some(state)
    }

    /// Blacks the stream out, remembering the current pixels.
    ///
    /// A second `off` without an `on` in between is a no-op; the first
    /// snapshot is kept.
    pub fn off(&mut self) {
        if self.saved.is_none() {
            self.saved = Some(self.buffer.as_bytes().to_vec());
            self.buffer.clear();
            self.dirty = true;
        }
    }

    /// Restores the pixels remembered by [`off`](Self::off). Does nothing
    /// when the stream is not off.
    pub fn on(&mut self) {
        if let Some(bytes) = self.saved.take() {
            self.buffer.load(&bytes);
            self.dirty = true;
        }
    }

    #[must_use]
    pub fn is_off(&self) -> bool {
        self.saved.is_some()
    }

    /// Drops the animation currently at the head of the queue.
    pub fn cancel_current(&mut self) -> bool {
        self.pending.pop_front().is_some()
    }

    /// Drops every queued animation. Pixels keep their last state.
    pub fn clear_pending(&mut self) {
        self.pending.clear();
    }

    #[must_use]
    pub fn queue_len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn has_animation(&self) -> bool {
        !self.pending.is_empty()
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// Reports and clears the mutation flag.
    pub(crate) fn take_dirty(&mut self) -> bool {
        core::mem::take(&mut self.dirty)
    }
}

impl<const W: usize> FrameAccess<W> for Stream<W> {
    fn led_count(&self) -> usize {
        self.buffer.led_count()
    }

    fn led(&self, index: usize) -> [u8; W] {
        self.buffer.get(index)
    }

    fn set_led(&mut self, index: usize, pixel: [u8; W]) {
        self.buffer.set(index, pixel);
        self.dirty = true;
    }

    fn fill(&mut self, colors: &Colors<W>) {
        self.buffer.fill(colors);
        self.dirty = true;
    }

    fn pattern(&mut self, colors: &Colors<W>) {
        self.buffer.pattern(colors);
        self.dirty = true;
    }

    fn contents(&self) -> Vec<u8> {
        self.buffer.as_bytes().to_vec()
    }

    fn set_contents(&mut self, bytes: &[u8]) {
        self.buffer.load(bytes);
        self.dirty = true;
    }
}

impl<const W: usize> core::fmt::Debug for Stream<W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Stream")
            .field("led_count", &self.buffer.led_count())
            .field("queued", &self.pending.len())
            .field("off", &self.saved.is_some())
            .finish()
    }
}
