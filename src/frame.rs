//! Capability surface animations use to touch pixel storage.

use alloc::vec::Vec;

use crate::color::Colors;

/// Read and write access to one run of LEDs.
///
/// Animations never hold storage themselves; they receive an implementation
/// of this trait on every [`init`](crate::Animation::init) and
/// [`step`](crate::Animation::step) call. A group forwards the access it was
/// given to whichever child it is driving, so nested animations end up
/// painting the same LEDs as their outermost group.
pub trait FrameAccess<const W: usize = 3> {
    /// Number of LEDs reachable through this access.
    fn led_count(&self) -> usize;

    /// Reads the pixel at `index`.
    fn led(&self, index: usize) -> [u8; W];

    /// Writes the pixel at `index`.
    fn set_led(&mut self, index: usize, pixel: [u8; W]);

    /// Paints contiguous runs of the given colors across all LEDs.
    fn fill(&mut self, colors: &Colors<W>);

    /// Paints the colors cyclically, one LED per color.
    fn pattern(&mut self, colors: &Colors<W>);

    /// Snapshot of the raw channel bytes in LED order.
    fn contents(&self) -> Vec<u8>;

    /// Replaces the raw channel bytes. Input longer than the storage is
    /// truncated; shorter input leaves the tail untouched.
    fn set_contents(&mut self, bytes: &[u8]);
}

/// A [`FrameAccess`] with no LEDs behind it.
///
/// Every read yields zeros and every write is discarded. Useful for driving
/// an animation's lifecycle in isolation.
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedFrame;

impl<const W: usize> FrameAccess<W> for DetachedFrame {
    fn led_count(&self) -> usize {
        0
    }

    fn led(&self, _index: usize) -> [u8; W] {
        [0; W]
    }

    fn set_led(&mut self, _index: usize, _pixel: [u8; W]) {}

    fn fill(&mut self, _colors: &Colors<W>) {}

    fn pattern(&mut self, _colors: &Colors<W>) {}

    fn contents(&self) -> Vec<u8> {
        Vec::new()
    }

    fn set_contents(&mut self, _bytes: &[u8]) {}
}
