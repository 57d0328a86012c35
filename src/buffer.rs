//! Flat byte storage for a run of LEDs.

use alloc::vec;
use alloc::vec::Vec;

use crate::color::Colors;

/// Pixel storage for `led_count` LEDs of `W` bytes each.
///
/// The backing length is fixed at construction; every mutation preserves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer<const W: usize = 3> {
    data: Vec<u8>,
}

impl<const W: usize> PixelBuffer<W> {
    /// Creates a zeroed buffer for `led_count` LEDs.
    #[must_use]
    pub fn new(led_count: usize) -> Self {
        Self {
            data: vec![0; led_count * W],
        }
    }

    /// Number of LEDs the buffer holds.
    #[must_use]
    pub fn led_count(&self) -> usize {
        self.data.len() / W
    }

    /// Reads the pixel at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> [u8; W] {
        let mut pixel = [0; W];
        pixel.copy_from_slice(&self.data[index * W..(index + 1) * W]);
        pixel
    }

    /// Writes the pixel at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn set(&mut self, index: usize, pixel: [u8; W]) {
        self.data[index * W..(index + 1) * W].copy_from_slice(&pixel);
    }

    /// Paints contiguous runs of the given colors across the buffer.
    ///
    /// Each color covers `ceil(led_count / colors.len())` LEDs; the last run
    /// is truncated when the division is uneven. More colors than LEDs leaves
    /// the surplus colors unused.
    pub fn fill(&mut self, colors: &Colors<W>) {
        let count = self.led_count();
        if count == 0 {
            return;
        }
        let run = count.div_ceil(colors.len());
        for index in 0..count {
            self.set(index, colors.cycled(index / run));
        }
    }

    /// Paints the colors cyclically, one LED per color.
    pub fn pattern(&mut self, colors: &Colors<W>) {
        for index in 0..self.led_count() {
            self.set(index, colors.cycled(index));
        }
    }

    /// Zeroes every channel.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Copies `bytes` into the buffer, truncating or leaving a tail untouched
    /// when lengths differ. The buffer length never changes.
    pub fn load(&mut self, bytes: &[u8]) {
        let len = self.data.len().min(bytes.len());
        self.data[..len].copy_from_slice(&bytes[..len]);
    }

    /// Raw channel bytes in LED order.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable view of the raw channel bytes.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}
