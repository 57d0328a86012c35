//! Color representation at the engine boundary.
//!
//! Pixels travel through the engine as fixed-width channel tuples
//! (`[u8; W]`, three bytes of RGB by default). [`Colors`] carries an ordered,
//! validated color sequence into fill/pattern operations and effect
//! constructors.

use alloc::vec;
use alloc::vec::Vec;

use smart_leds::RGB8;

use crate::error::{Error, Result};

/// Ecosystem RGB color type.
pub type Rgb = RGB8;

pub const BLACK: [u8; 3] = [0, 0, 0];
pub const WHITE: [u8; 3] = [255, 255, 255];
pub const RED: [u8; 3] = [255, 0, 0];
pub const GREEN: [u8; 3] = [0, 255, 0];
pub const BLUE: [u8; 3] = [0, 0, 255];

/// Build an RGB pixel from channel values.
pub const fn rgb(r: u8, g: u8, b: u8) -> [u8; 3] {
    [r, g, b]
}

/// Convert an [`Rgb`] into pixel bytes.
pub const fn from_rgb(color: Rgb) -> [u8; 3] {
    [color.r, color.g, color.b]
}

/// Convert pixel bytes into an [`Rgb`].
pub const fn to_rgb(pixel: [u8; 3]) -> Rgb {
    Rgb {
        r: pixel[0],
        g: pixel[1],
        b: pixel[2],
    }
}

/// A validated, non-empty ordered color sequence.
///
/// Emptiness is rejected once at construction instead of at first tick, so
/// effects holding a `Colors` never need to re-validate. Callers with a
/// single color wrap it at the call site via [`Colors::single`] or
/// `From<[u8; W]>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Colors<const W: usize = 3> {
    items: Vec<[u8; W]>,
}

impl<const W: usize> Colors<W> {
    /// Validate an ordered color sequence.
    ///
    /// Returns [`Error::EmptyColorList`] when the sequence is empty.
    pub fn new<I>(colors: I) -> Result<Self>
    where
        I: IntoIterator<Item = [u8; W]>,
    {
        let items: Vec<[u8; W]> = colors.into_iter().collect();
        if items.is_empty() {
            return Err(Error::EmptyColorList);
        }
        Ok(Self { items })
    }

    /// Wrap a single color.
    pub fn single(color: [u8; W]) -> Self {
        Self {
            items: vec![color],
        }
    }

    /// Number of colors in the sequence (always at least one).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First color; present by construction.
    pub fn first(&self) -> [u8; W] {
        self.items[0]
    }

    /// Color at `index`, wrapping cyclically past the end.
    pub fn cycled(&self, index: usize) -> [u8; W] {
        self.items[index % self.items.len()]
    }

    /// Color at `index` without wrapping.
    pub fn get(&self, index: usize) -> Option<[u8; W]> {
        self.items.get(index).copied()
    }

    pub fn as_slice(&self) -> &[[u8; W]] {
        &self.items
    }
}

impl<const W: usize> From<[u8; W]> for Colors<W> {
    fn from(color: [u8; W]) -> Self {
        Self::single(color)
    }
}
