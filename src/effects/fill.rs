//! Single-tick solid paints.

use crate::animation::{Animation, StepResult};
use crate::color::Colors;
use crate::frame::FrameAccess;

/// Paints contiguous runs of its colors across the frame and finishes.
///
/// One color covers the whole frame; several split it into equal runs.
pub struct Fill<const W: usize = 3> {
    colors: Colors<W>,
}

impl<const W: usize> Fill<W> {
    #[must_use]
    pub fn new(colors: Colors<W>) -> Self {
        Self { colors }
    }
}

impl<const W: usize> Animation<W> for Fill<W> {
    fn step(&mut self, frame: &mut dyn FrameAccess<W>) -> StepResult {
        frame.fill(&self.colors);
        StepResult::Finished
    }
}

/// Paints its colors cyclically, one LED per color, and finishes.
pub struct Pattern<const W: usize = 3> {
    colors: Colors<W>,
}

impl<const W: usize> Pattern<W> {
    #[must_use]
    pub fn new(colors: Colors<W>) -> Self {
        Self { colors }
    }
}

impl<const W: usize> Animation<W> for Pattern<W> {
    fn step(&mut self, frame: &mut dyn FrameAccess<W>) -> StepResult {
        frame.pattern(&self.colors);
        StepResult::Finished
    }
}
