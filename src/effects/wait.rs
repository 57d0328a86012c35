//! Timing spacer for sequencing.

use crate::animation::{Animation, StepResult};
use crate::frame::FrameAccess;

/// Does nothing for the given number of ticks, then finishes.
///
/// Useful between animations in a group to hold the last picture on
/// screen for a while.
pub struct Wait {
    ticks: u32,
}

impl Wait {
    #[must_use]
    pub fn new(ticks: u32) -> Self {
        Self { ticks }
    }
}

impl<const W: usize> Animation<W> for Wait {
    fn init(&mut self, _frame: &mut dyn FrameAccess<W>) -> StepResult {
        if self.ticks == 0 {
            StepResult::Continue
        } else {
            StepResult::Sleep(self.ticks)
        }
    }

    fn step(&mut self, _frame: &mut dyn FrameAccess<W>) -> StepResult {
        StepResult::Finished
    }
}
