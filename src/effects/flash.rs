//! Hard on/off blinking of the current frame contents.

use alloc::vec;
use alloc::vec::Vec;

use crate::animation::{Animation, StepResult};
use crate::error::{Error, Result};
use crate::frame::FrameAccess;

/// Blacks the frame out and restores it, `cycles` times.
///
/// Each cycle is one blackout and one restore; the effect always ends with
/// the captured picture back on.
pub struct Flash<const W: usize = 3> {
    cycles: u32,
    wait: u32,
    base: Vec<u8>,
    dark: Vec<u8>,
    toggles_done: u32,
}

impl<const W: usize> Flash<W> {
    /// # Errors
    ///
    /// [`Error::ZeroCycles`] when `cycles` is zero.
    pub fn new(cycles: u32, wait: u32) -> Result<Self> {
        if cycles == 0 {
            return Err(Error::ZeroCycles);
        }
        Ok(Self {
            cycles,
            wait,
            base: Vec::new(),
            dark: Vec::new(),
            toggles_done: 0,
        })
    }
}

impl<const W: usize> Animation<W> for Flash<W> {
    fn init(&mut self, frame: &mut dyn FrameAccess<W>) -> StepResult {
        self.base = frame.contents();
        self.dark = vec![0; self.base.len()];
        StepResult::Continue
    }

    fn step(&mut self, frame: &mut dyn FrameAccess<W>) -> StepResult {
        if self.toggles_done % 2 == 0 {
            frame.set_contents(&self.dark);
        } else {
            frame.set_contents(&self.base);
        }
        self.toggles_done += 1;
        if self.toggles_done >= self.cycles * 2 {
            return StepResult::Finished;
        }
        if self.wait > 0 {
            StepResult::Sleep(self.wait)
        } else {
            StepResult::Continue
        }
    }

    fn reset(&mut self) {
        self.toggles_done = 0;
    }
}
