//! Circular rotation of whatever the frame currently shows.

use crate::animation::{Animation, StepResult};
use crate::error::{Error, Result};
use crate::frame::FrameAccess;

/// Rotates the frame contents by a fixed number of LEDs per cycle.
///
/// A positive step moves pixels toward higher indices, wrapping at the end;
/// a negative step moves them the other way. Rotating a frame of `n` LEDs
/// one step at a time for `n` cycles restores the original picture exactly.
pub struct Shift<const W: usize = 3> {
    step: i32,
    cycles: u32,
    wait: u32,
    done: u32,
}

impl<const W: usize> Shift<W> {
    /// # Errors
    ///
    /// [`Error::ZeroCycles`] when `cycles` is zero.
    pub fn new(step: i32, cycles: u32, wait: u32) -> Result<Self> {
        if cycles == 0 {
            return Err(Error::ZeroCycles);
        }
        Ok(Self {
            step,
            cycles,
            wait,
            done: 0,
        })
    }

    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn rotation(&self, led_count: usize) -> usize {
        self.step.rem_euclid(led_count as i32) as usize
    }
}

impl<const W: usize> Animation<W> for Shift<W> {
    fn step(&mut self, frame: &mut dyn FrameAccess<W>) -> StepResult {
        let count = frame.led_count();
        if count == 0 {
            return StepResult::Finished;
        }
        let mut bytes = frame.contents();
        bytes.rotate_right(self.rotation(count) * W);
        frame.set_contents(&bytes);
        self.done += 1;
        if self.done >= self.cycles {
            return StepResult::Finished;
        }
        if self.wait > 0 {
            StepResult::Sleep(self.wait)
        } else {
            StepResult::Continue
        }
    }

    fn reset(&mut self) {
        self.done = 0;
    }
}
