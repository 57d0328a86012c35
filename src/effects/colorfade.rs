//! Smooth solid-color crossfades.

use core::cmp::Ordering;

use crate::animation::{Animation, StepResult};
use crate::color::Colors;
use crate::frame::FrameAccess;

/// Fades the whole frame through a color sequence, one unit per tick.
///
/// Every tick moves each channel of the current color one step toward the
/// next target and paints the frame solid. The fade finishes on the tick
/// the final target is reached, leaving exactly that color behind. A
/// single-color sequence degenerates to a one-tick solid fill.
pub struct Colorfade<const W: usize = 3> {
    colors: Colors<W>,
    wait: u32,
    current: [u8; W],
    target: usize,
}

impl<const W: usize> Colorfade<W> {
    #[must_use]
    pub fn new(colors: Colors<W>, wait: u32) -> Self {
        Self {
            colors,
            wait,
            current: [0; W],
            target: 0,
        }
    }
}

impl<const W: usize> Animation<W> for Colorfade<W> {
    fn init(&mut self, _frame: &mut dyn FrameAccess<W>) -> StepResult {
        self.current = self.colors.first();
        self.target = 0;
        StepResult::Continue
    }

    fn step(&mut self, frame: &mut dyn FrameAccess<W>) -> StepResult {
        let goal = self.colors.cycled(self.target);
        for (channel, goal_channel) in self.current.iter_mut().zip(goal) {
            match (*channel).cmp(&goal_channel) {
                Ordering::Less => *channel += 1,
                Ordering::Greater => *channel -= 1,
                Ordering::Equal => {}
            }
        }
        for index in 0..frame.led_count() {
            frame.set_led(index, self.current);
        }
        if self.current == goal {
            if self.target + 1 >= self.colors.len() {
                return StepResult::Finished;
            }
            self.target += 1;
        }
        if self.wait > 0 {
            StepResult::Sleep(self.wait)
        } else {
            StepResult::Continue
        }
    }

    fn reset(&mut self) {
        self.target = 0;
    }
}
