//! Breathing effect over the current frame contents.

use alloc::vec::Vec;

use crate::animation::{Animation, StepResult};
use crate::error::{Error, Result};
use crate::frame::FrameAccess;
use crate::gamma::filter_pixel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    FadeOut,
    FadeIn,
}

/// Dims the frame to black and back up again, in even brightness steps.
///
/// The picture captured at start is the reference for every level, so
/// repeated cycles do not accumulate rounding loss. One cycle is a full
/// fade down followed by a full fade up; the last step restores the
/// reference at full brightness.
pub struct Pulse<const W: usize = 3> {
    cycles: u32,
    steps: u32,
    wait: u32,
    base: Vec<u8>,
    phase: Phase,
    level: u32,
    cycles_done: u32,
}

impl<const W: usize> Pulse<W> {
    /// `steps` is the number of brightness levels per fade direction.
    ///
    /// # Errors
    ///
    /// [`Error::ZeroCycles`] or [`Error::ZeroSteps`] when either count is
    /// zero.
    pub fn new(cycles: u32, steps: u32, wait: u32) -> Result<Self> {
        if cycles == 0 {
            return Err(Error::ZeroCycles);
        }
        if steps == 0 {
            return Err(Error::ZeroSteps);
        }
        Ok(Self {
            cycles,
            steps,
            wait,
            base: Vec::new(),
            phase: Phase::FadeOut,
            level: 0,
            cycles_done: 0,
        })
    }
}

impl<const W: usize> Animation<W> for Pulse<W> {
    fn init(&mut self, frame: &mut dyn FrameAccess<W>) -> StepResult {
        self.base = frame.contents();
        StepResult::Continue
    }

    #[allow(clippy::cast_precision_loss)]
    fn step(&mut self, frame: &mut dyn FrameAccess<W>) -> StepResult {
        self.level += 1;
        let progress = self.level as f32 / self.steps as f32;
        let factor = match self.phase {
            Phase::FadeOut => 1.0 - progress,
            Phase::FadeIn => progress,
        };

        let mut bytes = self.base.clone();
        for chunk in bytes.chunks_exact_mut(W) {
            let mut pixel = [0u8; W];
            pixel.copy_from_slice(chunk);
            chunk.copy_from_slice(&filter_pixel(pixel, factor));
        }
        frame.set_contents(&bytes);

        if self.level >= self.steps {
            self.level = 0;
            match self.phase {
                Phase::FadeOut => self.phase = Phase::FadeIn,
                Phase::FadeIn => {
                    self.phase = Phase::FadeOut;
                    self.cycles_done += 1;
                    if self.cycles_done >= self.cycles {
                        return StepResult::Finished;
                    }
                }
            }
        }
        if self.wait > 0 {
            StepResult::Sleep(self.wait)
        } else {
            StepResult::Continue
        }
    }

    fn reset(&mut self) {
        self.base = Vec::new();
        self.phase = Phase::FadeOut;
        self.level = 0;
        self.cycles_done = 0;
    }
}
