//! Animation trait and the per-animation lifecycle driver.

use alloc::boxed::Box;

use crate::frame::FrameAccess;

/// Verdict an animation returns from [`Animation::init`] or
/// [`Animation::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// Step again on the next tick.
    Continue,
    /// Skip the given number of ticks before stepping again.
    /// `Sleep(0)` is equivalent to [`Continue`](StepResult::Continue).
    Sleep(u32),
    /// The animation is done and must not be stepped again.
    Finished,
}

/// Lifecycle position of a driven animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Never driven; the next poll initializes it.
    NotStarted,
    /// Initialized and stepping every tick.
    Running,
    /// Skipping ticks; the counter is how many skips remain.
    Sleeping(u32),
    /// Terminal. Only a reset leaves this state.
    Finished,
}

/// A unit of LED choreography driven one tick at a time.
///
/// Implementations keep their own progress counters and touch pixels only
/// through the [`FrameAccess`] handed to them, so the same animation runs
/// unchanged against a whole strip, a sub-run, or nothing at all.
pub trait Animation<const W: usize = 3> {
    /// One-time setup, called on the first tick the animation is driven.
    /// The first [`step`](Animation::step) follows within the same tick
    /// unless the returned verdict forbids it.
    fn init(&mut self, _frame: &mut dyn FrameAccess<W>) -> StepResult {
        StepResult::Continue
    }

    /// Advances the animation by one tick.
    fn step(&mut self, frame: &mut dyn FrameAccess<W>) -> StepResult;

    /// Returns internal progress to the pre-init state so the animation can
    /// run again. Animations without progress counters keep the default.
    fn reset(&mut self) {}
}

/// Drives one boxed [`Animation`] through its lifecycle.
///
/// The runner owns the init-before-step rule, the sleep countdown and the
/// terminal state, so animations only ever express verdicts.
pub struct Runner<const W: usize = 3> {
    state: RunState,
    animation: Box<dyn Animation<W> + Send>,
}

impl<const W: usize> Runner<W> {
    pub fn new(animation: impl Animation<W> + Send + 'static) -> Self {
        Self {
            state: RunState::NotStarted,
            animation: Box::new(animation),
        }
    }

    /// Drives the animation by one tick and reports the resulting state.
    ///
    /// The first poll initializes the animation and, unless init said
    /// otherwise, steps it within the same tick. Sleeping polls burn one
    /// skip each without calling into the animation. Finished is sticky.
    pub fn poll(&mut self, frame: &mut dyn FrameAccess<W>) -> RunState {
        if self.state == RunState::Finished {
            return RunState::Finished;
        }
        if self.state == RunState::NotStarted {
            let verdict = self.animation.init(frame);
            self.state = apply(RunState::Running, verdict);
            if self.state == RunState::Finished {
                return self.state;
            }
        }
        self.step_once(frame);
        self.state
    }

    fn step_once(&mut self, frame: &mut dyn FrameAccess<W>) {
        match self.state {
            RunState::Sleeping(remaining) => {
                self.state = if remaining <= 1 {
                    RunState::Running
                } else {
                    RunState::Sleeping(remaining - 1)
                };
            }
            RunState::Running => {
                let verdict = self.animation.step(frame);
                self.state = apply(RunState::Running, verdict);
            }
            RunState::NotStarted | RunState::Finished => {}
        }
    }

    /// Makes the animation eligible to run again from scratch.
    pub fn reset(&mut self) {
        self.state = RunState::NotStarted;
        self.animation.reset();
    }

    #[must_use]
    pub fn state(&self) -> RunState {
        self.state
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state == RunState::Finished
    }
}

fn apply(base: RunState, verdict: StepResult) -> RunState {
    match verdict {
        StepResult::Continue | StepResult::Sleep(0) => base,
        StepResult::Sleep(ticks) => RunState::Sleeping(ticks),
        StepResult::Finished => RunState::Finished,
    }
}

impl<const W: usize> core::fmt::Debug for Runner<W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Runner").field("state", &self.state).finish_non_exhaustive()
    }
}
