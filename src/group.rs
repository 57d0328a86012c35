//! Sequencing container that runs animations one after another.

use alloc::vec::Vec;

use crate::animation::{Animation, Runner, RunState, StepResult};
use crate::frame::FrameAccess;

/// Runs its children in insertion order, one child per tick.
///
/// The group drives the child under its cursor and advances when that child
/// finishes; the next child starts on the following tick. After the last
/// child the group either finishes, rewinds for another pass, or loops
/// forever, depending on the repeat policy. Groups implement [`Animation`]
/// themselves, so they nest to arbitrary depth and always forward the frame
/// access they were given.
#[derive(Default)]
pub struct AnimationGroup<const W: usize = 3> {
    children: Vec<Runner<W>>,
    cursor: usize,
    extra_passes: u32,
    infinite: bool,
    passes_done: u32,
}

impl<const W: usize> AnimationGroup<W> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a child animation.
    pub fn add(&mut self, animation: impl Animation<W> + Send + 'static) {
        self.children.push(Runner::new(animation));
    }

    /// Builder form of [`add`](Self::add).
    #[must_use]
    pub fn with_animation(mut self, animation: impl Animation<W> + Send + 'static) -> Self {
        self.add(animation);
        self
    }

    /// Repeats the whole sequence `extra_passes` more times after the first
    /// pass. A group with two extra passes runs every child three times.
    #[must_use]
    pub fn with_repeat(mut self, extra_passes: u32) -> Self {
        self.extra_passes = extra_passes;
        self.infinite = false;
        self
    }

    /// Rewinds forever; the group never finishes on its own.
    #[must_use]
    pub fn with_infinite_repeat(mut self) -> Self {
        self.infinite = true;
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn rewind(&mut self) {
        self.cursor = 0;
        for child in &mut self.children {
            child.reset();
        }
    }
}

impl<const W: usize> Animation<W> for AnimationGroup<W> {
    fn init(&mut self, _frame: &mut dyn FrameAccess<W>) -> StepResult {
        if self.children.is_empty() {
            return StepResult::Finished;
        }
        self.cursor = 0;
        StepResult::Continue
    }

    fn step(&mut self, frame: &mut dyn FrameAccess<W>) -> StepResult {
        let Some(child) = self.children.get_mut(self.cursor) else {
            return StepResult::Finished;
        };
        if child.poll(frame) == RunState::Finished {
            self.cursor += 1;
        }
        if self.cursor < self.children.len() {
            return StepResult::Continue;
        }
        if self.infinite || self.passes_done < self.extra_passes {
            if !self.infinite {
                self.passes_done += 1;
            }
            self.rewind();
            return StepResult::Continue;
        }
        StepResult::Finished
    }

    fn reset(&mut self) {
        self.passes_done = 0;
        self.rewind();
    }
}
