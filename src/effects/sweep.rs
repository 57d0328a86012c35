//! Sweeps that light LEDs one per tick until a range is covered.

use alloc::vec::Vec;

use crate::animation::{Animation, StepResult};
use crate::color::Colors;
use crate::frame::FrameAccess;

/// Ticks a sweep pauses between paints unless configured otherwise.
pub const DEFAULT_WAIT: u32 = 10;

/// End of the range a [`Sweep`] starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepDirection {
    /// Start at the low end of the range.
    Forward,
    /// Run the same walk mirrored, starting at the high end.
    Reverse,
}

/// Lights every LED of a range exactly once, one LED per tick.
///
/// The default walk covers even offsets upward, then odd offsets downward,
/// so the sweep lands back near where it started; a plain walk covers the
/// range in index order instead. Colors are assigned by offset, so the
/// finished picture is independent of the visit order. The sweep finishes
/// on the tick that paints the last remaining LED.
pub struct Sweep<const W: usize = 3> {
    colors: Colors<W>,
    from: Option<usize>,
    to: Option<usize>,
    double_back: bool,
    direction: SweepDirection,
    wait: u32,
    start: usize,
    walk: Vec<usize>,
    pos: usize,
}

impl<const W: usize> Sweep<W> {
    #[must_use]
    pub fn new(colors: Colors<W>) -> Self {
        Self {
            colors,
            from: None,
            to: None,
            double_back: true,
            direction: SweepDirection::Forward,
            wait: DEFAULT_WAIT,
            start: 0,
            walk: Vec::new(),
            pos: 0,
        }
    }

    /// Restricts the sweep to the inclusive LED range `from..=to`.
    ///
    /// Bounds beyond the frame are clamped at start time; swapped bounds
    /// are reordered.
    #[must_use]
    pub fn with_range(mut self, from: usize, to: usize) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    /// Chooses between the doubling-back walk and a plain index-order walk.
    #[must_use]
    pub fn with_double_back(mut self, double_back: bool) -> Self {
        self.double_back = double_back;
        self
    }

    #[must_use]
    pub fn with_direction(mut self, direction: SweepDirection) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub fn with_wait(mut self, wait: u32) -> Self {
        self.wait = wait;
        self
    }
}

impl<const W: usize> Animation<W> for Sweep<W> {
    fn init(&mut self, frame: &mut dyn FrameAccess<W>) -> StepResult {
        let count = frame.led_count();
        if count == 0 {
            return StepResult::Finished;
        }
        let from = self.from.unwrap_or(0).min(count - 1);
        let to = self.to.unwrap_or(count - 1).min(count - 1);
        let (from, to) = if from <= to { (from, to) } else { (to, from) };
        let span = to - from + 1;

        self.start = from;
        self.walk.clear();
        if self.double_back {
            self.walk.extend((0..span).step_by(2));
            let returning: Vec<usize> = (1..span).step_by(2).collect();
            self.walk.extend(returning.into_iter().rev());
        } else {
            self.walk.extend(0..span);
        }
        if self.direction == SweepDirection::Reverse {
            for offset in &mut self.walk {
                *offset = span - 1 - *offset;
            }
        }
        self.pos = 0;
        StepResult::Continue
    }

    fn step(&mut self, frame: &mut dyn FrameAccess<W>) -> StepResult {
        let Some(&offset) = self.walk.get(self.pos) else {
            return StepResult::Finished;
        };
        frame.set_led(self.start + offset, self.colors.cycled(offset));
        self.pos += 1;
        if self.pos >= self.walk.len() {
            return StepResult::Finished;
        }
        if self.wait > 0 {
            StepResult::Sleep(self.wait)
        } else {
            StepResult::Continue
        }
    }

    fn reset(&mut self) {
        self.walk.clear();
        self.pos = 0;
    }
}

/// Lights the frame ring by ring from the center toward both edges.
///
/// Each tick paints one ring, the pair of LEDs equally far from the
/// center; an odd frame starts with the single center LED. Colors cycle
/// per ring. The inward variant visits the same rings edge-first.
pub struct CenterSweep<const W: usize = 3> {
    colors: Colors<W>,
    outward: bool,
    wait: u32,
    rings: Vec<(usize, Option<usize>)>,
    pos: usize,
}

impl<const W: usize> CenterSweep<W> {
    #[must_use]
    pub fn new(colors: Colors<W>) -> Self {
        Self {
            colors,
            outward: true,
            wait: DEFAULT_WAIT,
            rings: Vec::new(),
            pos: 0,
        }
    }

    /// Visits the rings edge-first instead of center-first.
    #[must_use]
    pub fn with_inward(mut self) -> Self {
        self.outward = false;
        self
    }

    #[must_use]
    pub fn with_wait(mut self, wait: u32) -> Self {
        self.wait = wait;
        self
    }
}

impl<const W: usize> Animation<W> for CenterSweep<W> {
    fn init(&mut self, frame: &mut dyn FrameAccess<W>) -> StepResult {
        let count = frame.led_count();
        if count == 0 {
            return StepResult::Finished;
        }
        let center = count / 2;
        self.rings.clear();
        if count % 2 == 0 {
            for ring in 0..center {
                self.rings.push((center - 1 - ring, Some(center + ring)));
            }
        } else {
            self.rings.push((center, None));
            for ring in 1..=center {
                self.rings.push((center - ring, Some(center + ring)));
            }
        }
        if !self.outward {
            self.rings.reverse();
        }
        self.pos = 0;
        StepResult::Continue
    }

    fn step(&mut self, frame: &mut dyn FrameAccess<W>) -> StepResult {
        let Some(&(left, right)) = self.rings.get(self.pos) else {
            return StepResult::Finished;
        };
        let color = self.colors.cycled(self.pos);
        frame.set_led(left, color);
        if let Some(right) = right {
            frame.set_led(right, color);
        }
        self.pos += 1;
        if self.pos >= self.rings.len() {
            return StepResult::Finished;
        }
        if self.wait > 0 {
            StepResult::Sleep(self.wait)
        } else {
            StepResult::Continue
        }
    }

    fn reset(&mut self) {
        self.rings.clear();
        self.pos = 0;
    }
}
