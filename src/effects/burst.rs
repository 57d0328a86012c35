//! Bright head travelling over a dimmed background.

use crate::animation::{Animation, StepResult};
use crate::color::Colors;
use crate::effects::Shift;
use crate::error::{Error, Result};
use crate::frame::FrameAccess;
use crate::gamma::filter_pixel;
use crate::group::AnimationGroup;

/// Brightness of the background relative to the head.
const DIM: f32 = 0.7;

/// Paints the frame in the dimmed color with a full-brightness head at
/// LED zero, then finishes. The shifts that follow move the head.
struct BurstHead<const W: usize> {
    color: [u8; W],
}

impl<const W: usize> Animation<W> for BurstHead<W> {
    fn step(&mut self, frame: &mut dyn FrameAccess<W>) -> StepResult {
        let dimmed = filter_pixel(self.color, DIM);
        let count = frame.led_count();
        for index in 0..count {
            frame.set_led(index, dimmed);
        }
        if count > 0 {
            frame.set_led(0, self.color);
        }
        StepResult::Finished
    }
}

/// Builds a burst: for each color, a bright head circles the frame once in
/// the given direction and once back over a dimmed background of the same
/// color.
///
/// `cycles` is the number of full passes over the color sequence. The
/// result is an ordinary [`AnimationGroup`] and nests like any other.
///
/// # Errors
///
/// [`Error::ZeroCycles`] when `cycles` is zero or `led_count` leaves the
/// head nowhere to travel.
pub fn burst_sweep<const W: usize>(
    colors: &Colors<W>,
    led_count: usize,
    cycles: u32,
    direction: i32,
    wait: u32,
) -> Result<AnimationGroup<W>> {
    if cycles == 0 {
        return Err(Error::ZeroCycles);
    }
    let travel = u32::try_from(led_count).unwrap_or(u32::MAX);
    let mut group = AnimationGroup::new();
    for index in 0..colors.len() {
        let color = colors.cycled(index);
        group.add(BurstHead { color });
        group.add(Shift::new(direction, travel, wait)?);
        group.add(Shift::new(-direction, travel, wait)?);
    }
    Ok(group.with_repeat(cycles - 1))
}
