//! Ready-made animations covering the common strip choreography.
//!
//! Everything here is an ordinary [`Animation`](crate::Animation); effects
//! compose freely with [`AnimationGroup`](crate::AnimationGroup) and with
//! animations defined outside the crate.

mod burst;
mod colorfade;
mod fill;
mod flash;
mod pulse;
mod shift;
mod sweep;
mod wait;

pub use burst::burst_sweep;
pub use colorfade::Colorfade;
pub use fill::{Fill, Pattern};
pub use flash::Flash;
pub use pulse::Pulse;
pub use shift::Shift;
pub use sweep::{CenterSweep, DEFAULT_WAIT, Sweep, SweepDirection};
pub use wait::Wait;
