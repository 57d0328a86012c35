#![no_std]

extern crate alloc;

pub mod animation;
pub mod buffer;
pub mod color;
pub mod command;
pub mod effects;
pub mod error;
pub mod frame;
pub mod gamma;
pub mod group;
pub mod stream;
pub mod strip;

pub use animation::{Animation, RunState, Runner, StepResult};
pub use buffer::PixelBuffer;
pub use color::{Colors, Rgb};
pub use command::{Command, CommandChannel, CommandReceiver, CommandSender};
pub use error::{Error, Result};
pub use frame::{DetachedFrame, FrameAccess};
pub use group::AnimationGroup;
pub use stream::{Stream, StreamId};
pub use strip::{Strip, StripConfig, TickResult};

pub use embassy_time::{Duration, Instant};

/// Byte-frame transport behind a strip.
///
/// Implement this for whatever carries pixel data to the LEDs; the strip
/// is generic over it. Frames are fixed-length: one `write` always covers
/// every LED the strip was configured with.
pub trait StripSink {
    /// Transport failure, surfaced unchanged to the strip's caller.
    type Error: core::fmt::Debug;

    /// Hands over one complete frame of channel bytes.
    fn write(&mut self, frame: &[u8]) -> core::result::Result<(), Self::Error>;

    /// Marks the frame boundary, for transports that buffer.
    fn flush(&mut self) -> core::result::Result<(), Self::Error>;
}
