//! Errors surfaced by the engine's configuration surface.
//!
//! Everything here is reported at allocation or construction time. Failures
//! of the output sink itself travel through [`StripSink::Error`] instead, so
//! the owner of the scheduler sees the device's native error type.
//!
//! [`StripSink::Error`]: crate::StripSink

use displaydoc::Display;

/// A specialized result type for engine operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors from stream allocation and animation construction.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// requested {requested} LEDs but only {remaining} remain unallocated
    ResourceExhausted {
        /// LEDs asked for by the failing allocation.
        requested: usize,
        /// LEDs still unallocated on the strip.
        remaining: usize,
    },
    /// color sequence must contain at least one color
    EmptyColorList,
    /// cycle count must be at least one
    ZeroCycles,
    /// step count must be at least one
    ZeroSteps,
}

impl core::error::Error for Error {}
