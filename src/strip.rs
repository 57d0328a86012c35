//! Strip orchestration: allocation, the tick loop, frame composition.

use alloc::vec::Vec;

use embassy_time::{Duration, Instant};
use log::{debug, error, info, trace, warn};

use crate::StripSink;
use crate::animation::RunState;
use crate::command::{Command, CommandReceiver};
use crate::error::{Error, Result};
use crate::stream::{Stream, StreamId};

/// LEDs a strip manages when the config does not say otherwise.
pub const DEFAULT_LED_COUNT: usize = 80;

/// Default pause between ticks.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_micros(500);

/// Construction parameters for a [`Strip`].
#[derive(Debug, Clone, Copy)]
pub struct StripConfig {
    /// Total LEDs behind the sink, the allocation budget for streams.
    pub led_count: usize,
    /// Pause between ticks; animation speeds are expressed in ticks.
    pub tick_interval: Duration,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            led_count: DEFAULT_LED_COUNT,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

/// Outcome of one tick, telling the caller when to call again.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// Deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait before the next tick; zero when behind schedule.
    pub sleep_duration: Duration,
    /// Whether this tick pushed a frame to the sink.
    pub frame_written: bool,
}

/// Owner of the sink, the streams carved out of it, and the tick loop.
///
/// A strip hands out [`Stream`]s via [`allocate`](Strip::allocate) and
/// advances every stream's head animation once per tick. When any stream
/// mutated its pixels, the streams' bytes are concatenated in allocation
/// order, padded with zeros up to the full strip length, and pushed to the
/// sink as one fixed-length frame. Quiet ticks write nothing.
///
/// Timing is caller-driven: [`tick`](Strip::tick) never sleeps, it reports
/// how long to wait. [`run`](Strip::run) wraps that in a blocking loop that
/// a [`Command::Stop`] ends.
pub struct Strip<S: StripSink, const W: usize = 3> {
    sink: S,
    streams: Vec<Stream<W>>,
    total_leds: usize,
    remaining: usize,
    tick_interval: Duration,
    next_tick: Instant,
    running: bool,
    commands: Option<CommandReceiver>,
    frame: Vec<u8>,
}

impl<S: StripSink, const W: usize> Strip<S, W> {
    pub fn new(sink: S, config: StripConfig) -> Self {
        Self {
            sink,
            streams: Vec::new(),
            total_leds: config.led_count,
            remaining: config.led_count,
            tick_interval: config.tick_interval,
            next_tick: Instant::from_micros(0),
            running: false,
            commands: None,
            frame: Vec::with_capacity(config.led_count * W),
        }
    }

    /// Attaches a command receiver drained at every tick boundary.
    #[must_use]
    pub fn with_control(mut self, commands: CommandReceiver) -> Self {
        self.commands = Some(commands);
        self
    }

    /// Carves the next `led_count` LEDs into a new stream.
    ///
    /// Streams are laid out in allocation order with no gaps. On failure
    /// the strip is left exactly as it was.
    ///
    /// # Errors
    ///
    /// [`Error::ResourceExhausted`] when fewer than `led_count` LEDs remain.
    pub fn allocate(&mut self, led_count: usize) -> Result<StreamId> {
        if led_count > self.remaining {
            return Err(Error::ResourceExhausted {
                requested: led_count,
                remaining: self.remaining,
            });
        }
        let id = StreamId(self.streams.len());
        self.streams.push(Stream::new(led_count));
        self.remaining -= led_count;
        debug!("allocated stream {} with {led_count} LEDs, {} left", id.index(), self.remaining);
        Ok(id)
    }

    /// Borrows a stream by id.
    ///
    /// # Panics
    ///
    /// Ids issued by [`allocate`](Strip::allocate) are always valid here;
    /// only an id from a different strip can be out of range.
    #[must_use]
    pub fn stream(&self, id: StreamId) -> &Stream<W> {
        &self.streams[id.index()]
    }

    /// Mutably borrows a stream by id.
    ///
    /// # Panics
    ///
    /// Same conditions as [`stream`](Strip::stream).
    pub fn stream_mut(&mut self, id: StreamId) -> &mut Stream<W> {
        &mut self.streams[id.index()]
    }

    /// Advances every stream by one tick and flushes if anything changed.
    ///
    /// Returns timing for the caller, which is responsible for waiting out
    /// `sleep_duration` before the next call. Falling behind by more than
    /// two intervals resets the schedule to `now` instead of bursting
    /// through the backlog.
    ///
    /// # Errors
    ///
    /// Propagates the sink's error when the frame cannot be written.
    pub fn tick(&mut self, now: Instant) -> core::result::Result<TickResult, S::Error> {
        self.drain_commands();

        let max_drift = self.tick_interval.as_micros() * 2;
        if now.as_micros() > self.next_tick.as_micros() + max_drift {
            self.next_tick = now;
        }

        for (index, stream) in self.streams.iter_mut().enumerate() {
            if stream.tick_animation() == Some(RunState::Finished) {
                trace!("stream {index}: animation finished");
            }
        }

        let mut any_dirty = false;
        for stream in &mut self.streams {
            any_dirty |= stream.take_dirty();
        }

        let frame_written = if any_dirty {
            self.frame.clear();
            for stream in &self.streams {
                self.frame.extend_from_slice(stream.as_bytes());
            }
            self.frame.resize(self.total_leds * W, 0);
            if let Err(err) = self.sink.write(&self.frame).and_then(|()| self.sink.flush()) {
                error!("frame write failed: {err:?}");
                return Err(err);
            }
            true
        } else {
            false
        };

        self.next_tick += self.tick_interval;

        let sleep_duration = if self.next_tick.as_micros() > now.as_micros() {
            Duration::from_micros(self.next_tick.as_micros() - now.as_micros())
        } else {
            Duration::from_micros(0)
        };

        Ok(TickResult {
            next_deadline: self.next_tick,
            sleep_duration,
            frame_written,
        })
    }

    /// Ticks in a blocking loop until stopped.
    ///
    /// Ends after the tick that observes [`Command::Stop`] or a call to
    /// [`stop`](Strip::stop); the loop can be started again afterwards.
    ///
    /// # Errors
    ///
    /// Propagates the sink's error when a frame cannot be written.
    pub fn run(&mut self) -> core::result::Result<(), S::Error> {
        self.running = true;
        self.next_tick = Instant::now();
        info!(
            "strip loop started, {} streams at {} us per tick",
            self.streams.len(),
            self.tick_interval.as_micros()
        );
        loop {
            let report = self.tick(Instant::now())?;
            if !self.running {
                break;
            }
            embassy_time::block_for(report.sleep_duration);
        }
        info!("strip loop stopped");
        Ok(())
    }

    /// Makes the current [`run`](Strip::run) loop end after its tick.
    pub fn stop(&mut self) {
        self.running = false;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Pushes an all-black frame to the sink. Stream pixels are untouched,
    /// so the next dirty tick restores the picture.
    ///
    /// # Errors
    ///
    /// Propagates the sink's error when the frame cannot be written.
    pub fn clear(&mut self) -> core::result::Result<(), S::Error> {
        self.frame.clear();
        self.frame.resize(self.total_leds * W, 0);
        self.sink.write(&self.frame)?;
        self.sink.flush()
    }

    /// LEDs not yet carved into any stream.
    #[must_use]
    pub fn remaining_leds(&self) -> usize {
        self.remaining
    }

    #[must_use]
    pub fn stream_count(&self) -> usize {
        self.streams.len()
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn drain_commands(&mut self) {
        let Some(receiver) = self.commands else {
            return;
        };
        while let Some(command) = receiver.try_receive() {
            match command {
                Command::Stop => {
                    info!("stop command received");
                    self.running = false;
                }
                Command::PowerOn(id) => match self.streams.get_mut(id.index()) {
                    Some(stream) => stream.on(),
                    None => warn!("power-on for unknown stream {}", id.index()),
                },
                Command::PowerOff(id) => match self.streams.get_mut(id.index()) {
                    Some(stream) => stream.off(),
                    None => warn!("power-off for unknown stream {}", id.index()),
                },
            }
        }
    }
}
