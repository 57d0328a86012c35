//! Terminal preview for ledweave animations.
//!
//! Renders the strip as a row of true-color blocks on stdout, or streams
//! raw frames to a device node given as the first argument. Ctrl-C stops
//! the strip loop cleanly.

use std::env;
use std::fs::{File, OpenOptions};
use std::io::{self, Stdout, Write};

use ledweave::color::rgb;
use ledweave::effects::{burst_sweep, Colorfade, Pattern, Pulse, Shift, Sweep, Wait};
use ledweave::{
    gamma, AnimationGroup, Colors, Command, CommandChannel, Duration, Strip, StripConfig,
    StripSink,
};
use log::info;

/// LEDs in the simulated strip.
const LED_COUNT: usize = 60;

/// LEDs given to the main animation stream.
const BODY_LEDS: usize = 48;

/// LEDs given to the accent stream at the end of the strip.
const TIP_LEDS: usize = 12;

/// Tick pacing. Terminals cope fine with about 66 frames per second.
const TICK_INTERVAL: Duration = Duration::from_millis(15);

/// Command channel between the Ctrl-C handler and the strip loop.
static COMMANDS: CommandChannel = CommandChannel::new();

enum PreviewSink {
    Terminal(Stdout),
    Device(File),
}

impl StripSink for PreviewSink {
    type Error = io::Error;

    fn write(&mut self, frame: &[u8]) -> io::Result<()> {
        match self {
            Self::Terminal(out) => {
                let mut line = String::with_capacity(frame.len() * 8);
                line.push('\r');
                for pixel in frame.chunks_exact(3) {
                    line.push_str(&format!(
                        "\x1b[38;2;{};{};{}m\u{2588}\u{2588}",
                        pixel[0], pixel[1], pixel[2]
                    ));
                }
                line.push_str("\x1b[0m");
                out.write_all(line.as_bytes())
            }
            Self::Device(device) => device.write_all(frame),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Terminal(out) => out.flush(),
            Self::Device(device) => device.flush(),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    ctrlc::set_handler(|| {
        let _ = COMMANDS.sender().try_send(Command::Stop);
    })?;

    gamma::install_power_lut(1.5);

    let sink = match env::args().nth(1) {
        Some(path) => PreviewSink::Device(OpenOptions::new().write(true).open(path)?),
        None => PreviewSink::Terminal(io::stdout()),
    };

    let mut strip = Strip::new(
        sink,
        StripConfig {
            led_count: LED_COUNT,
            tick_interval: TICK_INTERVAL,
        },
    )
    .with_control(COMMANDS.receiver());

    let body = strip.allocate(BODY_LEDS)?;
    let tips = strip.allocate(TIP_LEDS)?;

    let palette = Colors::new([rgb(200, 60, 10), rgb(10, 140, 70), rgb(20, 40, 180)])?;
    let body_show = AnimationGroup::new()
        .with_animation(Sweep::new(Colors::new([rgb(240, 140, 20), rgb(20, 140, 240)])?).with_wait(1))
        .with_animation(Wait::new(40))
        .with_animation(Pulse::new(2, 24, 0)?)
        .with_animation(Colorfade::new(palette, 0))
        .with_animation(burst_sweep(&Colors::single(rgb(220, 30, 30)), BODY_LEDS, 1, 1, 0)?)
        .with_animation(Wait::new(40))
        .with_infinite_repeat();
    strip.stream_mut(body).enqueue(body_show);

    let tip_show = AnimationGroup::new()
        .with_animation(Pattern::new(Colors::new([rgb(90, 90, 90), rgb(0, 0, 0)])?))
        .with_animation(Shift::new(1, 120, 4)?)
        .with_infinite_repeat();
    strip.stream_mut(tips).enqueue(tip_show);

    info!("previewing {LED_COUNT} LEDs, press Ctrl-C to stop");
    strip.run()?;
    strip.clear()?;
    println!();
    Ok(())
}
