//! Brightness scaling and gamma correction.
//!
//! [`filter_pixel`] scales a pixel by a brightness factor in `[0, 1]` and
//! maps every channel through a process-wide 256-entry lookup table. The
//! table is identity until [`install_lut`] replaces it — once, at startup —
//! and is read-only afterwards.

use alloc::boxed::Box;
use core::cell::Cell;

use critical_section::Mutex;

/// Process-wide gamma table. `None` means identity.
static LUT: Mutex<Cell<Option<&'static [u8; 256]>>> = Mutex::new(Cell::new(None));

/// Install the process-wide gamma table.
///
/// Only the first call takes effect; later calls return `false` and leave
/// the installed table untouched. The table must live for the rest of the
/// process — a `static` or a leaked box both qualify.
pub fn install_lut(table: &'static [u8; 256]) -> bool {
    critical_section::with(|cs| {
        let slot = LUT.borrow(cs);
        if slot.get().is_some() {
            return false;
        }
        slot.set(Some(table));
        true
    })
}

/// Build and install a power-curve table in one step.
pub fn install_power_lut(gamma: f32) -> bool {
    install_lut(Box::leak(Box::new(power_lut(gamma))))
}

/// Look a single channel value up in the installed table.
pub fn lut_value(value: u8) -> u8 {
    critical_section::with(|cs| match LUT.borrow(cs).get() {
        Some(table) => table[value as usize],
        None => value,
    })
}

/// Build the power-curve table `(i / 255)^gamma × 255`.
///
/// A gamma of `1.5` matches the curve the strip was originally tuned with;
/// `2.8` approximates WS2812 perception.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn power_lut(gamma: f32) -> [u8; 256] {
    let mut table = [0u8; 256];
    for (i, entry) in table.iter_mut().enumerate() {
        let normalized = i as f32 / 255.0;
        *entry = (libm::powf(normalized, gamma) * 255.0) as u8;
    }
    table
}

/// Scale `pixel` by `factor` and map it through the gamma table.
///
/// `factor` is clamped to `[0, 1]`; each channel is scaled with integer
/// truncation, then looked up. Pure apart from the table itself.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn filter_pixel<const W: usize>(pixel: [u8; W], factor: f32) -> [u8; W] {
    let factor = factor.clamp(0.0, 1.0);
    let table = critical_section::with(|cs| LUT.borrow(cs).get());
    let mut out = [0u8; W];
    for (slot, channel) in out.iter_mut().zip(pixel) {
        let scaled = (f32::from(channel) * factor) as u8;
        *slot = match table {
            Some(table) => table[scaled as usize],
            None => scaled,
        };
    }
    out
}
