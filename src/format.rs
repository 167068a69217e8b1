//! Display helpers shared by gauge and sparkline widgets.

use std::time::Duration;

/// Unit suffixes walked by [`to_human_bytes`].
pub const BYTE_UNITS: [&str; 7] = ["B", "kB", "MB", "GB", "TB", "PB", "EB"];

/// Fractional digits used by [`human_bytes`].
pub const DEFAULT_BYTE_PRECISION: usize = 1;

/// Formats a byte count as `<magnitude><unit>` with `precision` fractional digits.
///
/// Missing, zero and NaN counts format as `"0B"`. The magnitude is divided by
/// 1024 while it exceeds 1000, so a value such as `1010.0kB` can be shown
/// before rolling over to the next unit.
///
/// Magnitudes beyond the exabyte range stay in `EB` instead of advancing to
/// an unknown unit; `u64` counts never reach that bound.
#[must_use]
pub fn to_human_bytes(bytes: impl Into<Option<f64>>, precision: usize) -> String {
    let mut magnitude = match bytes.into() {
        Some(value) if value != 0.0 && !value.is_nan() => value,
        _ => return "0B".to_owned(),
    };

    let mut unit_index = 0;
    while magnitude > 1000.0 && unit_index + 1 < BYTE_UNITS.len() {
        magnitude /= 1024.0;
        unit_index += 1;
    }

    let magnitude = round_ties_away(magnitude, precision);
    format!("{magnitude:.precision$}{}", BYTE_UNITS[unit_index])
}

/// Resolves an exact decimal tie at `precision` digits away from zero.
///
/// `format!` rounds ties to even, so `1.25` would print as `1.2`. Non-tie
/// values are returned unchanged and rounded by the formatter.
fn round_ties_away(magnitude: f64, precision: usize) -> f64 {
    // Powers of ten stay exact up to 10^15.
    let Ok(exponent) = i32::try_from(precision) else {
        return magnitude;
    };
    if exponent > 15 {
        return magnitude;
    }

    let scale = 10f64.powi(exponent);
    let scaled = magnitude.abs() * scale;
    let exact = magnitude.abs().mul_add(scale, -scaled) == 0.0;
    if exact && scaled.fract() == 0.5 {
        (scaled.ceil() / scale).copysign(magnitude)
    } else {
        magnitude
    }
}

/// [`to_human_bytes`] for integer counters at the default precision.
#[must_use]
pub fn human_bytes(bytes: u64) -> String {
    to_human_bytes(bytes as f64, DEFAULT_BYTE_PRECISION)
}

/// Stroke width in pixels for a gauge drawing `arc_count` concentric rings.
///
/// More rings get thinner strokes so neighbouring arcs stay distinct.
#[must_use]
pub const fn stroke_width_for(arc_count: u32) -> u32 {
    match arc_count {
        1 => 12,
        0 | 2 | 3 => 10,
        4 => 8,
        5 => 6,
        6 => 5,
        7 | 8 => 4,
        _ => 3,
    }
}

/// Suspends the calling task for `ms` milliseconds without blocking the
/// executor.
///
/// Always yields at least once, so `delay(0)` resumes only after the
/// scheduler has had a chance to run other ready work. There is no
/// cancellation beyond dropping the future.
pub async fn delay(ms: u64) {
    if ms == 0 {
        tokio::task::yield_now().await;
        return;
    }
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
