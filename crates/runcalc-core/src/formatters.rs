// ABOUTME: Formatter turning canonical seconds, kilometers and speeds back into display text
// ABOUTME: h:mm:ss or m:ss durations, paces with a basis suffix, fixed-decimal distances and speeds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

use crate::constants::SECONDS_PER_MINUTE;
use crate::conversions::{km_to_meters, km_to_miles};
use crate::models::{PaceUnit, SpeedUnit};

const SECONDS_PER_HOUR: u64 = SECONDS_PER_MINUTE * 60;

/// Format seconds as `h:mm:ss`, or `m:ss` when under an hour
///
/// The input is rounded to the nearest second. Negative and NaN inputs
/// render as `0:00`.
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    let total_seconds = if seconds.is_nan() || seconds <= 0.0 {
        0
    } else {
        seconds.round() as u64
    };
    let hours = total_seconds / SECONDS_PER_HOUR;
    let minutes = (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let secs = total_seconds % SECONDS_PER_MINUTE;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

/// Format a pace as `m:ss/km` or `m:ss/mi`
#[must_use]
pub fn format_pace(seconds: f64, unit: PaceUnit) -> String {
    format!("{}{}", format_duration(seconds), unit.suffix())
}

/// Format kilometers with a fixed number of decimals
#[must_use]
pub fn format_distance(km: f64, decimals: usize) -> String {
    format!("{km:.decimals$} km")
}

/// Kilometers followed by whole meters and miles, e.g. `10.000 km (10000 m, 6.214 mi)`
#[must_use]
pub fn format_distance_breakdown(km: f64, decimals: usize) -> String {
    let meters = km_to_meters(km).round();
    let miles = km_to_miles(km);
    format!(
        "{} ({meters:.0} m, {miles:.decimals$} mi)",
        format_distance(km, decimals)
    )
}

/// Format a speed with its unit label
#[must_use]
pub fn format_speed(value: f64, unit: SpeedUnit, decimals: usize) -> String {
    format!("{value:.decimals$} {}", unit.label())
}
