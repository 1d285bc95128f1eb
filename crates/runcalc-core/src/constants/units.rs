// ABOUTME: Unit conversion constants for distance, time and speed
// ABOUTME: Provides named constants to eliminate magic numbers in calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

/// Meters per kilometer conversion factor
pub const METERS_PER_KM: f64 = 1000.0;

/// Meters per statute mile
pub const METERS_PER_MILE: f64 = 1609.344;

/// Miles per kilometer. Canonical direction for every km/mi conversion:
/// `mi = km × MILES_PER_KM`, `km = mi ÷ MILES_PER_KM`.
pub const MILES_PER_KM: f64 = 0.621_371_192;

/// Seconds per minute
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Seconds per hour
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Percent scale divisor
pub const PERCENT: f64 = 100.0;
