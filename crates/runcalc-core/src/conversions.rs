// ABOUTME: Pure unit conversions between distance units and between speed and pace
// ABOUTME: Shared by the unit parser and the derivation engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

//! Conversion library.
//!
//! Speed and pace are two views of the same rate of travel. Both directions go
//! through meters per second so `convert_pace_to_speed(convert_speed_to_pace(s))`
//! returns `s` to floating precision.

use crate::constants::{METERS_PER_KM, METERS_PER_MILE, MILES_PER_KM, SECONDS_PER_HOUR};
use crate::errors::{CalcError, CalcResult, Field};
use crate::models::{PaceUnit, SpeedUnit};

/// Kilometers to statute miles
#[must_use]
pub fn km_to_miles(km: f64) -> f64 {
    km * MILES_PER_KM
}

/// Statute miles to kilometers
#[must_use]
pub fn miles_to_km(miles: f64) -> f64 {
    miles / MILES_PER_KM
}

/// Meters to kilometers
#[must_use]
pub fn meters_to_km(meters: f64) -> f64 {
    meters / METERS_PER_KM
}

/// Kilometers to meters
#[must_use]
pub fn km_to_meters(km: f64) -> f64 {
    km * METERS_PER_KM
}

/// Speed in `unit` to meters per second
#[must_use]
pub fn speed_to_mps(value: f64, unit: SpeedUnit) -> f64 {
    match unit {
        SpeedUnit::KilometersPerHour => value * METERS_PER_KM / SECONDS_PER_HOUR,
        SpeedUnit::MilesPerHour => value * METERS_PER_MILE / SECONDS_PER_HOUR,
        SpeedUnit::MetersPerSecond => value,
    }
}

/// Meters per second to speed in `unit`
#[must_use]
pub fn mps_to_speed(mps: f64, unit: SpeedUnit) -> f64 {
    match unit {
        SpeedUnit::KilometersPerHour => mps * SECONDS_PER_HOUR / METERS_PER_KM,
        SpeedUnit::MilesPerHour => mps * SECONDS_PER_HOUR / METERS_PER_MILE,
        SpeedUnit::MetersPerSecond => mps,
    }
}

/// Seconds per `pace_unit` for a speed given in `speed_unit`
///
/// # Errors
///
/// Returns `CalcError::Domain` if `speed` is zero, negative or not finite
pub fn convert_speed_to_pace(
    speed: f64,
    speed_unit: SpeedUnit,
    pace_unit: PaceUnit,
) -> CalcResult<f64> {
    if !speed.is_finite() || speed <= 0.0 {
        return Err(CalcError::domain(
            Field::Speed,
            format!("speed must be positive, got {speed} {}", speed_unit.label()),
        ));
    }
    let mps = speed_to_mps(speed, speed_unit);
    Ok(pace_unit.meters() / mps)
}

/// Speed in `out_unit` for a pace of `pace_seconds` per `pace_unit`
///
/// # Errors
///
/// Returns `CalcError::Domain` if `pace_seconds` is zero, negative or not finite
pub fn convert_pace_to_speed(
    pace_seconds: f64,
    pace_unit: PaceUnit,
    out_unit: SpeedUnit,
) -> CalcResult<f64> {
    if !pace_seconds.is_finite() || pace_seconds <= 0.0 {
        return Err(CalcError::domain(
            Field::Pace,
            format!("pace must be positive, got {pace_seconds} s{}", pace_unit.suffix()),
        ));
    }
    let mps = pace_unit.meters() / pace_seconds;
    Ok(mps_to_speed(mps, out_unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mile_factor_directions_agree() {
        // Multiplying by the factor and dividing by its reciprocal are the same map
        let km = 42.195;
        let via_reciprocal = km / (1.0 / MILES_PER_KM);
        assert!((km_to_miles(km) - via_reciprocal).abs() < 1e-12);
        assert!((miles_to_km(km_to_miles(km)) - km).abs() < 1e-12);
    }

    #[test]
    fn test_speed_to_pace_reference_values() {
        // 12 km/h = 5:00/km
        let pace = convert_speed_to_pace(12.0, SpeedUnit::KilometersPerHour, PaceUnit::PerKilometer)
            .unwrap();
        assert!((pace - 300.0).abs() < 1e-9);

        // 10 mph = 6:00/mi
        let pace =
            convert_speed_to_pace(10.0, SpeedUnit::MilesPerHour, PaceUnit::PerMile).unwrap();
        assert!((pace - 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_pace_to_speed_reference_values() {
        // 4:00/km = 15 km/h = 4.1667 m/s
        let kmh =
            convert_pace_to_speed(240.0, PaceUnit::PerKilometer, SpeedUnit::KilometersPerHour)
                .unwrap();
        assert!((kmh - 15.0).abs() < 1e-9);
        let mps = convert_pace_to_speed(240.0, PaceUnit::PerKilometer, SpeedUnit::MetersPerSecond)
            .unwrap();
        assert!((mps - 1000.0 / 240.0).abs() < 1e-12);
    }

    #[test]
    fn test_non_positive_inputs_fail() {
        assert!(
            convert_speed_to_pace(0.0, SpeedUnit::KilometersPerHour, PaceUnit::PerKilometer)
                .is_err()
        );
        assert!(
            convert_pace_to_speed(-1.0, PaceUnit::PerMile, SpeedUnit::MilesPerHour).is_err()
        );
    }
}
