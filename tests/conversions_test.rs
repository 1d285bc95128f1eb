// ABOUTME: Integration tests for the conversion library
// ABOUTME: Speed/pace round trips over every unit pair and the mile factor in both directions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use runcalc::conversions::{
    convert_pace_to_speed, convert_speed_to_pace, km_to_miles, miles_to_km,
};
use runcalc::errors::ErrorCode;
use runcalc::models::{PaceUnit, SpeedUnit};

const PACE_UNITS: [PaceUnit; 2] = [PaceUnit::PerKilometer, PaceUnit::PerMile];

#[test]
fn test_speed_pace_round_trip_every_unit_pair() {
    let speeds = [0.5, 3.5, 7.5, 12.5, 19.99, 42.0, 1234.5];
    for speed_unit in SpeedUnit::ALL {
        for pace_unit in PACE_UNITS {
            for speed in speeds {
                let pace = convert_speed_to_pace(speed, speed_unit, pace_unit).unwrap();
                let back = convert_pace_to_speed(pace, pace_unit, speed_unit).unwrap();
                let relative = ((back - speed) / speed).abs();
                assert!(
                    relative < 1e-9,
                    "{speed} {speed_unit} via {pace_unit} came back as {back}"
                );
            }
        }
    }
}

#[test]
fn test_mile_factor_both_directions() {
    for km in [0.4, 5.0, 10.0, 21.0975, 42.195] {
        let miles = km_to_miles(km);
        assert!((miles - km * 0.621_371_192).abs() < 1e-12);
        assert!((miles_to_km(miles) - km).abs() < 1e-12);
    }
}

#[test]
fn test_reference_conversions() {
    let kmh = convert_pace_to_speed(300.0, PaceUnit::PerKilometer, SpeedUnit::KilometersPerHour)
        .unwrap();
    assert!((kmh - 12.0).abs() < 1e-9);

    let mph = convert_pace_to_speed(360.0, PaceUnit::PerMile, SpeedUnit::MilesPerHour).unwrap();
    assert!((mph - 10.0).abs() < 1e-9);

    let pace =
        convert_speed_to_pace(3.5, SpeedUnit::MetersPerSecond, PaceUnit::PerKilometer).unwrap();
    assert!((pace - 1000.0 / 3.5).abs() < 1e-9);
}

#[test]
fn test_non_positive_inputs_are_domain_errors() {
    let error =
        convert_speed_to_pace(-2.0, SpeedUnit::MilesPerHour, PaceUnit::PerMile).unwrap_err();
    assert_eq!(error.code(), ErrorCode::DomainError);

    let error =
        convert_pace_to_speed(0.0, PaceUnit::PerKilometer, SpeedUnit::MetersPerSecond)
            .unwrap_err();
    assert_eq!(error.code(), ErrorCode::DomainError);
}
