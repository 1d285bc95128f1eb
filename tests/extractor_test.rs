// ABOUTME: Integration tests for the token extractor
// ABOUTME: Named and positional calculator fields, pair, Riegel, heart-rate and treadmill lines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use runcalc::algorithms::TreadmillField;
use runcalc::errors::{CalcError, ErrorCode, Field};
use runcalc::extractor::{
    extract_calc_query, extract_fields, extract_heart_rate, extract_pair, extract_riegel,
    extract_treadmill,
};
use runcalc::models::{PaceUnit, SpeedUnit};

#[test]
fn test_named_cyrillic_distance() {
    let query = extract_calc_query("dist=10км, pace=3:45").unwrap();
    assert_eq!(query.distance.unwrap().km(), 10.0);
    assert_eq!(query.pace.unwrap().seconds_per_km(), 225.0);
    assert!(query.time.is_none());
}

#[test]
fn test_russian_keys_and_semicolons() {
    let fields = extract_fields("дист = 21.1; время = 1:35:00").unwrap();
    assert_eq!(fields.distance.as_deref(), Some("21.1"));
    assert_eq!(fields.time.as_deref(), Some("1:35:00"));

    let query = fields.into_query().unwrap();
    assert!((query.distance.unwrap().km() - 21.1).abs() < 1e-9);
    assert_eq!(query.time.unwrap().seconds(), 5700);
}

#[test]
fn test_keys_are_case_insensitive() {
    let fields = extract_fields("DIST=5km, Time=20:00").unwrap();
    assert_eq!(fields.distance.as_deref(), Some("5km"));
    assert_eq!(fields.time.as_deref(), Some("20:00"));
}

#[test]
fn test_positional_pace_with_keyword() {
    let query = extract_calc_query("темп 5:00, 42.195").unwrap();
    assert_eq!(query.pace.unwrap().seconds_per_km(), 300.0);
    assert!((query.distance.unwrap().km() - 42.195).abs() < 1e-9);
}

#[test]
fn test_positional_per_mile_pace() {
    let query = extract_calc_query("7:30/mi 1:00:00").unwrap();
    let pace = query.pace.unwrap();
    assert_eq!(pace.unit(), PaceUnit::PerMile);
    assert_eq!(pace.seconds(), 450.0);
    assert_eq!(query.time.unwrap().seconds(), 3600);
}

#[test]
fn test_conflicting_named_values() {
    let error = extract_fields("pace=4:30, темп=5:00").unwrap_err();
    assert_eq!(error.code(), ErrorCode::AmbiguousInput);
    assert_eq!(error.field(), Some(Field::Pace));
}

#[test]
fn test_empty_named_value() {
    let error = extract_fields("dist=, 40:00").unwrap_err();
    assert!(matches!(
        error,
        CalcError::Parse {
            field: Field::Distance,
            ..
        }
    ));
}

#[test]
fn test_pair_line() {
    let query = extract_pair("1000м, 4:00").unwrap();
    assert_eq!(query.distance.unwrap().km(), 1.0);
    assert_eq!(query.pace.unwrap().seconds_per_km(), 240.0);

    let query = extract_pair("10km; 7:30/mi").unwrap();
    assert_eq!(query.pace.unwrap().unit(), PaceUnit::PerMile);

    let error = extract_pair("10km 4:00").unwrap_err();
    assert_eq!(error.code(), ErrorCode::ParseError);
}

#[test]
fn test_riegel_line_with_unicode_arrow() {
    let fields = extract_riegel("10км, 41:30 → 21.1км, 42.195, exp=1.07").unwrap();
    assert_eq!(fields.known_time.seconds(), 2490);
    assert_eq!(fields.targets.len(), 2);
    assert!((fields.targets[1].km() - 42.195).abs() < 1e-9);
    assert_eq!(fields.exponent, Some(1.07));

    let query = fields.into_query();
    assert_eq!(query.targets.len(), 2);
}

#[test]
fn test_colon_labels_and_spaced_pace_suffix() {
    for line in ["pace: 4:30, 10km", "10 km, 4:30 / km", "Темп: 4:30 /км; 10"] {
        let query = extract_calc_query(line).unwrap();
        assert_eq!(query.distance.unwrap().km(), 10.0, "{line}");
        assert_eq!(query.pace.unwrap().seconds_per_km(), 270.0, "{line}");
        assert!(query.time.is_none(), "{line}");
    }

    let query = extract_calc_query("time: 45:00 10km").unwrap();
    assert_eq!(query.time.unwrap().seconds(), 2700);
    assert!(query.pace.is_none());
}

#[test]
fn test_riegel_decimal_comma_exponent_adds_no_target() {
    let fields = extract_riegel("10km, 41:30 -> 21.1km, exp=1,07").unwrap();
    assert_eq!(fields.targets.len(), 1);
    assert_eq!(fields.exponent, Some(1.07));
}

#[test]
fn test_riegel_bad_target() {
    let error = extract_riegel("10km, 41:30 -> far").unwrap_err();
    assert_eq!(error.code(), ErrorCode::ParseError);
    assert_eq!(error.field(), Some(Field::Distance));
}

#[test]
fn test_heart_rate_line() {
    let query = extract_heart_rate("196, 72-83").unwrap();
    assert_eq!(query.max_hr, 196.0);
    assert_eq!(query.percent_low, 72.0);
    assert_eq!(query.percent_high, Some(83.0));
    assert_eq!(query.zone().describe(), "Range: 141-163 bpm (72-83% of 196)");

    let error = extract_heart_rate("196, lots").unwrap_err();
    assert_eq!(error.field(), Some(Field::Percentage));
}

#[test]
fn test_treadmill_lines() {
    let Ok(TreadmillField::Speed(speed)) = extract_treadmill("speed=7.5mph") else {
        panic!("expected a speed");
    };
    assert_eq!(speed.unit(), SpeedUnit::MilesPerHour);
    assert_eq!(speed.value(), 7.5);

    let Ok(TreadmillField::Pace(pace)) = extract_treadmill("Темп = 4:48") else {
        panic!("expected a pace");
    };
    assert_eq!(pace.seconds_per_km(), 288.0);

    let error = extract_treadmill("speed=fast").unwrap_err();
    assert_eq!(error.field(), Some(Field::Speed));
}
