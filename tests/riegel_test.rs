// ABOUTME: Integration tests for Riegel race-time prediction
// ABOUTME: Reference predictions, exponent band handling and multi-target output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use runcalc::algorithms::{predict_riegel, RiegelPredictor, RiegelQuery};
use runcalc::errors::{ArityProblem, CalcError, ErrorCode};
use runcalc::formatters::format_duration;
use runcalc::models::{Distance, Duration};
use runcalc_engine::RiegelConfig;

fn km(value: f64) -> Distance {
    Distance::from_km(value).unwrap()
}

fn query(known_km: f64, known_seconds: u64, targets: &[f64], exponent: Option<f64>) -> RiegelQuery {
    RiegelQuery {
        known_distance: km(known_km),
        known_time: Duration::from_seconds(known_seconds),
        targets: targets.iter().copied().map(km).collect(),
        exponent,
    }
}

#[test]
fn test_ten_k_to_half_marathon() {
    let predictions = RiegelPredictor::default()
        .predict(&query(10.0, 2400, &[21.1], None))
        .unwrap();
    assert_eq!(predictions.len(), 1);

    let half = &predictions[0];
    assert!(
        (5290.0..=5300.0).contains(&half.time_seconds),
        "Expected about 1:28:16, got {}",
        half.time_seconds
    );
    assert_eq!(format_duration(half.time_seconds), "1:28:16");
    assert!((half.pace_per_km - 251.0).abs() < 0.5);
    assert_eq!(half.exponent, 1.06);
}

#[test]
fn test_exponent_override_within_band() {
    let predictions = RiegelPredictor::default()
        .predict(&query(10.0, 2490, &[21.1], Some(1.07)))
        .unwrap();
    let time = predictions[0].time_seconds;
    assert!(
        (5530.0..=5540.0).contains(&time),
        "Expected about 5536 s, got {time}"
    );
    assert_eq!(predictions[0].exponent, 1.07);
}

#[test]
fn test_out_of_band_exponent_uses_default() {
    let predictor = RiegelPredictor::default();
    let defaulted = predictor.predict(&query(5.0, 1200, &[10.0], None)).unwrap();
    for bad in [0.5, 1.5, f64::NAN] {
        let clamped = predictor
            .predict(&query(5.0, 1200, &[10.0], Some(bad)))
            .unwrap();
        assert_eq!(clamped[0].exponent, 1.06);
        assert_eq!(clamped[0].time_seconds, defaulted[0].time_seconds);
    }
}

#[test]
fn test_custom_band() {
    let config = RiegelConfig {
        default_exponent: 1.05,
        min_exponent: 1.0,
        max_exponent: 1.1,
    };
    let predictions = RiegelPredictor::new(config)
        .predict(&query(5.0, 1200, &[10.0], Some(1.15)))
        .unwrap();
    assert_eq!(predictions[0].exponent, 1.05);
}

#[test]
fn test_multiple_targets_keep_order() {
    let predictions = RiegelPredictor::default()
        .predict(&query(3.0, 600, &[5.0, 1.5, 10.0], Some(1.07)))
        .unwrap();
    let distances: Vec<f64> = predictions.iter().map(|p| p.distance.km()).collect();
    assert_eq!(distances, vec![5.0, 1.5, 10.0]);

    let five = predictions[0].time_seconds;
    assert!(
        (1030.0..=1040.0).contains(&five),
        "Expected about 1036 s, got {five}"
    );
    // Shorter target predicts a shorter time
    assert!(predictions[1].time_seconds < 600.0);
}

#[test]
fn test_prediction_description() {
    let predictions = RiegelPredictor::default()
        .predict(&query(10.0, 2400, &[21.1], None))
        .unwrap();
    let text = predictions[0].describe(3);
    assert!(text.starts_with("21.100 km: 1:28:16"), "got {text}");
    assert!(text.contains("/km | "), "got {text}");
}

#[test]
fn test_errors() {
    let predictor = RiegelPredictor::default();
    assert_eq!(
        predictor.predict(&query(10.0, 2400, &[], None)),
        Err(CalcError::InvalidArity(ArityProblem::NoTargets))
    );
    let error = predictor
        .predict(&query(10.0, 0, &[21.1], None))
        .unwrap_err();
    assert_eq!(error.code(), ErrorCode::DomainError);
}

#[test]
fn test_predict_riegel_with_global_settings() {
    let predictions = predict_riegel(
        km(10.0),
        Duration::from_seconds(2400),
        &[km(21.1), km(42.195)],
        None,
    )
    .unwrap();
    assert_eq!(predictions.len(), 2);
    assert!(
        (5290.0..=5300.0).contains(&predictions[0].time_seconds),
        "got {}",
        predictions[0].time_seconds
    );
    assert!(predictions[1].time_seconds > predictions[0].time_seconds * 2.0);
    assert!((predictions[0].pace_per_mile - 403.9).abs() < 0.5);
}
