// ABOUTME: Integration tests for the conversational shell
// ABOUTME: Every mode through dispatch, session transitions and JSON output shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use runcalc::errors::ErrorCode;
use runcalc::shell::{Evaluation, Mode, Outcome, SessionState, Shell};
use serde_json::Value;

fn run(mode: Mode, line: &str) -> Outcome {
    Shell::default().dispatch(&SessionState::with_mode(mode), line)
}

#[test]
fn test_heart_rate_mode() {
    let outcome = run(Mode::HeartRate, "196, 72-83");
    assert!(outcome.is_success());
    assert_eq!(outcome.render(), "Range: 141-163 bpm (72-83% of 196)");
}

#[test]
fn test_time_by_pace_mode() {
    let outcome = run(Mode::TimeByPace, "10km, 7:30/mi");
    assert!(outcome.is_success(), "got {}", outcome.render());
    assert_eq!(outcome.render(), "Time: 46:36");
}

#[test]
fn test_calculator_mode() {
    let outcome = run(Mode::Calculator, "dist=5km, t=22:30");
    assert_eq!(outcome.render(), "Pace: 4:30/km | 7:15/mi");

    let outcome = run(Mode::Calculator, "5km 4:30/km");
    assert_eq!(outcome.render(), "Time: 22:30");
}

#[test]
fn test_riegel_mode() {
    let outcome = run(Mode::Riegel, "10km, 40:00 -> 21.1km");
    let text = outcome.render();
    assert!(text.starts_with("Prediction (exp=1.06):"), "got {text}");
    assert!(text.contains("21.100 km: 1:28:16"), "got {text}");

    let outcome = run(Mode::Riegel, "10km, 40:00 -> 21.1km, 42.195km, exp=1.5");
    let Outcome::Success {
        evaluation: Evaluation::Riegel(predictions),
        ..
    } = outcome
    else {
        panic!("expected Riegel predictions");
    };
    assert_eq!(predictions.len(), 2);
    assert!(predictions.iter().all(|p| p.exponent == 1.06));
}

#[test]
fn test_treadmill_mode() {
    assert_eq!(
        run(Mode::Treadmill, "speed=12.5").render(),
        "Pace: 4:48/km | 7:43/mi"
    );
    assert_eq!(
        run(Mode::Treadmill, "pace=4:48/km").render(),
        "Speed: 12.50 km/h | 7.77 mph | 3.47 m/s"
    );
}

#[test]
fn test_failure_keeps_mode_and_repeats_prompt() {
    let outcome = run(Mode::Calculator, "10km");
    let Outcome::Failure { mode, error, text } = &outcome else {
        panic!("expected failure, got {outcome:?}");
    };
    assert_eq!(*mode, Mode::Calculator);
    assert_eq!(error.code, ErrorCode::InvalidArity);
    assert!(text.starts_with("Error: "));
    assert!(text.ends_with(Mode::Calculator.prompt()));
}

#[test]
fn test_session_transitions() {
    let state = SessionState::default();
    assert_eq!(state.mode(), None);

    let state = state.select(Mode::Riegel);
    assert_eq!(state.mode(), Some(Mode::Riegel));

    let state = state.select(Mode::HeartRate).back();
    assert_eq!(state.mode(), None);

    let outcome = Shell::default().dispatch(&state, "196, 70");
    let Outcome::Welcome { text } = outcome else {
        panic!("expected the menu");
    };
    assert!(text.contains("Choose a mode"));
}

#[test]
fn test_success_json_shape() {
    let outcome = run(Mode::Calculator, "5km, pace=4:30");
    let json: Value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["status"], "success");
    assert_eq!(json["mode"], "calculator");
    assert_eq!(json["evaluation"]["flow"], "calculator");
    assert_eq!(json["evaluation"]["result"]["field"], "time");
    assert_eq!(json["evaluation"]["result"]["value"]["kind"], "time");
    assert_eq!(json["evaluation"]["result"]["value"]["seconds"], 1350.0);
    assert_eq!(json["text"], "Time: 22:30");
}

#[test]
fn test_failure_json_shape() {
    let outcome = run(Mode::HeartRate, "196, x");
    let json: Value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["status"], "failure");
    assert_eq!(json["mode"], "heart_rate");
    assert_eq!(json["error"]["code"], "PARSE_ERROR");
    assert_eq!(json["error"]["field"], "percentage");
    assert_eq!(json["error"]["token"], "x");
}

#[test]
fn test_every_mode_parses_from_its_command() {
    for mode in Mode::ALL {
        assert_eq!(format!("/{mode}").parse::<Mode>().unwrap(), mode);
    }
    let error = "swim".parse::<Mode>().unwrap_err();
    assert!(error.to_string().contains("swim"));
}
