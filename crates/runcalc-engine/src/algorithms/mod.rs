// ABOUTME: Derivation engine - closed-form athletic formulas over canonical values
// ABOUTME: Missing-parameter solver, Riegel prediction, heart-rate zones and treadmill conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

//! Each algorithm is a pure function of already-parsed values. Text handling
//! lives in the extractor; rendering uses the core formatters.

/// Heart-rate zone from HRmax and percentages
pub mod heart_rate;
/// Riegel race-time prediction
pub mod riegel;
/// Distance, pace and time solver
pub mod solver;
/// Treadmill speed and pace conversion
pub mod treadmill;

pub use heart_rate::{heart_rate_zone, HeartRateQuery, HeartRateZone};
pub use riegel::{predict_riegel, riegel_time, RiegelPrediction, RiegelPredictor, RiegelQuery};
pub use solver::{solve_missing, solve_missing_with, CalcQuery, SolvedValue, Solution};
pub use treadmill::{TreadmillField, TreadmillReading};
