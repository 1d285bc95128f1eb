// ABOUTME: Derivation engine and token extractor for the runcalc running calculator
// ABOUTME: Pure functions from parsed values to results, plus free-form line extraction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

#![deny(unsafe_code)]

//! # Runcalc Engine
//!
//! Closed-form athletic formulas over the canonical values of
//! `runcalc-core`, and the extractor that finds those values in a line of
//! free text.
//!
//! Nothing here keeps state between calls; every function may be called
//! concurrently from any number of threads. The only shared value is the
//! read-only [`config::EngineConfig::global`] instance.

/// Missing-parameter solver, Riegel, heart-rate zones, treadmill
pub mod algorithms;

/// Environment-driven engine configuration
pub mod config;

/// Named and positional field extraction
pub mod extractor;

pub use algorithms::{
    heart_rate_zone, predict_riegel, solve_missing, solve_missing_with, CalcQuery,
    HeartRateQuery, HeartRateZone, RiegelPrediction, RiegelPredictor, RiegelQuery,
    SolvedValue, Solution, TreadmillField, TreadmillReading,
};
pub use config::{ConfigError, DisplayConfig, EngineConfig, RiegelConfig};
pub use extractor::{
    extract_calc_query, extract_fields, extract_heart_rate, extract_pair, extract_riegel,
    extract_treadmill, ExtractedFields, RiegelFields,
};
