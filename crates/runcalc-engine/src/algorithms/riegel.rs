// ABOUTME: Riegel race-time prediction from one known performance
// ABOUTME: T2 = T1 x (D2/D1)^k with a configurable, band-limited fatigue exponent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

//! Riegel formula
//!
//! `predicted_time = known_time × (target_distance / known_distance) ^ exponent`
//!
//! The exponent defaults to 1.06. An override outside the configured band is
//! replaced by the default rather than rejected; the exponent actually used is
//! reported with every prediction.

use crate::algorithms::solver::describe_pace;
use crate::config::{EngineConfig, RiegelConfig};
use runcalc_core::constants::MILES_PER_KM;
use runcalc_core::formatters::{format_distance, format_duration};
use runcalc_core::{ArityProblem, CalcError, CalcResult, Distance, Duration, Field};
use serde::Serialize;
use tracing::debug;

/// Inputs for a Riegel prediction
#[derive(Debug, Clone, PartialEq)]
pub struct RiegelQuery {
    /// Distance of the known performance
    pub known_distance: Distance,
    /// Time of the known performance
    pub known_time: Duration,
    /// One or more distances to predict
    pub targets: Vec<Distance>,
    /// Requested exponent, if any
    pub exponent: Option<f64>,
}

/// Predicted performance at one target distance
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiegelPrediction {
    /// Target distance
    pub distance: Distance,
    /// Predicted finishing time in seconds
    pub time_seconds: f64,
    /// Implied pace, seconds per kilometer
    pub pace_per_km: f64,
    /// Implied pace, seconds per mile
    pub pace_per_mile: f64,
    /// Exponent the prediction used
    pub exponent: f64,
}

impl RiegelPrediction {
    /// One-line rendering: distance, time, pace on both bases
    #[must_use]
    pub fn describe(&self, distance_decimals: usize) -> String {
        format!(
            "{}: {} ({})",
            format_distance(self.distance.km(), distance_decimals),
            format_duration(self.time_seconds),
            describe_pace(self.pace_per_km)
        )
    }
}

/// Raw Riegel scaling on canonical values
///
/// # Errors
///
/// Returns `CalcError::Domain` if a distance or the time is not strictly
/// positive, or the result is not finite
pub fn riegel_time(
    known_km: f64,
    known_seconds: f64,
    target_km: f64,
    exponent: f64,
) -> CalcResult<f64> {
    if !(known_km > 0.0 && target_km > 0.0) {
        return Err(CalcError::domain(
            Field::Distance,
            "all distances must be positive",
        ));
    }
    if known_seconds <= 0.0 {
        return Err(CalcError::domain(Field::Time, "known time must be positive"));
    }

    let distance_ratio = target_km / known_km;
    let predicted = known_seconds * distance_ratio.powf(exponent);
    if !predicted.is_finite() {
        return Err(CalcError::domain(
            Field::Time,
            format!("prediction for ratio {distance_ratio} is not finite"),
        ));
    }
    Ok(predicted)
}

/// Riegel predictor bound to an exponent configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct RiegelPredictor {
    config: RiegelConfig,
}

impl RiegelPredictor {
    /// Predictor with the given exponent band
    #[must_use]
    pub const fn new(config: RiegelConfig) -> Self {
        Self { config }
    }

    /// Predictor using the global configuration
    #[must_use]
    pub fn from_global() -> Self {
        Self::new(EngineConfig::global().riegel)
    }

    /// Exponent band in use
    #[must_use]
    pub const fn config(&self) -> &RiegelConfig {
        &self.config
    }

    /// Predict every target in `query`
    ///
    /// # Errors
    ///
    /// Returns `CalcError::InvalidArity` without targets and
    /// `CalcError::Domain` for a zero known time or a non-finite result
    pub fn predict(&self, query: &RiegelQuery) -> CalcResult<Vec<RiegelPrediction>> {
        if query.targets.is_empty() {
            return Err(ArityProblem::NoTargets.into());
        }

        let exponent = self.config.resolve(query.exponent);
        let known_km = query.known_distance.km();
        let known_seconds = query.known_time.as_f64();

        query
            .targets
            .iter()
            .map(|target| {
                let time_seconds = riegel_time(known_km, known_seconds, target.km(), exponent)?;
                let pace_per_km = time_seconds / target.km();
                debug!(
                    known_km,
                    target_km = target.km(),
                    exponent,
                    time_seconds,
                    "Riegel prediction"
                );
                Ok(RiegelPrediction {
                    distance: *target,
                    time_seconds,
                    pace_per_km,
                    pace_per_mile: pace_per_km / MILES_PER_KM,
                    exponent,
                })
            })
            .collect()
    }
}

/// Predict times at `targets` with the global exponent settings
///
/// # Errors
///
/// See [`RiegelPredictor::predict`]
pub fn predict_riegel(
    known_distance: Distance,
    known_time: Duration,
    targets: &[Distance],
    exponent: Option<f64>,
) -> CalcResult<Vec<RiegelPrediction>> {
    RiegelPredictor::from_global().predict(&RiegelQuery {
        known_distance,
        known_time,
        targets: targets.to_vec(),
        exponent,
    })
}
