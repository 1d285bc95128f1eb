// ABOUTME: Heart-rate zone from HRmax and one or two percentages
// ABOUTME: Percentages are sorted so the range always reads low to high
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

use runcalc_core::constants::PERCENT;
use runcalc_core::{ArityProblem, CalcError, CalcResult, Field};
use serde::Serialize;
use tracing::debug;

/// Validated heart-rate request with percentages already ordered
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeartRateQuery {
    /// Maximum heart rate in beats per minute
    pub max_hr: f64,
    /// Lower (or only) percentage
    pub percent_low: f64,
    /// Upper percentage for a range
    pub percent_high: Option<f64>,
}

impl HeartRateQuery {
    /// Build from HRmax and one or two percentages in any order
    ///
    /// # Errors
    ///
    /// Returns `CalcError::Domain` for a non-positive HRmax or a negative
    /// percentage, and `CalcError::InvalidArity` unless one or two
    /// percentages are given
    pub fn new(max_hr: f64, percentages: &[f64]) -> CalcResult<Self> {
        if !max_hr.is_finite() || max_hr <= 0.0 {
            return Err(CalcError::domain(
                Field::HeartRate,
                format!("HRmax must be positive, got {max_hr}"),
            ));
        }
        if let Some(bad) = percentages.iter().find(|p| !p.is_finite() || **p < 0.0) {
            return Err(CalcError::domain(
                Field::Percentage,
                format!("percentage must be zero or more, got {bad}"),
            ));
        }

        match *percentages {
            [only] => Ok(Self {
                max_hr,
                percent_low: only,
                percent_high: None,
            }),
            [a, b] => Ok(Self {
                max_hr,
                percent_low: a.min(b),
                percent_high: Some(a.max(b)),
            }),
            _ => Err(ArityProblem::Percentages(percentages.len()).into()),
        }
    }

    /// Compute the zone
    #[must_use]
    pub fn zone(&self) -> HeartRateZone {
        let bpm = |percent: f64| (self.max_hr * percent / PERCENT).round() as u32;
        let zone = HeartRateZone {
            max_hr: self.max_hr,
            percent_low: self.percent_low,
            percent_high: self.percent_high,
            low: bpm(self.percent_low),
            high: self.percent_high.map(bpm),
        };
        debug!(max_hr = self.max_hr, low = zone.low, high = ?zone.high, "heart rate zone");
        zone
    }
}

/// Target heart rate, a single value or a low-high range
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeartRateZone {
    /// HRmax the zone was computed from
    pub max_hr: f64,
    /// Lower (or only) percentage
    pub percent_low: f64,
    /// Upper percentage for a range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_high: Option<f64>,
    /// Lower (or only) beats per minute
    pub low: u32,
    /// Upper beats per minute for a range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<u32>,
}

impl HeartRateZone {
    /// `Range: 141-163 bpm (72-83% of 196)` or `70% of 190 = 133 bpm`
    #[must_use]
    pub fn describe(&self) -> String {
        match (self.high, self.percent_high) {
            (Some(high), Some(percent_high)) => format!(
                "Range: {}-{high} bpm ({:.0}-{percent_high:.0}% of {:.0})",
                self.low, self.percent_low, self.max_hr
            ),
            _ => format!(
                "{:.0}% of {:.0} = {} bpm",
                self.percent_low, self.max_hr, self.low
            ),
        }
    }
}

/// Heart rate for one percentage, or the range between two
///
/// # Errors
///
/// See [`HeartRateQuery::new`]
pub fn heart_rate_zone(max_hr: f64, percentages: &[f64]) -> CalcResult<HeartRateZone> {
    HeartRateQuery::new(max_hr, percentages).map(|query| query.zone())
}
