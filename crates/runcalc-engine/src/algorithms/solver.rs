// ABOUTME: Missing-parameter solver over distance, pace and time
// ABOUTME: Given any two of the three, derives the third and renders it for display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

use crate::config::{DisplayConfig, EngineConfig};
use runcalc_core::constants::MILES_PER_KM;
use runcalc_core::formatters::{format_distance_breakdown, format_duration, format_pace};
use runcalc_core::{
    ArityProblem, CalcError, CalcResult, Distance, Duration, Field, Pace, PaceUnit,
};
use serde::Serialize;
use tracing::debug;

/// Known values for the solver; exactly one must be absent
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CalcQuery {
    /// Distance covered
    pub distance: Option<Distance>,
    /// Pace on either basis
    pub pace: Option<Pace>,
    /// Elapsed time
    pub time: Option<Duration>,
}

impl CalcQuery {
    /// Query with every field set explicitly
    #[must_use]
    pub const fn new(
        distance: Option<Distance>,
        pace: Option<Pace>,
        time: Option<Duration>,
    ) -> Self {
        Self {
            distance,
            pace,
            time,
        }
    }

    /// How many of the three fields are present
    #[must_use]
    pub fn known_count(&self) -> usize {
        usize::from(self.distance.is_some())
            + usize::from(self.pace.is_some())
            + usize::from(self.time.is_some())
    }
}

/// Derived value, in canonical units
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SolvedValue {
    /// Distance derived from time and pace
    Distance {
        /// Kilometers
        km: f64,
        /// Meters
        meters: f64,
        /// Miles
        miles: f64,
    },
    /// Pace derived from time and distance
    Pace {
        /// Seconds per kilometer
        per_km: f64,
        /// Seconds per mile
        per_mile: f64,
    },
    /// Time derived from distance and pace
    Time {
        /// Seconds
        seconds: f64,
    },
}

/// Result of [`solve_missing`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    /// Which field was missing
    pub field: Field,
    /// The derived value
    pub value: SolvedValue,
    /// Human-readable rendering
    pub formatted: String,
}

fn positive_time(time: Duration) -> CalcResult<f64> {
    if time.is_zero() {
        return Err(CalcError::domain(Field::Time, "time must be positive"));
    }
    Ok(time.as_f64())
}

/// Render a per-km pace as `m:ss/km | m:ss/mi`
#[must_use]
pub fn describe_pace(seconds_per_km: f64) -> String {
    format!(
        "{} | {}",
        format_pace(seconds_per_km, PaceUnit::PerKilometer),
        format_pace(seconds_per_km / MILES_PER_KM, PaceUnit::PerMile)
    )
}

/// Derive the absent field with the global display settings
///
/// # Errors
///
/// See [`solve_missing_with`]
pub fn solve_missing(query: CalcQuery) -> CalcResult<Solution> {
    solve_missing_with(query, &EngineConfig::global().display)
}

/// Derive the absent field of `query`
///
/// # Errors
///
/// Returns `CalcError::InvalidArity` unless exactly two fields are known,
/// and `CalcError::Domain` for a zero time or a non-finite result
pub fn solve_missing_with(query: CalcQuery, display: &DisplayConfig) -> CalcResult<Solution> {
    let known = query.known_count();
    if known < 2 {
        return Err(ArityProblem::TooFewKnown { known }.into());
    }

    let solution = match (query.distance, query.pace, query.time) {
        (None, Some(pace), Some(time)) => {
            let km = positive_time(time)? / pace.seconds_per_km();
            let distance = Distance::from_km(km)?;
            Solution {
                field: Field::Distance,
                value: SolvedValue::Distance {
                    km: distance.km(),
                    meters: distance.meters(),
                    miles: distance.miles(),
                },
                formatted: format!(
                    "Distance: {}",
                    format_distance_breakdown(distance.km(), display.distance_decimals)
                ),
            }
        }
        (Some(distance), None, Some(time)) => {
            let per_km = positive_time(time)? / distance.km();
            let pace = Pace::per_km(per_km)?;
            Solution {
                field: Field::Pace,
                value: SolvedValue::Pace {
                    per_km: pace.seconds_per_km(),
                    per_mile: pace.seconds_per_mile(),
                },
                formatted: format!("Pace: {}", describe_pace(pace.seconds_per_km())),
            }
        }
        (Some(distance), Some(pace), None) => {
            let seconds = pace.seconds_per_km() * distance.km();
            if !seconds.is_finite() {
                return Err(CalcError::domain(Field::Time, "time is not finite"));
            }
            Solution {
                field: Field::Time,
                value: SolvedValue::Time { seconds },
                formatted: format!("Time: {}", format_duration(seconds)),
            }
        }
        _ => return Err(ArityProblem::NothingMissing.into()),
    };

    debug!(field = %solution.field, formatted = %solution.formatted, "solved missing parameter");
    Ok(solution)
}
