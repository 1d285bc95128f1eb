// ABOUTME: Pace value type - seconds per kilometer or per mile
// ABOUTME: Converts between bases and to speed through the conversion library
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

use crate::constants::{METERS_PER_KM, METERS_PER_MILE, MILES_PER_KM};
use crate::conversions::convert_pace_to_speed;
use crate::errors::{CalcError, CalcResult, Field, ParseFailure};
use crate::formatters::format_pace;
use crate::models::{Speed, SpeedUnit};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Distance basis of a pace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaceUnit {
    /// Seconds per kilometer (`/km`, `/км`, or no suffix)
    #[default]
    PerKilometer,
    /// Seconds per mile (`/mi`, `/mile`)
    PerMile,
}

impl PaceUnit {
    /// Length of one basis unit in meters
    #[must_use]
    pub const fn meters(&self) -> f64 {
        match self {
            Self::PerKilometer => METERS_PER_KM,
            Self::PerMile => METERS_PER_MILE,
        }
    }

    /// Display suffix
    #[must_use]
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::PerKilometer => "/km",
            Self::PerMile => "/mi",
        }
    }
}

impl fmt::Display for PaceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for PaceUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        match lowered.trim_start_matches('/') {
            "km" | "км" => Ok(Self::PerKilometer),
            "mi" | "mile" => Ok(Self::PerMile),
            other => Err(CalcError::parse(
                Field::Pace,
                s,
                ParseFailure::UnknownUnit(other.to_owned()),
            )),
        }
    }
}

/// Strictly positive time per distance unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pace {
    seconds: f64,
    unit: PaceUnit,
}

impl Pace {
    /// Build a pace of `seconds` per `unit`
    ///
    /// # Errors
    ///
    /// Returns `CalcError::Domain` if `seconds` is zero, negative or not finite
    pub fn new(seconds: f64, unit: PaceUnit) -> CalcResult<Self> {
        if !seconds.is_finite() || seconds <= 0.0 {
            return Err(CalcError::domain(
                Field::Pace,
                format!("pace must be positive, got {seconds} s{}", unit.suffix()),
            ));
        }
        Ok(Self { seconds, unit })
    }

    /// Shorthand for a per-kilometer pace
    ///
    /// # Errors
    ///
    /// Returns `CalcError::Domain` if `seconds` is not strictly positive
    pub fn per_km(seconds: f64) -> CalcResult<Self> {
        Self::new(seconds, PaceUnit::PerKilometer)
    }

    /// Seconds per basis unit as written
    #[must_use]
    pub const fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Basis unit as written
    #[must_use]
    pub const fn unit(&self) -> PaceUnit {
        self.unit
    }

    /// Seconds per kilometer
    #[must_use]
    pub fn seconds_per_km(&self) -> f64 {
        match self.unit {
            PaceUnit::PerKilometer => self.seconds,
            PaceUnit::PerMile => self.seconds * MILES_PER_KM,
        }
    }

    /// Seconds per mile
    #[must_use]
    pub fn seconds_per_mile(&self) -> f64 {
        match self.unit {
            PaceUnit::PerKilometer => self.seconds / MILES_PER_KM,
            PaceUnit::PerMile => self.seconds,
        }
    }

    /// Same pace expressed on another basis
    #[must_use]
    pub fn in_unit(&self, unit: PaceUnit) -> Self {
        let seconds = match unit {
            PaceUnit::PerKilometer => self.seconds_per_km(),
            PaceUnit::PerMile => self.seconds_per_mile(),
        };
        Self { seconds, unit }
    }

    /// Equivalent speed in `out_unit`
    ///
    /// # Errors
    ///
    /// Never fails for a constructed pace; the result is passed through
    /// `Speed::new` validation
    pub fn to_speed(&self, out_unit: SpeedUnit) -> CalcResult<Speed> {
        let value = convert_pace_to_speed(self.seconds, self.unit, out_unit)?;
        Speed::new(value, out_unit)
    }
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_pace(self.seconds, self.unit))
    }
}
