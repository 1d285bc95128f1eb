// ABOUTME: Speed value type tagged with km/h, mph or m/s
// ABOUTME: Normalises to meters per second and converts to pace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

use crate::conversions::{convert_speed_to_pace, speed_to_mps};
use crate::errors::{CalcError, CalcResult, Field, ParseFailure};
use crate::models::{Pace, PaceUnit};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit a speed is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedUnit {
    /// Kilometers per hour (`kmh`, or no suffix)
    #[default]
    KilometersPerHour,
    /// Miles per hour (`mph`)
    MilesPerHour,
    /// Meters per second (`mps`)
    MetersPerSecond,
}

impl SpeedUnit {
    /// Every unit, in display order
    pub const ALL: [Self; 3] = [
        Self::KilometersPerHour,
        Self::MilesPerHour,
        Self::MetersPerSecond,
    ];

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::KilometersPerHour => "km/h",
            Self::MilesPerHour => "mph",
            Self::MetersPerSecond => "m/s",
        }
    }
}

impl fmt::Display for SpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SpeedUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kmh" | "km/h" => Ok(Self::KilometersPerHour),
            "mph" => Ok(Self::MilesPerHour),
            "mps" | "m/s" => Ok(Self::MetersPerSecond),
            other => Err(CalcError::parse(
                Field::Speed,
                s,
                ParseFailure::UnknownUnit(other.to_owned()),
            )),
        }
    }
}

/// Strictly positive speed
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Speed {
    value: f64,
    unit: SpeedUnit,
}

impl Speed {
    /// Build a speed of `value` in `unit`
    ///
    /// # Errors
    ///
    /// Returns `CalcError::Domain` if `value` is zero, negative or not finite
    pub fn new(value: f64, unit: SpeedUnit) -> CalcResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(CalcError::domain(
                Field::Speed,
                format!("speed must be positive, got {value} {}", unit.label()),
            ));
        }
        Ok(Self { value, unit })
    }

    /// Value in its own unit
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Unit as written
    #[must_use]
    pub const fn unit(&self) -> SpeedUnit {
        self.unit
    }

    /// Canonical meters per second
    #[must_use]
    pub fn meters_per_second(&self) -> f64 {
        speed_to_mps(self.value, self.unit)
    }

    /// Equivalent pace on `pace_unit` basis
    ///
    /// # Errors
    ///
    /// Never fails for a constructed speed; the result is passed through
    /// `Pace::new` validation
    pub fn to_pace(&self, pace_unit: PaceUnit) -> CalcResult<Pace> {
        let seconds = convert_speed_to_pace(self.value, self.unit, pace_unit)?;
        Pace::new(seconds, pace_unit)
    }
}
