// ABOUTME: Distance value type stored canonically in kilometers
// ABOUTME: Validated constructors from km, meters and miles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

use crate::constants::METERS_PER_KM;
use crate::conversions::{km_to_miles, meters_to_km, miles_to_km};
use crate::errors::{CalcError, CalcResult, Field, ParseFailure};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit a distance was written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    /// Kilometers (`km`, `км`, or no suffix)
    Kilometers,
    /// Meters (`m`, `м`)
    Meters,
    /// Statute miles (`mi`, `mile`, `miles`)
    Miles,
}

impl DistanceUnit {
    /// Short label for display
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Kilometers => "km",
            Self::Meters => "m",
            Self::Miles => "mi",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DistanceUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "km" | "км" => Ok(Self::Kilometers),
            "m" | "м" => Ok(Self::Meters),
            "mi" | "mile" | "miles" => Ok(Self::Miles),
            other => Err(CalcError::parse(
                Field::Distance,
                s,
                ParseFailure::UnknownUnit(other.to_owned()),
            )),
        }
    }
}

/// A strictly positive distance, canonically in kilometers
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Distance {
    km: f64,
}

impl Distance {
    /// Build from kilometers
    ///
    /// # Errors
    ///
    /// Returns `CalcError::Domain` if `km` is zero, negative or not finite
    pub fn from_km(km: f64) -> CalcResult<Self> {
        if !km.is_finite() || km <= 0.0 {
            return Err(CalcError::domain(
                Field::Distance,
                format!("distance must be positive, got {km}"),
            ));
        }
        Ok(Self { km })
    }

    /// Build from meters
    ///
    /// # Errors
    ///
    /// Returns `CalcError::Domain` if the value is not strictly positive
    pub fn from_meters(meters: f64) -> CalcResult<Self> {
        Self::from_km(meters_to_km(meters))
    }

    /// Build from statute miles
    ///
    /// # Errors
    ///
    /// Returns `CalcError::Domain` if the value is not strictly positive
    pub fn from_miles(miles: f64) -> CalcResult<Self> {
        Self::from_km(miles_to_km(miles))
    }

    /// Build from a value in `unit`
    ///
    /// # Errors
    ///
    /// Returns `CalcError::Domain` if the value is not strictly positive
    pub fn from_value(value: f64, unit: DistanceUnit) -> CalcResult<Self> {
        match unit {
            DistanceUnit::Kilometers => Self::from_km(value),
            DistanceUnit::Meters => Self::from_meters(value),
            DistanceUnit::Miles => Self::from_miles(value),
        }
    }

    /// Kilometers
    #[must_use]
    pub const fn km(&self) -> f64 {
        self.km
    }

    /// Meters
    #[must_use]
    pub fn meters(&self) -> f64 {
        self.km * METERS_PER_KM
    }

    /// Statute miles
    #[must_use]
    pub fn miles(&self) -> f64 {
        km_to_miles(self.km)
    }
}
