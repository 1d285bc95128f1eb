// ABOUTME: Treadmill conversions - belt speed to running pace and pace back to belt speed
// ABOUTME: Speeds report km/h, mph and m/s; paces report per km and per mile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

use crate::algorithms::solver::describe_pace;
use runcalc_core::formatters::format_speed;
use runcalc_core::{CalcResult, Pace, PaceUnit, Speed, SpeedUnit};
use serde::Serialize;
use tracing::debug;

/// What the runner read off the treadmill
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TreadmillField {
    /// Belt speed
    Speed(Speed),
    /// Target pace
    Pace(Pace),
}

/// Converted treadmill value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreadmillReading {
    /// Pace for a belt speed
    Pace {
        /// Input speed
        speed: Speed,
        /// Seconds per kilometer
        per_km: f64,
        /// Seconds per mile
        per_mile: f64,
    },
    /// Belt speed for a pace
    Speed {
        /// Input pace
        pace: Pace,
        /// Kilometers per hour
        kmh: f64,
        /// Miles per hour
        mph: f64,
        /// Meters per second
        mps: f64,
    },
}

impl TreadmillReading {
    /// Text rendering with `speed_decimals` for speeds
    #[must_use]
    pub fn describe(&self, speed_decimals: usize) -> String {
        match self {
            Self::Pace { per_km, .. } => format!("Pace: {}", describe_pace(*per_km)),
            Self::Speed { kmh, mph, mps, .. } => format!(
                "Speed: {} | {} | {}",
                format_speed(*kmh, SpeedUnit::KilometersPerHour, speed_decimals),
                format_speed(*mph, SpeedUnit::MilesPerHour, speed_decimals),
                format_speed(*mps, SpeedUnit::MetersPerSecond, speed_decimals)
            ),
        }
    }
}

/// Convert a speed to paces or a pace to speeds
///
/// # Errors
///
/// Propagates domain errors from the conversion library; a constructed
/// `Speed` or `Pace` is always positive so these do not occur in practice
pub fn convert(field: TreadmillField) -> CalcResult<TreadmillReading> {
    let reading = match field {
        TreadmillField::Speed(speed) => TreadmillReading::Pace {
            speed,
            per_km: speed.to_pace(PaceUnit::PerKilometer)?.seconds(),
            per_mile: speed.to_pace(PaceUnit::PerMile)?.seconds(),
        },
        TreadmillField::Pace(pace) => TreadmillReading::Speed {
            pace,
            kmh: pace.to_speed(SpeedUnit::KilometersPerHour)?.value(),
            mph: pace.to_speed(SpeedUnit::MilesPerHour)?.value(),
            mps: pace.to_speed(SpeedUnit::MetersPerSecond)?.value(),
        },
    };
    debug!(?reading, "treadmill conversion");
    Ok(reading)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_to_pace() {
        let speed = Speed::new(12.5, SpeedUnit::KilometersPerHour).unwrap();
        let reading = convert(TreadmillField::Speed(speed)).unwrap();
        let TreadmillReading::Pace { per_km, per_mile, .. } = reading else {
            panic!("expected pace reading");
        };
        assert!((per_km - 288.0).abs() < 1e-9);
        assert!((per_mile - 463.491_072).abs() < 1e-6);
        assert_eq!(reading.describe(2), "Pace: 4:48/km | 7:43/mi");
    }

    #[test]
    fn test_pace_to_speed() {
        let pace = Pace::new(288.0, PaceUnit::PerKilometer).unwrap();
        let reading = convert(TreadmillField::Pace(pace)).unwrap();
        assert_eq!(
            reading.describe(2),
            "Speed: 12.50 km/h | 7.77 mph | 3.47 m/s"
        );
    }

    #[test]
    fn test_per_mile_pace_to_speed() {
        // 7:30/mi is 8 mph
        let pace = Pace::new(450.0, PaceUnit::PerMile).unwrap();
        let TreadmillReading::Speed { mph, kmh, .. } = convert(TreadmillField::Pace(pace)).unwrap()
        else {
            panic!("expected speed reading");
        };
        assert!((mph - 8.0).abs() < 1e-9);
        assert!((kmh - 12.874_752).abs() < 1e-6);
    }
}
