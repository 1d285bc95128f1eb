// ABOUTME: Calculator flows the shell can be switched into
// ABOUTME: Each mode names the pure engine function that handles its lines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Active calculator flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// `HRmax, percent[-percent]` to beats per minute
    HeartRate,
    /// `distance, pace` to finishing time
    TimeByPace,
    /// Any two of distance, pace and time to the third
    Calculator,
    /// Known race to predicted race times
    Riegel,
    /// Treadmill speed to pace or pace to speed
    Treadmill,
}

impl Mode {
    /// Every mode, in menu order
    pub const ALL: [Self; 5] = [
        Self::HeartRate,
        Self::TimeByPace,
        Self::Calculator,
        Self::Riegel,
        Self::Treadmill,
    ];

    /// Short name used on the command line and after `/` in the REPL
    #[must_use]
    pub const fn command(&self) -> &'static str {
        match self {
            Self::HeartRate => "hr",
            Self::TimeByPace => "pace",
            Self::Calculator => "calc",
            Self::Riegel => "riegel",
            Self::Treadmill => "tread",
        }
    }

    /// Menu title
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::HeartRate => "Heart rate by %HRmax",
            Self::TimeByPace => "Time by pace",
            Self::Calculator => "Distance / pace / time calculator",
            Self::Riegel => "Riegel race prediction",
            Self::Treadmill => "Treadmill speed <-> pace",
        }
    }

    /// Input format shown when the mode is selected or a line is rejected
    #[must_use]
    pub const fn prompt(&self) -> &'static str {
        match self {
            Self::HeartRate => "Enter HRmax and a percentage or range, e.g. 196, 72-83",
            Self::TimeByPace => "Enter distance and pace, e.g. 1000m, 4:00 or 10km, 7:30/mi",
            Self::Calculator => {
                "Enter any two of distance, pace, time, e.g. dist=10km, pace=4:30 or 5km 22:30"
            }
            Self::Riegel => {
                "Enter a known race and target(s), e.g. 10km, 41:30 -> 21.1km, exp=1.07"
            }
            Self::Treadmill => {
                "Enter speed=12.5kmh | 7.5mph | 3.5mps or pace=4:48/km | 7:30/mi"
            }
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

/// Name that matches no mode
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode '{0}' (expected hr, pace, calc, riegel or tread)")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().trim_start_matches('/').to_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.command() == name)
            .ok_or_else(|| UnknownMode(s.trim().to_owned()))
    }
}
