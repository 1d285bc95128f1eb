// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit factors plus the suffix tables recognised by the unit parser
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

//! Constants module

/// Unit conversion factors
pub mod units;

pub use units::*;

/// Unit suffixes recognised by the parser.
///
/// Every table is ordered longest-suffix-first so that `mi` is tried before
/// `m` and `/mile` before `/mi`.
pub mod suffixes {
    use crate::models::{DistanceUnit, PaceUnit, SpeedUnit};

    /// Distance suffixes (already lowercased)
    pub const DISTANCE: &[(&str, DistanceUnit)] = &[
        ("miles", DistanceUnit::Miles),
        ("mile", DistanceUnit::Miles),
        ("km", DistanceUnit::Kilometers),
        ("км", DistanceUnit::Kilometers),
        ("mi", DistanceUnit::Miles),
        ("m", DistanceUnit::Meters),
        ("м", DistanceUnit::Meters),
    ];

    /// Pace basis suffixes
    pub const PACE: &[(&str, PaceUnit)] = &[
        ("/mile", PaceUnit::PerMile),
        ("/km", PaceUnit::PerKilometer),
        ("/км", PaceUnit::PerKilometer),
        ("/mi", PaceUnit::PerMile),
    ];

    /// Speed suffixes
    pub const SPEED: &[(&str, SpeedUnit)] = &[
        ("kmh", SpeedUnit::KilometersPerHour),
        ("mph", SpeedUnit::MilesPerHour),
        ("mps", SpeedUnit::MetersPerSecond),
    ];

    /// Keywords that mark an unlabelled `m:ss` token as a pace
    pub const PACE_KEYWORDS: &[&str] = &["pace", "темп"];
}
