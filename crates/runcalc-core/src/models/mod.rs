// ABOUTME: Value types for distances, durations, paces and speeds
// ABOUTME: Validated constructors keep every instance in its canonical, positive form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

//! Value types. None of them has identity or mutates after construction.

/// Distance in kilometers
pub mod distance;

/// Whole-second durations
pub mod duration;

/// Pace tagged with a per-km or per-mile basis
pub mod pace;

/// Speed tagged with km/h, mph or m/s
pub mod speed;

pub use distance::{Distance, DistanceUnit};
pub use duration::Duration;
pub use pace::{Pace, PaceUnit};
pub use speed::{Speed, SpeedUnit};
