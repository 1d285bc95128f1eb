// ABOUTME: Core types and unit handling for the runcalc running calculator
// ABOUTME: Foundation crate with error taxonomy, value types, parser, conversions and formatters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

#![deny(unsafe_code)]

//! # Runcalc Core
//!
//! Foundation crate for the runcalc calculator. It turns free-form unit tokens
//! (`10км`, `1000m`, `4:30/mi`, `12.5kmh`) into canonical values and back.
//!
//! Canonical units:
//! - distance: kilometers
//! - time and pace: seconds
//! - speed: meters per second
//!
//! ## Modules
//!
//! - **errors**: `CalcError` with the four error kinds, `ErrorCode`, `ErrorResponse`
//! - **constants**: unit conversion factors
//! - **models**: `Distance`, `Duration`, `Pace`, `Speed` and their unit enums
//! - **parsing**: token parsers for each value type
//! - **conversions**: pure unit conversions (km/mi, speed/pace)
//! - **formatters**: canonical values back to display strings

/// Error taxonomy shared by every parse and derivation function
pub mod errors;

/// Unit conversion constants
pub mod constants;

/// Value types with validated constructors
pub mod models;

/// Unit parser for distance, duration, pace and speed tokens
pub mod parsing;

/// Pure unit conversion functions
pub mod conversions;

/// Display formatting for durations, paces, distances and speeds
pub mod formatters;

pub use errors::{ArityProblem, CalcError, CalcResult, ErrorCode, Field, ParseFailure};
pub use models::{Distance, DistanceUnit, Duration, Pace, PaceUnit, Speed, SpeedUnit};
