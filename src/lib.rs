// ABOUTME: Main library entry point for the runcalc conversational running calculator
// ABOUTME: Re-exports the core and engine crates and provides the shell, logging and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

#![deny(unsafe_code)]

//! # Runcalc
//!
//! A calculator for runners that reads free-form lines such as
//! `dist=10км, pace=4:30`, `196, 72-83` or `10km, 41:30 -> 21.1km` and
//! answers with times, paces, speeds and heart rates.
//!
//! ## Architecture
//!
//! - **`runcalc-core`**: error taxonomy, value types, unit parser, conversions, formatter
//! - **`runcalc-engine`**: solver, Riegel predictor, heart-rate zones, treadmill, token extractor
//! - **shell**: mode enumeration, session state and dispatch
//!
//! ## Example
//!
//! ```rust
//! use runcalc::shell::{Mode, SessionState, Shell};
//!
//! let state = SessionState::default().select(Mode::Calculator);
//! let outcome = Shell::default().dispatch(&state, "5km, pace=4:30");
//! assert_eq!(outcome.render(), "Time: 22:30");
//! ```

pub use runcalc_core::{constants, conversions, errors, formatters, models, parsing};
pub use runcalc_engine::{algorithms, extractor};

/// Environment configuration for the binary
pub mod config;

/// Structured logging setup
pub mod logging;

/// Conversational shell
pub mod shell;
