// ABOUTME: Configuration module for the calculator shell
// ABOUTME: Aggregates engine settings and logging settings read from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

/// Environment-based application configuration
pub mod environment;

pub use environment::AppConfig;
