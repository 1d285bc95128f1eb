// ABOUTME: Environment configuration for the runcalc binary
// ABOUTME: Combines validated engine settings with logging settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

//! Environment-based configuration

use crate::logging::LoggingConfig;
use anyhow::{Context, Result};
use runcalc_engine::config::EngineConfig;
use tracing::info;

/// Everything the binary reads from its environment
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Riegel exponent band and display precision
    pub engine: EngineConfig,
    /// Log level and format
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Unlike [`EngineConfig::global`], an invalid engine override is an error
    /// here so the binary can report it at start-up.
    ///
    /// # Errors
    ///
    /// Returns an error if a `RUNCALC_*` variable is malformed or fails validation
    pub fn from_env() -> Result<Self> {
        let engine = EngineConfig::load().context("Invalid RUNCALC_* configuration")?;
        Ok(Self {
            engine,
            logging: LoggingConfig::from_env(),
        })
    }

    /// Log a configuration summary
    pub fn log_summary(&self) {
        info!(
            riegel.default_exponent = self.engine.riegel.default_exponent,
            riegel.min_exponent = self.engine.riegel.min_exponent,
            riegel.max_exponent = self.engine.riegel.max_exponent,
            display.distance_decimals = self.engine.display.distance_decimals,
            display.speed_decimals = self.engine.display.speed_decimals,
            "Configuration loaded"
        );
    }
}
