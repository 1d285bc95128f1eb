// ABOUTME: Engine configuration loaded from environment variables with validation
// ABOUTME: Riegel exponent band and display precision, shared through a global singleton
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

//! Engine Configuration Module
//!
//! All values can be overridden via environment variables with the `RUNCALC_`
//! prefix. Invalid overrides make [`EngineConfig::load`] fail; the global
//! instance then falls back to defaults with a warning.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

mod display;
mod error;
mod riegel;

pub use display::DisplayConfig;
pub use error::ConfigError;
pub use riegel::{
    RiegelConfig, DEFAULT_RIEGEL_EXPONENT, MAX_RIEGEL_EXPONENT, MIN_RIEGEL_EXPONENT,
};

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Widest precision accepted for displayed numbers
const MAX_DECIMALS: usize = 6;

/// Engine configuration container
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Riegel exponent settings
    pub riegel: RiegelConfig,
    /// Display precision
    pub display: DisplayConfig,
}

impl EngineConfig {
    /// Get the global configuration instance
    #[must_use]
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        let riegel = &self.riegel;
        if !riegel.min_exponent.is_finite() || !riegel.max_exponent.is_finite() {
            return Err(ConfigError::ValueOutOfRange(
                "riegel exponent bounds must be finite",
            ));
        }
        if riegel.min_exponent <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "riegel min_exponent must be > 0",
            ));
        }
        if riegel.min_exponent >= riegel.max_exponent {
            return Err(ConfigError::InvalidRange(
                "riegel min_exponent must be below max_exponent",
            ));
        }
        if !riegel.accepts(riegel.default_exponent) {
            return Err(ConfigError::InvalidRange(
                "riegel default_exponent must lie within [min_exponent, max_exponent]",
            ));
        }

        let display = &self.display;
        if !(1..=MAX_DECIMALS).contains(&display.distance_decimals) {
            return Err(ConfigError::ValueOutOfRange(
                "distance_decimals must be between 1 and 6",
            ));
        }
        if !(1..=MAX_DECIMALS).contains(&display.speed_decimals) {
            return Err(ConfigError::ValueOutOfRange(
                "speed_decimals must be between 1 and 6",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "RUNCALC_RIEGEL_DEFAULT_EXPONENT",
            &mut self.riegel.default_exponent,
        )?;
        Self::apply_env_var("RUNCALC_RIEGEL_MIN_EXPONENT", &mut self.riegel.min_exponent)?;
        Self::apply_env_var("RUNCALC_RIEGEL_MAX_EXPONENT", &mut self.riegel.max_exponent)?;

        Self::apply_env_var(
            "RUNCALC_DISTANCE_DECIMALS",
            &mut self.display.distance_decimals,
        )?;
        Self::apply_env_var("RUNCALC_SPEED_DECIMALS", &mut self.display.speed_decimals)?;

        Ok(self)
    }
}
