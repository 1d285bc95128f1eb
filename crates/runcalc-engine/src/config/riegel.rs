// ABOUTME: Riegel prediction settings - default fatigue exponent and the accepted override band
// ABOUTME: Decides which exponent a prediction actually uses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Exponent used when the caller supplies none
pub const DEFAULT_RIEGEL_EXPONENT: f64 = 1.06;

/// Lowest override accepted
pub const MIN_RIEGEL_EXPONENT: f64 = 0.9;

/// Highest override accepted
pub const MAX_RIEGEL_EXPONENT: f64 = 1.2;

/// Riegel exponent configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiegelConfig {
    /// Exponent used without a valid override
    pub default_exponent: f64,
    /// Inclusive lower bound for overrides
    pub min_exponent: f64,
    /// Inclusive upper bound for overrides
    pub max_exponent: f64,
}

impl Default for RiegelConfig {
    fn default() -> Self {
        Self {
            default_exponent: DEFAULT_RIEGEL_EXPONENT,
            min_exponent: MIN_RIEGEL_EXPONENT,
            max_exponent: MAX_RIEGEL_EXPONENT,
        }
    }
}

impl RiegelConfig {
    /// Whether `exponent` lies inside the accepted band
    #[must_use]
    pub fn accepts(&self, exponent: f64) -> bool {
        exponent.is_finite() && (self.min_exponent..=self.max_exponent).contains(&exponent)
    }

    /// Exponent to use for a prediction
    ///
    /// An override outside the band falls back to the default without failing
    /// the prediction.
    #[must_use]
    pub fn resolve(&self, requested: Option<f64>) -> f64 {
        match requested {
            Some(exponent) if self.accepts(exponent) => exponent,
            Some(exponent) => {
                warn!(
                    exponent,
                    min = self.min_exponent,
                    max = self.max_exponent,
                    "Riegel exponent outside accepted band, using default {}",
                    self.default_exponent
                );
                self.default_exponent
            }
            None => self.default_exponent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_band_edges() {
        let config = RiegelConfig::default();
        assert_eq!(config.resolve(None), 1.06);
        assert_eq!(config.resolve(Some(0.9)), 0.9);
        assert_eq!(config.resolve(Some(1.2)), 1.2);
        assert_eq!(config.resolve(Some(1.07)), 1.07);
    }

    #[test]
    fn test_out_of_band_falls_back_silently() {
        let config = RiegelConfig::default();
        assert_eq!(config.resolve(Some(1.5)), 1.06);
        assert_eq!(config.resolve(Some(0.5)), 1.06);
        assert_eq!(config.resolve(Some(f64::NAN)), 1.06);
    }
}
