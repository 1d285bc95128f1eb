// ABOUTME: Display precision settings for distances and speeds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

use serde::{Deserialize, Serialize};

/// Decimal places used when rendering results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Decimals for kilometers and miles
    pub distance_decimals: usize,
    /// Decimals for km/h, mph and m/s
    pub speed_decimals: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            distance_decimals: 3,
            speed_decimals: 2,
        }
    }
}
