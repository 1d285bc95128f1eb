// ABOUTME: Whole-second duration value type
// ABOUTME: Built from m:ss, h:mm:ss or a bare second count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

use crate::formatters::format_duration;
use serde::Serialize;
use std::fmt;

/// Elapsed time in whole seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Duration {
    seconds: u64,
}

impl Duration {
    /// Build from a second count
    #[must_use]
    pub const fn from_seconds(seconds: u64) -> Self {
        Self { seconds }
    }

    /// Whole seconds
    #[must_use]
    pub const fn seconds(&self) -> u64 {
        self.seconds
    }

    /// Seconds as a float for arithmetic
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        self.seconds as f64
    }

    /// True for a zero-length duration
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.seconds == 0
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_duration(self.as_f64()))
    }
}
