// ABOUTME: Explicit per-conversation session state passed into every dispatch
// ABOUTME: Holds only the selected mode; transitions return a new value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

use super::Mode;
use serde::{Deserialize, Serialize};

/// Which flow a conversation is in
///
/// The engine never reads this; the caller owns it and hands it to
/// [`super::Shell::dispatch`] with each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionState {
    mode: Option<Mode>,
}

impl SessionState {
    /// Session already inside `mode`
    #[must_use]
    pub const fn with_mode(mode: Mode) -> Self {
        Self { mode: Some(mode) }
    }

    /// Switch to `mode`
    #[must_use]
    pub const fn select(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Return to the main menu
    #[must_use]
    pub const fn back(mut self) -> Self {
        self.mode = None;
        self
    }

    /// Selected mode, if any
    #[must_use]
    pub const fn mode(&self) -> Option<Mode> {
        self.mode
    }
}
