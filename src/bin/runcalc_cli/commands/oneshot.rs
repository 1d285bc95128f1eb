// ABOUTME: One-shot evaluation of a single line in a fixed mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

use crate::helpers::display::write_outcome;
use anyhow::Result;
use runcalc::shell::{Mode, SessionState, Shell};
use std::io;

/// Evaluate `line` in `mode` and print the outcome
///
/// Returns whether the line produced a result.
pub fn run(shell: &Shell, mode: Mode, line: &str, json: bool) -> Result<bool> {
    let outcome = shell.dispatch(&SessionState::with_mode(mode), line);
    write_outcome(&mut io::stdout().lock(), &outcome, json)?;
    Ok(outcome.is_success())
}
