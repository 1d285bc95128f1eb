// ABOUTME: Batch evaluation of an input file, one independent request per line
// ABOUTME: Lines are evaluated in parallel with rayon and printed in input order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

use crate::helpers::display::{write_outcome, LineOutcome};
use anyhow::{Context, Result};
use rayon::prelude::*;
use runcalc::shell::{Mode, SessionState, Shell};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

/// Evaluate every line of `path` in `mode`
///
/// Returns whether every line produced a result.
pub fn run(shell: &Shell, mode: Mode, path: &Path, json: bool) -> Result<bool> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read batch file {}", path.display()))?;

    let state = SessionState::with_mode(mode);
    let lines: Vec<(usize, &str)> = contents
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .collect();

    let results: Vec<LineOutcome<'_>> = lines
        .par_iter()
        .map(|&(line_number, input)| LineOutcome {
            line_number,
            input,
            outcome: shell.dispatch(&state, input),
        })
        .collect();

    let failures = results.iter().filter(|r| !r.outcome.is_success()).count();
    info!(%mode, lines = results.len(), failures, "batch evaluated");

    let mut out = io::stdout().lock();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&results)?)?;
    } else {
        for result in &results {
            write!(out, "{}: {} => ", result.line_number, result.input)?;
            write_outcome(&mut out, &result.outcome, false)?;
        }
    }
    Ok(failures == 0)
}
