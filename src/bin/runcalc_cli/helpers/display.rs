// ABOUTME: Output formatting helpers for runcalc-cli
// ABOUTME: Plain text or one JSON document per outcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

use anyhow::Result;
use runcalc::shell::Outcome;
use serde::Serialize;
use std::io::Write;

/// Batch entry pairing an input line with its outcome
#[derive(Serialize)]
pub struct LineOutcome<'a> {
    /// 1-based line number in the input file
    pub line_number: usize,
    /// Input as read
    pub input: &'a str,
    /// Shell answer
    pub outcome: Outcome,
}

/// Write one outcome as text or JSON
pub fn write_outcome<W: Write>(out: &mut W, outcome: &Outcome, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(outcome)?)?;
    } else {
        writeln!(out, "{}", outcome.render())?;
    }
    Ok(())
}

/// Write a plain message, wrapped as `{"message": ...}` in JSON mode
pub fn write_message<W: Write>(out: &mut W, message: &str, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::json!({ "message": message }))?;
    } else {
        writeln!(out, "{message}")?;
    }
    Ok(())
}
