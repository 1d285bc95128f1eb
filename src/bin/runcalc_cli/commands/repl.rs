// ABOUTME: Interactive session driving SessionState from stdin
// ABOUTME: Slash commands switch modes; any other line is evaluated in the current mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

use crate::helpers::display::{write_message, write_outcome};
use anyhow::Result;
use runcalc::shell::{messages, Mode, SessionState, Shell};
use std::io::{BufRead, Write};
use tracing::debug;

/// A line starting with `/`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlashCommand {
    Select(Mode),
    Back,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Result<SlashCommand, String>> {
    let name = line.strip_prefix('/')?.trim().to_lowercase();
    Some(match name.as_str() {
        "back" | "start" | "menu" => Ok(SlashCommand::Back),
        "help" => Ok(SlashCommand::Help),
        "quit" | "exit" => Ok(SlashCommand::Quit),
        other => other
            .parse::<Mode>()
            .map(SlashCommand::Select)
            .map_err(|e| e.to_string()),
    })
}

/// Read lines from `input` until EOF or `/quit`
pub fn run<R: BufRead, W: Write>(shell: &Shell, input: R, out: &mut W, json: bool) -> Result<()> {
    let mut state = SessionState::default();
    write_message(out, &messages::welcome(), json)?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_command(line) {
            Some(Ok(SlashCommand::Quit)) => break,
            Some(Ok(SlashCommand::Back)) => {
                state = state.back();
                write_message(out, &messages::welcome(), json)?;
            }
            Some(Ok(SlashCommand::Help)) => write_message(out, &messages::help(), json)?,
            Some(Ok(SlashCommand::Select(mode))) => {
                state = state.select(mode);
                debug!(%mode, "mode selected");
                write_message(out, &format!("{}\n{}", mode.title(), mode.prompt()), json)?;
            }
            Some(Err(message)) => write_message(out, &message, json)?,
            None => write_outcome(out, &shell.dispatch(&state, line), json)?,
        }
        out.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(script: &str) -> String {
        let mut out = Vec::new();
        run(&Shell::default(), script.as_bytes(), &mut out, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_mode_switching() {
        let transcript = session("/calc\n5km, pace=4:30\n/hr\n196, 72-83\n/quit\n10km\n");
        assert!(transcript.contains("Time: 22:30"));
        assert!(transcript.contains("Range: 141-163 bpm"));
    }

    #[test]
    fn test_lines_without_mode_show_menu() {
        let transcript = session("/riegel\n/back\n10km, 40:00 -> 21.1km\n");
        assert!(!transcript.contains("Prediction"));
        assert_eq!(transcript.matches("Choose a mode").count(), 3);
    }

    #[test]
    fn test_unknown_command() {
        let transcript = session("/swim\n");
        assert!(transcript.contains("unknown mode 'swim'"));
    }
}
