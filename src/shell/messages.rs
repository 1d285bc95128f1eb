// ABOUTME: Fixed text for the welcome menu and help screen
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

use super::Mode;
use std::fmt::Write;

/// Main menu listing each mode and its command
#[must_use]
pub fn welcome() -> String {
    let mut text = String::from("Running calculator. Choose a mode:\n");
    for mode in Mode::ALL {
        let _ = writeln!(text, "  /{:<7} {}", mode.command(), mode.title());
    }
    text.push_str("Type /help for input formats.");
    text
}

/// Input format of every mode
#[must_use]
pub fn help() -> String {
    let mut text = String::from("Input formats:\n");
    for mode in Mode::ALL {
        let _ = writeln!(text, "  {}: {}", mode.title(), mode.prompt());
    }
    text.push_str(
        "Distances: km, км, m, м, mi, mile(s); no unit means km.\n\
         Paces: m:ss with /km, /км, /mi, /mile; no unit means per km.\n\
         Times: ss, m:ss or h:mm:ss. Decimals may use '.' or ','.\n\
         /back returns to this menu, /quit exits.",
    );
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_lists_every_mode() {
        let menu = welcome();
        for mode in Mode::ALL {
            assert!(menu.contains(&format!("/{}", mode.command())));
        }
        assert!(help().contains("h:mm:ss"));
    }
}
