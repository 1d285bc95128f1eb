// ABOUTME: runcalc-cli - command-line front end for the running calculator
// ABOUTME: One-shot mode commands, an interactive session and parallel batch evaluation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors
//!
//! Usage:
//! ```bash
//! # Heart rate range at 72-83% of HRmax 196
//! runcalc-cli hr "196, 72-83"
//!
//! # Finishing time for 10 km at 7:30/mi
//! runcalc-cli pace "10km, 7:30/mi"
//!
//! # Any two of distance, pace, time
//! runcalc-cli calc "dist=10км, pace=3:45"
//!
//! # Riegel prediction with an exponent override
//! runcalc-cli riegel "10km, 41:30 -> 21.1km, 42.195km, exp=1.07"
//!
//! # Treadmill conversions
//! runcalc-cli tread "speed=12.5kmh"
//!
//! # Interactive session (/hr, /pace, /calc, /riegel, /tread, /back, /help, /quit)
//! runcalc-cli repl
//!
//! # Evaluate every line of a file in parallel, JSON output
//! runcalc-cli --json batch --mode calc lines.txt
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use runcalc::config::AppConfig;
use runcalc::shell::{Mode, Shell};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "runcalc-cli",
    version,
    about = "Running calculator",
    long_about = "Heart-rate zones, distance/pace/time, Riegel predictions and treadmill conversions from free-form input."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Free-form input words, joined with spaces
#[derive(clap::Args)]
struct LineArgs {
    /// Input line, e.g. "10km, 41:30 -> 21.1km"
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    input: Vec<String>,
}

impl LineArgs {
    fn line(&self) -> String {
        self.input.join(" ")
    }
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Heart rate from HRmax and a percentage or range
    Hr(LineArgs),

    /// Finishing time from distance and pace
    Pace(LineArgs),

    /// Solve the missing one of distance, pace and time
    Calc(LineArgs),

    /// Predict race times with the Riegel formula
    Riegel(LineArgs),

    /// Convert treadmill speed to pace or pace to speed
    Tread(LineArgs),

    /// Interactive session reading lines from stdin
    Repl,

    /// Evaluate every line of a file in one mode, in parallel
    Batch {
        /// Mode for every line (hr, pace, calc, riegel, tread)
        #[arg(long)]
        mode: Mode,

        /// File with one input per line; blank lines and lines starting with '#' are skipped
        file: PathBuf,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = AppConfig::from_env()?;
    let logging = if cli.verbose {
        config.logging.clone().verbose()
    } else {
        config.logging.clone()
    };
    logging.init()?;
    config.log_summary();
    info!("runcalc-cli");

    let shell = Shell::new(config.engine);

    let all_succeeded = match cli.command {
        Command::Hr(args) => {
            commands::oneshot::run(&shell, Mode::HeartRate, &args.line(), cli.json)?
        }
        Command::Pace(args) => {
            commands::oneshot::run(&shell, Mode::TimeByPace, &args.line(), cli.json)?
        }
        Command::Calc(args) => {
            commands::oneshot::run(&shell, Mode::Calculator, &args.line(), cli.json)?
        }
        Command::Riegel(args) => {
            commands::oneshot::run(&shell, Mode::Riegel, &args.line(), cli.json)?
        }
        Command::Tread(args) => {
            commands::oneshot::run(&shell, Mode::Treadmill, &args.line(), cli.json)?
        }
        Command::Repl => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            commands::repl::run(&shell, stdin.lock(), &mut stdout, cli.json)?;
            true
        }
        Command::Batch { mode, file } => commands::batch::run(&shell, mode, &file, cli.json)?,
    };

    Ok(if all_succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
