// ABOUTME: Thin adapter from (session state, input line) to the matching engine function
// ABOUTME: Produces a serializable outcome carrying either a result or a typed error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

use super::{messages, Mode, SessionState};
use runcalc_core::errors::{ErrorResponse, ErrorResponseDetails};
use runcalc_core::CalcResult;
use runcalc_engine::algorithms::treadmill;
use runcalc_engine::config::EngineConfig;
use runcalc_engine::{
    extract_calc_query, extract_heart_rate, extract_pair, extract_riegel, extract_treadmill,
    solve_missing_with, HeartRateZone, RiegelPrediction, RiegelPredictor, Solution,
    TreadmillReading,
};
use serde::Serialize;
use std::fmt::Write;
use tracing::debug;

/// Typed result of one flow
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "flow", content = "result", rename_all = "snake_case")]
pub enum Evaluation {
    /// Heart-rate zone
    HeartRate(HeartRateZone),
    /// Finishing time from distance and pace
    TimeByPace(Solution),
    /// Solved missing parameter
    Calculator(Solution),
    /// One prediction per target
    Riegel(Vec<RiegelPrediction>),
    /// Treadmill conversion
    Treadmill(TreadmillReading),
}

/// What the shell answers to one line
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// No mode selected; the menu is shown
    Welcome {
        /// Menu text
        text: String,
    },
    /// The line was evaluated
    Success {
        /// Mode that handled the line
        mode: Mode,
        /// Structured result
        evaluation: Evaluation,
        /// Rendered result
        text: String,
    },
    /// The line was rejected
    Failure {
        /// Mode that rejected the line
        mode: Mode,
        /// Error kind, message and offending token
        error: ErrorResponseDetails,
        /// Rendered error with the expected format
        text: String,
    },
}

impl Outcome {
    /// Text to show the user
    #[must_use]
    pub fn render(&self) -> &str {
        match self {
            Self::Welcome { text } | Self::Success { text, .. } | Self::Failure { text, .. } => {
                text.as_str()
            }
        }
    }

    /// Whether the line produced a result
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Stateless dispatcher holding only read-only configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct Shell {
    config: EngineConfig,
}

impl Shell {
    /// Shell using `config`
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Shell using the global engine configuration
    #[must_use]
    pub fn from_global() -> Self {
        Self::new(*EngineConfig::global())
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate `line` in the mode held by `state`
    ///
    /// Without a selected mode the welcome menu is returned and nothing is
    /// computed.
    #[must_use]
    pub fn dispatch(&self, state: &SessionState, line: &str) -> Outcome {
        let Some(mode) = state.mode() else {
            return Outcome::Welcome {
                text: messages::welcome(),
            };
        };

        match self.evaluate(mode, line) {
            Ok(evaluation) => {
                let text = self.describe(&evaluation);
                Outcome::Success {
                    mode,
                    evaluation,
                    text,
                }
            }
            Err(error) => {
                debug!(%mode, line, %error, "line rejected");
                Outcome::Failure {
                    mode,
                    text: format!("Error: {error}\n{}", mode.prompt()),
                    error: ErrorResponse::from(&error).error,
                }
            }
        }
    }

    /// Run the engine function for `mode` on `line`
    ///
    /// # Errors
    ///
    /// Returns the parse, domain, arity or ambiguity error of the flow
    pub fn evaluate(&self, mode: Mode, line: &str) -> CalcResult<Evaluation> {
        let display = &self.config.display;
        match mode {
            Mode::HeartRate => Ok(Evaluation::HeartRate(extract_heart_rate(line)?.zone())),
            Mode::TimeByPace => {
                solve_missing_with(extract_pair(line)?, display).map(Evaluation::TimeByPace)
            }
            Mode::Calculator => {
                solve_missing_with(extract_calc_query(line)?, display).map(Evaluation::Calculator)
            }
            Mode::Riegel => {
                let query = extract_riegel(line)?.into_query();
                RiegelPredictor::new(self.config.riegel)
                    .predict(&query)
                    .map(Evaluation::Riegel)
            }
            Mode::Treadmill => {
                treadmill::convert(extract_treadmill(line)?).map(Evaluation::Treadmill)
            }
        }
    }

    /// Render an evaluation with this shell's display settings
    #[must_use]
    pub fn describe(&self, evaluation: &Evaluation) -> String {
        let display = &self.config.display;
        match evaluation {
            Evaluation::HeartRate(zone) => zone.describe(),
            Evaluation::TimeByPace(solution) | Evaluation::Calculator(solution) => {
                solution.formatted.clone()
            }
            Evaluation::Riegel(predictions) => {
                let exponent = predictions
                    .first()
                    .map_or(self.config.riegel.default_exponent, |p| p.exponent);
                let mut text = format!("Prediction (exp={exponent:.2}):");
                for prediction in predictions {
                    let _ = write!(
                        text,
                        "\n  {}",
                        prediction.describe(display.distance_decimals)
                    );
                }
                text
            }
            Evaluation::Treadmill(reading) => reading.describe(display.speed_decimals),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runcalc_core::ErrorCode;

    #[test]
    fn test_no_mode_shows_menu() {
        let outcome = Shell::default().dispatch(&SessionState::default(), "10km 40:00");
        assert!(matches!(outcome, Outcome::Welcome { .. }));
    }

    #[test]
    fn test_failure_carries_code_and_prompt() {
        let state = SessionState::with_mode(Mode::TimeByPace);
        let outcome = Shell::default().dispatch(&state, "1000m 4:00");
        let Outcome::Failure { error, text, .. } = outcome else {
            panic!("expected failure");
        };
        assert_eq!(error.code, ErrorCode::ParseError);
        assert!(text.ends_with(Mode::TimeByPace.prompt()));
    }

    #[test]
    fn test_time_by_pace() {
        let state = SessionState::with_mode(Mode::TimeByPace);
        let outcome = Shell::default().dispatch(&state, "1000м, 4:00");
        assert_eq!(outcome.render(), "Time: 4:00");
    }
}
