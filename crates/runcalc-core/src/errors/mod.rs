// ABOUTME: Unified error types for parsing and derivation failures
// ABOUTME: Four error kinds with error codes and a serializable response envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

//! # Unified Error Handling
//!
//! Every parse and derive function returns its value or exactly one
//! [`CalcError`] kind:
//!
//! - `Parse`: the token matches no grammar for its field
//! - `Domain`: the value parsed but is out of range (zero pace, negative HRmax)
//! - `InvalidArity`: wrong number of known values for a derivation
//! - `AmbiguousInput`: the extractor found conflicting values for one field
//!
//! The caller renders the error and the offending token; nothing here retries
//! or keeps state across a failed call.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Field category an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Distance (km, m, mi)
    Distance,
    /// Pace (seconds per km or mile)
    Pace,
    /// Elapsed time
    Time,
    /// Speed (km/h, mph, m/s)
    Speed,
    /// Maximum heart rate
    HeartRate,
    /// Heart rate percentage
    Percentage,
    /// Riegel exponent
    Exponent,
}

impl Field {
    /// Name used in messages and JSON output
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::Pace => "pace",
            Self::Time => "time",
            Self::Speed => "speed",
            Self::HeartRate => "heart_rate",
            Self::Percentage => "percentage",
            Self::Exponent => "exponent",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a token failed to parse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    /// Nothing left after trimming
    #[error("empty input")]
    Empty,
    /// Not a decimal number
    #[error("not a number")]
    InvalidNumber,
    /// A time component contains something other than digits
    #[error("time components must be digits")]
    NonDigitComponent,
    /// Leading, trailing or doubled colon
    #[error("empty time component")]
    EmptyComponent,
    /// More than two colons
    #[error("expected m:ss or h:mm:ss, found {0} colons")]
    TooManyComponents(usize),
    /// Suffix that is not a known unit
    #[error("unrecognized unit '{0}'")]
    UnknownUnit(String),
    /// Value does not fit the canonical representation
    #[error("value too large")]
    Overflow,
    /// Input shape does not match the expected layout
    #[error("expected {0}")]
    Expected(&'static str),
}

/// Which arity rule a derivation rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArityProblem {
    /// Fewer than two of distance, pace and time were given
    #[error("need at least two of distance, pace and time (got {known})")]
    TooFewKnown {
        /// Number of fields that were present
        known: usize,
    },
    /// All three were given, nothing to solve for
    #[error("distance, pace and time were all supplied; nothing to solve for")]
    NothingMissing,
    /// Heart rate zones take one or two percentages
    #[error("expected one or two percentages, got {0}")]
    Percentages(usize),
    /// Riegel prediction without any target distance
    #[error("at least one target distance is required")]
    NoTargets,
}

/// Standard error codes, one per error kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Token does not match the grammar for its field
    #[serde(rename = "PARSE_ERROR")]
    ParseError = 3000,
    /// Value is syntactically valid but out of range
    #[serde(rename = "DOMAIN_ERROR")]
    DomainError = 3100,
    /// Wrong number of known values
    #[serde(rename = "INVALID_ARITY")]
    InvalidArity = 3200,
    /// Conflicting values for the same field
    #[serde(rename = "AMBIGUOUS_INPUT")]
    AmbiguousInput = 3300,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ParseError => "The input could not be read",
            Self::DomainError => "The value is outside the acceptable range",
            Self::InvalidArity => "The wrong number of values was supplied",
            Self::AmbiguousInput => "The input contains conflicting values",
        }
    }
}

/// Unified error type for the calculator core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Token does not match any recognised grammar for its field
    #[error("cannot read {field} from '{token}': {reason}")]
    Parse {
        /// Field being parsed
        field: Field,
        /// Offending token as supplied
        token: String,
        /// Specific failure
        reason: ParseFailure,
    },

    /// Syntactically valid value outside its domain
    #[error("{field} out of range: {message}")]
    Domain {
        /// Field holding the bad value
        field: Field,
        /// Human-readable constraint
        message: String,
    },

    /// Wrong count of known values
    #[error("{0}")]
    InvalidArity(ArityProblem),

    /// Two different values for the same field
    #[error("ambiguous {field}: both '{first}' and '{second}' were supplied")]
    AmbiguousInput {
        /// Field with conflicting values
        field: Field,
        /// First value seen
        first: String,
        /// Conflicting value
        second: String,
    },
}

impl CalcError {
    /// Parse failure for `field` on `token`
    pub fn parse(field: Field, token: impl Into<String>, reason: ParseFailure) -> Self {
        Self::Parse {
            field,
            token: token.into(),
            reason,
        }
    }

    /// Domain failure for `field`
    pub fn domain(field: Field, message: impl Into<String>) -> Self {
        Self::Domain {
            field,
            message: message.into(),
        }
    }

    /// Error code for this kind
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Parse { .. } => ErrorCode::ParseError,
            Self::Domain { .. } => ErrorCode::DomainError,
            Self::InvalidArity(_) => ErrorCode::InvalidArity,
            Self::AmbiguousInput { .. } => ErrorCode::AmbiguousInput,
        }
    }

    /// Field the error refers to, if any
    #[must_use]
    pub const fn field(&self) -> Option<Field> {
        match self {
            Self::Parse { field, .. }
            | Self::Domain { field, .. }
            | Self::AmbiguousInput { field, .. } => Some(*field),
            Self::InvalidArity(_) => None,
        }
    }

    /// Offending token, if the error carries one
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Parse { token, .. } => Some(token),
            Self::AmbiguousInput { second, .. } => Some(second),
            Self::Domain { .. } | Self::InvalidArity(_) => None,
        }
    }
}

impl From<ArityProblem> for CalcError {
    fn from(problem: ArityProblem) -> Self {
        Self::InvalidArity(problem)
    }
}

/// Result type alias for convenience
pub type CalcResult<T> = Result<T, CalcError>;

/// Serializable error envelope for JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Error kind
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Field category, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Field>,
    /// Offending token, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl From<&CalcError> for ErrorResponse {
    fn from(error: &CalcError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code(),
                message: error.to_string(),
                field: error.field(),
                token: error.token().map(str::to_owned),
            },
        }
    }
}
