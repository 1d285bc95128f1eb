// ABOUTME: Token extractor splitting free-form input lines into named and positional fields
// ABOUTME: Calculator, time-by-pace, Riegel, heart-rate and treadmill line layouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

//! Token Extractor
//!
//! Calculator lines are resolved in a fixed order:
//!
//! 1. `;` becomes `,` and `→` becomes `->`.
//! 2. Named fields (`dist=`, `distance=`, `дист=`, `pace=`, `темп=`,
//!    `time=`, `время=`, `t=`) are read first, case-insensitively. A
//!    `key:` label is read the same as `key=`.
//! 3. Categories still unresolved are inferred from the remaining tokens:
//!    a number or a token ending in a distance unit is a distance, an `m:ss`
//!    token with a `/unit` or a pace keyword is a pace, any other `m:ss`
//!    token is a time. Tokens without a digit are never candidates.
//! 4. A positional token never overwrites a named field. Two different
//!    values for one category at the same level are ambiguous.

use crate::algorithms::{CalcQuery, HeartRateQuery, RiegelQuery, TreadmillField};
use regex::Regex;
use runcalc_core::constants::suffixes;
use runcalc_core::parsing::{
    parse_distance, parse_duration, parse_number, parse_pace, parse_speed,
};
use runcalc_core::{
    ArityProblem, CalcError, CalcResult, Distance, Duration, Field, ParseFailure,
};
use serde::Serialize;
use std::sync::LazyLock;
use tracing::debug;

static NAMED_FIELD: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: dist=10km, Pace = 4:30/km, время=45:00, t=1:02:03
    Regex::new(r"(?i)^(distance|dist|дист|pace|темп|time|время|t)\s*=\s*(.*)$").ok()
});

static EXPONENT_FIELD: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: exp=1.07, EXP = 1.1
    Regex::new(r"(?i)^exp\s*=\s*(.*)$").ok()
});

/// Raw, unparsed field substrings found in a calculator line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedFields {
    /// Distance token, e.g. `10км`
    pub distance: Option<String>,
    /// Pace token, e.g. `4:30/km`
    pub pace: Option<String>,
    /// Time token, e.g. `45:00`
    pub time: Option<String>,
}

impl ExtractedFields {
    /// Parse every present field into a solver query
    ///
    /// # Errors
    ///
    /// Returns the first parse or domain error among the present fields
    pub fn into_query(&self) -> CalcResult<CalcQuery> {
        Ok(CalcQuery {
            distance: self.distance.as_deref().map(parse_distance).transpose()?,
            pace: self.pace.as_deref().map(parse_pace).transpose()?,
            time: self.time.as_deref().map(parse_duration).transpose()?,
        })
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<String> {
        match slot {
            Slot::Distance => &mut self.distance,
            Slot::Pace => &mut self.pace,
            Slot::Time => &mut self.time,
        }
    }

    fn slot(&self, slot: Slot) -> Option<&String> {
        match slot {
            Slot::Distance => self.distance.as_ref(),
            Slot::Pace => self.pace.as_ref(),
            Slot::Time => self.time.as_ref(),
        }
    }

    fn assign(&mut self, slot: Slot, value: String) -> CalcResult<()> {
        let target = self.slot_mut(slot);
        if let Some(existing) = target.as_ref() {
            if same_value(existing, &value) {
                return Ok(());
            }
            return Err(CalcError::AmbiguousInput {
                field: slot.field(),
                first: existing.clone(),
                second: value,
            });
        }
        *target = Some(value);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Distance,
    Pace,
    Time,
}

impl Slot {
    const ALL: [Self; 3] = [Self::Distance, Self::Pace, Self::Time];

    const fn field(self) -> Field {
        match self {
            Self::Distance => Field::Distance,
            Self::Pace => Field::Pace,
            Self::Time => Field::Time,
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "distance" | "dist" | "дист" => Some(Self::Distance),
            "pace" | "темп" => Some(Self::Pace),
            "time" | "время" | "t" => Some(Self::Time),
            _ => None,
        }
    }
}

fn compact_lower(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

fn same_value(a: &str, b: &str) -> bool {
    compact_lower(a) == compact_lower(b)
}

fn normalize(line: &str) -> String {
    line.replace(';', ",").replace('→', "->")
}

fn is_unit_word(word: &str) -> bool {
    suffixes::DISTANCE.iter().any(|(suffix, _)| *suffix == word)
        || suffixes::PACE.iter().any(|(suffix, _)| *suffix == word)
        || suffixes::SPEED.iter().any(|(suffix, _)| *suffix == word)
}

fn should_glue(previous: &str, piece: &str) -> bool {
    let previous_lower = previous.to_lowercase();
    let ends_with_digit = previous.ends_with(|c: char| c.is_ascii_digit());
    previous.ends_with('=')
        || piece.starts_with('=')
        || suffixes::PACE_KEYWORDS.contains(&previous_lower.as_str())
        || (ends_with_digit && piece.starts_with('/'))
        || ((ends_with_digit || previous.ends_with('/')) && is_unit_word(&piece.to_lowercase()))
}

/// Rewrite a `pace:` or `time:4:30` label into its `key=` form
fn relabel(piece: &str) -> String {
    match piece.split_once(':') {
        Some((key, value)) if Slot::from_key(key).is_some() => format!("{key}={value}"),
        _ => piece.to_owned(),
    }
}

/// Split a line into field tokens
///
/// Commas separate chunks; inside a chunk whitespace separates tokens, except
/// that `key = value`, `key: value`, `pace 4:30`, `4:30 / km` and `10 km` are
/// kept together.
fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for chunk in normalize(line).split(',') {
        let mut chunk_tokens: Vec<String> = Vec::new();
        for piece in chunk.split_whitespace().map(relabel) {
            match chunk_tokens.last_mut() {
                Some(last) if should_glue(last, &piece) => last.push_str(&piece),
                _ => chunk_tokens.push(piece),
            }
        }
        tokens.extend(chunk_tokens);
    }
    tokens
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn is_plain_number(token: &str) -> bool {
    let dotted = token.replace(',', ".");
    let digits = dotted.replacen('.', "", 1);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn ends_with_distance_unit(lower: &str) -> bool {
    lower.chars().any(|c| c.is_ascii_digit())
        && suffixes::DISTANCE
            .iter()
            .any(|(suffix, _)| lower.ends_with(suffix))
}

/// Category a bare token is a candidate for, with the value to parse
fn classify(token: &str) -> Option<(Slot, String)> {
    let lower = token.to_lowercase();
    if lower.contains(':') && lower.chars().any(|c| c.is_ascii_digit()) {
        let keyword = suffixes::PACE_KEYWORDS
            .iter()
            .find(|keyword| lower.contains(*keyword));
        return match keyword {
            Some(keyword) => Some((Slot::Pace, lower.replace(keyword, ""))),
            None if lower.contains('/') => Some((Slot::Pace, token.to_owned())),
            None => Some((Slot::Time, token.to_owned())),
        };
    }
    if ends_with_distance_unit(&lower) || is_plain_number(&lower) {
        return Some((Slot::Distance, token.to_owned()));
    }
    None
}

/// Split a calculator line into raw distance, pace and time substrings
///
/// # Errors
///
/// Returns `CalcError::AmbiguousInput` when one category receives two
/// different values, and `CalcError::Parse` for a named field with no value
pub fn extract_fields(line: &str) -> CalcResult<ExtractedFields> {
    let tokens = tokenize(line);
    let mut named = ExtractedFields::default();
    let mut consumed = vec![false; tokens.len()];

    for (index, token) in tokens.iter().enumerate() {
        let Some(captures) = NAMED_FIELD.as_ref().and_then(|re| re.captures(token)) else {
            continue;
        };
        let Some(slot) = Slot::from_key(&captures[1]) else {
            continue;
        };
        let value = captures[2].trim();
        if value.is_empty() {
            return Err(CalcError::parse(slot.field(), token.as_str(), ParseFailure::Empty));
        }
        named.assign(slot, value.to_owned())?;
        consumed[index] = true;
    }

    let mut positional = ExtractedFields::default();
    for (token, _) in tokens
        .iter()
        .zip(&consumed)
        .filter(|(token, consumed)| !**consumed && !token.contains('='))
    {
        let Some((slot, value)) = classify(token) else {
            debug!(token, "token matches no field");
            continue;
        };
        if named.slot(slot).is_some() {
            continue;
        }
        positional.assign(slot, value)?;
    }

    let mut fields = named;
    for slot in Slot::ALL {
        let target = fields.slot_mut(slot);
        if target.is_none() {
            *target = positional.slot_mut(slot).take();
        }
    }
    debug!(?fields, "extracted calculator fields");
    Ok(fields)
}

/// Extract and parse a calculator line in one step
///
/// # Errors
///
/// See [`extract_fields`] and [`ExtractedFields::into_query`]
pub fn extract_calc_query(line: &str) -> CalcResult<CalcQuery> {
    extract_fields(line)?.into_query()
}

fn split_pair<'a>(
    line: &'a str,
    field: Field,
    expected: &'static str,
) -> CalcResult<(&'a str, &'a str)> {
    line.split_once(',')
        .map(|(left, right)| (left.trim(), right.trim()))
        .ok_or_else(|| CalcError::parse(field, line.trim(), ParseFailure::Expected(expected)))
}

/// Parse a `distance, pace` line into a query solving for time
///
/// The right-hand side is always read as a pace; a bare `4:00` is per km.
///
/// # Errors
///
/// Returns `CalcError::Parse` when the separator or either value is missing
/// or malformed
pub fn extract_pair(line: &str) -> CalcResult<CalcQuery> {
    let normalized = normalize(line);
    let (distance, pace) = split_pair(&normalized, Field::Distance, "'distance, pace'")?;
    Ok(CalcQuery {
        distance: Some(parse_distance(distance)?),
        pace: Some(parse_pace(pace)?),
        time: None,
    })
}

/// Parsed Riegel line
#[derive(Debug, Clone, PartialEq)]
pub struct RiegelFields {
    /// Distance of the known performance
    pub known_distance: Distance,
    /// Time of the known performance
    pub known_time: Duration,
    /// Targets in the order written
    pub targets: Vec<Distance>,
    /// Exponent override, if one parsed
    pub exponent: Option<f64>,
}

impl RiegelFields {
    /// Convert into a predictor query
    #[must_use]
    pub fn into_query(self) -> RiegelQuery {
        RiegelQuery {
            known_distance: self.known_distance,
            known_time: self.known_time,
            targets: self.targets,
            exponent: self.exponent,
        }
    }
}

/// Parse `dist1, time1 -> dist2[, dist3...][, exp=x.xx]`
///
/// An `exp=` value that is not a number is dropped, the same as an
/// out-of-band one. A digits-only part right after a whole `exp=` value is
/// its fractional part, so `exp=1,07` reads as 1.07.
///
/// # Errors
///
/// Returns `CalcError::Parse` for a missing `->` or `,`, a malformed
/// distance or time, or a bare number after a fractional `exp=` value, and
/// `CalcError::InvalidArity` without targets
pub fn extract_riegel(line: &str) -> CalcResult<RiegelFields> {
    let normalized = normalize(line);
    let (left, right) = normalized.split_once("->").ok_or_else(|| {
        CalcError::parse(
            Field::Distance,
            line.trim(),
            ParseFailure::Expected("'distance, time -> target distance'"),
        )
    })?;

    let (known_distance, known_time) =
        split_pair(left, Field::Distance, "'distance, time' before '->'")?;
    let known_distance = parse_distance(known_distance)?;
    let known_time = parse_duration(known_time)?;

    let mut targets = Vec::new();
    let mut exponent_text: Option<String> = None;
    let mut after_exponent = false;
    for part in right.split(',').map(str::trim).filter(|part| !part.is_empty()) {
        if let Some(captures) = EXPONENT_FIELD.as_ref().and_then(|re| re.captures(part)) {
            exponent_text = Some(captures[1].trim().to_owned());
            after_exponent = true;
            continue;
        }
        if after_exponent && is_digits(part) {
            let Some(text) = exponent_text.as_mut().filter(|text| is_digits(text)) else {
                return Err(CalcError::parse(
                    Field::Exponent,
                    part,
                    ParseFailure::Expected("a target distance with a unit after 'exp='"),
                ));
            };
            text.push('.');
            text.push_str(part);
            after_exponent = false;
            continue;
        }
        after_exponent = false;
        targets.push(parse_distance(part)?);
    }

    let exponent = exponent_text.and_then(|text| {
        let parsed = parse_number(&text, Field::Exponent).ok();
        if parsed.is_none() {
            debug!(text = %text, "ignoring unreadable exponent");
        }
        parsed
    });

    if targets.is_empty() {
        return Err(ArityProblem::NoTargets.into());
    }

    Ok(RiegelFields {
        known_distance,
        known_time,
        targets,
        exponent,
    })
}

/// Parse `HRmax, percent` or `HRmax, low-high`; `%` signs are ignored
///
/// # Errors
///
/// Returns `CalcError::Parse` for a missing separator or unreadable number,
/// plus the validation errors of [`HeartRateQuery::new`]
pub fn extract_heart_rate(line: &str) -> CalcResult<HeartRateQuery> {
    let cleaned: String = normalize(line)
        .chars()
        .filter(|c| *c != '%' && !c.is_whitespace())
        .collect();
    let (max_hr, percentages) = split_pair(
        &cleaned,
        Field::HeartRate,
        "'HRmax, percent' or 'HRmax, low-high'",
    )?;

    let max_hr = parse_number(max_hr, Field::HeartRate)?;
    let percentages = match percentages.split_once('-') {
        Some((low, high)) => vec![
            parse_number(low, Field::Percentage)?,
            parse_number(high, Field::Percentage)?,
        ],
        None => vec![parse_number(percentages, Field::Percentage)?],
    };
    HeartRateQuery::new(max_hr, &percentages)
}

/// Parse `speed=<value>[kmh|mph|mps]`, `pace=<m:ss>[/km|/mi]` or a bare `m:ss` pace
///
/// # Errors
///
/// Returns `CalcError::Parse` if the line is neither a speed nor a pace
pub fn extract_treadmill(line: &str) -> CalcResult<TreadmillField> {
    let compact = compact_lower(line);
    if let Some(speed) = compact.strip_prefix("speed=") {
        return parse_speed(speed).map(TreadmillField::Speed);
    }
    let pace = suffixes::PACE_KEYWORDS
        .iter()
        .find_map(|keyword| compact.strip_prefix(keyword)?.strip_prefix('='));
    if let Some(pace) = pace {
        return parse_pace(pace).map(TreadmillField::Pace);
    }
    if compact.contains(':') {
        return parse_pace(&compact).map(TreadmillField::Pace);
    }
    Err(CalcError::parse(
        Field::Speed,
        line.trim(),
        ParseFailure::Expected("speed=<value> or pace=<m:ss>"),
    ))
}
