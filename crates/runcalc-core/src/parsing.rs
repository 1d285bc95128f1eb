// ABOUTME: Unit parser turning raw tokens into canonical distance, duration, pace and speed
// ABOUTME: Accepts comma or dot decimals, Latin and Cyrillic unit suffixes, ignores inner whitespace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

//! Unit parser.
//!
//! Every parser strips all whitespace from the token and matches unit
//! suffixes case-insensitively, longest suffix first. Failures name the field
//! and echo the token as supplied.

use crate::constants::suffixes;
use crate::constants::SECONDS_PER_MINUTE;
use crate::errors::{CalcError, CalcResult, Field, ParseFailure};
use crate::models::{Distance, DistanceUnit, Duration, Pace, PaceUnit, Speed, SpeedUnit};
use tracing::debug;

/// Remove every whitespace character and lowercase the rest
fn compact(token: &str) -> String {
    token
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Strip the first matching suffix from a table ordered longest-first
fn split_suffix<'a, U: Copy>(text: &'a str, table: &[(&str, U)]) -> Option<(&'a str, U)> {
    table
        .iter()
        .find_map(|(suffix, unit)| text.strip_suffix(suffix).map(|head| (head, *unit)))
}

/// Trailing run of alphabetic characters, reported as an unknown unit
fn trailing_alpha(text: &str) -> Option<&str> {
    let head = text.trim_end_matches(char::is_alphabetic);
    (head.len() < text.len()).then(|| &text[head.len()..])
}

/// Parse a decimal literal with `.` or `,` as the separator
///
/// Only an optional sign, digits and a single separator are accepted, so
/// `inf` and `NaN` never slip through.
///
/// # Errors
///
/// Returns `CalcError::Parse` for an empty token or anything that is not a
/// plain decimal number
pub fn parse_number(token: &str, field: Field) -> CalcResult<f64> {
    let text: String = token
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if text.is_empty() {
        return Err(CalcError::parse(field, token, ParseFailure::Empty));
    }

    let unsigned = text.strip_prefix(['-', '+']).unwrap_or(&text);
    let separators = unsigned.chars().filter(|c| *c == '.').count();
    let digits = unsigned.chars().filter(char::is_ascii_digit).count();
    let well_formed = separators <= 1
        && digits > 0
        && unsigned.chars().all(|c| c == '.' || c.is_ascii_digit());
    if !well_formed {
        return Err(CalcError::parse(field, token, ParseFailure::InvalidNumber));
    }

    text.parse::<f64>()
        .map_err(|_| CalcError::parse(field, token, ParseFailure::InvalidNumber))
}

/// Parse a distance token, returning the canonical distance and the unit it
/// was written in
///
/// # Errors
///
/// Returns `CalcError::Parse` for an empty token, a bad number or an unknown
/// suffix, and `CalcError::Domain` for a zero or negative distance
pub fn parse_distance_with_unit(token: &str) -> CalcResult<(Distance, DistanceUnit)> {
    let text = compact(token);
    if text.is_empty() {
        return Err(CalcError::parse(Field::Distance, token, ParseFailure::Empty));
    }

    let (number, unit) = match split_suffix(&text, suffixes::DISTANCE) {
        Some(split) => split,
        None => {
            if let Some(unit) = trailing_alpha(&text) {
                return Err(CalcError::parse(
                    Field::Distance,
                    token,
                    ParseFailure::UnknownUnit(unit.to_owned()),
                ));
            }
            (text.as_str(), DistanceUnit::Kilometers)
        }
    };

    let value = parse_number(number, Field::Distance)
        .map_err(|_| CalcError::parse(Field::Distance, token, ParseFailure::InvalidNumber))?;
    let distance = Distance::from_value(value, unit)?;
    debug!(token, km = distance.km(), unit = %unit, "parsed distance");
    Ok((distance, unit))
}

/// Parse a distance token into kilometers
///
/// `"3км"` is 3 km, `"1000м"` is 1 km, `"1mi"` is 1.609344 km, a bare number is km.
///
/// # Errors
///
/// See [`parse_distance_with_unit`]
pub fn parse_distance(token: &str) -> CalcResult<Distance> {
    parse_distance_with_unit(token).map(|(distance, _)| distance)
}

/// Duration grammar shared by time and pace tokens
fn parse_clock(text: &str, token: &str, field: Field) -> CalcResult<Duration> {
    if text.is_empty() {
        return Err(CalcError::parse(field, token, ParseFailure::Empty));
    }

    let components: Vec<&str> = text.split(':').collect();
    if components.len() > 3 {
        return Err(CalcError::parse(
            field,
            token,
            ParseFailure::TooManyComponents(components.len() - 1),
        ));
    }

    let mut total: u64 = 0;
    for component in components {
        if component.is_empty() {
            return Err(CalcError::parse(field, token, ParseFailure::EmptyComponent));
        }
        if !component.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CalcError::parse(
                field,
                token,
                ParseFailure::NonDigitComponent,
            ));
        }
        let value: u64 = component
            .parse()
            .map_err(|_| CalcError::parse(field, token, ParseFailure::Overflow))?;
        total = total
            .checked_mul(SECONDS_PER_MINUTE)
            .and_then(|t| t.checked_add(value))
            .ok_or_else(|| CalcError::parse(field, token, ParseFailure::Overflow))?;
    }
    Ok(Duration::from_seconds(total))
}

/// Parse `ss`, `m:ss` or `h:mm:ss` into whole seconds
///
/// # Errors
///
/// Returns `CalcError::Parse` for an empty token, a non-digit component,
/// a leading or trailing colon, or more than two colons
pub fn parse_duration(token: &str) -> CalcResult<Duration> {
    let duration = parse_clock(&compact(token), token, Field::Time)?;
    debug!(token, seconds = duration.seconds(), "parsed duration");
    Ok(duration)
}

/// Parse a pace such as `4:30`, `4:30/km`, `7:15/mi`
///
/// Without a suffix the pace is per kilometer.
///
/// # Errors
///
/// Returns `CalcError::Parse` for a malformed duration or unknown `/unit`,
/// and `CalcError::Domain` for a zero pace
pub fn parse_pace(token: &str) -> CalcResult<Pace> {
    let text = compact(token);
    let (clock, unit) = match split_suffix(&text, suffixes::PACE) {
        Some(split) => split,
        None => {
            if let Some((_, unit)) = text.split_once('/') {
                return Err(CalcError::parse(
                    Field::Pace,
                    token,
                    ParseFailure::UnknownUnit(unit.to_owned()),
                ));
            }
            (text.as_str(), PaceUnit::PerKilometer)
        }
    };

    let duration = parse_clock(clock, token, Field::Pace)?;
    let pace = Pace::new(duration.as_f64(), unit)?;
    debug!(token, seconds = pace.seconds(), unit = %unit, "parsed pace");
    Ok(pace)
}

/// Parse a speed such as `12.5kmh`, `7.5mph`, `3.5mps` or a bare number (km/h)
///
/// # Errors
///
/// Returns `CalcError::Parse` for a bad number or unknown suffix, and
/// `CalcError::Domain` for a zero or negative speed
pub fn parse_speed(token: &str) -> CalcResult<Speed> {
    let text = compact(token);
    if text.is_empty() {
        return Err(CalcError::parse(Field::Speed, token, ParseFailure::Empty));
    }

    let (number, unit) = match split_suffix(&text, suffixes::SPEED) {
        Some(split) => split,
        None => {
            if let Some(unit) = trailing_alpha(&text) {
                return Err(CalcError::parse(
                    Field::Speed,
                    token,
                    ParseFailure::UnknownUnit(unit.to_owned()),
                ));
            }
            (text.as_str(), SpeedUnit::KilometersPerHour)
        }
    };

    let value = parse_number(number, Field::Speed)
        .map_err(|_| CalcError::parse(Field::Speed, token, ParseFailure::InvalidNumber))?;
    Speed::new(value, unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_separators() {
        assert_eq!(parse_number("21,1", Field::Distance).unwrap(), 21.1);
        assert_eq!(parse_number(" 1 2.5 ", Field::Distance).unwrap(), 12.5);
        assert!(parse_number("inf", Field::Distance).is_err());
        assert!(parse_number("NaN", Field::Distance).is_err());
        assert!(parse_number("1.2.3", Field::Distance).is_err());
        assert!(parse_number(".", Field::Distance).is_err());
    }

    #[test]
    fn test_longest_suffix_wins() {
        let (distance, unit) = parse_distance_with_unit("2mi").unwrap();
        assert_eq!(unit, DistanceUnit::Miles);
        assert!((distance.km() - 3.218_688).abs() < 1e-5);

        let (_, unit) = parse_distance_with_unit("400m").unwrap();
        assert_eq!(unit, DistanceUnit::Meters);

        let (_, unit) = parse_distance_with_unit("3 Miles").unwrap();
        assert_eq!(unit, DistanceUnit::Miles);
    }

    #[test]
    fn test_cyrillic_suffixes() {
        assert_eq!(parse_distance("3км").unwrap().km(), 3.0);
        assert!((parse_distance("1000м").unwrap().km() - 1.0).abs() < 1e-12);
        assert!((parse_distance("10 КМ").unwrap().km() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_distance_errors() {
        assert!(matches!(
            parse_distance("10ft"),
            Err(CalcError::Parse {
                reason: ParseFailure::UnknownUnit(_),
                ..
            })
        ));
        assert!(matches!(
            parse_distance("km"),
            Err(CalcError::Parse { .. })
        ));
        assert!(matches!(
            parse_distance("0km"),
            Err(CalcError::Domain { .. })
        ));
        assert!(matches!(
            parse_distance("   "),
            Err(CalcError::Parse {
                reason: ParseFailure::Empty,
                ..
            })
        ));
    }

    #[test]
    fn test_duration_grammar() {
        assert_eq!(parse_duration("90").unwrap().seconds(), 90);
        assert_eq!(parse_duration("45:00").unwrap().seconds(), 2700);
        assert_eq!(parse_duration("1:02:03").unwrap().seconds(), 3723);
        assert_eq!(parse_duration(" 1 : 02 ").unwrap().seconds(), 62);
    }

    #[test]
    fn test_duration_rejections() {
        for bad in [":30", "30:", "1::30", "1:2:3:4", "4:3a", "abc", "", "-5"] {
            assert!(
                matches!(parse_duration(bad), Err(CalcError::Parse { .. })),
                "{bad:?} should not parse"
            );
        }
        assert!(matches!(
            parse_duration("1:2:3:4"),
            Err(CalcError::Parse {
                reason: ParseFailure::TooManyComponents(3),
                ..
            })
        ));
        assert!(matches!(
            parse_duration("99999999999999999999"),
            Err(CalcError::Parse {
                reason: ParseFailure::Overflow,
                ..
            })
        ));
    }

    #[test]
    fn test_pace_suffixes() {
        let pace = parse_pace("4:30").unwrap();
        assert_eq!(pace.unit(), PaceUnit::PerKilometer);
        assert_eq!(pace.seconds(), 270.0);

        assert_eq!(parse_pace("7:30/mi").unwrap().unit(), PaceUnit::PerMile);
        assert_eq!(parse_pace("7:30/Mile").unwrap().unit(), PaceUnit::PerMile);
        assert_eq!(parse_pace("4:48/км").unwrap().unit(), PaceUnit::PerKilometer);

        assert!(matches!(
            parse_pace("4:30/lap"),
            Err(CalcError::Parse {
                field: Field::Pace,
                reason: ParseFailure::UnknownUnit(_),
                ..
            })
        ));
        assert!(matches!(parse_pace("0:00"), Err(CalcError::Domain { .. })));
    }

    #[test]
    fn test_speed_suffixes() {
        let speed = parse_speed("12.5kmh").unwrap();
        assert_eq!(speed.unit(), SpeedUnit::KilometersPerHour);
        assert_eq!(parse_speed("7,5 MPH").unwrap().value(), 7.5);
        assert_eq!(parse_speed("3.5mps").unwrap().unit(), SpeedUnit::MetersPerSecond);
        assert_eq!(parse_speed("10").unwrap().unit(), SpeedUnit::KilometersPerHour);

        assert!(matches!(parse_speed("0kmh"), Err(CalcError::Domain { .. })));
        assert!(matches!(parse_speed("-3mph"), Err(CalcError::Domain { .. })));
        assert!(matches!(
            parse_speed("12knots"),
            Err(CalcError::Parse { .. })
        ));
    }
}
