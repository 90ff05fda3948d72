//! Header group decoding: station identifier, AUTO flag, zulu timestamp
//!
//! The timestamp group encodes day-of-month, hour, and minute only; month
//! and year come from the caller-supplied reference instant. Reports parsed
//! just after a month rollover with a stale reference will be misdated,
//! which is why the reference is an explicit input rather than an ambient
//! read of the wall clock.

use super::tokenizer::ReportTokens;
use crate::constants::{AUTO_MARKER, groups};
use crate::{Error, Result};
use chrono::{DateTime, Datelike, TimeZone, Utc};
use regex::Regex;
use std::sync::LazyLock;

/// Zulu timestamp group: 2-digit day, hour, and minute with a literal Z
static TIMESTAMP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})(\d{2})(\d{2})Z$").unwrap());

/// Decode the station identifier from the first token
pub fn decode_station(tokens: &ReportTokens) -> Result<String> {
    match tokens.first() {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(Error::missing_field(groups::STATION)),
    }
}

/// Decode the automated-station flag
pub fn decode_auto_flag(tokens: &ReportTokens) -> bool {
    tokens.body_contains(AUTO_MARKER)
}

/// Decode the zulu timestamp, combining the report's day/hour/minute with
/// the month and year of the reference instant
pub fn decode_timestamp(
    tokens: &ReportTokens,
    reference: DateTime<Utc>,
) -> Result<DateTime<Utc>> {
    let token = tokens
        .find_body(|t| TIMESTAMP_RE.is_match(t))
        .ok_or_else(|| Error::missing_field(groups::TIMESTAMP))?;

    let captures = TIMESTAMP_RE
        .captures(token)
        .ok_or_else(|| Error::missing_field(groups::TIMESTAMP))?;

    let day: u32 = parse_timestamp_field(&captures[1], token)?;
    let hour: u32 = parse_timestamp_field(&captures[2], token)?;
    let minute: u32 = parse_timestamp_field(&captures[3], token)?;

    Utc.with_ymd_and_hms(reference.year(), reference.month(), day, hour, minute, 0)
        .single()
        .ok_or_else(|| {
            Error::malformed_field(
                groups::TIMESTAMP,
                token,
                format!(
                    "day {} {:02}:{:02}Z is not a valid instant in {}-{:02}",
                    day,
                    hour,
                    minute,
                    reference.year(),
                    reference.month()
                ),
            )
        })
}

fn parse_timestamp_field(digits: &str, token: &str) -> Result<u32> {
    digits
        .parse::<u32>()
        .map_err(|e| Error::malformed_field(groups::TIMESTAMP, token, e.to_string()))
}
