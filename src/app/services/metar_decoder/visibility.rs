//! Visibility group decoding
//!
//! Visibility is the only group reported in statute miles, located by its
//! `SM` suffix. The value is either a whole number of miles or a fraction
//! (numerator/denominator). No other unit is supported.

use super::tokenizer::ReportTokens;
use crate::constants::{VISIBILITY_UNIT_SUFFIX, groups};
use crate::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Visibility group: integer or fractional statute miles
static VISIBILITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)(?:/(\d+))?SM$").unwrap());

/// Decode the visibility group from the report body
pub fn decode_visibility(tokens: &ReportTokens) -> Result<f64> {
    let token = tokens
        .find_body(|t| t.ends_with(VISIBILITY_UNIT_SUFFIX))
        .ok_or_else(|| Error::missing_field(groups::VISIBILITY))?;

    let captures = VISIBILITY_RE.captures(token).ok_or_else(|| {
        Error::malformed_field(groups::VISIBILITY, token, "expected DDSM or DD/DDSM")
    })?;

    let numerator: f64 = captures[1]
        .parse()
        .map_err(|e: std::num::ParseFloatError| {
            Error::malformed_field(groups::VISIBILITY, token, e.to_string())
        })?;

    match captures.get(2) {
        None => Ok(numerator),
        Some(denominator) => {
            let denominator: f64 = denominator.as_str().parse().map_err(
                |e: std::num::ParseFloatError| {
                    Error::malformed_field(groups::VISIBILITY, token, e.to_string())
                },
            )?;
            if denominator == 0.0 {
                return Err(Error::malformed_field(
                    groups::VISIBILITY,
                    token,
                    "zero denominator",
                ));
            }
            Ok(numerator / denominator)
        }
    }
}
