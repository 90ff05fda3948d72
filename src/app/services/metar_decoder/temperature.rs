//! Temperature and dew point group decoding
//!
//! The group is two 2-digit fields separated by a slash, each optionally
//! prefixed with the `M` minus marker. Both sides resolve their sign
//! independently.

use super::tokenizer::ReportTokens;
use crate::constants::groups;
use crate::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Temperature group: (M?)DD/(M?)DD, fully anchored
static TEMPERATURE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(M?)(\d{2})/(M?)(\d{2})$").unwrap());

/// Decoded temperature group: (temperature, dew point) in whole Celsius
pub fn decode_temperature(tokens: &ReportTokens) -> Result<(i16, i16)> {
    let token = tokens
        .find_body(|t| TEMPERATURE_RE.is_match(t))
        .ok_or_else(|| Error::missing_field(groups::TEMPERATURE))?;

    let captures = TEMPERATURE_RE
        .captures(token)
        .ok_or_else(|| Error::missing_field(groups::TEMPERATURE))?;

    let temperature = signed_value(&captures[1], &captures[2], token)?;
    let dewpoint = signed_value(&captures[3], &captures[4], token)?;

    Ok((temperature, dewpoint))
}

/// Resolve one side of the group from its sign marker and digits
fn signed_value(sign: &str, digits: &str, token: &str) -> Result<i16> {
    let magnitude: i16 = digits
        .parse()
        .map_err(|e: std::num::ParseIntError| {
            Error::malformed_field(groups::TEMPERATURE, token, e.to_string())
        })?;

    Ok(if sign == "M" { -magnitude } else { magnitude })
}
