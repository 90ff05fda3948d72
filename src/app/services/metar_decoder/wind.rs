//! Wind group decoding: direction, sustained speed, optional gust
//!
//! Wind is assumed to be reported in knots; other units (MPS, KPH) are a
//! documented non-goal. The group is located by its unit suffix and then
//! held to the full anchored grammar, so a token that merely contains `KT`
//! somewhere cannot be mistaken for the wind group.

use super::tokenizer::ReportTokens;
use crate::app::models::WindDirection;
use crate::constants::{VARIABLE_WIND_SENTINEL, WIND_UNIT_SUFFIX, groups};
use crate::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Wind group: 3-digit direction or VRB, 2-3 digit speed, optional gust
static WIND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{3}|VRB)(\d{2,3})(?:G(\d{2,3}))?KT$").unwrap());

/// Decoded wind group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wind {
    pub direction: WindDirection,
    pub speed_kt: u16,
    pub gust_kt: u16,
}

/// Decode the wind group from the report body
pub fn decode_wind(tokens: &ReportTokens) -> Result<Wind> {
    let token = tokens
        .find_body(|t| t.ends_with(WIND_UNIT_SUFFIX))
        .ok_or_else(|| Error::missing_field(groups::WIND))?;

    let captures = WIND_RE.captures(token).ok_or_else(|| {
        Error::malformed_field(
            groups::WIND,
            token,
            "expected DDDSS[GSS]KT or VRBSS[GSS]KT",
        )
    })?;

    let direction = match &captures[1] {
        VARIABLE_WIND_SENTINEL => WindDirection::Variable,
        digits => {
            let degrees: u16 = digits
                .parse()
                .map_err(|e: std::num::ParseIntError| {
                    Error::malformed_field(groups::WIND, token, e.to_string())
                })?;
            if degrees > 360 {
                return Err(Error::malformed_field(
                    groups::WIND,
                    token,
                    "direction exceeds 360 degrees",
                ));
            }
            WindDirection::Degrees(degrees)
        }
    };

    let speed_kt: u16 = captures[2]
        .parse()
        .map_err(|e: std::num::ParseIntError| {
            Error::malformed_field(groups::WIND, token, e.to_string())
        })?;

    // Gust defaults to 0 when the G segment is absent
    let gust_kt: u16 = match captures.get(3) {
        Some(gust) => gust.as_str().parse().map_err(|e: std::num::ParseIntError| {
            Error::malformed_field(groups::WIND, token, e.to_string())
        })?,
        None => 0,
    };

    Ok(Wind {
        direction,
        speed_kt,
        gust_kt,
    })
}
