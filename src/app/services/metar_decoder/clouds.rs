//! Cloud layer group decoding
//!
//! A layer group is a 3-letter sky-cover code, a 3-digit altitude in
//! hundreds of feet, and an optional convective suffix (CB or TCU). Layer
//! tokens must match the full anchored grammar; substring hits inside
//! unrelated groups (runway condition, altimeter) never qualify. The
//! `NSC`/`SKC` shortcut codes empty the layer list outright.

use super::tokenizer::ReportTokens;
use crate::app::models::{CloudCover, CloudLayer, ConvectiveActivity};
use crate::constants::{CLEAR_SKY_CODES, CLOUD_ALTITUDE_SCALE_FT, groups};
use crate::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Cloud layer group: cover code, altitude, optional convective marker
static CLOUD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z]{3})(\d{3})(CB|TCU)?$").unwrap());

/// Decode all cloud layers from the report body, in report order
pub fn decode_layers(tokens: &ReportTokens) -> Result<Vec<CloudLayer>> {
    if CLEAR_SKY_CODES.iter().any(|code| tokens.body_contains(code)) {
        debug!("clear-sky code present, no cloud layers");
        return Ok(Vec::new());
    }

    let mut layers = Vec::new();
    for token in tokens.body() {
        let Some(captures) = CLOUD_RE.captures(token) else {
            continue;
        };

        let code = &captures[1];
        let Some(cover) = CloudCover::from_code(code) else {
            // A 3-letter code with a 3-digit altitude is shaped like a layer
            // group; an unrecognized cover code there is a table miss, not
            // an unrelated token.
            return Err(Error::unknown_code(groups::CLOUD, code));
        };

        let altitude_hundreds: u32 = captures[2]
            .parse()
            .map_err(|e: std::num::ParseIntError| {
                Error::malformed_field(groups::CLOUD, token.as_str(), e.to_string())
            })?;

        let convective = captures
            .get(3)
            .and_then(|m| ConvectiveActivity::from_code(m.as_str()));

        layers.push(CloudLayer {
            cover,
            altitude_ft: altitude_hundreds * CLOUD_ALTITUDE_SCALE_FT,
            convective,
        });
    }

    debug!(layer_count = layers.len(), "decoded cloud layers");
    Ok(layers)
}
