//! CAVOK-aware sky section dispatch
//!
//! The CAVOK shortcut eliminates the cloud, visibility, and weather groups
//! in one token, so those three decoders hang off a single dispatcher: when
//! the literal token is present the fixed shortcut values are returned
//! unconditionally and any stray group tokens in a malformed report are
//! ignored; otherwise the three sub-decoders run in sequence.

use super::tokenizer::ReportTokens;
use super::{clouds, visibility, weather};
use crate::Result;
use crate::app::models::CloudLayer;
use crate::constants::{CAVOK_MARKER, CAVOK_VISIBILITY_SM};
use tracing::debug;

/// Decoded sky section: cloud layers, visibility, rendered weather
#[derive(Debug, Clone, PartialEq)]
pub struct SkySection {
    pub cloud_layers: Vec<CloudLayer>,
    pub visibility_sm: f64,
    pub weather: String,
}

/// Decode the sky section, short-circuiting on CAVOK
pub fn decode_sky_section(tokens: &ReportTokens) -> Result<SkySection> {
    if tokens.body_contains(CAVOK_MARKER) {
        debug!("CAVOK present, skipping cloud/visibility/weather groups");
        return Ok(SkySection {
            cloud_layers: Vec::new(),
            visibility_sm: CAVOK_VISIBILITY_SM,
            weather: String::new(),
        });
    }

    Ok(SkySection {
        cloud_layers: clouds::decode_layers(tokens)?,
        visibility_sm: visibility::decode_visibility(tokens)?,
        weather: weather::decode_weather(tokens),
    })
}
