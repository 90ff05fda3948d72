//! Shared fixtures for METAR decoder stage tests

use chrono::{DateTime, TimeZone, Utc};

use super::decoder::MetarDecoder;
use super::tokenizer::ReportTokens;
use crate::app::models::Observation;
use crate::config::DecoderConfig;
use crate::Result;

// Test modules
mod decoder_tests;
mod temperature_tests;
mod weather_tests;
mod wind_tests;

/// Fixed reference instant so timestamp decoding is deterministic in tests
pub fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

/// Tokenize a raw report body for stage-level tests
pub fn tokens(raw: &str) -> ReportTokens {
    ReportTokens::tokenize(raw)
}

/// Decode a full report against the fixed reference instant
pub fn decode(raw: &str) -> Result<Observation> {
    MetarDecoder::new().parse_at(raw, reference_time())
}

/// Decode via a decoder configured with a pinned reference time
pub fn decode_with_pinned_config(raw: &str) -> Result<Observation> {
    let config = DecoderConfig::new().with_reference_time(reference_time());
    MetarDecoder::with_config(config).parse(raw)
}
