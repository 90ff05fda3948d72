//! Core METAR decoder orchestration
//!
//! Decoding runs the stages strictly top to bottom over one immutable token
//! sequence: tokenize, header, wind, temperature, then the CAVOK-aware sky
//! section. Each stage writes its fields once into the accumulating
//! observation; any stage failure aborts the whole call.

use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, info};

use super::tokenizer::ReportTokens;
use super::{header, sky, temperature, wind};
use crate::app::models::Observation;
use crate::config::DecoderConfig;
use crate::constants::ALTIMETER_SCALE_IN_HG;
use crate::Result;

/// Altimeter setting group: A followed by hundredths of inches of mercury
static ALTIMETER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^A(\d{4})$").unwrap());

/// METAR report decoder
///
/// Purely computational and stateless between calls; the only configuration
/// is the reference instant for timestamp resolution. Safe to share across
/// threads and to call concurrently.
#[derive(Debug, Clone, Default)]
pub struct MetarDecoder {
    config: DecoderConfig,
}

impl MetarDecoder {
    /// Create a decoder that resolves timestamps against the wall clock
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder with explicit configuration
    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Decode a raw report using the configured reference time
    ///
    /// Falls back to the current wall clock when no reference is pinned,
    /// which can misdate reports decoded just after a month rollover.
    pub fn parse(&self, raw: &str) -> Result<Observation> {
        let reference = self.config.reference_time.unwrap_or_else(Utc::now);
        self.parse_at(raw, reference)
    }

    /// Decode a raw report against an explicit reference instant
    ///
    /// Fully deterministic: identical input and reference always yield an
    /// identical observation.
    pub fn parse_at(&self, raw: &str, reference: DateTime<Utc>) -> Result<Observation> {
        let tokens = ReportTokens::tokenize(raw);

        let station_id = header::decode_station(&tokens)?;
        info!(station = %station_id, "decoding METAR report");

        let timestamp = header::decode_timestamp(&tokens, reference)?;
        let is_automated = header::decode_auto_flag(&tokens);
        let wind = wind::decode_wind(&tokens)?;
        let (temperature_c, dewpoint_c) = temperature::decode_temperature(&tokens)?;
        let sky = sky::decode_sky_section(&tokens)?;
        let altimeter_in_hg = decode_altimeter(&tokens);

        let observation = Observation {
            station_id,
            timestamp,
            is_automated,
            wind_direction: wind.direction,
            wind_speed_kt: wind.speed_kt,
            wind_gust_kt: wind.gust_kt,
            temperature_c,
            dewpoint_c,
            cloud_layers: sky.cloud_layers,
            visibility_sm: sky.visibility_sm,
            weather: sky.weather,
            remarks: tokens.remarks().to_vec(),
            altimeter_in_hg,
        };

        observation.validate()?;
        debug!(
            station = %observation.station_id,
            layers = observation.cloud_layers.len(),
            automated = observation.is_automated,
            "decoded observation"
        );

        Ok(observation)
    }
}

/// Decode a raw report with the current wall clock as reference
///
/// Convenience for callers without a [`MetarDecoder`] instance; the single
/// external operation of the crate.
pub fn parse(raw: &str) -> Result<Observation> {
    MetarDecoder::new().parse(raw)
}

/// Decode the optional altimeter setting group
///
/// Lenient by design: an absent or non-matching group yields `None`, never
/// an error.
fn decode_altimeter(tokens: &ReportTokens) -> Option<f64> {
    let captures = tokens
        .body()
        .iter()
        .find_map(|t| ALTIMETER_RE.captures(t))?;

    let hundredths: u32 = captures[1].parse().ok()?;
    Some(f64::from(hundredths) / ALTIMETER_SCALE_IN_HG)
}
