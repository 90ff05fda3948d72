//! Data models for decoded METAR observations
//!
//! This module contains the output record produced by the decoder and the
//! value types appearing in it. Fields are written once during decoding and
//! owned exclusively by the caller afterwards.

use crate::constants::{self, groups};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Wind Direction
// =============================================================================

/// Reported wind direction
///
/// METAR wind groups encode either a 3-digit true bearing or the literal
/// `VRB` marker for variable winds below the directional reporting threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindDirection {
    /// True bearing in degrees, 0-360
    Degrees(u16),

    /// Variable direction (the `VRB` sentinel)
    Variable,
}

impl WindDirection {
    /// Get the numeric bearing, if the direction is not variable
    pub fn degrees(&self) -> Option<u16> {
        match self {
            WindDirection::Degrees(deg) => Some(*deg),
            WindDirection::Variable => None,
        }
    }
}

impl std::fmt::Display for WindDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindDirection::Degrees(deg) => write!(f, "{}", deg),
            WindDirection::Variable => write!(f, "variable"),
        }
    }
}

// =============================================================================
// Cloud Cover
// =============================================================================

/// Coverage-bearing sky cover codes
///
/// Each variant corresponds to one 3-letter METAR sky-cover code and carries
/// its okta (eighths-of-sky) coverage value. The clear-sky shortcut codes
/// `SKC` and `NSC` are handled by the cloud decoder and never appear as a
/// layer cover; convective markers are modeled separately because they carry
/// no coverage weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CloudCover {
    /// FEW - 1 to 2 oktas
    Few,

    /// SCT - 3 to 4 oktas
    Scattered,

    /// BKN - 5 to 7 oktas
    Broken,

    /// OVC - 8 oktas
    Overcast,
}

impl CloudCover {
    /// Resolve a 3-letter sky-cover code to its table entry
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "FEW" => Some(CloudCover::Few),
            "SCT" => Some(CloudCover::Scattered),
            "BKN" => Some(CloudCover::Broken),
            "OVC" => Some(CloudCover::Overcast),
            _ => None,
        }
    }

    /// The METAR code for this cover
    pub fn code(&self) -> &'static str {
        match self {
            CloudCover::Few => "FEW",
            CloudCover::Scattered => "SCT",
            CloudCover::Broken => "BKN",
            CloudCover::Overcast => "OVC",
        }
    }

    /// Human-readable cover name
    pub fn name(&self) -> &'static str {
        match self {
            CloudCover::Few => "few",
            CloudCover::Scattered => "scattered",
            CloudCover::Broken => "broken",
            CloudCover::Overcast => "overcast",
        }
    }

    /// Nominal coverage in oktas
    pub fn octas(&self) -> f32 {
        match self {
            CloudCover::Few => 1.5,
            CloudCover::Scattered => 3.5,
            CloudCover::Broken => 6.0,
            CloudCover::Overcast => 8.0,
        }
    }
}

/// Convective activity markers appended to a cloud layer
///
/// Rendered alongside the layer but carrying no coverage weight of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConvectiveActivity {
    /// CB suffix
    Cumulonimbus,

    /// TCU suffix
    ToweringCumulus,
}

impl ConvectiveActivity {
    /// Resolve a convective suffix code to its table entry
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "CB" => Some(ConvectiveActivity::Cumulonimbus),
            "TCU" => Some(ConvectiveActivity::ToweringCumulus),
            _ => None,
        }
    }

    /// Human-readable marker name
    pub fn name(&self) -> &'static str {
        match self {
            ConvectiveActivity::Cumulonimbus => "cumulonimbus",
            ConvectiveActivity::ToweringCumulus => "towering cumulus",
        }
    }
}

// =============================================================================
// Cloud Layer
// =============================================================================

/// A single decoded cloud layer
///
/// Layers appear in report order, which by format convention is ascending
/// altitude; the decoder never re-sorts them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CloudLayer {
    /// Sky coverage for this layer
    pub cover: CloudCover,

    /// Layer base altitude in feet above ground level
    pub altitude_ft: u32,

    /// Convective marker attached to the layer, if any
    pub convective: Option<ConvectiveActivity>,
}

impl CloudLayer {
    /// Human-readable cover description ("broken", "overcast", ...)
    pub fn description(&self) -> &'static str {
        self.cover.name()
    }
}

impl std::fmt::Display for CloudLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.cover.name(), self.altitude_ft)?;
        if let Some(convective) = self.convective {
            write!(f, " ({})", convective.name())?;
        }
        Ok(())
    }
}

// =============================================================================
// Observation Record
// =============================================================================

/// A fully decoded METAR observation
///
/// Produced by [`MetarDecoder::parse`](crate::MetarDecoder::parse); every
/// field is populated exactly once during decoding. A failed decode returns
/// an error instead of a partial record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// 4-character ICAO station identifier (first token of the report)
    pub station_id: String,

    /// Observation time; day/hour/minute from the report combined with the
    /// reference month and year, fixed to UTC
    pub timestamp: DateTime<Utc>,

    /// Whether the report carries the AUTO (automated station) flag
    pub is_automated: bool,

    /// Wind direction: true bearing or variable
    pub wind_direction: WindDirection,

    /// Sustained wind speed in knots
    pub wind_speed_kt: u16,

    /// Peak gust in knots; 0 when no gust group was reported
    pub wind_gust_kt: u16,

    /// Air temperature in whole degrees Celsius
    pub temperature_c: i16,

    /// Dew point in whole degrees Celsius
    pub dewpoint_c: i16,

    /// Cloud layers in report order; empty when the sky is clear or CAVOK
    pub cloud_layers: Vec<CloudLayer>,

    /// Visibility in statute miles; 10.0 under CAVOK
    pub visibility_sm: f64,

    /// Rendered weather text, the no-weather sentinel, or "" under CAVOK
    pub weather: String,

    /// Raw remark tokens following the RMK marker; empty when absent
    pub remarks: Vec<String>,

    /// Altimeter setting in inches of mercury, when reported
    pub altimeter_in_hg: Option<f64>,
}

impl Observation {
    /// Validate structural consistency of a decoded observation
    pub fn validate(&self) -> Result<()> {
        if self.station_id.len() != constants::STATION_ID_LENGTH
            || !self.station_id.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(Error::malformed_field(
                groups::STATION,
                self.station_id.as_str(),
                format!(
                    "expected {}-character alphanumeric identifier",
                    constants::STATION_ID_LENGTH
                ),
            ));
        }

        if let WindDirection::Degrees(deg) = self.wind_direction {
            if deg > 360 {
                return Err(Error::malformed_field(
                    groups::WIND,
                    deg.to_string(),
                    "direction exceeds 360 degrees",
                ));
            }
        }

        Ok(())
    }

    /// Whether the report carries a gust group
    pub fn has_gusts(&self) -> bool {
        self.wind_gust_kt > 0
    }

    /// Whether no cloud layers were reported
    pub fn is_sky_clear(&self) -> bool {
        self.cloud_layers.is_empty()
    }

    /// Whether the report carries a remarks section
    pub fn has_remarks(&self) -> bool {
        !self.remarks.is_empty()
    }
}
