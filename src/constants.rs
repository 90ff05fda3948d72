//! Application constants for the METAR decoder
//!
//! This module contains the group markers, sentinel values, and fixed
//! conversion factors used throughout the decoding pipeline.

// =============================================================================
// Group Markers
// =============================================================================

/// Remarks section marker; every token from this one onward is a remark
pub const REMARKS_MARKER: &str = "RMK";

/// Automated-station flag token
pub const AUTO_MARKER: &str = "AUTO";

/// Ceiling-and-visibility-OK shortcut token
pub const CAVOK_MARKER: &str = "CAVOK";

/// Wind group unit suffix (knots; the only supported wind unit)
pub const WIND_UNIT_SUFFIX: &str = "KT";

/// Visibility group unit suffix (statute miles; the only supported unit)
pub const VISIBILITY_UNIT_SUFFIX: &str = "SM";

/// Variable wind direction sentinel within the wind group
pub const VARIABLE_WIND_SENTINEL: &str = "VRB";

/// Tokens that short-circuit the cloud decoder to an empty layer list
pub const CLEAR_SKY_CODES: &[&str] = &["NSC", "SKC"];

// =============================================================================
// Sentinel Output Values
// =============================================================================

/// Visibility reported under CAVOK, in statute miles
pub const CAVOK_VISIBILITY_SM: f64 = 10.0;

/// Weather text when no weather group exists in the report
pub const NO_WEATHER_PRESENT: &str = "no weather present";

// =============================================================================
// Conversion Factors
// =============================================================================

/// Cloud layer altitudes are encoded in hundreds of feet
pub const CLOUD_ALTITUDE_SCALE_FT: u32 = 100;

/// Altimeter settings are encoded in hundredths of inches of mercury
pub const ALTIMETER_SCALE_IN_HG: f64 = 100.0;

/// Expected length of a station identifier (4-character ICAO code)
pub const STATION_ID_LENGTH: usize = 4;

// =============================================================================
// Group Names
// =============================================================================

/// Report group names used when constructing decode errors
pub mod groups {
    pub const STATION: &str = "station";
    pub const TIMESTAMP: &str = "timestamp";
    pub const WIND: &str = "wind";
    pub const TEMPERATURE: &str = "temperature";
    pub const CLOUD: &str = "cloud layer";
    pub const VISIBILITY: &str = "visibility";
    pub const WEATHER: &str = "weather";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_sky_codes() {
        assert!(CLEAR_SKY_CODES.contains(&"SKC"));
        assert!(CLEAR_SKY_CODES.contains(&"NSC"));
        assert!(!CLEAR_SKY_CODES.contains(&"CAVOK"));
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(CAVOK_VISIBILITY_SM, 10.0);
        assert_eq!(CLOUD_ALTITUDE_SCALE_FT, 100);
    }
}
