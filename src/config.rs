//! Configuration for the METAR decoder.
//!
//! The only tunable is the reference date used to resolve report timestamps:
//! a METAR encodes day-of-month and time but not month or year, so those are
//! taken from a reference instant. Pinning the reference makes decoding fully
//! deterministic; leaving it unset falls back to the wall clock at decode
//! time, which can misdate reports parsed just after a month rollover.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Decoder configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Reference instant supplying the month and year for report timestamps.
    /// `None` means the current wall-clock time at each decode call.
    pub reference_time: Option<DateTime<Utc>>,
}

impl DecoderConfig {
    /// Create a configuration with wall-clock timestamp resolution
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the reference instant used for timestamp resolution
    pub fn with_reference_time(mut self, reference: DateTime<Utc>) -> Self {
        self.reference_time = Some(reference);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_uses_wall_clock() {
        let config = DecoderConfig::new();
        assert!(config.reference_time.is_none());
    }

    #[test]
    fn test_with_reference_time() {
        let reference = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let config = DecoderConfig::new().with_reference_time(reference);
        assert_eq!(config.reference_time, Some(reference));
    }
}
