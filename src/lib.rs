//! METAR Decoder Library
//!
//! A Rust library for decoding raw METAR (aviation routine weather report)
//! strings into structured observation records.
//!
//! This library provides tools for:
//! - Tokenizing a report into its space-delimited semantic groups
//! - Decoding the station, timestamp, wind, and temperature groups
//! - CAVOK-aware decoding of cloud layers, visibility, and weather phenomena
//! - Rendering coded weather groups into human-readable text
//! - Comprehensive error handling with a distinct kind per failure class
//!
//! The decoder is purely computational: it consumes already-fetched report
//! strings and performs no I/O. Network retrieval, station metadata lookup,
//! and TAF parsing are concerns of the surrounding system.
//!
//! ## Usage
//!
//! ```rust
//! use metar_decoder::MetarDecoder;
//!
//! # fn example() -> metar_decoder::Result<()> {
//! let decoder = MetarDecoder::new();
//! let obs = decoder.parse("KGFK 262353Z 24011KT 10SM BKN100 20/03 A2945 RMK AO2")?;
//!
//! println!("{} observed {} at {} ft", obs.station_id, obs.weather,
//!          obs.cloud_layers[0].altitude_ft);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod metar_decoder;
    }
}

// Re-export commonly used types
pub use app::models::{CloudLayer, Observation, WindDirection};
pub use app::services::metar_decoder::{MetarDecoder, parse};
pub use config::DecoderConfig;

/// Result type alias for the METAR decoder
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for METAR decoding operations
///
/// Every decode failure aborts the entire `parse` call for that report and
/// surfaces one of these kinds; no partial observation is ever returned.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A required group cannot be located in the token sequence
    #[error("missing {group} group in report")]
    MissingField { group: String },

    /// A located group does not match its expected sub-grammar
    #[error("malformed {group} group '{token}': {reason}")]
    MalformedField {
        group: String,
        token: String,
        reason: String,
    },

    /// A code extracted from a token is not present in its table
    #[error("unknown {kind} code '{code}'")]
    UnknownCode { kind: String, code: String },
}

impl Error {
    /// Create a missing-field error for a named report group
    pub fn missing_field(group: impl Into<String>) -> Self {
        Self::MissingField {
            group: group.into(),
        }
    }

    /// Create a malformed-field error with the offending token and reason
    pub fn malformed_field(
        group: impl Into<String>,
        token: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedField {
            group: group.into(),
            token: token.into(),
            reason: reason.into(),
        }
    }

    /// Create an unknown-code error for a table lookup miss
    pub fn unknown_code(kind: impl Into<String>, code: impl Into<String>) -> Self {
        Self::UnknownCode {
            kind: kind.into(),
            code: code.into(),
        }
    }
}
