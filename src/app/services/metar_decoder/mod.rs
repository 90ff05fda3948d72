//! METAR decoder service
//!
//! Decodes raw METAR report strings into structured [`Observation`] records.
//! The pipeline runs fixed stages over one immutable token sequence.
//!
//! ## Architecture
//!
//! - [`decoder`] - Stage orchestration and the public parse operations
//! - [`tokenizer`] - Token sequence construction and remarks boundary
//! - [`header`] - Station identifier, AUTO flag, zulu timestamp
//! - [`wind`] - Direction, sustained speed, optional gust
//! - [`temperature`] - Temperature and dew point with sign markers
//! - [`sky`] - CAVOK-aware dispatch over the three sky-section decoders
//! - [`clouds`] - Cloud layer groups
//! - [`visibility`] - Statute-mile visibility
//! - [`weather`] - Weather phenomena scan and rendering
//! - [`codes`] - Closed phenomenon/modifier code tables
//!
//! ## Usage
//!
//! ```rust
//! use metar_decoder::app::services::metar_decoder::MetarDecoder;
//!
//! # fn example() -> metar_decoder::Result<()> {
//! let decoder = MetarDecoder::new();
//! let obs = decoder.parse("KGFK 262353Z 24011KT 10SM BKN100 20/03 A2945")?;
//! assert_eq!(obs.wind_speed_kt, 11);
//! # Ok(())
//! # }
//! ```
//!
//! [`Observation`]: crate::app::models::Observation

pub mod clouds;
pub mod codes;
pub mod decoder;
pub mod header;
pub mod sky;
pub mod temperature;
pub mod tokenizer;
pub mod visibility;
pub mod weather;
pub mod wind;

#[cfg(test)]
mod tests;

// Re-export main types for easy access
pub use codes::{Modifier, Phenomenon, Placement};
pub use decoder::{MetarDecoder, parse};
pub use tokenizer::ReportTokens;
pub use weather::WeatherGroup;
