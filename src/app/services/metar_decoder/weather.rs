//! Weather phenomena group decoding and rendering
//!
//! A weather group is an unbroken concatenation of modifier and phenomenon
//! codes (`-RA`, `+TSRA`, `VCSH`, `-FZDZ`). Decoding runs a maximal-munch
//! scan over the closed code alphabet: a token qualifies as the weather
//! group only if it tokenizes completely with at least one phenomenon.
//! Tokens with unrecognized residue are skipped rather than rejected, so an
//! unknown code in some unrelated group can never fail the parse.
//!
//! Rendering is three ordered sequences joined by single spaces: modifiers
//! placed before the phenomenon names (descending priority, intensity
//! markers outermost), the phenomenon names in discovery order, then the
//! suffix-placed modifiers (again by descending priority).

use super::codes::{Modifier, Phenomenon, Placement};
use super::tokenizer::ReportTokens;
use crate::constants::NO_WEATHER_PRESENT;
use tracing::debug;

/// Decoded weather group prior to rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherGroup {
    /// Modifiers in discovery order
    pub modifiers: Vec<Modifier>,

    /// Phenomena in discovery order
    pub phenomena: Vec<Phenomenon>,
}

impl WeatherGroup {
    /// Whether any decoded phenomenon carries the severity flag
    pub fn is_severe(&self) -> bool {
        self.phenomena.iter().any(|p| p.is_severe())
    }

    /// Render the group as human-readable text
    pub fn render(&self) -> String {
        let mut sorted = self.modifiers.clone();
        // Stable: ties keep discovery order
        sorted.sort_by_key(|m| std::cmp::Reverse(m.priority()));

        let prefix = sorted
            .iter()
            .filter(|m| m.placement() == Placement::Prefix)
            .map(|m| m.name());
        let names = self.phenomena.iter().map(|p| p.name());
        let suffix = sorted
            .iter()
            .filter(|m| m.placement() == Placement::Suffix)
            .map(|m| m.name());

        prefix
            .chain(names)
            .chain(suffix)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Decode the first weather group in the report body and render it
///
/// Returns the fixed no-weather sentinel when no body token qualifies.
pub fn decode_weather(tokens: &ReportTokens) -> String {
    match find_weather_group(tokens) {
        Some(group) => {
            debug!(
                phenomena = group.phenomena.len(),
                modifiers = group.modifiers.len(),
                severe = group.is_severe(),
                "decoded weather group"
            );
            group.render()
        }
        None => NO_WEATHER_PRESENT.to_string(),
    }
}

/// Locate the first body token that scans as a complete weather group
pub fn find_weather_group(tokens: &ReportTokens) -> Option<WeatherGroup> {
    tokens.body().iter().find_map(|t| scan_group(t))
}

/// Maximal-munch scan of one token over the modifier/phenomenon alphabet
///
/// Consumes left to right, preferring the longest code at each position and
/// modifiers over phenomena on ties. Returns `None` unless the whole token
/// is consumed and at least one phenomenon was found.
fn scan_group(token: &str) -> Option<WeatherGroup> {
    if token.is_empty() || !token.is_ascii() {
        return None;
    }

    let mut modifiers = Vec::new();
    let mut phenomena = Vec::new();

    let mut rest = token;
    while !rest.is_empty() {
        // Two-character codes first (maximal munch), modifiers before
        // phenomena; the tables are lexically disjoint so the preference
        // only matters as a tie-break rule, not for any current code.
        if rest.len() >= 2 {
            let candidate = &rest[..2];
            if let Some(modifier) = Modifier::from_code(candidate) {
                modifiers.push(modifier);
                rest = &rest[2..];
                continue;
            }
            if let Some(phenomenon) = Phenomenon::from_code(candidate) {
                phenomena.push(phenomenon);
                rest = &rest[2..];
                continue;
            }
        }

        let candidate = &rest[..1];
        if let Some(modifier) = Modifier::from_code(candidate) {
            modifiers.push(modifier);
            rest = &rest[1..];
            continue;
        }

        // Unconsumable residue: not a weather group
        return None;
    }

    if phenomena.is_empty() {
        return None;
    }

    Some(WeatherGroup {
        modifiers,
        phenomena,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_single_phenomenon() {
        let group = scan_group("RA").unwrap();
        assert!(group.modifiers.is_empty());
        assert_eq!(group.phenomena, vec![Phenomenon::Rain]);
    }

    #[test]
    fn test_scan_intensity_and_chain() {
        let group = scan_group("+TSRA").unwrap();
        assert_eq!(group.modifiers, vec![Modifier::Heavy]);
        assert_eq!(
            group.phenomena,
            vec![Phenomenon::Thunderstorm, Phenomenon::Rain]
        );
    }

    #[test]
    fn test_scan_rejects_residue() {
        assert!(scan_group("RAX").is_none());
        assert!(scan_group("KGFK").is_none());
        assert!(scan_group("24011KT").is_none());
    }

    #[test]
    fn test_scan_rejects_modifiers_alone() {
        assert!(scan_group("FZ").is_none());
        assert!(scan_group("+").is_none());
    }

    #[test]
    fn test_render_intensity_precedes_phenomenon() {
        let group = scan_group("-RA").unwrap();
        assert_eq!(group.render(), "slight rain");
    }

    #[test]
    fn test_render_suffix_placement() {
        let group = scan_group("VCSH").unwrap();
        assert_eq!(group.render(), "shower in vicinity");

        let group = scan_group("BCFG").unwrap();
        assert_eq!(group.render(), "fog patches");
    }

    #[test]
    fn test_render_priority_order_between_prefix_modifiers() {
        // Intensity (100) outranks freezing (6): slight freezing drizzle
        let group = scan_group("-FZDZ").unwrap();
        assert_eq!(group.render(), "slight freezing drizzle");

        // Same result regardless of code order in the token
        let group = scan_group("FZ-DZ").unwrap();
        assert_eq!(group.render(), "slight freezing drizzle");
    }

    #[test]
    fn test_severity() {
        assert!(scan_group("+TSRA").unwrap().is_severe());
        assert!(!scan_group("-RA").unwrap().is_severe());
    }
}
