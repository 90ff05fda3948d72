//! Report tokenization and remarks boundary handling
//!
//! A METAR is a single line of space-delimited groups, optionally followed
//! by a remarks section introduced by the `RMK` marker. The token sequence
//! is built once per report and never mutated; all downstream decoders
//! locate their groups by predicate over the body view, because optional
//! groups (gusts, AUTO, remarks) shift positional offsets.

use crate::constants::REMARKS_MARKER;

/// Immutable token sequence for one report
///
/// Splitting is on single spaces with no collapsing of repeated separators:
/// a malformed report with doubled spaces yields empty tokens, which every
/// field locator must tolerate (anchored grammars simply never match them).
#[derive(Debug, Clone)]
pub struct ReportTokens {
    tokens: Vec<String>,
    remarks_start: Option<usize>,
}

impl ReportTokens {
    /// Tokenize a raw report and locate the remarks boundary
    pub fn tokenize(raw: &str) -> Self {
        let tokens: Vec<String> = raw.split(' ').map(|s| s.to_string()).collect();
        let remarks_start = tokens.iter().position(|t| t == REMARKS_MARKER);

        Self {
            tokens,
            remarks_start,
        }
    }

    /// Tokens before the remarks marker; the searchable report body
    pub fn body(&self) -> &[String] {
        match self.remarks_start {
            Some(index) => &self.tokens[..index],
            None => &self.tokens,
        }
    }

    /// Raw tokens after the remarks marker; empty when no marker exists
    pub fn remarks(&self) -> &[String] {
        match self.remarks_start {
            Some(index) => &self.tokens[index + 1..],
            None => &[],
        }
    }

    /// First body token, the station identifier position
    pub fn first(&self) -> Option<&str> {
        self.body().first().map(|s| s.as_str())
    }

    /// Whether the body contains an exact literal token
    pub fn body_contains(&self, literal: &str) -> bool {
        self.body().iter().any(|t| t == literal)
    }

    /// First body token satisfying a predicate
    pub fn find_body<P>(&self, predicate: P) -> Option<&str>
    where
        P: Fn(&str) -> bool,
    {
        self.body()
            .iter()
            .map(|s| s.as_str())
            .find(|t| predicate(t))
    }
}
