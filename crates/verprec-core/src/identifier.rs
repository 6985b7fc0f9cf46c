//! Dotted version identifiers

use crate::comparator::{self, Decision};
use crate::error::Result;
use crate::token::VersionToken;
use std::cmp::Ordering;
use std::fmt;

/// An identifier split into its raw `.`-delimited segments
///
/// Segments are kept verbatim; `"1..2"` has an empty middle segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionIdentifier<'a> {
    raw: &'a str,
    segments: Vec<&'a str>,
}

impl<'a> VersionIdentifier<'a> {
    /// Split `raw` on `.`
    pub fn parse(raw: &'a str) -> Self {
        Self {
            raw,
            segments: raw.split('.').collect(),
        }
    }

    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    /// Number of segments; never zero
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Classify every segment, failing on the first unparsable one
    pub fn tokens(&self) -> Result<Vec<VersionToken<'a>>> {
        self.segments.iter().copied().map(VersionToken::parse).collect()
    }

    /// Three-way precedence against `other`
    pub fn compare(&self, other: &VersionIdentifier<'_>) -> Result<Ordering> {
        Ok(self.compare_explained(other)?.ordering)
    }

    /// Precedence against `other`, with the position and rule that decided it
    pub fn compare_explained(&self, other: &VersionIdentifier<'_>) -> Result<Decision> {
        comparator::decide(&self.segments, &other.segments)
    }

    /// Textual equality over the shared prefix of segments
    pub fn equals(&self, other: &VersionIdentifier<'_>) -> bool {
        self.segments
            .iter()
            .zip(other.segments.iter())
            .all(|(a, b)| a == b)
    }
}

impl fmt::Display for VersionIdentifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}

impl<'a> From<&'a str> for VersionIdentifier<'a> {
    fn from(raw: &'a str) -> Self {
        Self::parse(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::SegmentKind;

    #[test]
    fn test_split_preserves_empty_segments() {
        let id = VersionIdentifier::parse("1..2.");
        assert_eq!(id.segments(), &["1", "", "2", ""]);
        assert_eq!(id.len(), 4);
    }

    #[test]
    fn test_empty_identifier_has_one_segment() {
        let id = VersionIdentifier::parse("");
        assert_eq!(id.segments(), &[""]);
        assert!(id.is_empty());
    }

    #[test]
    fn test_tokens() {
        let id = VersionIdentifier::parse("1.0.10-alpha.beta");
        let kinds: Vec<_> = id.tokens().unwrap().iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SegmentKind::Numeric,
                SegmentKind::Numeric,
                SegmentKind::Dashed,
                SegmentKind::Label,
            ]
        );
    }

    #[test]
    fn test_tokens_fail_on_empty_segment() {
        assert!(VersionIdentifier::parse("1..2").tokens().is_err());
    }

    #[test]
    fn test_equals_ignores_extra_segments() {
        let short = VersionIdentifier::parse("1.0.0");
        let long = VersionIdentifier::parse("1.0.0.0");
        assert!(short.equals(&long));
        assert!(long.equals(&short));
        assert!(!short.equals(&VersionIdentifier::parse("1.0.1")));
    }

    #[test]
    fn test_display_round_trips_raw_text() {
        assert_eq!(VersionIdentifier::from("1.0-rc").to_string(), "1.0-rc");
    }
}
