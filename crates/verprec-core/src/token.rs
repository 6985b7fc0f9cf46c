//! Segment classification
//!
//! Turns one `.`-delimited segment of an identifier into a [`VersionToken`]
//! holding its leading number, its stage label, and the shape it was written
//! in. Classification is tried in this order:
//!
//! 1. contains `-`: `<digits>-<label>`, split at the first dash
//! 2. all ASCII digits: plain number
//! 3. contains a digit: `<digits><label>` with no dash
//! 4. otherwise: a bare label with no number
//!
//! Copyright (c) 2025 Verprec Contributors
//! Licensed under the Apache-2.0 license

use crate::error::Result;
use crate::numeral::Numeral;
use crate::stage::{stage_of, Stage};
use serde::Serialize;

pub use crate::numeral::is_plain_integer;

/// The written shape of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    /// `<digits>-<label>`, e.g. `1-alpha`
    Dashed,
    /// `<digits>`, e.g. `10`
    Numeric,
    /// `<digits><label>`, e.g. `1b`
    EmbeddedSuffix,
    /// `<label>` with no digits at all, e.g. `beta`
    Label,
}

/// Parsed form of a single segment
///
/// `numeric` is `None` exactly when the segment has no leading digits. `None`
/// orders below every `Some`, so comparing the fields directly ranks a bare
/// label under any number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VersionToken<'a> {
    /// The raw segment text
    pub segment: &'a str,
    /// Value of the leading digit run
    pub numeric: Option<Numeral<'a>>,
    /// Non-numeric remainder, absent for plain numbers
    pub label: Option<&'a str>,
    /// How the segment was written
    pub kind: SegmentKind,
}

impl<'a> VersionToken<'a> {
    /// Classify `segment`
    pub fn parse(segment: &'a str) -> Result<Self> {
        if let Some((digits, label)) = segment.split_once('-') {
            return Ok(Self {
                segment,
                numeric: Some(Numeral::parse(segment, digits)?),
                label: Some(label),
                kind: SegmentKind::Dashed,
            });
        }

        // The empty segment lands here and fails to convert.
        if segment.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(Self {
                segment,
                numeric: Some(Numeral::parse(segment, segment)?),
                label: None,
                kind: SegmentKind::Numeric,
            });
        }

        if segment.bytes().any(|b| b.is_ascii_digit()) {
            let split = segment
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(segment.len());
            let (digits, label) = segment.split_at(split);
            return Ok(Self {
                segment,
                numeric: Some(Numeral::parse(segment, digits)?),
                label: Some(label),
                kind: SegmentKind::EmbeddedSuffix,
            });
        }

        Ok(Self {
            segment,
            numeric: None,
            label: Some(segment),
            kind: SegmentKind::Label,
        })
    }

    /// Leading number as decimal text, `-1` standing in for "no leading digits"
    pub fn numeric_value(&self) -> String {
        self.numeric.map_or_else(|| "-1".to_string(), |n| n.to_string())
    }

    pub fn has_dash_separator(&self) -> bool {
        self.kind == SegmentKind::Dashed
    }

    pub fn has_embedded_letter_suffix(&self) -> bool {
        self.kind == SegmentKind::EmbeddedSuffix
    }

    pub fn has_label(&self) -> bool {
        self.label.is_some()
    }

    /// Rank of this token's label in the stage table
    pub fn stage(&self) -> Result<Stage> {
        stage_of(self.label.unwrap_or_default(), self.segment)
    }
}

/// Classify a single segment
pub fn parse_segment(segment: &str) -> Result<VersionToken<'_>> {
    VersionToken::parse(segment)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn value(token: &VersionToken<'_>) -> Option<u64> {
        token.numeric.and_then(|n| n.as_u64())
    }

    #[test]
    fn test_parse_dashed() {
        let token = parse_segment("1-alpha").unwrap();
        assert_eq!(value(&token), Some(1));
        assert_eq!(token.label, Some("alpha"));
        assert!(token.has_dash_separator());
        assert!(!token.has_embedded_letter_suffix());
    }

    #[test]
    fn test_parse_dashed_splits_at_first_dash() {
        let token = parse_segment("2-release-candidate").unwrap();
        assert_eq!(value(&token), Some(2));
        assert_eq!(token.label, Some("release-candidate"));
        assert_eq!(token.kind, SegmentKind::Dashed);
    }

    #[test]
    fn test_parse_dashed_with_empty_label() {
        let token = parse_segment("3-").unwrap();
        assert_eq!(value(&token), Some(3));
        assert_eq!(token.label, Some(""));
    }

    #[test]
    fn test_parse_numeric() {
        let token = parse_segment("10").unwrap();
        assert_eq!(value(&token), Some(10));
        assert_eq!(token.label, None);
        assert_eq!(token.kind, SegmentKind::Numeric);
        assert!(!token.has_dash_separator());
        assert!(!token.has_embedded_letter_suffix());
    }

    #[test]
    fn test_parse_numeric_leading_zeros() {
        assert_eq!(value(&parse_segment("007").unwrap()), Some(7));
        assert_eq!(parse_segment("007").unwrap().numeric_value(), "7");
    }

    #[test]
    fn test_parse_embedded_suffix() {
        let token = parse_segment("1b").unwrap();
        assert_eq!(value(&token), Some(1));
        assert_eq!(token.label, Some("b"));
        assert!(token.has_embedded_letter_suffix());
        assert!(!token.has_dash_separator());

        let token = parse_segment("12rc3").unwrap();
        assert_eq!(value(&token), Some(12));
        assert_eq!(token.label, Some("rc3"));
    }

    #[test]
    fn test_parse_bare_label() {
        let token = parse_segment("alpha").unwrap();
        assert_eq!(token.numeric, None);
        assert_eq!(token.numeric_value(), "-1");
        assert_eq!(token.label, Some("alpha"));
        assert_eq!(token.kind, SegmentKind::Label);

        let token = parse_segment("release candidate").unwrap();
        assert_eq!(token.label, Some("release candidate"));
    }

    #[test]
    fn test_empty_segment_is_unparsable() {
        assert_eq!(
            parse_segment("").unwrap_err(),
            Error::unparsable_numeric("", "")
        );
    }

    #[test]
    fn test_dash_without_digits_is_unparsable() {
        assert_eq!(
            parse_segment("-rc").unwrap_err(),
            Error::unparsable_numeric("-rc", "")
        );
        assert_eq!(
            parse_segment("a-b").unwrap_err(),
            Error::unparsable_numeric("a-b", "a")
        );
    }

    #[test]
    fn test_letter_before_digit_is_unparsable() {
        assert_eq!(
            parse_segment("b2").unwrap_err(),
            Error::unparsable_numeric("b2", "")
        );
    }

    #[test]
    fn test_long_digit_runs_parse() {
        let huge = "184467440737095516160";
        let token = parse_segment(huge).unwrap();
        assert_eq!(token.kind, SegmentKind::Numeric);
        assert_eq!(token.numeric_value(), huge);
        assert_eq!(value(&token), None);

        let token = parse_segment("99999999999999999999999-rc").unwrap();
        assert_eq!(token.numeric_value(), "99999999999999999999999");
        assert_eq!(token.label, Some("rc"));
    }

    #[test]
    fn test_non_ascii_digits_are_letters() {
        // Arabic-Indic digit one is not an ASCII digit
        let token = parse_segment("\u{0661}").unwrap();
        assert_eq!(token.kind, SegmentKind::Label);
    }

    #[test]
    fn test_invariants() {
        for segment in ["1-a", "5", "9x", "beta", "0-", "10rc"] {
            let token = parse_segment(segment).unwrap();
            assert!(!(token.has_dash_separator() && token.has_embedded_letter_suffix()));
            if token.numeric.is_none() {
                assert!(token.label.is_some_and(|l| !l.is_empty()));
            }
        }
    }

    #[test]
    fn test_stage_lookup() {
        assert_eq!(parse_segment("0-rc").unwrap().stage(), Ok(Stage::ReleaseCandidate));
        assert_eq!(
            parse_segment("0-xyz").unwrap().stage(),
            Err(Error::unknown_stage("xyz", "0-xyz"))
        );
    }
}
