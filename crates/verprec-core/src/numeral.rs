//! Arbitrary-length decimal numbers borrowed from segment text
//!
//! A [`Numeral`] keeps the significant digits of an ASCII digit run and
//! orders by digit count, then lexicographically. No conversion to a
//! machine integer happens, so segments of any length compare exactly.
//!
//! Copyright (c) 2025 Verprec Contributors
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Non-negative integer written as a run of ASCII digits
///
/// Leading zeros are dropped on construction, so `007` and `7` are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Numeral<'a> {
    digits: &'a str,
}

impl<'a> Numeral<'a> {
    /// Read `digits`, a digit run taken from `segment`
    ///
    /// Fails with `UnparsableNumeric` when `digits` is empty or holds anything
    /// but ASCII digits.
    pub fn parse(segment: &str, digits: &'a str) -> Result<Self> {
        if !is_plain_integer(digits) {
            return Err(Error::unparsable_numeric(segment, digits));
        }

        let significant = digits.trim_start_matches('0');
        let digits = if significant.is_empty() {
            &digits[digits.len() - 1..]
        } else {
            significant
        };
        Ok(Self { digits })
    }

    /// Significant digits, `"0"` for zero
    pub fn as_str(&self) -> &'a str {
        self.digits
    }

    /// Value as a `u64`, when it fits
    pub fn as_u64(&self) -> Option<u64> {
        self.digits.parse().ok()
    }
}

impl Ord for Numeral<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(other.digits))
    }
}

impl PartialOrd for Numeral<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Numeral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.digits)
    }
}

/// Serialized as a number when it fits in `u64`, else as a decimal string
impl Serialize for Numeral<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.as_u64() {
            Some(value) => serializer.serialize_u64(value),
            None => serializer.serialize_str(self.digits),
        }
    }
}

/// True when `segment` is a non-empty run of ASCII digits
pub fn is_plain_integer(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(digits: &str) -> Numeral<'_> {
        Numeral::parse(digits, digits).unwrap()
    }

    #[test]
    fn test_leading_zeros_dropped() {
        assert_eq!(num("007").as_str(), "7");
        assert_eq!(num("000").as_str(), "0");
        assert_eq!(num("0"), num("00"));
        assert_eq!(num("010"), num("10"));
    }

    #[test]
    fn test_ordering() {
        assert!(num("9") < num("10"));
        assert!(num("0099") < num("100"));
        assert!(num("123") < num("124"));
        assert_eq!(num("42").cmp(&num("042")), Ordering::Equal);
    }

    #[test]
    fn test_beyond_u64() {
        let max = num("18446744073709551615");
        let above = num("18446744073709551616");
        let huge = num("99999999999999999999999");
        assert_eq!(max.as_u64(), Some(u64::MAX));
        assert_eq!(above.as_u64(), None);
        assert!(max < above);
        assert!(above < huge);
    }

    #[test]
    fn test_rejects_non_digits() {
        assert_eq!(Numeral::parse("-rc", ""), Err(Error::unparsable_numeric("-rc", "")));
        assert_eq!(Numeral::parse("a-b", "a"), Err(Error::unparsable_numeric("a-b", "a")));
        assert!(Numeral::parse("+1", "+1").is_err());
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_value(num("0042")).unwrap(), serde_json::json!(42));
        assert_eq!(
            serde_json::to_value(num("18446744073709551616")).unwrap(),
            serde_json::json!("18446744073709551616")
        );
    }

    #[test]
    fn test_is_plain_integer() {
        assert!(is_plain_integer("0"));
        assert!(is_plain_integer("0042"));
        assert!(!is_plain_integer(""));
        assert!(!is_plain_integer("+1"));
        assert!(!is_plain_integer("1b"));
    }
}
