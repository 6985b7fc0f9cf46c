//! Segment-wise precedence comparison
//!
//! Two identifiers are walked pairwise up to the length of the shorter one.
//! Trailing segments of the longer identifier are never inspected, so
//! `"1.0.0"` and `"1.0.0.0"` tie. The first segment pair that yields a
//! decision ends the walk; a walk that ends without one is reported as
//! `Equal`, even when the identifiers differ textually. The resulting
//! relation is therefore not a total order.
//!
//! Copyright (c) 2025 Verprec Contributors
//! Licensed under the Apache-2.0 license

pub mod rules;


pub use rules::Rule;

use crate::error::Result;
use crate::identifier::VersionIdentifier;
use crate::token::{is_plain_integer, VersionToken};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use tracing::{debug, trace};

/// Outcome of a comparison together with what produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decision {
    /// Precedence of the left identifier relative to the right
    #[serde(serialize_with = "serialize_ordering")]
    pub ordering: Ordering,
    /// Zero-based segment position that decided, if any
    pub position: Option<usize>,
    /// Decision-table row that fired, if any
    pub rule: Option<Rule>,
}

impl Decision {
    fn undecided() -> Self {
        Self {
            ordering: Ordering::Equal,
            position: None,
            rule: None,
        }
    }

    /// Whether some segment pair produced the verdict
    pub fn is_decided(&self) -> bool {
        self.rule.is_some()
    }
}

/// Lowercase name of an ordering (`less`, `equal`, `greater`)
pub fn ordering_name(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    }
}

/// Serialize an ordering by its lowercase name, for `#[serde(serialize_with)]`
pub fn serialize_ordering<S: Serializer>(
    ordering: &Ordering,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(ordering_name(*ordering))
}

/// Compare two identifiers
pub fn compare(a: &str, b: &str) -> Result<Ordering> {
    Ok(compare_explained(a, b)?.ordering)
}

/// Compare two identifiers, reporting the deciding position and rule
pub fn compare_explained(a: &str, b: &str) -> Result<Decision> {
    VersionIdentifier::parse(a).compare_explained(&VersionIdentifier::parse(b))
}

/// `a` strictly precedes `b`
pub fn less_than(a: &str, b: &str) -> Result<bool> {
    Ok(compare(a, b)? == Ordering::Less)
}

/// `a` strictly follows `b`
pub fn greater_than(a: &str, b: &str) -> Result<bool> {
    Ok(compare(a, b)? == Ordering::Greater)
}

/// Every segment pair up to the shorter length is textually identical
pub fn equals(a: &str, b: &str) -> bool {
    VersionIdentifier::parse(a).equals(&VersionIdentifier::parse(b))
}

pub fn not_equals(a: &str, b: &str) -> bool {
    !equals(a, b)
}

/// Walk two segment sequences and stop at the first decisive pair
pub(crate) fn decide(left: &[&str], right: &[&str]) -> Result<Decision> {
    for (position, (l, r)) in left.iter().zip(right.iter()).enumerate() {
        let verdict = decide_pair(l, r).map_err(|e| {
            debug!(position, left = %l, right = %r, error = %e, "segment pair rejected");
            e
        })?;

        if let Some((ordering, rule)) = verdict {
            trace!(position, left = %l, right = %r, ?rule, ?ordering, "segment pair decided");
            return Ok(Decision {
                ordering,
                position: Some(position),
                rule: Some(rule),
            });
        }
    }

    trace!(
        left_len = left.len(),
        right_len = right.len(),
        "no segment pair decided"
    );
    Ok(Decision::undecided())
}

/// Decide a single segment pair, or `None` to move on to the next pair
pub fn decide_pair(left: &str, right: &str) -> Result<Option<(Ordering, Rule)>> {
    if left == right {
        return Ok(None);
    }

    let plain = is_plain_integer(left) && is_plain_integer(right);
    let left = VersionToken::parse(left)?;
    let right = VersionToken::parse(right)?;

    // A numeric tie between plain integers moves on to the next pair
    if plain {
        let verdict = Rule::PlainIntegers.apply(&left, &right)?;
        return Ok(verdict.map(|ordering| (ordering, Rule::PlainIntegers)));
    }

    for rule in Rule::TABLE {
        if let Some(ordering) = rule.apply(&left, &right)? {
            return Ok(Some((ordering, rule)));
        }
    }

    Ok(None)
}
