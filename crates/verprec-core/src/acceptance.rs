//! Acceptance harness
//!
//! Checks that each `(lower, higher)` pair satisfies the three relations a
//! caller relies on: `lower` precedes `higher`, `higher` follows `lower`, and
//! the two are not textually equal.

use crate::comparator::{compare, not_equals, ordering_name};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// The reference dataset, as `(lower, higher)` pairs
pub const ACCEPTANCE_PAIRS: [(&str, &str); 7] = [
    ("1.0.0", "2.0.0"),
    ("1.0.0", "1.42.0"),
    ("1.2.0", "1.2.42"),
    ("1.1.0-alpha", "1.2.0-alpha.1"),
    ("1.0.1b", "1.0.10-alpha.beta"),
    ("1.0.0-rc.1", "1.0.0"),
    ("beta", "2-rc"),
];

/// A pair expected to compare as `lower < higher`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptancePair {
    pub lower: String,
    pub higher: String,
}

impl AcceptancePair {
    pub fn new(lower: impl Into<String>, higher: impl Into<String>) -> Self {
        Self {
            lower: lower.into(),
            higher: higher.into(),
        }
    }

    /// The built-in dataset
    pub fn builtin() -> Vec<Self> {
        ACCEPTANCE_PAIRS
            .iter()
            .map(|(lower, higher)| Self::new(*lower, *higher))
            .collect()
    }
}

/// Result of checking one pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairOutcome {
    pub pair: AcceptancePair,
    /// Verdict of `compare(lower, higher)`, when it succeeded
    pub forward: Option<String>,
    /// Verdict of `compare(higher, lower)`, when it succeeded
    pub backward: Option<String>,
    /// `not_equals(higher, lower)`
    pub not_equal: bool,
    /// Comparator error, if either direction failed
    pub error: Option<String>,
}

impl PairOutcome {
    /// All three relations hold
    pub fn passed(&self) -> bool {
        self.error.is_none()
            && self.forward.as_deref() == Some(ordering_name(Ordering::Less))
            && self.backward.as_deref() == Some(ordering_name(Ordering::Greater))
            && self.not_equal
    }
}

/// Results for a batch of pairs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AcceptanceReport {
    pub outcomes: Vec<PairOutcome>,
    pub passed: usize,
    pub failed: usize,
}

impl AcceptanceReport {
    /// Every pair passed
    pub fn passed(&self) -> bool {
        self.failed == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &PairOutcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }
}

/// Check a single pair
pub fn check_pair(pair: &AcceptancePair) -> PairOutcome {
    let forward = compare(&pair.lower, &pair.higher);
    let backward = compare(&pair.higher, &pair.lower);
    let error = match (&forward, &backward) {
        (Err(e), _) | (_, Err(e)) => Some(e.to_string()),
        _ => None,
    };

    let outcome = PairOutcome {
        pair: pair.clone(),
        forward: forward.ok().map(|o| ordering_name(o).to_string()),
        backward: backward.ok().map(|o| ordering_name(o).to_string()),
        not_equal: not_equals(&pair.higher, &pair.lower),
        error,
    };
    debug!(lower = %pair.lower, higher = %pair.higher, passed = outcome.passed(), "checked pair");
    outcome
}

/// Check every pair in `pairs`
pub fn check_pairs(pairs: &[AcceptancePair]) -> AcceptanceReport {
    let outcomes: Vec<_> = pairs.iter().map(check_pair).collect();
    let passed = outcomes.iter().filter(|o| o.passed()).count();
    AcceptanceReport {
        failed: outcomes.len() - passed,
        passed,
        outcomes,
    }
}
