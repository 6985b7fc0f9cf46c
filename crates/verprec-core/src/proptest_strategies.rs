//! Property-based testing strategies for generating test data
//!
//! This module provides proptest strategies for generating random
//! identifiers in the grammar the comparator understands.

#![cfg(test)]

use crate::stage::STAGE_RANKS;
use proptest::collection::vec;
use proptest::prelude::*;

/// Strategy for a recognized stage label
pub fn stage_label_strategy() -> impl Strategy<Value = String> {
    proptest::sample::select(STAGE_RANKS.iter().map(|(label, _)| label.to_string()).collect::<Vec<_>>())
}

/// Strategy for a single segment in any of the four written shapes
pub fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Plain numbers, leading zeros included
        "[0-9]{1,3}",
        // Dashed with a recognized stage
        ("[0-9]{1,2}", stage_label_strategy()).prop_map(|(n, s)| format!("{}-{}", n, s)),
        // Embedded letter suffix
        "[0-9]{1,2}[a-z]{1,3}",
        // Bare recognized stage
        stage_label_strategy(),
    ]
}

/// Strategy for identifiers whose every stage label is recognized
pub fn identifier_strategy() -> impl Strategy<Value = String> {
    vec(segment_strategy(), 1..5).prop_map(|segments| segments.join("."))
}

/// Strategy for short, loosely shaped identifiers that may fail to compare
pub fn loose_identifier_strategy() -> impl Strategy<Value = String> {
    vec("[a-z0-9 -]{0,4}", 1..4).prop_map(|segments| segments.join("."))
}

/// Strategy for two all-numeric identifiers of equal length
pub fn numeric_pair_strategy() -> impl Strategy<Value = (Vec<u32>, Vec<u32>)> {
    (1usize..6).prop_flat_map(|n| (vec(0u32..1000, n), vec(0u32..1000, n)))
}

/// Join numbers into a dotted identifier
pub fn join_numeric(parts: &[u32]) -> String {
    parts
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

/// Strategy for a `u128` and its decimal form with up to three leading zeros
pub fn wide_number_strategy() -> impl Strategy<Value = (u128, String)> {
    (any::<u128>(), 0usize..4).prop_map(|(n, zeros)| (n, format!("{}{}", "0".repeat(zeros), n)))
}
