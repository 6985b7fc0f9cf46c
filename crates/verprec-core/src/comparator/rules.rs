//! Tie-break decision table
//!
//! Each [`Rule`] is a guarded row: it either fires and yields an ordering for
//! the segment pair, or passes. Rows are tried in [`Rule::TABLE`] order and the
//! first one that fires decides the whole comparison, even when its verdict is
//! `Equal`.
//!
//! Copyright (c) 2025 Verprec Contributors
//! Licensed under the Apache-2.0 license

use crate::error::Result;
use crate::token::VersionToken;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// A row of the decision table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Both segments are plain integers and differ numerically.
    /// Used in place of the table when both raw segments are all digits.
    PlainIntegers,
    /// Leading numbers differ; a bare label counts as -1
    NumericValue,
    /// Both dashed with equal numbers: compare stage ranks
    DashedStages,
    /// Both bare labels: compare stage ranks
    BareStages,
    /// Exactly one side dashed: the dashed side is lower
    DashPresence,
    /// Both `<digits><letters>` with equal numbers: compare labels as text
    EmbeddedSuffix,
    /// Equal numbers, only one side labelled: the unlabelled side is higher
    LabelPresence,
}

impl Rule {
    /// Token rules in evaluation order
    pub const TABLE: [Rule; 6] = [
        Rule::NumericValue,
        Rule::DashedStages,
        Rule::BareStages,
        Rule::DashPresence,
        Rule::EmbeddedSuffix,
        Rule::LabelPresence,
    ];

    /// Evaluate this row for a pair of tokens
    ///
    /// `Ok(None)` means the row does not fire. Stage rows fail with
    /// `UnknownStage` when either label is missing from the stage table.
    pub fn apply(self, left: &VersionToken<'_>, right: &VersionToken<'_>) -> Result<Option<Ordering>> {
        let same_number = left.numeric == right.numeric;
        let ordering = match self {
            Rule::PlainIntegers => {
                let both_plain = left.label.is_none() && right.label.is_none();
                (both_plain && !same_number).then(|| left.numeric.cmp(&right.numeric))
            }
            Rule::NumericValue => (!same_number).then(|| left.numeric.cmp(&right.numeric)),
            Rule::DashedStages => {
                if same_number && left.has_dash_separator() && right.has_dash_separator() {
                    Some(left.stage()?.cmp(&right.stage()?))
                } else {
                    None
                }
            }
            Rule::BareStages => {
                if left.numeric.is_none() && right.numeric.is_none() {
                    Some(left.stage()?.cmp(&right.stage()?))
                } else {
                    None
                }
            }
            Rule::DashPresence => match (left.has_dash_separator(), right.has_dash_separator()) {
                (true, false) => Some(Ordering::Less),
                (false, true) => Some(Ordering::Greater),
                _ => None,
            },
            Rule::EmbeddedSuffix => {
                let both = left.has_embedded_letter_suffix() && right.has_embedded_letter_suffix();
                (both && same_number).then(|| left.label.cmp(&right.label))
            }
            Rule::LabelPresence => {
                if !same_number {
                    None
                } else {
                    match (left.has_label(), right.has_label()) {
                        (false, true) => Some(Ordering::Greater),
                        (true, false) => Some(Ordering::Less),
                        _ => None,
                    }
                }
            }
        };
        Ok(ordering)
    }

    /// One-line human description
    pub fn description(self) -> &'static str {
        match self {
            Rule::PlainIntegers => "plain integer segments differ",
            Rule::NumericValue => "leading numbers differ",
            Rule::DashedStages => "dashed stages ranked",
            Rule::BareStages => "bare stage labels ranked",
            Rule::DashPresence => "dashed segment precedes undashed",
            Rule::EmbeddedSuffix => "embedded suffixes compared as text",
            Rule::LabelPresence => "unlabelled segment follows labelled",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
