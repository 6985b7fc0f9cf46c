//! Release stage ranks
//!
//! Maps recognized stage labels to their precedence. The table is constant
//! data shared by every comparison; lookups are exact and case-sensitive.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A recognized release stage, ordered by precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// `alpha`, `a`
    Alpha = 0,
    /// `beta`, `b`
    Beta = 1,
    /// `rc`, `release candidate`
    ReleaseCandidate = 2,
    /// `release`, `r`
    Release = 3,
}

/// Label to stage table
pub static STAGE_RANKS: &[(&str, Stage)] = &[
    ("alpha", Stage::Alpha),
    ("a", Stage::Alpha),
    ("beta", Stage::Beta),
    ("b", Stage::Beta),
    ("rc", Stage::ReleaseCandidate),
    ("release candidate", Stage::ReleaseCandidate),
    ("r", Stage::Release),
    ("release", Stage::Release),
];

impl Stage {
    /// Look up a label, returning `None` when it is not in the table
    pub fn from_label(label: &str) -> Option<Self> {
        STAGE_RANKS
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, stage)| *stage)
    }

    /// Integer rank of this stage
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Canonical label
    pub fn label(self) -> &'static str {
        match self {
            Stage::Alpha => "alpha",
            Stage::Beta => "beta",
            Stage::ReleaseCandidate => "rc",
            Stage::Release => "release",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Resolve the stage of `label`, taken from `segment`
///
/// Unrecognized labels are an error rather than a default rank.
pub fn stage_of(label: &str, segment: &str) -> Result<Stage> {
    Stage::from_label(label).ok_or_else(|| Error::unknown_stage(label, segment))
}
