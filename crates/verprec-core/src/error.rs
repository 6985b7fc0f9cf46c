//! Error types for the Verprec core library
//!
//! Both failure modes are input-validation failures: the comparator is pure
//! and deterministic, so an error for a given pair of identifiers will be
//! raised again on every retry.

use thiserror::Error;

/// Main error type for Verprec operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A digit run that should convert to an integer did not
    #[error("Unparsable numeric part {digits:?} in segment {segment:?}")]
    UnparsableNumeric {
        /// The segment being classified
        segment: String,
        /// The digit run that failed to convert (may be empty)
        digits: String,
    },

    /// A decisive rule needed the rank of a label missing from the stage table
    #[error("Unknown stage label {label:?} in segment {segment:?}")]
    UnknownStage {
        /// The unrecognized label
        label: String,
        /// The segment the label was taken from
        segment: String,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an unparsable numeric error
    pub fn unparsable_numeric(segment: impl Into<String>, digits: impl Into<String>) -> Self {
        Self::UnparsableNumeric {
            segment: segment.into(),
            digits: digits.into(),
        }
    }

    /// Create an unknown stage error
    pub fn unknown_stage(label: impl Into<String>, segment: impl Into<String>) -> Self {
        Self::UnknownStage {
            label: label.into(),
            segment: segment.into(),
        }
    }

    /// The segment that triggered this error
    pub fn segment(&self) -> &str {
        match self {
            Self::UnparsableNumeric { segment, .. } | Self::UnknownStage { segment, .. } => segment,
        }
    }

    /// Short machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnparsableNumeric { .. } => "unparsable_numeric",
            Self::UnknownStage { .. } => "unknown_stage",
        }
    }
}
