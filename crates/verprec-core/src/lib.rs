//! Verprec Core - precedence engine for dotted version identifiers
//!
//! This crate orders version-like strings such as `"1.0.1b"` and
//! `"1.0.10-alpha.beta"` under a small grammar of numeric segments,
//! dash-delimited stages, and digit-letter suffixes.
//!
//! # Main Components
//!
//! - **Segment parsing**: [`VersionToken`] classifies one `.`-delimited segment;
//!   its leading digits become a [`Numeral`] of any length
//! - **Stage ranks**: [`Stage`] maps labels such as `rc` to their precedence
//! - **Comparison**: [`compare`] walks two identifiers and applies the
//!   tie-break [`Rule`] table
//! - **Acceptance**: [`acceptance`] checks batches of expected orderings
//!
//! # Example
//!
//! ```
//! use std::cmp::Ordering;
//! use verprec_core::{compare, not_equals, Result};
//!
//! fn example() -> Result<()> {
//!     assert_eq!(compare("1.0.0-rc.1", "1.0.0")?, Ordering::Less);
//!     assert!(not_equals("1.0.0-rc.1", "1.0.0"));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! Comparison stops at the shorter identifier and reports an undecided walk
//! as `Equal`, so the relation is not a total order. Do not use it as a sort
//! key.

pub mod acceptance;
pub mod comparator;
pub mod error;
pub mod identifier;
pub mod numeral;
pub mod stage;
pub mod token;

mod proptest_strategies;

pub use acceptance::{check_pairs, AcceptancePair, AcceptanceReport, PairOutcome, ACCEPTANCE_PAIRS};
pub use comparator::{
    compare, compare_explained, equals, greater_than, less_than, not_equals, ordering_name,
    serialize_ordering, Decision, Rule,
};
pub use error::{Error, Result};
pub use identifier::VersionIdentifier;
pub use numeral::Numeral;
pub use stage::{Stage, STAGE_RANKS};
pub use token::{parse_segment, SegmentKind, VersionToken};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
