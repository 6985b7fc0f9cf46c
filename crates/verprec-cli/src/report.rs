//! Serializable results produced by the CLI commands
//!
//! Every report carries an RFC 3339 timestamp so that machine output from
//! separate runs can be told apart.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::cmp::Ordering;
use verprec_core::{
    serialize_ordering, AcceptanceReport, Decision, Rule, VersionIdentifier, VersionToken,
};

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Result of `verprec compare`
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub left: String,
    pub right: String,
    /// Serialized as `less`, `equal`, or `greater`
    #[serde(serialize_with = "serialize_ordering")]
    pub ordering: Ordering,
    /// Textual equality over the shared prefix
    pub equals: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<Explanation>,
    pub timestamp: String,
}

/// Which segment pair and rule produced a verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Explanation {
    pub position: Option<usize>,
    pub rule: Option<Rule>,
    pub left_segment: Option<String>,
    pub right_segment: Option<String>,
}

impl ComparisonReport {
    pub fn new(
        left: &VersionIdentifier<'_>,
        right: &VersionIdentifier<'_>,
        decision: Decision,
        explain: bool,
    ) -> Self {
        let explanation = explain.then(|| {
            let segment_at = |id: &VersionIdentifier<'_>| {
                decision
                    .position
                    .and_then(|p| id.segments().get(p))
                    .map(|s| s.to_string())
            };
            Explanation {
                position: decision.position,
                rule: decision.rule,
                left_segment: segment_at(left),
                right_segment: segment_at(right),
            }
        });

        Self {
            left: left.as_str().to_string(),
            right: right.as_str().to_string(),
            ordering: decision.ordering,
            equals: left.equals(right),
            explanation,
            timestamp: timestamp(),
        }
    }

    /// Relation symbol between the two identifiers
    pub fn symbol(&self) -> &'static str {
        match self.ordering {
            Ordering::Less => "<",
            Ordering::Equal => "=",
            Ordering::Greater => ">",
        }
    }
}

/// Result of `verprec parse`
#[derive(Debug, Clone, Serialize)]
pub struct ParseReport<'a> {
    pub identifier: &'a str,
    pub segments: Vec<VersionToken<'a>>,
    pub timestamp: String,
}

impl<'a> ParseReport<'a> {
    pub fn new(identifier: &'a str, segments: Vec<VersionToken<'a>>) -> Self {
        Self {
            identifier,
            segments,
            timestamp: timestamp(),
        }
    }
}

/// Result of `verprec check`
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// `builtin` or the path the pairs were read from
    pub source: String,
    #[serde(flatten)]
    pub report: AcceptanceReport,
    pub timestamp: String,
}

impl CheckReport {
    pub fn new(source: impl Into<String>, report: AcceptanceReport) -> Self {
        Self {
            source: source.into(),
            report,
            timestamp: timestamp(),
        }
    }
}
