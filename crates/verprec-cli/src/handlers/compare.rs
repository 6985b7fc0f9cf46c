//! Compare command handler

use crate::cli::CompareArgs;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use crate::report::ComparisonReport;
use verprec_core::VersionIdentifier;

/// Handle the compare command
pub fn handle_compare(args: CompareArgs, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("compare", &format!("{} vs {}", args.left, args.right));

    let left = VersionIdentifier::parse(&args.left);
    let right = VersionIdentifier::parse(&args.right);
    output.debug(&format!(
        "comparing {} segment(s) against {}",
        left.len(),
        right.len()
    ))?;

    let decision = left.compare_explained(&right)?;
    tracing::info!(
        left = %left,
        right = %right,
        ordering = ?decision.ordering,
        rule = ?decision.rule,
        "Comparison finished"
    );

    let report = ComparisonReport::new(&left, &right, decision, args.explain);
    output.comparison(&report)
}
