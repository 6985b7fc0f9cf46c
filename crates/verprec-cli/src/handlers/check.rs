//! Check command handler

use crate::cli::CheckArgs;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use crate::report::CheckReport;
use std::fs;
use std::path::Path;
use verprec_core::{check_pairs, AcceptancePair};

/// Handle the check command
///
/// Fails with [`Error::CheckFailed`] after printing the report when any pair
/// does not order as expected.
pub fn handle_check(args: CheckArgs, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::new("check");

    let (source, pairs) = match &args.pairs {
        Some(path) => (path.display().to_string(), load_pairs(path)?),
        None => ("builtin".to_string(), AcceptancePair::builtin()),
    };
    if pairs.is_empty() {
        return Err(Error::invalid_args(format!("no pairs to check in {}", source)));
    }
    output.info(&format!("Checking {} pair(s) from {}", pairs.len(), source))?;

    let report = CheckReport::new(source, check_pairs(&pairs));
    output.check_report(&report)?;

    if report.report.passed() {
        Ok(())
    } else {
        Err(Error::CheckFailed {
            failed: report.report.failed,
            total: pairs.len(),
        })
    }
}

/// Load a list of `{lower, higher}` pairs from a JSON or YAML file
pub fn load_pairs(path: &Path) -> Result<Vec<AcceptancePair>> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;

    let is_yaml = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s == "yaml" || s == "yml")
        .unwrap_or(false);

    let pairs = if is_yaml {
        serde_yaml::from_str(&content).map_err(|e| {
            tracing::debug!(error = %e, "Rejected pairs file");
            Error::InvalidFormat {
                path: path.to_path_buf(),
                expected: "YAML list of {lower, higher} pairs".to_string(),
            }
        })?
    } else {
        serde_json::from_str(&content).map_err(|e| {
            tracing::debug!(error = %e, "Rejected pairs file");
            Error::InvalidFormat {
                path: path.to_path_buf(),
                expected: "JSON list of {lower, higher} pairs".to_string(),
            }
        })?
    };

    Ok(pairs)
}
