//! Parse command handler

use crate::cli::ParseArgs;
use crate::error::Result;
use crate::output::OutputWriter;
use crate::report::ParseReport;
use verprec_core::VersionIdentifier;

/// Handle the parse command
pub fn handle_parse(args: ParseArgs, output: &mut OutputWriter) -> Result<()> {
    let identifier = VersionIdentifier::parse(&args.identifier);
    let tokens = identifier.tokens()?;
    tracing::debug!(identifier = %identifier, segments = tokens.len(), "Parsed identifier");

    let report = ParseReport::new(identifier.as_str(), tokens);
    output.parse_report(&report)
}
