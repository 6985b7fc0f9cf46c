//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable), with dedicated human
//! renderings for comparison, parse, and check reports.

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::report::{CheckReport, ComparisonReport, ParseReport};
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};
use tracing::{debug, trace};
use verprec_core::{SegmentKind, VersionToken};

/// Trait for formatting output with specialized support for report types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format the result of a comparison
    fn format_comparison(&self, report: &ComparisonReport) -> Result<String>;

    /// Format the result of a check run
    fn format_check(&self, report: &CheckReport) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Human => {
                // For human format, use pretty JSON as fallback
                Ok(serde_json::to_string_pretty(value)?)
            }
        }
    }

    fn format_comparison(&self, report: &ComparisonReport) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_comparison_human(report)),
            _ => self.format(report),
        }
    }

    fn format_check(&self, report: &CheckReport) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_check_summary_human(report)),
            _ => self.format(report),
        }
    }
}

/// Output writer that handles formatting and writing
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    verbose: u8,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer on stdout
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool, verbose: u8) -> Self {
        Self::with_writer(format, use_color, quiet, verbose, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        verbose: u8,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            verbose,
            writer,
        }
    }

    /// Whether output is human-readable
    pub fn is_human(&self) -> bool {
        self.format == OutputFormat::Human
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        debug!("Output info: {}", message);

        if self.quiet || !self.is_human() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || !self.is_human() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if !self.is_human() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.yellow().to_string())
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        trace!(
            "Outputting data: {}",
            serde_json::to_string(value).unwrap_or_else(|_| "[failed to serialize]".to_string())
        );

        let formatted = self.format.format(value)?;
        self.emit(&formatted)
    }

    /// Write a comparison result
    pub fn comparison(&mut self, report: &ComparisonReport) -> Result<()> {
        let formatted = self.format.format_comparison(report)?;
        self.emit(&formatted)
    }

    /// Write a parse result, as a table for human output
    pub fn parse_report(&mut self, report: &ParseReport<'_>) -> Result<()> {
        if !self.is_human() {
            return self.data(report);
        }

        self.writeln(&format!("{} ({} segment(s))", report.identifier, report.segments.len()))?;
        let rows = report.segments.iter().enumerate().map(token_row).collect();
        self.table(&["#", "segment", "numeric", "label", "kind"], rows)
    }

    /// Write a check result, with a per-pair table for human output
    pub fn check_report(&mut self, report: &CheckReport) -> Result<()> {
        if self.is_human() {
            let rows = report
                .report
                .outcomes
                .iter()
                .map(|outcome| {
                    vec![
                        outcome.pair.lower.clone(),
                        outcome.pair.higher.clone(),
                        outcome.forward.clone().unwrap_or_else(|| "-".to_string()),
                        outcome.backward.clone().unwrap_or_else(|| "-".to_string()),
                        self.verdict(outcome.passed()),
                    ]
                })
                .collect();
            self.table(&["lower", "higher", "forward", "backward", "result"], rows)?;
        }

        let formatted = self.format.format_check(report)?;
        self.emit(&formatted)
    }

    /// Write debug information if verbose mode is enabled
    pub fn debug(&mut self, message: &str) -> Result<()> {
        if self.verbose > 0 && self.is_human() {
            if self.use_color {
                self.writeln(&format!("{} {}", "DEBUG:".dimmed(), message.dimmed()))
            } else {
                self.writeln(&format!("DEBUG: {}", message))
            }
        } else {
            Ok(())
        }
    }

    /// Write a table (for human format)
    pub fn table(&mut self, headers: &[&str], rows: Vec<Vec<String>>) -> Result<()> {
        if self.quiet || !self.is_human() {
            return Ok(());
        }

        // Widths count characters, not bytes
        let mut widths = headers.iter().map(|h| h.chars().count()).collect::<Vec<_>>();
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.chars().count());
                }
            }
        }

        let header_row = headers
            .iter()
            .enumerate()
            .map(|(i, h)| format!("{:width$}", h, width = widths[i]))
            .collect::<Vec<_>>()
            .join(" │ ");

        if self.use_color {
            self.writeln(&header_row.bold().to_string())?;
        } else {
            self.writeln(&header_row)?;
        }

        let separator = widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─");
        self.writeln(&separator)?;

        for row in rows {
            let row_str = row
                .iter()
                .enumerate()
                .map(|(i, cell)| match widths.get(i) {
                    Some(width) => format!("{:width$}", cell, width = *width),
                    None => cell.clone(),
                })
                .collect::<Vec<_>>()
                .join(" │ ");
            self.writeln(row_str.trim_end())?;
        }

        Ok(())
    }

    fn verdict(&self, passed: bool) -> String {
        match (passed, self.use_color) {
            (true, true) => "pass".green().to_string(),
            (true, false) => "pass".to_string(),
            (false, true) => "FAIL".red().bold().to_string(),
            (false, false) => "FAIL".to_string(),
        }
    }

    fn emit(&mut self, formatted: &str) -> Result<()> {
        if self.is_human() {
            self.writeln(formatted)
        } else if formatted.ends_with('\n') {
            // YAML already ends in a newline
            self.write(formatted)
        } else {
            self.writeln(formatted)
        }
    }
}

fn kind_name(kind: SegmentKind) -> &'static str {
    match kind {
        SegmentKind::Dashed => "dashed",
        SegmentKind::Numeric => "numeric",
        SegmentKind::EmbeddedSuffix => "embedded suffix",
        SegmentKind::Label => "label",
    }
}

fn token_row((position, token): (usize, &VersionToken<'_>)) -> Vec<String> {
    vec![
        position.to_string(),
        token.segment.to_string(),
        token.numeric_value().to_string(),
        token.label.unwrap_or("").to_string(),
        kind_name(token.kind).to_string(),
    ]
}

/// Format a comparison for human reading
fn format_comparison_human(report: &ComparisonReport) -> String {
    let mut output = format!("{} {} {}\n", report.left, report.symbol(), report.right);
    output.push_str(&format!(
        "textually equal: {}",
        if report.equals { "yes" } else { "no" }
    ));

    if let Some(explanation) = &report.explanation {
        output.push('\n');
        match (explanation.position, explanation.rule) {
            (Some(position), Some(rule)) => output.push_str(&format!(
                "decided at segment {}: {:?} vs {:?} ({})",
                position,
                explanation.left_segment.as_deref().unwrap_or(""),
                explanation.right_segment.as_deref().unwrap_or(""),
                rule
            )),
            _ => output.push_str("undecided: no segment pair settled the comparison"),
        }
    }

    output
}

/// Format the summary line of a check run
fn format_check_summary_human(report: &CheckReport) -> String {
    let total = report.report.passed + report.report.failed;
    let mut output = format!(
        "{} of {} pair(s) passed ({})",
        report.report.passed, total, report.source
    );

    for failure in report.report.failures() {
        output.push_str(&format!(
            "\n  {} < {}: {}",
            failure.pair.lower,
            failure.pair.higher,
            failure
                .error
                .as_deref()
                .unwrap_or("expected less/greater and textual inequality")
        ));
    }

    output
}

#[cfg(test)]
mod tests;
