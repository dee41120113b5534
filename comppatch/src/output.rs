//! Shared output formatting for patch reports.
//!
//! JSON and plain-text formatters for `PatchReport`. Color and terminal
//! formatting are left to the CLI layer.

use std::io::Write;

use crate::report::PatchReport;

/// Format a `PatchReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &PatchReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `PatchReport` as human-readable plain text to a writer.
///
/// The success/failure verdict line is the caller's responsibility; the
/// CLI prints it with color.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &PatchReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer, "  COMPLETION PATCHER")?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer)?;
    writeln!(writer, "  File:               {}", report.file.display())?;
    writeln!(writer, "  Lines scanned:      {}", report.lines_total)?;
    writeln!(writer, "  Path-param lines:   {}", report.path_rule_lines)?;
    writeln!(writer, "  Placeholder hits:   {}", report.placeholder_hits)?;
    writeln!(writer, "  Clauses inserted:   {}", report.clauses_inserted)?;
    writeln!(writer, "  Clause:             {}", report.clause)?;
    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(80))?;
    Ok(())
}
