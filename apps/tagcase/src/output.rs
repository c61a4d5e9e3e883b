//! Output rendering for lint results.
//!
//! `human` prints one `file:line: message` line per diagnostic on stdout and
//! nothing else; skipped files go to stderr. `json` prints the whole report.

use crate::config::OutputMode;
use crate::error::LintError;
use crate::models::LintReport;
use crate::utils;
use serde_json::Value as JsonVal;

/// Print lint results in the requested format.
pub fn print_lint(report: &LintReport, output: OutputMode, color: bool) -> Result<(), LintError> {
    print!("{}", render_lint(report, output)?);
    if output == OutputMode::Human {
        for skipped in &report.skipped {
            eprintln!("{} skipped {}", utils::warning_prefix(color), skipped);
        }
        if !report.skipped.is_empty() {
            eprintln!(
                "{} {} file(s) could not be parsed",
                utils::note_prefix(color),
                report.skipped.len()
            );
        }
    }
    Ok(())
}

/// Everything that goes to stdout for `report`.
pub fn render_lint(report: &LintReport, output: OutputMode) -> Result<String, LintError> {
    match output {
        OutputMode::Json => {
            let mut out = serde_json::to_string_pretty(&compose_lint_json(report)?)?;
            out.push('\n');
            Ok(out)
        }
        OutputMode::Human => Ok(human_lines(report)
            .into_iter()
            .map(|line| line + "\n")
            .collect()),
    }
}

/// Diagnostic lines exactly as printed in human mode.
pub fn human_lines(report: &LintReport) -> Vec<String> {
    report.diagnostics.iter().map(|d| d.to_string()).collect()
}

/// Compose the lint JSON object.
pub fn compose_lint_json(report: &LintReport) -> Result<JsonVal, serde_json::Error> {
    serde_json::to_value(report)
}

/// Process exit code for a finished run.
pub fn exit_code(report: &LintReport) -> i32 {
    if !report.diagnostics.is_empty() {
        1
    } else if !report.skipped.is_empty() {
        2
    } else {
        0
    }
}
