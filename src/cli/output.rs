//! Output formatting utilities

use crate::application::{FileOutcome, StripReport};

/// Confirmation line for one processed file
pub fn format_outcome(outcome: &FileOutcome, dry_run: bool) -> String {
    if dry_run {
        format!("Would fix {}", outcome.path.display())
    } else {
        format!("Fixed {}", outcome.path.display())
    }
}

/// Closing summary, only worth printing for multi-file or dry runs
pub fn format_summary(report: &StripReport) -> String {
    let verb = if report.dry_run { "Would update" } else { "Updated" };
    format!(
        "{} {} of {} file(s) with {} replacement(s).",
        verb,
        report.changed_files(),
        report.outcomes.len(),
        report.total_replacements()
    )
}
