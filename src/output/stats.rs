//! Run summary reporting.

use console::style;

use crate::download::{Outcome, Report};

/// Print the per-item and aggregate summary for a run.
pub fn print_report(report: &Report) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Run summary:").bold());

    for (url, outcome) in report.items() {
        match outcome {
            Outcome::Downloaded { bytes } => {
                println!("  {} {} ({} bytes)", style("downloaded").green(), url, bytes);
            }
            Outcome::Skipped => {
                println!("  {} {}", style("skipped").yellow(), url);
            }
            Outcome::Failed(reason) => {
                println!("  {} {} ({})", style("failed").red(), url, reason);
            }
        }
    }

    println!();
    println!("  Downloaded: {} ({} bytes)", report.downloaded(), report.bytes_written());
    println!("  Skipped:    {}", report.skipped());
    if report.failed() > 0 {
        println!("  Failed:     {}", style(report.failed()).red());
    }
    println!("{}", style("═".repeat(50)).dim());
}
