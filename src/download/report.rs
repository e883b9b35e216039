//! Per-item download outcomes and the run summary.

use std::fmt;

/// Why a download produced no file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailReason {
    /// URL failed the syntactic well-formedness check; no request issued.
    InvalidUrl,
    /// Connection, timeout, or mid-transfer read error.
    Network(String),
    /// Server answered with a non-200 status.
    Status(u16),
    /// 200 response carrying zero bytes.
    EmptyBody,
    /// The transfer completed but the file could not be written.
    Write(String),
}

impl fmt::Display for FailReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailReason::InvalidUrl => write!(f, "invalid URL"),
            FailReason::Network(msg) => write!(f, "network error: {}", msg),
            FailReason::Status(code) => write!(f, "HTTP status {}", code),
            FailReason::EmptyBody => write!(f, "empty body"),
            FailReason::Write(msg) => write!(f, "write error: {}", msg),
        }
    }
}

/// Result of processing one asset URL.
///
/// Failures are data, not errors: the batch always runs to completion and
/// logging consumes these as a side effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// File written to disk.
    Downloaded { bytes: u64 },
    /// File already present; no request was issued.
    Skipped,
    /// No file created.
    Failed(FailReason),
}

/// Summary of a whole pipeline run.
#[derive(Debug, Default)]
pub struct Report {
    items: Vec<(String, Outcome)>,
}

impl Report {
    /// Record the outcome for one URL.
    pub fn record(&mut self, url: String, outcome: Outcome) {
        self.items.push((url, outcome));
    }

    /// All recorded items in processing order.
    pub fn items(&self) -> &[(String, Outcome)] {
        &self.items
    }

    /// Number of files written.
    pub fn downloaded(&self) -> u64 {
        self.count(|o| matches!(o, Outcome::Downloaded { .. }))
    }

    /// Number of already-present files skipped.
    pub fn skipped(&self) -> u64 {
        self.count(|o| matches!(o, Outcome::Skipped))
    }

    /// Number of failed items.
    pub fn failed(&self) -> u64 {
        self.count(|o| matches!(o, Outcome::Failed(_)))
    }

    /// Total bytes written across all downloads.
    pub fn bytes_written(&self) -> u64 {
        self.items
            .iter()
            .map(|(_, outcome)| match outcome {
                Outcome::Downloaded { bytes } => *bytes,
                _ => 0,
            })
            .sum()
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> u64 {
        self.items.iter().filter(|(_, o)| pred(o)).count() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counters() {
        let mut report = Report::default();
        report.record("a.pdf".into(), Outcome::Downloaded { bytes: 10 });
        report.record("b.pdf".into(), Outcome::Downloaded { bytes: 5 });
        report.record("c.pdf".into(), Outcome::Skipped);
        report.record("d.pdf".into(), Outcome::Failed(FailReason::EmptyBody));

        assert_eq!(report.downloaded(), 2);
        assert_eq!(report.skipped(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.bytes_written(), 15);
    }
}
