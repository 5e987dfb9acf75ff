//! JSON rendering of lint reports
//!
//! Collects every file's report and emits a single pretty-printed JSON
//! array, suitable for piping into other tools.

use anyhow::Result;
use diagnostics::{FileReport, Reporter};
use std::io::Write;

/// Accumulates reports and serializes them in one document
#[derive(Debug, Default)]
pub struct JsonReporter {
    reports: Vec<FileReport>,
}

impl JsonReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of reports collected so far
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Write the collected reports as a JSON array
    pub fn finish<W: Write>(&self, mut out: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut out, &self.reports)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}

impl Reporter for JsonReporter {
    fn clear(&mut self) {
        // Collected reports are the document; nothing per-file to erase.
    }

    fn report(&mut self, report: &FileReport) {
        self.reports.push(report.clone());
    }
}
