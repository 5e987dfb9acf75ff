//! Terminal rendering of lint reports
//!
//! One status line per file; on failure the offending source line is
//! printed underneath, standing in for an editor's region highlight. A
//! corrected line number at or below zero (the offset exceeded the
//! reported line) gets the status line only — there is nothing sensible
//! to highlight.

use diagnostics::{FileReport, LintOutcome, Reporter};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::warn;

/// Renders reports as plain text to any writer
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    /// Reporter writing to standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the reporter and hand back its writer (used by tests)
    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&mut self, report: &FileReport) -> io::Result<()> {
        match &report.outcome {
            LintOutcome::Success => {
                writeln!(
                    self.out,
                    "shader-lint: {}: compiled successfully",
                    report.file.display()
                )?;
            }
            LintOutcome::Failure { line, message } => {
                writeln!(
                    self.out,
                    "shader-lint: {}: compile error: line {} - {}",
                    report.file.display(),
                    line,
                    message
                )?;
                if let Some(text) = source_line(&report.file, *line) {
                    writeln!(self.out, "  --> {}:{}", report.file.display(), line)?;
                    writeln!(self.out, "   {line} | {text}")?;
                }
            }
        }
        self.out.flush()
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn clear(&mut self) {
        // A terminal keeps no regions or status text to erase; each
        // report stands alone.
    }

    fn report(&mut self, report: &FileReport) {
        if let Err(e) = self.render(report) {
            warn!(file = %report.file.display(), "failed to write report: {e}");
        }
    }
}

/// Fetch the 1-based `line` from `path`, if both exist and the line
/// number is positive
fn source_line(path: &Path, line: i64) -> Option<String> {
    if line < 1 {
        return None;
    }
    let text = fs::read_to_string(path).ok()?;
    text.lines().nth(line as usize - 1).map(str::to_string)
}
