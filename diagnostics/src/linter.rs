//! One-shot lint orchestration
//!
//! Ties the pieces together for a single file: build the compile request,
//! run the compiler, parse its diagnostics, correct the line offset, and
//! wrap the result in a timestamped report. Each invocation runs to
//! exactly one terminal outcome; there are no retries and no state shared
//! between invocations.

use crate::config::LintConfig;
use crate::error::LintResult;
use crate::invoker::CompilerInvoker;
use crate::offset;
use crate::parser::{self, CompileOutcome};
use crate::report::{FileReport, LintOutcome};
use crate::request::CompileRequest;
use chrono::Utc;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::debug;

/// Drives the request → invoke → parse → correct pipeline
#[derive(Debug, Clone)]
pub struct Linter {
    invoker: CompilerInvoker,
    config: LintConfig,
}

impl Linter {
    /// Create a linter from an invoker and configuration
    pub fn new(invoker: CompilerInvoker, config: LintConfig) -> Self {
        Self { invoker, config }
    }

    /// Build a linter whose compiler and timeout come from the config
    pub fn from_config(config: LintConfig) -> Self {
        let mut invoker = CompilerInvoker::new(config.resolve_tool_path());
        if let Some(secs) = config.tool_timeout_secs {
            invoker = invoker.with_timeout(Duration::from_secs(secs));
        }
        Self { invoker, config }
    }

    /// Path to the compiler binary this linter invokes
    pub fn tool_path(&self) -> &Path {
        self.invoker.tool_path()
    }

    /// Lint a file by path.
    ///
    /// Returns `Ok(None)` when the extension is not a lintable shader
    /// stage — not applicable, not an error.
    pub async fn lint_path(&self, path: &Path) -> LintResult<Option<FileReport>> {
        let Some(request) = CompileRequest::from_path(path) else {
            debug!(file = %path.display(), "not a shader source, skipping");
            return Ok(None);
        };
        Ok(Some(self.lint(&request).await?))
    }

    /// Lint one compile request to completion
    pub async fn lint(&self, request: &CompileRequest) -> LintResult<FileReport> {
        let start = Instant::now();

        let raw = self.invoker.invoke(request).await?;

        // The offset is read from config per invocation, never cached.
        let offset = self.config.line_number_offset;
        let outcome = match parser::parse(raw.exit_code, &raw.stdout) {
            CompileOutcome::Success => LintOutcome::Success,
            CompileOutcome::Failure { raw_line, message } => LintOutcome::Failure {
                line: offset::correct(raw_line, offset),
                message: message.trim().to_string(),
            },
        };

        debug!(
            file = %request.file_path.display(),
            exit_code = ?raw.exit_code,
            success = outcome.is_success(),
            "lint finished"
        );

        Ok(FileReport {
            file: request.file_path.clone(),
            stage: request.stage,
            outcome,
            tool_exit_code: raw.exit_code,
            duration_ms: start.elapsed().as_millis() as u64,
            timestamp: Utc::now(),
        })
    }
}
