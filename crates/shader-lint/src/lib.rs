//! shader-lint CLI
//!
//! Thin front-end over the `diagnostics` crate: argument parsing, config
//! loading, and terminal/JSON rendering of lint reports.
//!
//! Exit status: 0 when every linted file compiled, 1 when any compile
//! failure was reported, 2 when an invocation could not run at all
//! (missing compiler, bad config, timeout).

pub mod cli;
pub mod console;
pub mod json;

use anyhow::{Context, Result};
use cli::{Cli, OutputFormat};
use console::ConsoleReporter;
use diagnostics::{LintConfig, Linter, Reporter};
use json::JsonReporter;
use std::io;
use std::path::PathBuf;
use tracing::{error, info};

/// Run the CLI to completion and return the process exit code
pub async fn run(cli: Cli) -> Result<i32> {
    let mut config =
        LintConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    cli.apply_overrides(&mut config);

    let linter = Linter::from_config(config.clone());
    info!(
        compiler = %linter.tool_path().display(),
        offset = config.line_number_offset,
        files = cli.files.len(),
        "shader-lint starting"
    );

    match cli.format {
        OutputFormat::Text => {
            let mut reporter = ConsoleReporter::stdout();
            Ok(lint_files(&linter, &cli.files, &mut reporter).await)
        }
        OutputFormat::Json => {
            let mut reporter = JsonReporter::new();
            let code = lint_files(&linter, &cli.files, &mut reporter).await;
            reporter.finish(io::stdout().lock())?;
            Ok(code)
        }
    }
}

/// Lint each file independently; a failed invocation never stops the rest
async fn lint_files<R: Reporter>(linter: &Linter, files: &[PathBuf], reporter: &mut R) -> i32 {
    let mut compile_failures = 0usize;
    let mut operational_errors = 0usize;

    for file in files {
        match linter.lint_path(file).await {
            Ok(Some(report)) => {
                if !report.outcome.is_success() {
                    compile_failures += 1;
                }
                reporter.clear();
                reporter.report(&report);
            }
            Ok(None) => {
                info!(file = %file.display(), "skipped: not a shader source (.vp/.fp)");
            }
            Err(e) => {
                operational_errors += 1;
                error!(file = %file.display(), "{e}");
            }
        }
    }

    if operational_errors > 0 {
        2
    } else if compile_failures > 0 {
        1
    } else {
        0
    }
}
