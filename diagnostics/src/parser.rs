//! Compiler diagnostic parsing
//!
//! Decides success or failure from the tool's exit status and, on
//! failure, extracts a 1-based source line number and message from the
//! first matching line of stdout.
//!
//! The exit-status policy mirrors the compiler's contract: exit code 1
//! means "compile failed, diagnostic text on stdout". Every other status,
//! including unexpected nonzero codes and signal deaths, is treated as
//! success and produces no diagnostics.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::warn;

/// Exit code the compiler uses to signal a failed compile
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Matches one diagnostic line of the form `<file>(<line>)<message>`,
/// e.g. `shader.fp(8): syntax error near 'foo'`.
static DIAGNOSTIC_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[^(]*\((\d+)\)(.*)$").unwrap());

/// Outcome of one compile, before line-offset correction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum CompileOutcome {
    /// The compiler reported no diagnostics
    Success,
    /// The compiler diagnosed an error
    Failure {
        /// 1-based line number as reported by the compiler, uncorrected
        raw_line: u32,
        /// Diagnostic text after the parenthesized line number, with the
        /// `':'` separator and any trailing carriage return removed
        message: String,
    },
}

impl CompileOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Map a compiler exit status and its stdout to a [`CompileOutcome`].
///
/// Only the first matching stdout line is used. Exit code 1 with no
/// matching line maps to `Success`: the tool signalled failure but the
/// diagnostic text was unusable, so nothing is reported beyond a log
/// entry.
pub fn parse(exit_code: Option<i32>, stdout: &str) -> CompileOutcome {
    if exit_code != Some(FAILURE_EXIT_CODE) {
        return CompileOutcome::Success;
    }

    for line in stdout.lines() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if let Some(caps) = DIAGNOSTIC_LINE.captures(line) {
            let Ok(raw_line) = caps[1].parse::<u32>() else {
                continue;
            };
            let message = &caps[2];
            let message = message.strip_prefix(':').unwrap_or(message).to_string();
            return CompileOutcome::Failure { raw_line, message };
        }
    }

    warn!("compiler exited with failure status but no diagnostic line matched");
    CompileOutcome::Success
}
