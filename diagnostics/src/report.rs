//! Lint outcomes and reporting
//!
//! The final, offset-corrected result of one lint invocation, and the
//! `Reporter` seam front-ends implement to render it. The core hands
//! reporters immutable values and keeps no UI state of its own; when
//! concurrent invocations share a reporter, the last writer wins.

use crate::request::ShaderStage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Outcome of one lint invocation, after line-offset correction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum LintOutcome {
    /// The source compiled cleanly
    Success,
    /// The compiler diagnosed an error
    Failure {
        /// Offset-corrected line number. May be zero or negative when the
        /// configured offset exceeds the reported line; display layers
        /// clamp or skip rendering in that case.
        line: i64,
        /// Diagnostic message, trimmed of surrounding whitespace
        message: String,
    },
}

impl LintOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Record of one completed lint invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    /// The linted source file
    pub file: PathBuf,
    /// Compilation stage derived from the file extension
    pub stage: ShaderStage,
    /// Final outcome handed to the reporter
    pub outcome: LintOutcome,
    /// Compiler exit code, `None` when killed by a signal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_exit_code: Option<i32>,
    /// Wall-clock duration of the compiler run
    pub duration_ms: u64,
    /// When the invocation completed
    pub timestamp: DateTime<Utc>,
}

/// Rendering seam for lint results.
///
/// Implementations own whatever display state they need (terminal lines,
/// editor regions, status text); the core only pushes immutable reports
/// through this interface, exactly once per invocation.
pub trait Reporter {
    /// Erase any diagnostic state left over from a previous invocation
    fn clear(&mut self);

    /// Receive the final outcome of one invocation
    fn report(&mut self, report: &FileReport);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report(outcome: LintOutcome) -> FileReport {
        FileReport {
            file: PathBuf::from("shader.fp"),
            stage: ShaderStage::Fragment,
            outcome,
            tool_exit_code: Some(1),
            duration_ms: 12,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_outcome_success_predicate() {
        assert!(LintOutcome::Success.is_success());
        assert!(!LintOutcome::Failure {
            line: 4,
            message: "syntax error".to_string(),
        }
        .is_success());
    }

    #[test]
    fn test_report_serialization_shape() {
        let report = sample_report(LintOutcome::Failure {
            line: 4,
            message: "syntax error near 'foo'".to_string(),
        });

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["file"], "shader.fp");
        assert_eq!(json["stage"], "fragment");
        assert_eq!(json["outcome"]["result"], "failure");
        assert_eq!(json["outcome"]["line"], 4);
        assert_eq!(json["tool_exit_code"], 1);
    }

    #[test]
    fn test_report_round_trip() {
        let report = sample_report(LintOutcome::Success);
        let json = serde_json::to_string(&report).unwrap();
        let restored: FileReport = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, report);
    }
}
