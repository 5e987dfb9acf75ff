//! Lint error types
//!
//! Structured errors for a single lint invocation. A diagnosed compile
//! failure is not an error — it is the normal outcome, carried in
//! [`crate::report::LintOutcome`]. These variants cover the cases where
//! the tool could not be run at all or the lint could not be configured.
//! All errors are local to one invocation; nothing is retried.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for lint operations
pub type LintResult<T> = Result<T, LintError>;

/// Errors that can occur while preparing or running a lint invocation
#[derive(Error, Debug)]
pub enum LintError {
    /// The compiler binary could not be found or started. Kept distinct
    /// from a compile failure so callers never conflate the two.
    #[error("failed to launch compiler '{}': {source}", .tool.display())]
    ToolLaunch {
        tool: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The compiler ran past the configured deadline and was killed.
    #[error("compiler '{}' timed out after {secs}s", .tool.display())]
    ToolTimeout { tool: PathBuf, secs: u64 },

    /// Configuration file or value could not be used
    #[error("configuration error: {message}")]
    Config { message: String },

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl LintError {
    /// Create a tool launch error
    pub fn launch(tool: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ToolLaunch {
            tool: tool.into(),
            source,
        }
    }

    /// Create a tool timeout error
    pub fn timeout(tool: impl Into<PathBuf>, secs: u64) -> Self {
        Self::ToolTimeout {
            tool: tool.into(),
            secs,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check whether this error means the tool never ran
    pub fn is_launch_failure(&self) -> bool {
        matches!(self, Self::ToolLaunch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_error_display_names_tool() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let err = LintError::launch("/opt/tools/glCompileTest", io_err);
        assert!(err.to_string().contains("glCompileTest"));
        assert!(err.is_launch_failure());
    }

    #[test]
    fn test_timeout_error_display() {
        let err = LintError::timeout("glCompileTest", 30);
        assert!(err.to_string().contains("30s"));
        assert!(!err.is_launch_failure());
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: LintError = io_err.into();
        assert!(matches!(err, LintError::Io(_)));
        assert!(!err.is_launch_failure());
    }

    #[test]
    fn test_config_error_display() {
        let err = LintError::config("unknown key 'offsets'");
        assert!(err.to_string().contains("unknown key"));
    }
}
