//! External compiler invocation
//!
//! Runs the shader compiler as `<tool> -i <file> -t <vp|fp>`, waits for it
//! to finish, and captures its exit status and both output streams. A
//! spawn failure (missing or unstartable binary) surfaces as the distinct
//! [`LintError::ToolLaunch`]; it is never folded into a compile failure.
//!
//! By default the call waits for the tool indefinitely. When a timeout is
//! configured, expiry kills the process tree and surfaces as
//! [`LintError::ToolTimeout`].

use crate::error::{LintError, LintResult};
use crate::request::CompileRequest;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Captured result of one compiler run
#[derive(Debug, Clone)]
pub struct RawToolOutput {
    /// Exit code, or `None` when the process was killed by a signal
    pub exit_code: Option<i32>,
    /// Standard output, decoded lossily as UTF-8
    pub stdout: String,
    /// Standard error, decoded lossily as UTF-8
    pub stderr: String,
}

/// Invoker for the external shader compiler
#[derive(Debug, Clone)]
pub struct CompilerInvoker {
    tool_path: PathBuf,
    timeout: Option<Duration>,
}

impl CompilerInvoker {
    /// Create an invoker for the given compiler binary, with no timeout
    pub fn new(tool_path: impl AsRef<Path>) -> Self {
        Self {
            tool_path: tool_path.as_ref().to_path_buf(),
            timeout: None,
        }
    }

    /// Kill the compiler if it runs past the given deadline
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Path to the compiler binary this invoker runs
    pub fn tool_path(&self) -> &Path {
        &self.tool_path
    }

    /// Run the compiler to completion for one request.
    ///
    /// Each invocation is independent and non-cancelable; no state is
    /// shared between runs.
    pub async fn invoke(&self, request: &CompileRequest) -> LintResult<RawToolOutput> {
        let mut cmd = tokio::process::Command::new(&self.tool_path);
        cmd.arg("-i")
            .arg(&request.file_path)
            .arg("-t")
            .arg(request.stage.flag_token());
        cmd.kill_on_drop(true);

        // New process group so a timeout kill takes descendants with it.
        #[cfg(unix)]
        cmd.process_group(0);

        debug!(
            tool = %self.tool_path.display(),
            file = %request.file_path.display(),
            stage = %request.stage,
            "invoking shader compiler"
        );

        let result = match self.timeout {
            Some(deadline) => match tokio::time::timeout(deadline, cmd.output()).await {
                Ok(result) => result,
                Err(_) => {
                    return Err(LintError::timeout(&self.tool_path, deadline.as_secs()));
                }
            },
            None => cmd.output().await,
        };

        let output = result.map_err(|e| LintError::launch(&self.tool_path, e))?;

        Ok(RawToolOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
