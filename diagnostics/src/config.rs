//! Lint configuration
//!
//! Loaded from `shader-lint.toml` with environment overrides; every field
//! is optional and defaults match the editor-plugin behavior this tool
//! grew out of (offset 4, compiler resolved next to the executable, no
//! timeout).

use crate::error::{LintError, LintResult};
use crate::offset::DEFAULT_LINE_OFFSET;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Config file looked up in the working directory when no path is given
pub const CONFIG_FILE_NAME: &str = "shader-lint.toml";

/// Default compiler binary name, resolved via [`LintConfig::resolve_tool_path`]
pub const DEFAULT_TOOL_NAME: &str = "glCompileTest";

/// Tool configuration, read at lint time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Explicit compiler path. When unset, the binary is resolved next to
    /// the current executable and then through `PATH`.
    pub compiler: Option<PathBuf>,

    /// Lines the harness injects ahead of user source, subtracted from
    /// every reported line number
    pub line_number_offset: i32,

    /// Kill the compiler after this many seconds; unset waits forever
    pub tool_timeout_secs: Option<u64>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            compiler: None,
            line_number_offset: DEFAULT_LINE_OFFSET,
            tool_timeout_secs: None,
        }
    }
}

impl LintConfig {
    /// Load configuration for a lint run.
    ///
    /// An explicit path must exist and parse. With no path, a
    /// `shader-lint.toml` in the working directory is used when present,
    /// defaults otherwise. `SHADER_LINT_*` environment variables override
    /// the file in both cases.
    pub fn load(path: Option<&Path>) -> LintResult<Self> {
        let mut config = match path {
            Some(explicit) => Self::from_file(explicit)?,
            None => {
                let default_path = Path::new(CONFIG_FILE_NAME);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> LintResult<Self> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| LintError::config(format!("{}: {e}", path.display())))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(tool) = env::var("SHADER_LINT_COMPILER") {
            self.compiler = Some(PathBuf::from(tool));
        }
        if let Ok(value) = env::var("SHADER_LINT_LINE_OFFSET") {
            match value.parse() {
                Ok(offset) => self.line_number_offset = offset,
                Err(_) => warn!(value = %value, "ignoring unparseable SHADER_LINT_LINE_OFFSET"),
            }
        }
        if let Ok(value) = env::var("SHADER_LINT_TIMEOUT_SECS") {
            match value.parse() {
                Ok(secs) => self.tool_timeout_secs = Some(secs),
                Err(_) => warn!(value = %value, "ignoring unparseable SHADER_LINT_TIMEOUT_SECS"),
            }
        }
    }

    /// Resolve the compiler binary to invoke.
    ///
    /// Order: explicit `compiler` setting, then a `glCompileTest` binary
    /// sitting next to the current executable, then the bare tool name
    /// left for `PATH` lookup. Paths are joined platform-neutrally and
    /// the platform executable suffix is appended where one exists.
    pub fn resolve_tool_path(&self) -> PathBuf {
        if let Some(tool) = &self.compiler {
            return tool.clone();
        }

        let tool_file = format!("{DEFAULT_TOOL_NAME}{}", env::consts::EXE_SUFFIX);

        if let Ok(exe) = env::current_exe() {
            if let Some(dir) = exe.parent() {
                let candidate = dir.join(&tool_file);
                if candidate.exists() {
                    return candidate;
                }
            }
        }

        PathBuf::from(tool_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults() {
        let config = LintConfig::default();
        assert_eq!(config.compiler, None);
        assert_eq!(config.line_number_offset, 4);
        assert_eq!(config.tool_timeout_secs, None);
    }

    #[test]
    fn test_from_file_parses_all_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            "compiler = \"tools/glc\"\nline_number_offset = 2\ntool_timeout_secs = 30\n",
        )
        .unwrap();

        let config = LintConfig::from_file(&path).unwrap();
        assert_eq!(config.compiler, Some(PathBuf::from("tools/glc")));
        assert_eq!(config.line_number_offset, 2);
        assert_eq!(config.tool_timeout_secs, Some(30));
    }

    #[test]
    fn test_from_file_empty_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "").unwrap();

        let config = LintConfig::from_file(&path).unwrap();
        assert_eq!(config, LintConfig::default());
    }

    #[test]
    fn test_from_file_malformed_toml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "line_number_offset = \"four\"\n").unwrap();

        let err = LintConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, LintError::Config { .. }), "got: {err}");
    }

    #[test]
    fn test_from_file_missing_explicit_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LintConfig::from_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, LintError::Io(_)), "got: {err}");
    }

    #[test]
    fn test_resolve_prefers_explicit_compiler() {
        let config = LintConfig {
            compiler: Some(PathBuf::from("/opt/sdk/bin/glc")),
            ..Default::default()
        };
        assert_eq!(config.resolve_tool_path(), PathBuf::from("/opt/sdk/bin/glc"));
    }

    // The only test that touches SHADER_LINT_* variables; keeping env
    // mutation in one place avoids cross-test interference.
    #[test]
    fn test_env_overrides_take_precedence_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "line_number_offset = 2\n").unwrap();

        env::set_var("SHADER_LINT_COMPILER", "/env/glc");
        env::set_var("SHADER_LINT_LINE_OFFSET", "7");
        env::set_var("SHADER_LINT_TIMEOUT_SECS", "bogus");

        let config = LintConfig::load(Some(&path)).unwrap();

        env::remove_var("SHADER_LINT_COMPILER");
        env::remove_var("SHADER_LINT_LINE_OFFSET");
        env::remove_var("SHADER_LINT_TIMEOUT_SECS");

        assert_eq!(config.compiler, Some(PathBuf::from("/env/glc")));
        assert_eq!(config.line_number_offset, 7);
        // Unparseable timeout is ignored, not an error.
        assert_eq!(config.tool_timeout_secs, None);
    }
}
