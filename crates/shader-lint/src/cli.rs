//! Command-line interface definition

use clap::{Parser, ValueEnum};
use diagnostics::LintConfig;
use std::path::PathBuf;

/// Lint GLSL shader sources with an external compiler
#[derive(Debug, Parser)]
#[command(name = "shader-lint", version)]
pub struct Cli {
    /// Shader sources to lint (`.vp` vertex, `.fp` fragment); other
    /// extensions are skipped
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Path to the shader compiler executable
    #[arg(long, value_name = "PATH")]
    pub compiler: Option<PathBuf>,

    /// Harness-injected lines subtracted from reported line numbers
    #[arg(long, value_name = "N")]
    pub offset: Option<i32>,

    /// Kill the compiler after this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Config file (defaults to shader-lint.toml in the working directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Status line per file plus the offending source line
    Text,
    /// One JSON document with every file's report
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl Cli {
    /// Fold command-line flags over the loaded configuration
    pub fn apply_overrides(&self, config: &mut LintConfig) {
        if let Some(compiler) = &self.compiler {
            config.compiler = Some(compiler.clone());
        }
        if let Some(offset) = self.offset {
            config.line_number_offset = offset;
        }
        if let Some(secs) = self.timeout_secs {
            config.tool_timeout_secs = Some(secs);
        }
    }
}
