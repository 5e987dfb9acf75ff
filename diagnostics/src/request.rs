//! Compile requests
//!
//! Maps shader source files to compiler invocations. Only `.vp` (vertex)
//! and `.fp` (fragment) sources are lintable; any other extension yields
//! no request rather than an error.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Shader compilation stage, selected by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShaderStage {
    /// Vertex program (`.vp`)
    Vertex,
    /// Fragment program (`.fp`)
    Fragment,
}

impl ShaderStage {
    /// The token passed to the compiler's `-t` flag
    pub fn flag_token(&self) -> &'static str {
        match self {
            Self::Vertex => "vp",
            Self::Fragment => "fp",
        }
    }

    /// Map a file extension to a stage. Matching is case-sensitive.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "vp" => Some(Self::Vertex),
            "fp" => Some(Self::Fragment),
            _ => None,
        }
    }
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vertex => write!(f, "vertex"),
            Self::Fragment => write!(f, "fragment"),
        }
    }
}

/// One compiler invocation: a source file and its stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileRequest {
    /// Path to the shader source (absolute or relative)
    pub file_path: PathBuf,
    /// Compilation stage derived from the file extension
    pub stage: ShaderStage,
}

impl CompileRequest {
    /// Build a request from a source path, or `None` when the extension
    /// is not a lintable shader stage.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        let stage = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(ShaderStage::from_extension)?;

        Some(Self {
            file_path: path.to_path_buf(),
            stage,
        })
    }
}
