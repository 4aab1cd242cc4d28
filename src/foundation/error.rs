use std::path::PathBuf;

use crate::describe::scene::DescribeError;

/// Convenience result type used across scene-gen.
pub type SceneGenResult<T> = Result<T, SceneGenError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum SceneGenError {
    /// A scene or project file could not be parsed.
    #[error("parse error in '{}': {message}", path.display())]
    Parse {
        /// File being parsed.
        path: PathBuf,
        /// Human readable description, including the byte offset.
        message: String,
    },

    /// A scene could not be loaded by the scene loader.
    #[error("load error: {0}")]
    Load(String),

    /// Invalid configuration or command-line input.
    #[error("config error: {0}")]
    Config(String),

    /// The code model could not be rendered.
    #[error("render error: {0}")]
    Render(String),

    /// A scene was loaded but could not be described.
    #[error("scene not described: {0}")]
    Describe(#[from] DescribeError),

    /// Filesystem failure with the path that caused it.
    #[error("io error at '{}': {source}", path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SceneGenError {
    /// Build a [`SceneGenError::Parse`] value.
    pub fn parse(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Build a [`SceneGenError::Load`] value.
    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    /// Build a [`SceneGenError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`SceneGenError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Structural skips that are expected in most projects.
    pub fn is_expected_skip(&self) -> bool {
        matches!(self, Self::Describe(e) if e.is_expected_skip())
    }

    /// Build a [`SceneGenError::Io`] value.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
