// src/errors.rs

//! Crate-wide error types.
//!
//! [`RenderError`] is what the process runner raises when a line of aerender
//! output matches a known failure marker. [`AerenderError`] wraps it together
//! with everything that can go wrong before a process is ever spawned.

use thiserror::Error;

/// Classification of a failure line reported by aerender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Generic aerender failure (including library load failures).
    Aerender,
    /// After Effects reported an error that isn't more specific.
    AfterEffects,
    /// After Effects rejected a path (project, output, log, ...).
    PathNotFound,
    /// The requested composition doesn't exist in the project.
    CompositionNotFound,
}

/// Error raised from a single line of aerender output.
///
/// Every variant carries the offending line, already stripped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("aerender error: {0}")]
    Aerender(String),

    #[error("After Effects error: {0}")]
    AfterEffects(String),

    #[error("path not found: {0}")]
    PathNotFound(String),

    #[error("composition not found: {0}")]
    CompositionNotFound(String),
}

impl RenderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RenderError::Aerender(_) => ErrorKind::Aerender,
            RenderError::AfterEffects(_) => ErrorKind::AfterEffects,
            RenderError::PathNotFound(_) => ErrorKind::PathNotFound,
            RenderError::CompositionNotFound(_) => ErrorKind::CompositionNotFound,
        }
    }

    /// The output line that triggered this error.
    pub fn line(&self) -> &str {
        match self {
            RenderError::Aerender(line)
            | RenderError::AfterEffects(line)
            | RenderError::PathNotFound(line)
            | RenderError::CompositionNotFound(line) => line,
        }
    }

    /// True for errors reported by After Effects itself rather than by the
    /// aerender front end. `PathNotFound` is a specialised After Effects error.
    pub fn is_after_effects(&self) -> bool {
        matches!(
            self,
            RenderError::AfterEffects(_) | RenderError::PathNotFound(_)
        )
    }
}

#[derive(Error, Debug)]
pub enum AerenderError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid option: {0}")]
    InvalidOption(String),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AerenderError {
    /// The render error, if this failure came from the tool's output.
    pub fn as_render_error(&self) -> Option<&RenderError> {
        match self {
            AerenderError::Render(e) => Some(e),
            _ => None,
        }
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, AerenderError>;
