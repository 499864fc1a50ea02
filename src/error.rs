use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for docs-release operations
#[derive(Error, Debug)]
pub enum DocsReleaseError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No '{key} := \"...\"' declaration found in {}", path.display())]
    NotFound { key: String, path: PathBuf },

    #[error("Release format error: {0}")]
    Format(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown link role: {0}")]
    UnknownRole(String),
}

/// Convenience type alias for Results in docs-release
pub type Result<T> = std::result::Result<T, DocsReleaseError>;

impl DocsReleaseError {
    /// Create a not-found error for a descriptor key
    pub fn not_found(key: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        DocsReleaseError::NotFound {
            key: key.into(),
            path: path.into(),
        }
    }

    /// Create a release format error with context
    pub fn format(msg: impl Into<String>) -> Self {
        DocsReleaseError::Format(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        DocsReleaseError::Config(msg.into())
    }

    pub fn unknown_role(role: impl Into<String>) -> Self {
        DocsReleaseError::UnknownRole(role.into())
    }
}

impl From<toml::de::Error> for DocsReleaseError {
    fn from(err: toml::de::Error) -> Self {
        DocsReleaseError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for DocsReleaseError {
    fn from(err: toml::ser::Error) -> Self {
        DocsReleaseError::Config(err.to_string())
    }
}
