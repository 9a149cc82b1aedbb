//! Shared error types for wordcloudsr.
//!
//! Library code returns [`Error`] through the crate [`Result`] alias. The
//! command layer wraps these in `anyhow` with added context, so only the
//! variants that callers need to tell apart are modelled here.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for wordcloudsr operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration errors, fatal at startup
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The tagger parameter file was not given by flag, environment or config
    #[error("TREETAGGER_PATH is not set. Point it at the Serbian TreeTagger parameter file.")]
    MissingTaggerParams,

    /// An external executable could not be located
    #[error("Executable `{name}` not found: {message}")]
    ExecutableNotFound { name: String, message: String },

    /// The external tagger failed to start or exited unsuccessfully
    #[error("Tagger error: {0}")]
    Tagger(String),

    /// The word-cloud renderer failed
    #[error("Render error: {0}")]
    Render(String),

    /// File system related errors
    #[error("File system error at {}: {source}", path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization errors
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// JSON serialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// IO errors without path context
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a tagger error
    pub fn tagger(message: impl Into<String>) -> Self {
        Self::Tagger(message.into())
    }

    /// Create a render error
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render(message.into())
    }

    /// Whether this error must abort the whole run rather than one directory.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Configuration(_) | Self::MissingTaggerParams | Self::ExecutableNotFound { .. }
        )
    }
}

/// Result type alias for wordcloudsr operations
pub type Result<T> = std::result::Result<T, Error>;
