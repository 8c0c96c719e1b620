//! Error types for glonav-core.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for glonav operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur across the glonav crates.
///
/// Backend executors never surface these from their search methods; they are
/// reserved for indexing, statistics, configuration and corpus loading.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O error without path context.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error on a specific path.
    #[error("I/O error on {path}: {source}")]
    IoWithPath {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic.
        message: String,
    },

    /// Input could not be parsed.
    #[error("Parse error: {message}")]
    Parse {
        /// What failed to parse.
        message: String,
    },

    /// A named resource does not exist.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Kind of resource (e.g. "entity").
        kind: String,
        /// Identifier that was looked up.
        id: String,
    },

    /// Input validation error.
    #[error("Validation error: {message}")]
    Validation {
        /// What went wrong.
        message: String,
    },

    /// A retrieval backend failed internally.
    #[error("Backend '{backend}' error: {message}")]
    Backend {
        /// Backend name (e.g. "simple-vector").
        backend: String,
        /// What went wrong.
        message: String,
    },

    /// Embedding generation failed.
    #[error("Embedding error: {message}")]
    Embedding {
        /// What went wrong.
        message: String,
    },

    /// An operation could not be carried out.
    #[error("Operation failed: {message}")]
    Operation {
        /// What went wrong.
        message: String,
    },
}

impl Error {
    /// Creates an I/O error carrying the path that was being accessed.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::IoWithPath {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse {
            message: message.into(),
        }
    }

    /// Creates a new not-found error.
    pub fn not_found(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Error::NotFound {
            kind: kind.into(),
            id: id.into(),
        }
    }

    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            message: message.into(),
        }
    }

    /// Creates a new backend error.
    pub fn backend(backend: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Backend {
            backend: backend.into(),
            message: message.into(),
        }
    }

    /// Creates a new embedding error.
    pub fn embedding<S: Into<String>>(message: S) -> Self {
        Error::Embedding {
            message: message.into(),
        }
    }

    /// Creates a new operation error.
    pub fn operation<S: Into<String>>(message: S) -> Self {
        Error::Operation {
            message: message.into(),
        }
    }
}
