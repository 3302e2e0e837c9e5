//! Error types for navigator code generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for navigator operations
pub type NavigatorResult<T> = Result<T, NavigatorError>;

/// Error type for navigator operations
#[derive(Error, Debug)]
pub enum NavigatorError {
    /// Class name has no simple name part
    #[error("invalid class name: {0:?}")]
    InvalidClassName(String),

    /// Class manifest could not be parsed or failed validation
    #[error("invalid manifest: {0}")]
    InvalidManifest(String),

    /// Writing a generated file failed
    #[error("failed to write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl NavigatorError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        NavigatorError::Io {
            path: path.into(),
            source,
        }
    }
}
