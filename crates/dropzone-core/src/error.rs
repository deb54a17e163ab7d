//! Error types for `dropzone-core`.
//!
//! Validation never fails: a rejected file is data, not an error. The
//! fallible edges are loading a configuration file and probing a file on
//! disk, and those return [`CoreResult<T>`].

use std::path::PathBuf;

/// Unified error type for the fallible edges of the core library.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// The path has no usable file name component.
    #[error("invalid file name: {0}")]
    InvalidName(PathBuf),

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// An unknown validation error code was supplied.
    #[error("unknown error kind: {0}")]
    UnknownErrorKind(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Maps an I/O error on `path` to the most specific variant.
    pub(crate) fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io(err),
        }
    }
}

/// Convenience alias used throughout `dropzone-core`.
pub type CoreResult<T> = Result<T, CoreError>;
