//! Error types for notebook loading and saving.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure while reading, writing or locating a notebook file.
#[derive(Error, Debug)]
pub enum NotebookError {
    /// The source path does not exist.
    #[error("notebook not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The file exists but its content is not a notebook we accept.
    #[error("invalid notebook {}: {source}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },

    /// Any other file system failure (unreadable source, unwritable destination).
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl NotebookError {
    /// Path of the file the failed operation was working on.
    pub fn path(&self) -> &Path {
        match self {
            NotebookError::NotFound { path }
            | NotebookError::Format { path, .. }
            | NotebookError::Io { path, .. } => path,
        }
    }

    /// Classify an I/O error raised while opening a source file.
    pub(crate) fn on_read(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            NotebookError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            NotebookError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub(crate) fn on_write(path: &Path, source: std::io::Error) -> Self {
        NotebookError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn format(path: &Path, source: FormatError) -> Self {
        NotebookError::Format {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Content-level failure raised by the notebook reader/writer.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("failed to parse notebook JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("notebook is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("notebook does not declare an nbformat version")]
    MissingVersion,

    #[error("unsupported notebook version {found_major}.{found_minor} (expected {expected}.x)")]
    UnsupportedVersion {
        found_major: u64,
        found_minor: u64,
        expected: u32,
    },
}

/// Result alias for notebook file operations.
pub type Result<T> = std::result::Result<T, NotebookError>;
