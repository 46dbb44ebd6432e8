//! Error types for the blobgen-core library.
//!
//! Every failure is detected before any part of the output document exists,
//! so callers never have to deal with partially generated text.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for blobgen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all blobgen operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Input path does not name an existing regular file
    #[error("file '{path}' does not exist")]
    FileNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// Input file exists but could not be read
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        /// Path to the file that failed to read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Input file is larger than the configured ceiling
    #[error("file '{path}' is {size} bytes, exceeding the limit of {limit} bytes")]
    InputTooLarge {
        /// Path to the oversized file
        path: PathBuf,
        /// Size reported by the filesystem
        size: u64,
        /// Configured maximum
        limit: u64,
    },
}

impl Error {
    /// Creates a new file-not-found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Creates a new file read error
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Creates a new input size error
    pub fn input_too_large(path: impl Into<PathBuf>, size: u64, limit: u64) -> Self {
        Self::InputTooLarge {
            path: path.into(),
            size,
            limit,
        }
    }

    /// Returns the input path this error refers to
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::FileNotFound { path }
            | Self::FileRead { path, .. }
            | Self::InputTooLarge { path, .. } => path,
        }
    }
}
