//! Error types for the patch engine.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from a single patch run.
///
/// All variants are terminal: the patcher is a one-shot transform and never
/// retries. A failure during the write phase leaves the original file
/// byte-for-byte intact (the temporary file is simply abandoned).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PatchError {
    /// The input completion file does not exist.
    #[error("completion file not found: {}", path.display())]
    NotFound {
        /// The path that was given.
        path: PathBuf,
    },

    /// Reading the file, writing the temporary file, or the atomic rename failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file the operation was targeting.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The glob set or marker configuration is unusable.
    #[error("invalid configuration: {cause}")]
    InvalidConfig {
        /// Human-readable description of the problem.
        cause: String,
    },
}

impl PatchError {
    /// Shorthand for [`PatchError::InvalidConfig`] with the given cause.
    pub(crate) fn invalid(cause: impl Into<String>) -> Self {
        Self::InvalidConfig {
            cause: cause.into(),
        }
    }

    /// Wrap an I/O error with the path it occurred on.
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_owned(),
            source,
        }
    }
}
