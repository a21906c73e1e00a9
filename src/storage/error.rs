//! Store error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by a save store
#[derive(Debug, Error)]
pub enum StoreError {
    /// No current generation exists for the save
    #[error("save not found: {0}")]
    NotFound(String),

    /// A file unexpectedly occupies a path that must be created fresh
    #[error("refusing to overwrite existing file: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// The save name cannot be used as a file name
    #[error("invalid save name: {0:?}")]
    InvalidName(String),

    /// An unexpected filesystem failure
    #[error("failed to {action} {}: {source}", path.display())]
    Io {
        /// What the store was doing
        action: &'static str,
        /// The path involved
        path: PathBuf,
        /// Underlying OS error
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// Wrap an I/O error with the action and path it occurred on.
    ///
    /// `AlreadyExists` from the OS is promoted to [`StoreError::AlreadyExists`].
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::AlreadyExists {
            Self::AlreadyExists(path)
        } else {
            Self::Io {
                action,
                path,
                source,
            }
        }
    }

    /// Whether this error means the save does not exist
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
