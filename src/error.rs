use std::path::PathBuf;

use thiserror::Error;

/// Error type returned by public APIs of this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A filter configuration option had the wrong value type.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// A dictionary file could not be resolved or loaded.
    #[error("failed to load dictionary {}: {message}", .path.display())]
    Dictionary {
        /// Path of the offending dictionary file.
        path: PathBuf,
        /// Description of the underlying failure.
        message: String,
    },
    /// A token filter was registered under a name that is already taken.
    #[error("token filter {0:?} is already registered")]
    DuplicateFilter(String),
    /// No token filter is registered under the requested name.
    #[error("no token filter registered under {0:?}")]
    UnknownFilter(String),
}

impl Error {
    pub(crate) fn dictionary(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Error::Dictionary {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
