//! Error types for plugsync-fs

use std::path::PathBuf;

/// Result type for plugsync-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in plugsync-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A copy source exists but is not a directory.
    #[error("Can't copy from non-folder target: {path}")]
    CopySourceNotDirectory { path: PathBuf },

    /// A copy destination exists but is not a directory.
    #[error("Can't copy to non-folder target: {path}")]
    CopyDestinationNotDirectory { path: PathBuf },

    /// A symlink inside a copy source points back at one of its own parents.
    #[error("Can't copy a folder that links back into itself: {path}")]
    CopySourceLoop { path: PathBuf },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
