//! Error types for plugsync-core

use std::path::PathBuf;

/// Result type for plugsync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in plugsync-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The resolved game folder does not exist
    #[error("Unable to find project folder: {path}")]
    ProjectNotFound { path: PathBuf },

    /// I/O failure while scanning packages
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A concurrent scan task panicked or was cancelled
    #[error("Scan task failed: {message}")]
    ScanTask { message: String },

    /// Filesystem error from plugsync-fs
    #[error(transparent)]
    Fs(#[from] plugsync_fs::Error),
}

/// Coarse classification of an [`Error`], for callers that branch on the
/// failure rather than its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ProjectNotFound,
    CopySourceNotDirectory,
    CopySourceLoop,
    CopyDestinationNotDirectory,
    Io,
    Config,
    Internal,
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ProjectNotFound { .. } => ErrorKind::ProjectNotFound,
            Self::Io { .. } => ErrorKind::Io,
            Self::ScanTask { .. } => ErrorKind::Internal,
            Self::Fs(inner) => match inner {
                plugsync_fs::Error::CopySourceNotDirectory { .. } => ErrorKind::CopySourceNotDirectory,
                plugsync_fs::Error::CopySourceLoop { .. } => ErrorKind::CopySourceLoop,
                plugsync_fs::Error::CopyDestinationNotDirectory { .. } => {
                    ErrorKind::CopyDestinationNotDirectory
                }
                plugsync_fs::Error::Io { .. } => ErrorKind::Io,
                plugsync_fs::Error::ConfigParse { .. } | plugsync_fs::Error::UnsupportedFormat { .. } => {
                    ErrorKind::Config
                }
            },
        }
    }
}
