use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::FormatError;

/// Snapshot file failure.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("malformed snapshot {}: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },

    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PersistError {
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Format { path, .. } | Self::Io { path, .. } => path,
        }
    }
}

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The actor task has exited, or dropped a reply.
    #[error("game actor has stopped")]
    Closed,

    #[error("game actor panicked")]
    Panicked,

    #[error(transparent)]
    Persist(#[from] PersistError),
}
