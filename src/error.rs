//! Error types for walk runs

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Anything that aborts a run.
#[derive(Debug, Error)]
pub enum Error {
    /// The traversal could not read an entry (permission denied, vanished, ...).
    #[error("walk failed: {0}")]
    Walk(#[from] ignore::Error),

    /// A filesystem or sink operation on a specific path failed.
    #[error("{op} {}: {source}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),
}

impl Error {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            op,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
