use std::io;

use thiserror::Error;

use crate::FileNotFoundError;

/// Errors surfaced by file lookups.
#[derive(Debug, Error)]
pub enum Error {
    /// A file could not be located.
    #[error(transparent)]
    FileNotFound(#[from] FileNotFoundError),
    /// Any other I/O failure.
    #[error("I/O error: {0}")]
    Io(#[source] io::Error),
}

impl Error {
    /// Whether this is a missing-file error.
    pub fn is_not_found(&self) -> bool { matches!(self, Error::FileNotFound(_)) }

    /// Returns the missing-file error, if this is one.
    pub fn as_not_found(&self) -> Option<&FileNotFoundError> {
        match self {
            Error::FileNotFound(err) => Some(err),
            Error::Io(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Error::FileNotFound(FileNotFoundError::from_cause(err)),
            _ => Error::Io(err),
        }
    }
}
