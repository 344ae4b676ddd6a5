use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or writing an index.
#[derive(Error, Debug)]
pub enum Error {
    /// Node storage could not grow. Nothing was changed.
    #[error("allocation failed while growing node storage")]
    AllocationFailure,

    /// The element (or term) asked for is not present.
    #[error("element not found")]
    NotFound,

    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output file exists and overwriting was not allowed.
    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),
}

/// Result type alias for index operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io<P: Into<PathBuf>>(path: P, source: io::Error) -> Error {
        Error::Io {
            path: path.into(),
            source: source,
        }
    }

    /// Returns true for errors that only spoil the current token or document, after which
    /// indexing can carry on.
    pub fn is_recoverable(&self) -> bool {
        matches!(*self, Error::NotFound | Error::AllocationFailure | Error::Io { .. })
    }
}
