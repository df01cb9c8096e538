use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The file could not be opened for reading or writing.
    #[error("failed to open LAS file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: las::Error,
    },

    /// The LAS library rejected a record while decoding it.
    #[error("failed to read LAS point {index}: {source}")]
    MalformedRecord {
        index: u64,
        #[source]
        source: las::Error,
    },

    /// The file ended before the number of points its header announced.
    #[error("LAS file ended after {read} of {expected} points")]
    UnexpectedEof { expected: u64, read: u64 },

    /// The header announces more records than an uncompressed file can hold.
    #[error("LAS header announces {claimed} points but the file holds at most {available}")]
    PointCountMismatch { claimed: u64, available: u64 },

    #[error("cannot allocate a cloud of {count} points")]
    Allocation { count: u64 },

    #[error("failed to write LAS point: {0}")]
    Write(#[source] las::Error),

    #[error("invalid LAS header: {0}")]
    InvalidHeader(String),

    #[error("{axis} coordinate {value} does not fit the header's scale and offset")]
    CoordinateOutOfRange { axis: char, value: f64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Las(#[from] las::Error),
}

impl Error {
    pub(crate) fn open(path: impl Into<PathBuf>, source: las::Error) -> Self {
        Error::Open {
            path: path.into(),
            source,
        }
    }
}
