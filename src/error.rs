//! Error types.
//!
//! Negative query outcomes (unknown word, no path, no bridge words) are ordinary values and
//! never show up here. This enum only covers the file collaborator.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Destination name is empty or contains one of `\ / : * ? " < > |`.
    #[error("invalid filename: {0:?}")]
    InvalidFileName(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
