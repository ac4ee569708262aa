//! Error types for loading MHD files.

use thiserror::Error;

/// Errors that can occur when loading a database.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The bytes could not be decoded.
    #[error("{0}")]
    Parse(#[from] mhd_common::Error),
}

impl Error {
    /// The decoding error, if this is one.
    pub fn as_parse(&self) -> Option<&mhd_common::Error> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Io(_) => None,
        }
    }
}

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, Error>;
