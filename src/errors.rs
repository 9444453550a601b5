//! Error type shared by the library and the binary.

use thiserror::Error;

/// Main error type for fibseq operations
#[derive(Debug, Error)]
pub enum Error {
    /// Writing to the output sink failed
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The tracing subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

impl Error {
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
