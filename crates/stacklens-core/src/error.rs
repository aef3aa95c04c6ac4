//! Error types for the stacklens domain

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // I/O errors (sinks, snapshot files)
    #[error("I/O error: {0}")]
    Io(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    // Snapshot contract violations
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    // Output errors (sink fan-out, file targets)
    #[error("Output error: {0}")]
    Output(String),
}

// Error conversions
// Sources are stored as strings so the error type stays Clone + PartialEq.
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
