//! Defines the custom error types for the application.
//!
//! This uses `thiserror` as specified in `Cargo.toml` for clean,
//! boilerplate-free error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConverterError {
    #[error("I/O Error: {1} - {0}")]
    Io(#[source] std::io::Error, String),

    #[error("JSON Serialization Error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("XML Emission Error: {0}")]
    Emit(String),

    #[error("Invalid Element Name: {0:?}")]
    InvalidName(String),

    #[error("Container Mismatch: tried to close {found:?} but {expected:?} is open")]
    ContainerMismatch { expected: String, found: String },

    #[error("Close Without Open: no container is open, cannot close {0:?}")]
    CloseWithoutOpen(String),

    #[error("Unclosed Container: {0:?} is still open at finish")]
    UnclosedContainer(String),

    #[error("Invalid Input: {0}")]
    InvalidInput(String),
}

// Implement From<io::Error> for easier error handling
impl From<std::io::Error> for ConverterError {
    fn from(err: std::io::Error) -> Self {
        ConverterError::Io(err, "IO operation failed".to_string())
    }
}
