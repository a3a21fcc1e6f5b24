//! Error types for the terminal client.

use hiroba_server::domain::ValueObjectError;
use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Rejected user input (blank name, unknown command, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<ValueObjectError> for ClientError {
    fn from(error: ValueObjectError) -> Self {
        ClientError::InvalidInput(error.to_string())
    }
}
