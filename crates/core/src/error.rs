//! Error types for the travel assistant.

use thiserror::Error;

/// Result type alias using the travel assistant's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the travel assistant.
#[derive(Error, Debug)]
pub enum Error {
    // =========================================================================
    // Request Errors
    // =========================================================================
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Upload rejected: {0}")]
    Upload(String),

    // =========================================================================
    // Dialogue Errors
    // =========================================================================
    #[error("Dialogue service error: {0}")]
    Dialogue(String),

    #[error("Dialogue service returned no usable response")]
    DialogueUnavailable,

    // =========================================================================
    // Rendering / Configuration Errors
    // =========================================================================
    #[error("Template error: {0}")]
    Template(String),

    #[error("Configuration error: {0}")]
    Config(String),

    // =========================================================================
    // Generic Errors
    // =========================================================================
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Create an invalid request error.
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Create an upload rejection error.
    pub fn upload(msg: impl Into<String>) -> Self {
        Self::Upload(msg.into())
    }

    /// Create a dialogue service error.
    pub fn dialogue(msg: impl Into<String>) -> Self {
        Self::Dialogue(msg.into())
    }

    /// Create a template error.
    pub fn template(msg: impl Into<String>) -> Self {
        Self::Template(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<config::ConfigError> for Error {
    fn from(e: config::ConfigError) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<tera::Error> for Error {
    fn from(e: tera::Error) -> Self {
        Self::Template(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::dialogue("timeout").to_string(),
            "Dialogue service error: timeout"
        );
        assert_eq!(
            Error::DialogueUnavailable.to_string(),
            "Dialogue service returned no usable response"
        );
    }
}
