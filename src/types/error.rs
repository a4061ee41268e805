//! Error types and handling for the blog service
//!
//! A single error enum covers every failure a request or the startup path can
//! hit. The HTTP mapping lives in `api::response`.

use thiserror::Error;

/// Main result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the blog service
#[derive(Error, Debug)]
pub enum Error {
    /// No record matches the given identifier or filter
    #[error("{0}")]
    NotFound(String),

    /// Malformed request: bad JSON, missing or mistyped field, bad path id
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The document store could not be reached
    #[error("Document store unavailable: {0}")]
    StoreUnavailable(String),

    /// The document store answered with a failure
    #[error("Document store error: {0}")]
    Store(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Metrics registry errors
    #[error("Metrics error: {0}")]
    Metrics(#[from] prometheus::Error),

    /// I/O errors from std
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(resource.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a store unavailable error
    pub fn store_unavailable(msg: impl Into<String>) -> Self {
        Self::StoreUnavailable(msg.into())
    }

    /// Create a generic store error
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Check if this is a client error (4xx equivalent)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::NotFound(_) | Error::InvalidInput(_))
    }

    /// Check if this is a server error (5xx equivalent)
    pub fn is_server_error(&self) -> bool {
        !self.is_client_error()
    }
}

impl From<mongodb::error::Error> for Error {
    fn from(err: mongodb::error::Error) -> Self {
        use mongodb::error::ErrorKind;

        match err.kind.as_ref() {
            ErrorKind::ServerSelection { .. }
            | ErrorKind::Io(_)
            | ErrorKind::ConnectionPoolCleared { .. } => Error::store_unavailable(err.to_string()),
            _ => Error::store(err.to_string()),
        }
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error::config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_displays_bare_message() {
        let err = Error::not_found("Post not found");
        assert_eq!(err.to_string(), "Post not found");
        assert!(err.is_client_error());
    }

    #[test]
    fn store_failures_are_server_errors() {
        assert!(Error::store_unavailable("down").is_server_error());
        assert!(Error::store("write failed").is_server_error());
        assert!(!Error::invalid_input("age").is_server_error());
    }
}
