//! Core error type for monrelay

use thiserror::Error;

/// Result type alias for monrelay operations
pub type MonrelayResult<T> = Result<T, MonrelayError>;

/// Main error type for monrelay
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MonrelayError {
    /// Transport-level failure reaching the remote endpoint
    #[error("Remote API unavailable: {message}")]
    RemoteUnavailable {
        message: String,
        url: Option<String>,
    },

    /// Response body is not a decodable JSON object
    #[error("{message}")]
    Protocol {
        message: String,
        url: Option<String>,
    },

    /// The remote endpoint returned a JSON-RPC error object.
    ///
    /// Displays the extracted message verbatim so callers can surface it.
    #[error("{message}")]
    Api { message: String, code: Option<i64> },

    /// Local invocation of a method outside the allow-list
    #[error("Unsupported local API method: {method}")]
    UnsupportedMethod { method: String },

    /// Entity query returned nothing
    #[error("{message}")]
    NotFound {
        message: String,
        resource_type: Option<String>,
    },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json { message: String },
}
