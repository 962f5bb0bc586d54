//! Constructor methods for MonrelayError

use super::types::{MonrelayError, MonrelayResult};
use super::ENTITY_NOT_FOUND_MESSAGE;
use serde_json::Value;

impl MonrelayError {
    /// Create a transport failure error
    pub fn remote_unavailable(message: impl Into<String>) -> Self {
        Self::RemoteUnavailable {
            message: message.into(),
            url: None,
        }
    }

    /// Create a transport failure error for a specific endpoint
    pub fn remote_unavailable_at(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::RemoteUnavailable {
            message: message.into(),
            url: Some(url.into()),
        }
    }

    /// Create a protocol error
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
            url: None,
        }
    }

    /// Create a protocol error for a specific endpoint
    pub fn protocol_at(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
            url: Some(url.into()),
        }
    }

    /// Create a remote API error
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
            code: None,
        }
    }

    /// Create a remote API error carrying the JSON-RPC error code
    pub fn api_with_code(message: impl Into<String>, code: Option<i64>) -> Self {
        Self::Api {
            message: message.into(),
            code,
        }
    }

    /// Create an unsupported method error
    pub fn unsupported_method(method: impl Into<String>) -> Self {
        Self::UnsupportedMethod {
            method: method.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            resource_type: None,
        }
    }

    /// The canonical "missing or forbidden entity" error
    pub fn not_found_entity(resource_type: impl Into<String>) -> Self {
        Self::NotFound {
            message: ENTITY_NOT_FOUND_MESSAGE.to_string(),
            resource_type: Some(resource_type.into()),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: None,
        }
    }

    /// Create a configuration error with context
    pub fn config_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Create a new IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
        }
    }

    /// Create an IO error with the offending path
    pub fn io_with_path(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a new JSON error
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json {
            message: message.into(),
        }
    }
}

/// Return the first element of an entity query result.
///
/// An empty (or non-array) result becomes [`MonrelayError::NotFound`] with
/// the canonical entity message.
pub fn ensure_found(results: Value, resource_type: &str) -> MonrelayResult<Value> {
    match results {
        Value::Array(items) => items
            .into_iter()
            .next()
            .ok_or_else(|| MonrelayError::not_found_entity(resource_type)),
        _ => Err(MonrelayError::not_found_entity(resource_type)),
    }
}
