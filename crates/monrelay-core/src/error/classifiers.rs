//! Error classification used by the remote client and the CLI

use super::types::MonrelayError;

const NOT_AUTHORIZED_MARKER: &str = "not authorized";

impl MonrelayError {
    /// Short stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::RemoteUnavailable { .. } => "REMOTE_UNAVAILABLE",
            Self::Protocol { .. } => "PROTOCOL_ERROR",
            Self::Api { .. } => "API_ERROR",
            Self::UnsupportedMethod { .. } => "UNSUPPORTED_METHOD",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Config { .. } => "CONFIG_ERROR",
            Self::Io { .. } => "IO_ERROR",
            Self::Json { .. } => "JSON_ERROR",
        }
    }

    /// The bare message, without the variant prefix
    pub fn message(&self) -> String {
        match self {
            Self::RemoteUnavailable { message, .. }
            | Self::Protocol { message, .. }
            | Self::Api { message, .. }
            | Self::NotFound { message, .. }
            | Self::Config { message, .. }
            | Self::Io { message, .. }
            | Self::Json { message } => message.clone(),
            Self::UnsupportedMethod { .. } => self.to_string(),
        }
    }

    /// Whether a remote failure reads like an authorization rejection.
    ///
    /// Case-insensitive substring match on "not authorized"; this is the only
    /// trigger for the legacy auth-mode retry.
    pub fn is_not_authorized(&self) -> bool {
        match self {
            Self::RemoteUnavailable { message, .. }
            | Self::Protocol { message, .. }
            | Self::Api { message, .. } => {
                message.to_lowercase().contains(NOT_AUTHORIZED_MARKER)
            }
            _ => false,
        }
    }

    /// Whether a later attempt may succeed: the remote side was unreachable
    /// rather than answering badly. The core itself never retries these.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RemoteUnavailable { .. })
    }
}
