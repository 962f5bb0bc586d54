//! From trait implementations for MonrelayError conversions

use super::types::MonrelayError;

impl From<std::io::Error> for MonrelayError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for MonrelayError {
    fn from(error: serde_json::Error) -> Self {
        Self::json(error.to_string())
    }
}

impl From<reqwest::Error> for MonrelayError {
    fn from(error: reqwest::Error) -> Self {
        let url = error.url().map(|u| u.to_string());
        Self::RemoteUnavailable {
            message: error.to_string(),
            url,
        }
    }
}
