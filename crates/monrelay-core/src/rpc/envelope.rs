//! JSON-RPC 2.0 request envelope and response decoding

use crate::error::{MonrelayError, MonrelayResult};
use serde::Serialize;
use serde_json::Value;

/// Content type sent with every request
pub const JSONRPC_CONTENT_TYPE: &str = "application/json-rpc";

const JSONRPC_VERSION: &str = "2.0";
const REQUEST_ID: u64 = 1;
const INVALID_RESPONSE: &str = "Invalid JSON-RPC response.";
const UNKNOWN_API_ERROR: &str = "Unknown API error.";

/// Request body; built fresh for each attempt
#[derive(Debug, Clone, Serialize)]
pub(crate) struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub method: &'a str,
    pub params: &'a Value,
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<&'a str>,
}

impl<'a> RpcRequest<'a> {
    pub(crate) fn new(method: &'a str, params: &'a Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            method,
            params,
            id: REQUEST_ID,
            auth: None,
        }
    }

    /// Embed the token in the body (legacy auth mode)
    pub(crate) fn with_auth(mut self, token: &'a str) -> Self {
        self.auth = Some(token);
        self
    }
}

/// Decode a response body into its `result`.
///
/// - body not a JSON object: [`MonrelayError::Protocol`]
/// - `error` present: [`MonrelayError::Api`] with `error.data`, else
///   `error.message`, else a generic message
/// - `result` absent or null: empty array
pub(crate) fn decode_response(body: &str) -> MonrelayResult<Value> {
    let mut response = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => map,
        _ => return Err(MonrelayError::protocol(INVALID_RESPONSE)),
    };

    if let Some(error) = response.get("error") {
        return Err(MonrelayError::api_with_code(
            error_message(error),
            error.get("code").and_then(Value::as_i64),
        ));
    }

    match response.remove("result") {
        Some(Value::Null) | None => Ok(Value::Array(Vec::new())),
        Some(result) => Ok(result),
    }
}

fn error_message(error: &Value) -> String {
    ["data", "message"]
        .iter()
        .filter_map(|field| error.get(*field))
        .find_map(|value| match value {
            Value::Null => None,
            Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        })
        .unwrap_or_else(|| UNKNOWN_API_ERROR.to_string())
}
