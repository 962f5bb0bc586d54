//! Content-derived cache keys

use serde_json::{Value, json};
use sha1::{Digest, Sha1};

/// Digest of the exact JSON serialization of `payload`.
///
/// Object field order is significant and slashes are not escaped, so two
/// requests share a key only when they serialize to identical bytes.
pub fn make_key(payload: &Value) -> String {
    let serialized = payload.to_string();
    hex::encode(Sha1::digest(serialized.as_bytes()))
}

/// Key for a `method` + `params` request pair
pub fn request_key(method: &str, params: &Value) -> String {
    make_key(&json!({
        "method": method,
        "params": params,
    }))
}
