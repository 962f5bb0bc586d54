//! Cache document record types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field names persisted in a server meta record
pub(crate) const META_KEYS: [&str; 3] = ["api_version", "connection_status", "last_reached"];

/// Well-known `connection_status` values
pub mod connection_status {
    pub const UP: &str = "up";
    pub const DOWN: &str = "down";
}

/// Point-in-time status of a server.
///
/// Used both as the read result and as a partial update: `None` fields are
/// left untouched by [`crate::cache::CacheStore::set_server_meta`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_status: Option<String>,
    /// Unix seconds of the last successful contact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reached: Option<i64>,
}

impl ServerMeta {
    pub fn is_empty(&self) -> bool {
        self.api_version.is_none() && self.connection_status.is_none() && self.last_reached.is_none()
    }

    pub fn is_up(&self) -> bool {
        self.connection_status.as_deref() == Some(connection_status::UP)
    }

    /// Read the recognized fields out of a stored record, skipping malformed ones
    pub(crate) fn from_record(record: &Map<String, Value>) -> Self {
        Self {
            api_version: record
                .get("api_version")
                .and_then(scalar_to_string),
            connection_status: record
                .get("connection_status")
                .and_then(scalar_to_string),
            last_reached: record.get("last_reached").and_then(timestamp_of),
        }
    }

    /// Merge `self` (an update) into a stored record, keeping only recognized fields
    pub(crate) fn merge_into(&self, record: &Map<String, Value>) -> Map<String, Value> {
        let mut merged: Map<String, Value> = record
            .iter()
            .filter(|(key, _)| META_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        if let Some(version) = &self.api_version {
            merged.insert("api_version".to_string(), Value::String(version.clone()));
        }
        if let Some(status) = &self.connection_status {
            merged.insert("connection_status".to_string(), Value::String(status.clone()));
        }
        if let Some(reached) = self.last_reached {
            merged.insert("last_reached".to_string(), Value::from(reached));
        }

        merged
    }
}

/// Lenient unix-seconds reader: integers, floats and numeric strings
pub(crate) fn timestamp_of(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
