//! File-backed cache store

use super::clock::{Clock, SystemClock};
use super::types::{ServerMeta, timestamp_of};
use crate::config::CacheConfig;
use crate::config::timeouts::SERVER_META_TTL_SECS;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

const SERVERS: &str = "servers";
const SERVER_META: &str = "server_meta";
const ENTRIES: &str = "entries";
const TS: &str = "ts";
const PAYLOAD: &str = "payload";

/// Whole-document JSON cache shared by every process using the same path.
///
/// Holds no state between calls: each accessor re-reads the file.
#[derive(Debug, Clone)]
pub struct CacheStore {
    path: PathBuf,
    clock: Arc<dyn Clock>,
}

impl CacheStore {
    /// Create a store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_clock(path, Arc::new(SystemClock))
    }

    /// Create a store at the configured location
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.path())
    }

    /// Create a store with an explicit time source
    pub fn with_clock(path: impl Into<PathBuf>, clock: Arc<dyn Clock>) -> Self {
        Self {
            path: path.into(),
            clock,
        }
    }

    /// Location of the cache document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current time of the store's clock, in unix seconds
    pub fn now(&self) -> i64 {
        self.clock.now()
    }

    /// Cached payload for `key` under `server_id`, if written within `ttl`
    pub fn get(&self, server_id: &str, key: &str, ttl: Duration) -> Option<Value> {
        let document = self.load();
        let entry = document
            .get(SERVERS)?
            .get(server_id)?
            .get(ENTRIES)?
            .get(key)?;

        let written = entry.get(TS).and_then(timestamp_of)?;
        let ttl = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);
        let Some(age) = self.age_within(written, ttl) else {
            debug!(server_id, key, "cache entry stale");
            return None;
        };

        match entry.get(PAYLOAD) {
            Some(Value::Null) | None => None,
            Some(payload) => {
                debug!(server_id, key, age, "cache hit");
                Some(payload.clone())
            }
        }
    }

    /// Write `payload` for `key` under `server_id`, stamped with the current time
    pub fn set(&self, server_id: &str, key: &str, payload: Value) {
        let mut document = self.load();
        let mut entry = Map::new();
        entry.insert(TS.to_string(), Value::from(self.clock.now()));
        entry.insert(PAYLOAD.to_string(), payload);

        let servers = object_at(&mut document, SERVERS);
        let server = object_at(servers, server_id);
        let entries = object_at(server, ENTRIES);
        entries.insert(key.to_string(), Value::Object(entry));

        self.save(&document);
    }

    /// Drop every cached entry of `server_id`
    pub fn clear_server(&self, server_id: &str) {
        let mut document = self.load();
        if remove_nested(&mut document, SERVERS, server_id) {
            self.save(&document);
        }
    }

    /// Status record of `server_id`; empty when absent or older than 60 seconds
    pub fn get_server_meta(&self, server_id: &str) -> ServerMeta {
        let document = self.load();
        document
            .get(SERVER_META)
            .and_then(|all| all.get(server_id))
            .and_then(Value::as_object)
            .and_then(|record| self.fresh_meta(record))
            .unwrap_or_default()
    }

    /// Every fresh, well-formed status record keyed by server id
    pub fn get_server_meta_all(&self) -> BTreeMap<String, ServerMeta> {
        let document = self.load();
        let Some(all) = document.get(SERVER_META).and_then(Value::as_object) else {
            return BTreeMap::new();
        };

        all.iter()
            .filter_map(|(server_id, record)| {
                let meta = self.fresh_meta(record.as_object()?)?;
                (!meta.is_empty()).then(|| (server_id.clone(), meta))
            })
            .collect()
    }

    /// Merge `updates` into the status record of `server_id`.
    ///
    /// No-op when `updates` carries no field. Any write refreshes the shared
    /// timestamp of the whole record.
    pub fn set_server_meta(&self, server_id: &str, updates: &ServerMeta) {
        if updates.is_empty() {
            return;
        }

        let mut document = self.load();
        let all = object_at(&mut document, SERVER_META);
        let record = object_at(all, server_id);

        let mut merged = updates.merge_into(record);
        merged.insert(TS.to_string(), Value::from(self.clock.now()));
        *record = merged;

        self.save(&document);
    }

    /// Drop the status record of `server_id`
    pub fn clear_server_meta(&self, server_id: &str) {
        let mut document = self.load();
        if remove_nested(&mut document, SERVER_META, server_id) {
            self.save(&document);
        }
    }

    fn fresh_meta(&self, record: &Map<String, Value>) -> Option<ServerMeta> {
        let written = record.get(TS).and_then(timestamp_of)?;
        self.age_within(written, SERVER_META_TTL_SECS)?;
        Some(ServerMeta::from_record(record))
    }

    /// Age of a record written at `written`, if it lies in `0..=ttl`.
    ///
    /// Timestamps in the future or too far in the past to subtract count as stale.
    fn age_within(&self, written: i64, ttl: i64) -> Option<i64> {
        let age = self.clock.now().checked_sub(written)?;
        (0..=ttl).contains(&age).then_some(age)
    }

    fn load(&self) -> Map<String, Value> {
        if !self.path.is_file() {
            return Map::new();
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read cache {}: {}", self.path.display(), e);
                return Map::new();
            }
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(document)) => document,
            Ok(_) | Err(_) => {
                debug!("Ignoring malformed cache document {}", self.path.display());
                Map::new()
            }
        }
    }

    fn save(&self, document: &Map<String, Value>) {
        let content = match serde_json::to_string(document) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to serialize cache document: {}", e);
                return;
            }
        };

        if let Err(e) = fs::write(&self.path, content) {
            warn!("Failed to write cache {}: {}", self.path.display(), e);
        }
    }
}

/// Object stored under `key`, replacing any non-object value
fn object_at<'a>(map: &'a mut Map<String, Value>, key: &str) -> &'a mut Map<String, Value> {
    let slot = map
        .entry(key.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    match slot {
        Value::Object(object) => object,
        _ => unreachable!("slot was just made an object"),
    }
}

/// Remove `document[namespace][server_id]`, pruning `namespace` if left empty.
///
/// Returns whether anything was removed.
fn remove_nested(document: &mut Map<String, Value>, namespace: &str, server_id: &str) -> bool {
    let Some(all) = document.get_mut(namespace).and_then(Value::as_object_mut) else {
        return false;
    };
    if all.remove(server_id).is_none() {
        return false;
    }
    if all.is_empty() {
        document.remove(namespace);
    }
    true
}
