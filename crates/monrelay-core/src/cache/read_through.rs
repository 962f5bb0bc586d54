//! Caller-side read-through caching around the dispatcher

use super::key::request_key;
use super::store::CacheStore;
use crate::config::ServerDescriptor;
use crate::error::MonrelayResult;
use crate::registry::Dispatcher;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Looks a request up in the cache before dispatching it and stores
/// successful results afterwards.
///
/// Entries are scoped to the server id and keyed by `method` + `params`.
/// Failures are never cached.
#[derive(Debug, Clone, Copy)]
pub struct CachedInvoker<'a> {
    dispatcher: &'a Dispatcher,
    cache: &'a CacheStore,
}

impl<'a> CachedInvoker<'a> {
    pub fn new(dispatcher: &'a Dispatcher, cache: &'a CacheStore) -> Self {
        Self { dispatcher, cache }
    }

    /// Invoke through the cache, accepting entries younger than `ttl`
    pub async fn invoke(
        &self,
        server: &ServerDescriptor,
        method: &str,
        params: Value,
        ttl: Duration,
    ) -> MonrelayResult<Value> {
        let key = request_key(method, &params);

        if let Some(cached) = self.cache.get(&server.id, &key, ttl) {
            return Ok(cached);
        }

        debug!(server_id = %server.id, method, "cache miss, dispatching");
        let result = self.dispatcher.invoke(server, method, params).await?;
        self.cache.set(&server.id, &key, result.clone());
        Ok(result)
    }

    /// Drop every cached result of `server`
    pub fn invalidate_server(&self, server: &ServerDescriptor) {
        self.cache.clear_server(&server.id);
    }
}
