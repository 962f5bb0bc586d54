//! Probe servers with `apiinfo.version` and record the outcome

use crate::cache::{CacheStore, ServerMeta, connection_status};
use crate::config::{ServerDescriptor, Transport};
use crate::error::MonrelayError;
use crate::registry::Dispatcher;
use serde_json::{Value, json};
use tracing::{debug, info, warn};

/// Unauthenticated method answered by every server
pub const VERSION_METHOD: &str = "apiinfo.version";

/// Result of probing one server
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeOutcome {
    pub server_id: String,
    pub meta: ServerMeta,
    /// Why the server is down, when it was contacted and failed
    pub error: Option<MonrelayError>,
    /// The meta record was fresh and no request was made
    pub from_cache: bool,
}

/// Refreshes the per-server meta record.
///
/// Probe failures are recorded as `connection_status = "down"` and reported
/// in the outcome instead of being raised.
#[derive(Debug, Clone, Copy)]
pub struct StatusProbe<'a> {
    dispatcher: &'a Dispatcher,
    cache: &'a CacheStore,
}

impl<'a> StatusProbe<'a> {
    pub fn new(dispatcher: &'a Dispatcher, cache: &'a CacheStore) -> Self {
        Self { dispatcher, cache }
    }

    /// Probe `server`, reusing a fresh meta record unless `force` is set
    pub async fn probe(&self, server: &ServerDescriptor, force: bool) -> ProbeOutcome {
        let url = match server.transport() {
            Transport::Local => {
                return ProbeOutcome {
                    server_id: server.id.clone(),
                    meta: ServerMeta {
                        connection_status: Some(connection_status::UP.to_string()),
                        ..Default::default()
                    },
                    error: None,
                    from_cache: false,
                };
            }
            Transport::Remote { url, .. } => url,
        };

        if !force {
            let cached = self.cache.get_server_meta(&server.id);
            if cached.connection_status.is_some() {
                debug!(server_id = %server.id, "using cached server status");
                return ProbeOutcome {
                    server_id: server.id.clone(),
                    meta: cached,
                    error: None,
                    from_cache: true,
                };
            }
        }

        let (update, error) = match self
            .dispatcher
            .remote()
            .call_no_auth(&url, VERSION_METHOD, &json!({}))
            .await
        {
            Ok(version) => {
                info!(server_id = %server.id, "server reachable");
                let update = ServerMeta {
                    api_version: version_string(&version),
                    connection_status: Some(connection_status::UP.to_string()),
                    last_reached: Some(self.cache.now()),
                };
                (update, None)
            }
            Err(error) => {
                warn!(
                    server_id = %server.id,
                    error = %error,
                    retryable = error.is_retryable(),
                    "server probe failed"
                );
                let update = ServerMeta {
                    connection_status: Some(connection_status::DOWN.to_string()),
                    ..Default::default()
                };
                (update, Some(error))
            }
        };

        self.cache.set_server_meta(&server.id, &update);
        let stored = self.cache.get_server_meta(&server.id);

        ProbeOutcome {
            server_id: server.id.clone(),
            meta: if stored.is_empty() { update } else { stored },
            error,
            from_cache: false,
        }
    }

    /// Probe every enabled remote server, then the local pseudo-server
    pub async fn probe_all(&self, force: bool) -> Vec<ProbeOutcome> {
        let mut servers: Vec<ServerDescriptor> =
            self.dispatcher.registry().enabled_remotes().cloned().collect();
        servers.push(ServerDescriptor::local());

        let mut outcomes = Vec::with_capacity(servers.len());
        for server in &servers {
            outcomes.push(self.probe(server, force).await);
        }
        outcomes
    }
}

fn version_string(version: &Value) -> Option<String> {
    match version {
        Value::String(v) if !v.is_empty() => Some(v.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
