//! Routes a method call to the local invoker or the remote client

use super::servers::ServerRegistry;
use crate::config::{Config, ServerDescriptor, Transport};
use crate::error::MonrelayResult;
use crate::local::{LocalApi, invoke_local};
use crate::rpc::RemoteApiClient;
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

/// Single entry point for "invoke remote method" / "invoke local method".
///
/// Never consults the cache; callers that want read-through caching wrap
/// it in [`crate::cache::CachedInvoker`].
#[derive(Clone)]
pub struct Dispatcher {
    registry: ServerRegistry,
    remote: RemoteApiClient,
    local: Arc<dyn LocalApi>,
}

impl Dispatcher {
    pub fn new(registry: ServerRegistry, remote: RemoteApiClient, local: Arc<dyn LocalApi>) -> Self {
        Self {
            registry,
            remote,
            local,
        }
    }

    /// Build a dispatcher from loaded configuration
    pub fn from_config(config: &Config, local: Arc<dyn LocalApi>) -> MonrelayResult<Self> {
        Ok(Self::new(
            ServerRegistry::new(config.servers.clone()),
            RemoteApiClient::new(&config.remote)?,
            local,
        ))
    }

    pub fn registry(&self) -> &ServerRegistry {
        &self.registry
    }

    pub fn remote(&self) -> &RemoteApiClient {
        &self.remote
    }

    /// Resolve a server id; see [`ServerRegistry::resolve`]
    pub fn resolve(&self, server_id: &str) -> Option<ServerDescriptor> {
        self.registry.resolve(server_id)
    }

    /// Invoke `method` on `server` through its transport.
    ///
    /// `server` must come from [`Dispatcher::resolve`]. Failures of the chosen
    /// transport are returned unchanged.
    #[instrument(skip_all, fields(server_id = %server.id, method = %method))]
    pub async fn invoke(
        &self,
        server: &ServerDescriptor,
        method: &str,
        params: Value,
    ) -> MonrelayResult<Value> {
        match server.transport() {
            Transport::Local => invoke_local(self.local.as_ref(), method, params).await,
            Transport::Remote { url, token } => {
                self.remote.call(&url, &token, method, &params).await
            }
        }
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("registry", &self.registry)
            .field("remote", &self.remote)
            .finish_non_exhaustive()
    }
}
