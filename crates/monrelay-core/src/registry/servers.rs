//! Registry of configured servers plus the local pseudo-server

use crate::config::{LOCAL_SERVER_ID, ServerDescriptor};

/// Immutable view over the configured servers.
///
/// The local pseudo-server is not stored; it is synthesized on lookup and
/// comes after every configured server.
#[derive(Debug, Clone, Default)]
pub struct ServerRegistry {
    servers: Vec<ServerDescriptor>,
}

impl ServerRegistry {
    pub fn new(servers: Vec<ServerDescriptor>) -> Self {
        Self { servers }
    }

    /// First server whose id equals `server_id`, including `"local"`
    pub fn resolve(&self, server_id: &str) -> Option<ServerDescriptor> {
        self.servers
            .iter()
            .find(|server| server.id == server_id)
            .cloned()
            .or_else(|| (server_id == LOCAL_SERVER_ID).then(ServerDescriptor::local))
    }

    /// Configured servers followed by the local pseudo-server
    pub fn all(&self) -> Vec<ServerDescriptor> {
        let mut all = self.servers.clone();
        all.push(ServerDescriptor::local());
        all
    }

    /// Configured servers with `enabled` set
    pub fn enabled_remotes(&self) -> impl Iterator<Item = &ServerDescriptor> {
        self.servers.iter().filter(|server| server.enabled)
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }
}
