//! Server descriptors and the transport they resolve to

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed id of the synthesized local pseudo-server
pub const LOCAL_SERVER_ID: &str = "local";

/// A remote (or the local) monitoring instance.
///
/// `is_local` is never read from configuration; only
/// [`ServerDescriptor::local`] produces a local descriptor.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerDescriptor {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub api_url: String,
    #[serde(default)]
    pub api_token: String,
    /// Host group filter, consumed by presentation collaborators
    #[serde(default)]
    pub hostgroup: String,
    #[serde(default = "default_true")]
    pub include_subgroups: bool,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(skip)]
    pub is_local: bool,
}

fn default_true() -> bool {
    true
}

/// How a call against a server is carried out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transport {
    /// In-process API invoker
    Local,
    /// JSON-RPC over HTTP
    Remote { url: String, token: String },
}

impl ServerDescriptor {
    /// Create a remote server descriptor
    pub fn remote(
        id: impl Into<String>,
        name: impl Into<String>,
        api_url: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            api_url: api_url.into(),
            api_token: api_token.into(),
            hostgroup: String::new(),
            include_subgroups: true,
            enabled: true,
            is_local: false,
        }
    }

    /// The synthesized local pseudo-server
    pub fn local() -> Self {
        Self {
            id: LOCAL_SERVER_ID.to_string(),
            name: "Local server".to_string(),
            api_url: String::new(),
            api_token: String::new(),
            hostgroup: String::new(),
            include_subgroups: true,
            enabled: true,
            is_local: true,
        }
    }

    /// Resolve the transport for this descriptor
    pub fn transport(&self) -> Transport {
        if self.is_local {
            Transport::Local
        } else {
            Transport::Remote {
                url: self.api_url.clone(),
                token: self.api_token.clone(),
            }
        }
    }

    /// Display name, falling back to the id
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

impl fmt::Debug for ServerDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.api_token.is_empty() {
            ""
        } else {
            "[REDACTED]"
        };
        f.debug_struct("ServerDescriptor")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("api_url", &self.api_url)
            .field("api_token", &token)
            .field("hostgroup", &self.hostgroup)
            .field("include_subgroups", &self.include_subgroups)
            .field("enabled", &self.enabled)
            .field("is_local", &self.is_local)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_descriptor_shape() {
        let local = ServerDescriptor::local();
        assert_eq!(local.id, "local");
        assert!(local.is_local);
        assert!(local.api_url.is_empty());
        assert!(local.api_token.is_empty());
        assert_eq!(local.transport(), Transport::Local);
    }

    #[test]
    fn test_remote_transport_carries_credentials() {
        let server = ServerDescriptor::remote("eu", "EU", "https://eu.example/api_jsonrpc.php", "tok1");
        assert_eq!(
            server.transport(),
            Transport::Remote {
                url: "https://eu.example/api_jsonrpc.php".to_string(),
                token: "tok1".to_string(),
            }
        );
    }

    #[test]
    fn test_is_local_not_deserialized() {
        let server: ServerDescriptor =
            serde_json::from_str(r#"{"id":"x","api_url":"http://x","is_local":true}"#).unwrap();
        assert!(!server.is_local);
        assert!(server.enabled);
    }

    #[test]
    fn test_debug_redacts_token() {
        let server = ServerDescriptor::remote("eu", "EU", "http://eu", "secret-token");
        let rendered = format!("{:?}", server);
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
