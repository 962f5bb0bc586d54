//! Configuration validation

use super::model::Config;
use super::server::LOCAL_SERVER_ID;
use crate::error::{MonrelayError, MonrelayResult};
use std::collections::HashSet;

impl Config {
    /// Validate the loaded configuration
    pub fn validate(&self) -> MonrelayResult<()> {
        let mut seen = HashSet::new();

        for server in &self.servers {
            if server.id.trim().is_empty() {
                return Err(MonrelayError::config("Server id must not be empty"));
            }
            if server.id == LOCAL_SERVER_ID {
                return Err(MonrelayError::config_with_context(
                    format!("Server id '{}' is reserved", LOCAL_SERVER_ID),
                    "The local pseudo-server is synthesized and cannot be configured",
                ));
            }
            if !seen.insert(server.id.as_str()) {
                return Err(MonrelayError::config(format!(
                    "Duplicate server id '{}'",
                    server.id
                )));
            }
            if server.api_url.trim().is_empty() {
                return Err(MonrelayError::config(format!(
                    "Server '{}' has no api_url",
                    server.id
                )));
            }
        }

        if self.remote.request_timeout_secs == 0 || self.remote.connect_timeout_secs == 0 {
            return Err(MonrelayError::config("Remote timeouts must be greater than zero"));
        }

        if self.cache.file_name.trim().is_empty() {
            return Err(MonrelayError::config("Cache file name must not be empty"));
        }

        Ok(())
    }
}
