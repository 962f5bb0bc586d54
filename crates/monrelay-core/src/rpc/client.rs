//! Remote JSON-RPC client with bearer → legacy auth fallback

use super::auth::AuthMode;
use super::envelope::{JSONRPC_CONTENT_TYPE, RpcRequest, decode_response};
use crate::config::RemoteConfig;
use crate::error::{MonrelayError, MonrelayResult};
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use tracing::{debug, instrument, warn};

/// Client for the JSON-RPC API of remote monitoring servers.
///
/// Stateless apart from the pooled HTTP client; never caches results. Each
/// attempt is bounded by the configured request timeout, so a call that
/// falls back to legacy auth blocks for at most two timeouts.
#[derive(Debug, Clone)]
pub struct RemoteApiClient {
    http_client: Client,
}

impl RemoteApiClient {
    /// Create a client with the configured timeouts
    pub fn new(config: &RemoteConfig) -> MonrelayResult<Self> {
        let http_client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| {
                MonrelayError::config_with_context(
                    format!("Failed to create HTTP client: {}", e),
                    "Building the remote API client",
                )
            })?;

        debug!(
            "Created remote API client with timeouts: connection={}s, request={}s",
            config.connect_timeout_secs, config.request_timeout_secs
        );

        Ok(Self { http_client })
    }

    /// Wrap an existing HTTP client
    pub fn with_http_client(http_client: Client) -> Self {
        Self { http_client }
    }

    /// Call `method` on the server at `url`.
    ///
    /// With a non-empty token the first attempt uses bearer mode. If it fails
    /// with a message containing "not authorized", one more attempt is made
    /// in legacy mode; its outcome is final. Every other failure is returned
    /// as is.
    #[instrument(skip_all, fields(url = %url, method = %method))]
    pub async fn call(
        &self,
        url: &str,
        token: &str,
        method: &str,
        params: &Value,
    ) -> MonrelayResult<Value> {
        match self
            .request(url, token, method, params, AuthMode::Bearer)
            .await
        {
            Err(error) if !token.is_empty() && error.is_not_authorized() => {
                warn!(
                    error = %error,
                    "bearer token rejected, retrying with legacy auth"
                );
                self.request(url, token, method, params, AuthMode::Legacy)
                    .await
            }
            outcome => outcome,
        }
    }

    /// Call `method` without any credentials; a single attempt, no fallback
    #[instrument(skip_all, fields(url = %url, method = %method))]
    pub async fn call_no_auth(
        &self,
        url: &str,
        method: &str,
        params: &Value,
    ) -> MonrelayResult<Value> {
        self.request(url, "", method, params, AuthMode::Bearer)
            .await
    }

    async fn request(
        &self,
        url: &str,
        token: &str,
        method: &str,
        params: &Value,
        mode: AuthMode,
    ) -> MonrelayResult<Value> {
        let mut envelope = RpcRequest::new(method, params);
        let mut request = self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, JSONRPC_CONTENT_TYPE);

        if !token.is_empty() {
            match mode {
                AuthMode::Bearer => {
                    request = request.header(AUTHORIZATION, format!("Bearer {}", token));
                }
                AuthMode::Legacy => {
                    envelope = envelope.with_auth(token);
                }
            }
        }

        let body = serde_json::to_vec(&envelope)?;
        debug!(auth_mode = mode.as_str(), "sending JSON-RPC request");

        let response = request
            .body(body)
            .send()
            .await
            .map_err(|e| MonrelayError::remote_unavailable_at(e.to_string(), url))?;

        let text = response
            .text()
            .await
            .map_err(|e| MonrelayError::remote_unavailable_at(e.to_string(), url))?;

        decode_response(&text).map_err(|error| match error {
            MonrelayError::Protocol { message, .. } => MonrelayError::protocol_at(message, url),
            other => other,
        })
    }
}
