//! JSON-RPC access to remote monitoring servers
//!
//! [`RemoteApiClient::call`] presents the token as a bearer header first and,
//! when the server answers with an authorization failure, retries exactly
//! once with the token embedded in the request body (`auth` field) for
//! servers that only accept the legacy scheme.

mod auth;
mod client;
mod envelope;
mod web_url;

#[cfg(test)]
mod tests;

pub use client::RemoteApiClient;
pub use envelope::JSONRPC_CONTENT_TYPE;
pub use web_url::web_url;
