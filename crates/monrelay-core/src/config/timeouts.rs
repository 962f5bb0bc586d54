//! Centralized timeout and freshness constants

/// Default timeout for one remote JSON-RPC attempt (15 seconds)
pub const REMOTE_REQUEST_SECS: u64 = 15;

/// Default connection timeout for remote endpoints (15 seconds)
pub const REMOTE_CONNECT_SECS: u64 = 15;

/// Freshness window of a server meta record (60 seconds)
pub const SERVER_META_TTL_SECS: i64 = 60;
