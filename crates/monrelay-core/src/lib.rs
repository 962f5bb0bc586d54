//! Monrelay Core Library
//!
//! Access layer for the JSON-RPC API of remote monitoring servers: a
//! dispatcher that routes calls either to a remote instance or to an
//! in-process local API, and a best-effort on-disk cache for query results
//! and per-server status.

pub mod cache;
pub mod config;
pub mod error;
pub mod local;
pub mod registry;
pub mod rpc;
pub mod status;

// Re-export commonly used types
pub use cache::{CacheStore, CachedInvoker, ServerMeta, make_key};
pub use config::{Config, LOCAL_SERVER_ID, ServerDescriptor, Transport, load_config};
pub use error::{MonrelayError, MonrelayResult, ensure_found};
pub use local::{FixtureLocalApi, LocalApi, LocalMethod};
pub use registry::{Dispatcher, ServerRegistry};
pub use rpc::{RemoteApiClient, web_url};
pub use status::{ProbeOutcome, StatusProbe};
