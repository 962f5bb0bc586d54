//! Best-effort on-disk cache for remote query results and server status
//!
//! One JSON document holds two namespaces:
//!
//! - `servers`: per server, cached payloads keyed by a content digest of the
//!   request ([`make_key`]), each stamped with its write time. Freshness is
//!   decided by the TTL the reader passes in.
//! - `server_meta`: per server, a small status record (API version,
//!   connection status, last reached time) with a fixed 60 second TTL.
//!
//! Every operation is a full read-decode, mutate, re-encode-write cycle with
//! no locking. Concurrent writers may overwrite each other; the last full
//! document written wins. A missing or unreadable file reads as empty and
//! write failures are logged, never raised.

mod clock;
mod key;
mod read_through;
mod store;
mod types;


pub use clock::{Clock, SystemClock};
pub use key::{make_key, request_key};
pub use read_through::CachedInvoker;
pub use store::CacheStore;
pub use types::{ServerMeta, connection_status};
