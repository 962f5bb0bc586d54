//! Error types for monrelay
//!
//! Every failure the core can raise is a variant of [`MonrelayError`]:
//! - `RemoteUnavailable`: the remote endpoint could not be reached
//! - `Protocol`: the response body was not a JSON object
//! - `Api`: the remote endpoint answered with a JSON-RPC `error` object
//! - `UnsupportedMethod`: the local invoker does not expose the method
//!
//! The remaining variants cover configuration and the helpers offered to
//! callers (`NotFound` is a caller-level convention, never raised by the
//! dispatcher).

mod classifiers;
mod constructors;
mod conversions;
mod types;

pub use constructors::ensure_found;
pub use types::{MonrelayError, MonrelayResult};

/// Message shown when an entity query returns an empty result set.
pub const ENTITY_NOT_FOUND_MESSAGE: &str =
    "No permissions to referred object or it does not exist!";

/// Message shown when a request names no resolvable server.
pub const NO_SERVER_MESSAGE: &str = "No remote server or entity specified.";
