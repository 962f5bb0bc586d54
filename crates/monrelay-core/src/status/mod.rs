//! Server reachability probing backed by the meta cache

mod probe;

#[cfg(test)]
mod tests;

pub use probe::{ProbeOutcome, StatusProbe, VERSION_METHOD};
