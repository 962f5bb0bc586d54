//! In-process API seam used by the local pseudo-server
//!
//! The hosting application implements [`LocalApi`]; only the methods named
//! by [`LocalMethod`] can reach it.

mod fixture;
mod method;

pub use fixture::FixtureLocalApi;
pub use method::LocalMethod;

use crate::error::MonrelayResult;
use async_trait::async_trait;
use serde_json::Value;

/// In-process domain API of the hosting application
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocalApi: Send + Sync {
    /// Run an allow-listed read method and return its result objects
    async fn get(&self, method: LocalMethod, params: Value) -> MonrelayResult<Vec<Value>>;
}

/// Parse `method` against the allow-list and forward to `api`
pub async fn invoke_local(api: &dyn LocalApi, method: &str, params: Value) -> MonrelayResult<Value> {
    let method: LocalMethod = method.parse()?;
    tracing::debug!(method = method.as_str(), "invoking local API");
    let results = api.get(method, params).await?;
    Ok(Value::Array(results))
}
