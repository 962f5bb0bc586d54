//! Invoke a method on a server

use super::build_dispatcher;
use anyhow::{Context, Result, bail};
use monrelay_core::error::NO_SERVER_MESSAGE;
use monrelay_core::{CacheStore, CachedInvoker, Config};
use serde_json::Value;
use std::time::Duration;

/// Resolve `server_id`, invoke `method` and print the result as JSON
pub async fn execute(
    config: &Config,
    server_id: &str,
    method: &str,
    params: &str,
    cache_ttl: Option<u64>,
) -> Result<()> {
    let params: Value =
        serde_json::from_str(params).context("--params must be a JSON document")?;

    let dispatcher = build_dispatcher(config)?;
    let Some(server) = dispatcher.resolve(server_id) else {
        bail!(NO_SERVER_MESSAGE);
    };

    let result = match cache_ttl {
        Some(secs) => {
            let cache = CacheStore::from_config(&config.cache);
            CachedInvoker::new(&dispatcher, &cache)
                .invoke(&server, method, params, Duration::from_secs(secs))
                .await?
        }
        None => dispatcher.invoke(&server, method, params).await?,
    };

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
