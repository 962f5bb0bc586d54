//! Status probe tests

use super::*;
use crate::cache::{CacheStore, Clock, connection_status};
use crate::config::ServerDescriptor;
use crate::local::FixtureLocalApi;
use crate::registry::{Dispatcher, ServerRegistry};
use crate::rpc::RemoteApiClient;
use reqwest::Client;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

const START: i64 = 1_700_000_000;

#[derive(Debug)]
struct SteppingClock(AtomicI64);

impl SteppingClock {
    fn advance(&self, secs: i64) {
        self.0.fetch_add(secs, Ordering::SeqCst);
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}

struct Harness {
    _dir: TempDir,
    clock: Arc<SteppingClock>,
    cache: CacheStore,
    dispatcher: Dispatcher,
}

fn harness(servers: Vec<ServerDescriptor>) -> Harness {
    let dir = TempDir::new().unwrap();
    let clock = Arc::new(SteppingClock(AtomicI64::new(START)));
    let cache = CacheStore::with_clock(dir.path().join("monrelay_cache.json"), clock.clone());

    let http_client = Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();
    let dispatcher = Dispatcher::new(
        ServerRegistry::new(servers),
        RemoteApiClient::with_http_client(http_client),
        Arc::new(FixtureLocalApi::new()),
    );

    Harness {
        _dir: dir,
        clock,
        cache,
        dispatcher,
    }
}

async fn mount_version(server: &MockServer, version: &str, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"method": VERSION_METHOD})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"jsonrpc": "2.0", "result": version, "id": 1})),
        )
        .expect(expected_calls)
        .mount(server)
        .await;
}

fn remote(id: &str, server: &MockServer) -> ServerDescriptor {
    ServerDescriptor::remote(id, id, format!("{}/api_jsonrpc.php", server.uri()), "tok1")
}

#[tokio::test]
async fn test_probe_reachable_server_records_up() {
    let mock_server = MockServer::start().await;
    mount_version(&mock_server, "7.0.3", 1).await;

    let h = harness(vec![remote("eu", &mock_server)]);
    let server = h.dispatcher.resolve("eu").unwrap();

    let outcome = StatusProbe::new(&h.dispatcher, &h.cache)
        .probe(&server, false)
        .await;

    assert!(outcome.error.is_none());
    assert!(!outcome.from_cache);
    assert!(outcome.meta.is_up());
    assert_eq!(outcome.meta.api_version.as_deref(), Some("7.0.3"));
    assert_eq!(outcome.meta.last_reached, Some(START));
    assert_eq!(h.cache.get_server_meta("eu"), outcome.meta);

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_probe_unreachable_server_records_down_and_keeps_last_reached() {
    let h = harness(vec![ServerDescriptor::remote(
        "eu",
        "EU",
        "http://127.0.0.1:9/api_jsonrpc.php",
        "tok1",
    )]);
    h.cache.set_server_meta(
        "eu",
        &crate::cache::ServerMeta {
            api_version: Some("6.4.0".to_string()),
            connection_status: Some(connection_status::UP.to_string()),
            last_reached: Some(START - 30),
        },
    );

    let server = h.dispatcher.resolve("eu").unwrap();
    let outcome = StatusProbe::new(&h.dispatcher, &h.cache)
        .probe(&server, true)
        .await;

    assert!(outcome.error.as_ref().is_some_and(|e| e.is_retryable()));
    assert_eq!(
        outcome.meta.connection_status.as_deref(),
        Some(connection_status::DOWN)
    );
    assert_eq!(outcome.meta.api_version.as_deref(), Some("6.4.0"));
    assert_eq!(outcome.meta.last_reached, Some(START - 30));
}

#[tokio::test]
async fn test_fresh_meta_is_reused_unless_forced() {
    let mock_server = MockServer::start().await;
    mount_version(&mock_server, "7.0.3", 2).await;

    let h = harness(vec![remote("eu", &mock_server)]);
    let server = h.dispatcher.resolve("eu").unwrap();
    let probe = StatusProbe::new(&h.dispatcher, &h.cache);

    probe.probe(&server, false).await;

    h.clock.advance(30);
    let cached = probe.probe(&server, false).await;
    assert!(cached.from_cache);
    assert_eq!(cached.meta.last_reached, Some(START));

    let forced = probe.probe(&server, true).await;
    assert!(!forced.from_cache);
    assert_eq!(forced.meta.last_reached, Some(START + 30));
}

#[tokio::test]
async fn test_stale_meta_triggers_new_probe() {
    let mock_server = MockServer::start().await;
    mount_version(&mock_server, "7.0.3", 2).await;

    let h = harness(vec![remote("eu", &mock_server)]);
    let server = h.dispatcher.resolve("eu").unwrap();
    let probe = StatusProbe::new(&h.dispatcher, &h.cache);

    probe.probe(&server, false).await;
    h.clock.advance(61);

    let outcome = probe.probe(&server, false).await;
    assert!(!outcome.from_cache);
    assert_eq!(outcome.meta.last_reached, Some(START + 61));
}

#[tokio::test]
async fn test_local_server_is_up_without_io() {
    let h = harness(vec![]);
    let server = h.dispatcher.resolve("local").unwrap();

    let outcome = StatusProbe::new(&h.dispatcher, &h.cache)
        .probe(&server, true)
        .await;

    assert!(outcome.meta.is_up());
    assert!(outcome.error.is_none());
    assert!(!h.cache.path().exists());
}

#[tokio::test]
async fn test_probe_all_covers_enabled_remotes_then_local() {
    let mock_server = MockServer::start().await;
    mount_version(&mock_server, "7.0.3", 1).await;

    let mut disabled = remote("us", &mock_server);
    disabled.enabled = false;
    let h = harness(vec![remote("eu", &mock_server), disabled]);

    let outcomes = StatusProbe::new(&h.dispatcher, &h.cache)
        .probe_all(false)
        .await;

    let ids: Vec<&str> = outcomes.iter().map(|o| o.server_id.as_str()).collect();
    assert_eq!(ids, vec!["eu", "local"]);
    assert!(outcomes.iter().all(|o| o.meta.is_up()));
}
