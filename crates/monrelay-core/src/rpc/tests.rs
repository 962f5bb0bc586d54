//! Remote client tests against a mock JSON-RPC server

use super::*;
use crate::config::RemoteConfig;
use crate::error::MonrelayError;
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn create_test_client() -> RemoteApiClient {
    let http_client = Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(2))
        .build()
        .expect("Failed to create HTTP client");
    RemoteApiClient::with_http_client(http_client)
}

fn endpoint(server: &MockServer) -> String {
    format!("{}/api_jsonrpc.php", server.uri())
}

fn rpc_error(message: &str) -> Value {
    json!({"jsonrpc": "2.0", "error": {"code": -32602, "message": message}, "id": 1})
}

fn rpc_result(result: Value) -> Value {
    json!({"jsonrpc": "2.0", "result": result, "id": 1})
}

async fn received(server: &MockServer) -> Vec<Request> {
    server.received_requests().await.unwrap_or_default()
}

#[tokio::test]
async fn test_bearer_success_single_attempt() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api_jsonrpc.php"))
        .and(header("Authorization", "Bearer tok1"))
        .and(header("Content-Type", "application/json-rpc"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(rpc_result(json!([{"hostid": "10084"}]))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client();
    let result = client
        .call(&endpoint(&server), "tok1", "host.get", &json!({"hostids": ["10084"]}))
        .await
        .unwrap();

    assert_eq!(result, json!([{"hostid": "10084"}]));

    let requests = received(&server).await;
    let body: Value = requests[0].body_json().unwrap();
    assert_eq!(
        body,
        json!({"jsonrpc": "2.0", "method": "host.get", "params": {"hostids": ["10084"]}, "id": 1})
    );
}

#[tokio::test]
async fn test_not_authorized_falls_back_to_legacy_auth() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("Authorization", "Bearer tok1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rpc_error("Not authorized")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({"auth": "tok1"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(rpc_result(json!([{"hostid": "10084"}]))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client();
    let result = client
        .call(&endpoint(&server), "tok1", "host.get", &json!({}))
        .await
        .unwrap();
    assert_eq!(result, json!([{"hostid": "10084"}]));

    let requests = received(&server).await;
    assert_eq!(requests.len(), 2);
    let legacy = &requests[1];
    assert!(legacy.headers.get("authorization").is_none());
    let body: Value = legacy.body_json().unwrap();
    assert_eq!(body["auth"], json!("tok1"));
    assert_eq!(body["method"], json!("host.get"));
}

#[tokio::test]
async fn test_fallback_matches_message_case_insensitively_in_data() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("Authorization", "Bearer tok1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": {"code": -32602, "message": "Invalid params.", "data": "Session terminated, re-login, please. NOT AUTHORIZED."}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({"auth": "tok1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(rpc_result(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client();
    let result = client
        .call(&endpoint(&server), "tok1", "trigger.get", &json!({}))
        .await
        .unwrap();
    assert_eq!(result, json!([]));
}

#[tokio::test]
async fn test_legacy_failure_is_final() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rpc_error("Not authorized")))
        .expect(2)
        .mount(&server)
        .await;

    let client = create_test_client();
    let err = client
        .call(&endpoint(&server), "tok1", "host.get", &json!({}))
        .await
        .unwrap_err();

    assert_eq!(err, MonrelayError::api_with_code("Not authorized", Some(-32602)));
}

#[tokio::test]
async fn test_other_api_errors_are_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": {"code": -32602, "message": "Invalid params.", "data": "Incorrect method \"host.frobnicate\"."}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client();
    let err = client
        .call(&endpoint(&server), "tok1", "host.frobnicate", &json!({}))
        .await
        .unwrap_err();

    assert!(matches!(err, MonrelayError::Api { .. }));
    assert_eq!(err.to_string(), "Incorrect method \"host.frobnicate\".");
}

#[tokio::test]
async fn test_empty_token_sends_no_credentials_and_never_retries() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rpc_error("Not authorized")))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client();
    let err = client
        .call(&endpoint(&server), "", "apiinfo.version", &json!({}))
        .await
        .unwrap_err();
    assert!(matches!(err, MonrelayError::Api { .. }));

    let requests = received(&server).await;
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
    let body: Value = requests[0].body_json().unwrap();
    assert!(body.get("auth").is_none());
}

#[tokio::test]
async fn test_call_no_auth_single_attempt() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({"method": "apiinfo.version"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(rpc_result(json!("7.0.3"))))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client();
    let version = client
        .call_no_auth(&endpoint(&server), "apiinfo.version", &json!({}))
        .await
        .unwrap();
    assert_eq!(version, json!("7.0.3"));

    let requests = received(&server).await;
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_non_json_body_is_protocol_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client();
    let url = endpoint(&server);
    let err = client
        .call(&url, "tok1", "host.get", &json!({}))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        MonrelayError::protocol_at("Invalid JSON-RPC response.", url.as_str())
    );
}

#[tokio::test]
async fn test_error_body_decoded_regardless_of_http_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(rpc_error("Internal error.")))
        .mount(&server)
        .await;

    let client = create_test_client();
    let err = client
        .call(&endpoint(&server), "tok1", "host.get", &json!({}))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Internal error.");
}

#[tokio::test]
async fn test_timeout_is_remote_unavailable_without_retry() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(rpc_result(json!([])))
                .set_delay(Duration::from_secs(5)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let http_client = Client::builder()
        .no_proxy()
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let client = RemoteApiClient::with_http_client(http_client);

    let err = client
        .call(&endpoint(&server), "tok1", "host.get", &json!({}))
        .await
        .unwrap_err();
    assert!(err.is_retryable(), "got {err:?}");
}

#[tokio::test]
async fn test_connection_refused_is_remote_unavailable() {
    let client = create_test_client();
    let err = client
        .call("http://127.0.0.1:9/api_jsonrpc.php", "tok1", "host.get", &json!({}))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        MonrelayError::RemoteUnavailable { url: Some(ref u), .. } if u.ends_with("api_jsonrpc.php")
    ));
}

#[test]
fn test_client_from_config() {
    assert!(RemoteApiClient::new(&RemoteConfig::default()).is_ok());
}
