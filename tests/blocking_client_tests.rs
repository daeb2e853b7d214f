//! Integration tests for the blocking store client.
//!
//! The mock server runs on its own tokio runtime; the client under test is
//! driven from plain synchronous test code, the way callers use it.

mod common;

use common::{FakeGemDb, API_KEY};
use gemdb_client::blocking::StoreClient;
use gemdb_client::StoreError;
use serde_json::json;
use tokio::runtime::Runtime;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn start_backend(runtime: &Runtime) -> (MockServer, FakeGemDb) {
    let server = runtime.block_on(MockServer::start());
    let backend = FakeGemDb::new();
    runtime.block_on(backend.mount(&server));
    (server, backend)
}

#[test]
fn test_blocking_set_then_get_example() {
    let runtime = Runtime::new().unwrap();
    let (server, _backend) = start_backend(&runtime);
    let client = StoreClient::new(server.uri(), API_KEY).unwrap();

    client.create_table("users").unwrap();
    client.set("users", "alice", &json!({"age": 30})).unwrap();

    assert_eq!(client.get("users", "alice").unwrap(), json!({"age": 30}));
}

#[test]
fn test_blocking_client_is_reusable_sequentially() {
    let runtime = Runtime::new().unwrap();
    let (server, backend) = start_backend(&runtime);
    let client = StoreClient::new(server.uri(), API_KEY).unwrap();

    client.create_table("events").unwrap();
    for i in 0..20 {
        client.set("events", &format!("e-{i:02}"), &i).unwrap();
    }

    let keys = client.list_keys("events").unwrap();
    assert_eq!(keys.len(), 20);
    assert_eq!(keys.first().map(String::as_str), Some("e-00"));
    assert_eq!(client.get_as::<u32>("events", "e-07").unwrap(), 7);

    client.delete("events", "e-07").unwrap();
    let error = client.get("events", "e-07").unwrap_err();
    assert_eq!(error.status(), Some(404));

    client.export_db("events.json").unwrap();
    assert_eq!(backend.exports(), vec!["events.json".to_string()]);

    client.delete_table("events").unwrap();
    assert!(client.list_tables().unwrap().is_empty());
}

#[test]
fn test_blocking_duplicate_table_is_request_failed() {
    let runtime = Runtime::new().unwrap();
    let (server, _backend) = start_backend(&runtime);
    let client = StoreClient::new(server.uri(), API_KEY).unwrap();

    client.create_table("users").unwrap();
    match client.create_table("users") {
        Err(StoreError::RequestFailed(e)) => assert_eq!(e.code, 500),
        other => panic!("Expected RequestFailed, got: {other:?}"),
    }
}

#[test]
fn test_blocking_wire_contract() {
    let runtime = Runtime::new().unwrap();
    let server = runtime.block_on(MockServer::start());
    runtime.block_on(
        Mock::given(method("POST"))
            .and(path("/set"))
            .and(header("X-API-Key", API_KEY))
            .and(body_json(json!({"table_name": "t", "key": "k", "value": [1, 2]})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server),
    );
    runtime.block_on(
        Mock::given(method("GET"))
            .and(path("/get"))
            .and(header("X-API-Key", API_KEY))
            .and(query_param("table_name", "t"))
            .and(query_param("key", "k"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"value": [1, 2]})))
            .expect(1)
            .mount(&server),
    );

    let client = StoreClient::new(server.uri(), API_KEY).unwrap();
    client.set("t", "k", &[1, 2]).unwrap();
    assert_eq!(client.get("t", "k").unwrap(), json!([1, 2]));

    runtime.block_on(server.verify());
}

#[test]
fn test_blocking_missing_value_field() {
    let runtime = Runtime::new().unwrap();
    let server = runtime.block_on(MockServer::start());
    runtime.block_on(
        Mock::given(path("/get"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server),
    );

    let client = StoreClient::new(server.uri(), API_KEY).unwrap();
    assert!(matches!(
        client.get("t", "k"),
        Err(StoreError::MissingField { field: "value" })
    ));
}

#[test]
fn test_blocking_rejects_invalid_configuration() {
    assert!(matches!(
        StoreClient::new("localhost:8080", API_KEY),
        Err(StoreError::Config(gemdb_client::ConfigError::InvalidBaseUrl { .. }))
    ));
    assert!(matches!(
        StoreClient::new("http://localhost:8080", ""),
        Err(StoreError::Config(gemdb_client::ConfigError::EmptyApiKey))
    ));
    assert!(matches!(
        StoreClient::new("http://localhost:8080", "abc\ndef"),
        Err(StoreError::Config(gemdb_client::ConfigError::InvalidApiKey))
    ));
}
