//! Shared helpers for the integration tests.
//!
//! [`FakeGemDb`] is a wiremock responder that keeps tables in memory and
//! answers the GemDB endpoints the way the real server does: plain-text
//! errors, `{"value": ...}` for reads, `null` for empty listings.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use wiremock::matchers::{any, header};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

pub const API_KEY: &str = "test-api-key";

type Tables = BTreeMap<String, BTreeMap<String, Value>>;

#[derive(Clone, Default)]
pub struct FakeGemDb {
    tables: Arc<Mutex<Tables>>,
    exports: Arc<Mutex<Vec<String>>>,
}

fn error(code: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(code).set_body_string(format!("{message}\n"))
}

fn field(body: &Value, name: &str) -> Option<String> {
    body.get(name).and_then(Value::as_str).map(str::to_string)
}

fn query(request: &Request, name: &str) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}

impl FakeGemDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts the backend on `server`. Requests without the right API key get 401.
    pub async fn mount(&self, server: &MockServer) {
        Mock::given(header("X-API-Key", API_KEY))
            .respond_with(self.clone())
            .mount(server)
            .await;
        Mock::given(any())
            .respond_with(error(401, "Unauthorized"))
            .mount(server)
            .await;
    }

    pub fn exports(&self) -> Vec<String> {
        self.exports.lock().unwrap().clone()
    }

    pub fn has_table(&self, name: &str) -> bool {
        self.tables.lock().unwrap().contains_key(name)
    }
}

impl Respond for FakeGemDb {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = serde_json::from_slice(&request.body).unwrap_or(Value::Null);
        let mut tables = self.tables.lock().unwrap();

        match request.url.path() {
            "/createTable" => {
                let Some(name) = field(&body, "name") else {
                    return error(400, "Invalid request");
                };
                if tables.contains_key(&name) {
                    return error(500, &format!("table {name} already exists"));
                }
                tables.insert(name, BTreeMap::new());
                ResponseTemplate::new(200)
            }
            "/deleteTable" => {
                let Some(name) = field(&body, "name") else {
                    return error(400, "Invalid request");
                };
                match tables.remove(&name) {
                    Some(_) => ResponseTemplate::new(200),
                    None => error(500, &format!("table {name} does not exist")),
                }
            }
            "/set" => {
                let (Some(table), Some(key)) = (field(&body, "table_name"), field(&body, "key"))
                else {
                    return error(400, "Invalid request");
                };
                let value = body.get("value").cloned().unwrap_or(Value::Null);
                match tables.get_mut(&table) {
                    Some(records) => {
                        records.insert(key, value);
                        ResponseTemplate::new(200)
                    }
                    None => error(500, &format!("table {table} does not exist")),
                }
            }
            "/get" => {
                let table = query(request, "table_name").unwrap_or_default();
                let key = query(request, "key").unwrap_or_default();
                match tables.get(&table).and_then(|records| records.get(&key)) {
                    Some(value) => ResponseTemplate::new(200).set_body_json(json!({ "value": value })),
                    None => error(404, &format!("key {key} not found")),
                }
            }
            "/delete" => {
                let (Some(table), Some(key)) = (field(&body, "table_name"), field(&body, "key"))
                else {
                    return error(400, "Invalid request");
                };
                match tables.get_mut(&table).and_then(|records| records.remove(&key)) {
                    Some(_) => ResponseTemplate::new(200),
                    None => error(404, &format!("key {key} not found")),
                }
            }
            "/exportToFile" => {
                let Some(filename) = field(&body, "filename") else {
                    return error(400, "Invalid request");
                };
                self.exports.lock().unwrap().push(filename);
                ResponseTemplate::new(200)
            }
            "/listTables" => {
                let names: Vec<&String> = tables.keys().collect();
                if names.is_empty() {
                    ResponseTemplate::new(200).set_body_json(json!({ "tables": null }))
                } else {
                    ResponseTemplate::new(200).set_body_json(json!({ "tables": names }))
                }
            }
            "/listKeys" => {
                let Some(table) = query(request, "table_name").filter(|t| !t.is_empty()) else {
                    return error(400, "Invalid request: table_name is required");
                };
                match tables.get(&table) {
                    Some(records) => {
                        let keys: Vec<&String> = records.keys().collect();
                        ResponseTemplate::new(200).set_body_json(json!({ "keys": keys }))
                    }
                    None => error(500, &format!("table {table} does not exist")),
                }
            }
            _ => error(404, "404 page not found"),
        }
    }
}
