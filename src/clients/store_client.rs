//! Async client for the GemDB key-value API.
//!
//! [`StoreClient`] maps each store operation onto exactly one HTTP call:
//!
//! | Operation | Request |
//! |---|---|
//! | [`create_table`](StoreClient::create_table) | `POST /createTable` `{name}` |
//! | [`delete_table`](StoreClient::delete_table) | `POST /deleteTable` `{name}` |
//! | [`set`](StoreClient::set) | `POST /set` `{table_name, key, value}` |
//! | [`get`](StoreClient::get) | `GET /get?table_name=..&key=..` |
//! | [`delete`](StoreClient::delete) | `POST /delete` `{table_name, key}` |
//! | [`export_db`](StoreClient::export_db) | `POST /exportToFile` `{filename}` |
//! | [`list_tables`](StoreClient::list_tables) | `GET /listTables` |
//! | [`list_keys`](StoreClient::list_keys) | `GET /listKeys?table_name=..` |

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::clients::http_client::HttpClient;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::config::StoreConfig;
use crate::error::{ConfigError, StoreError};
use crate::types::{ExportRequest, KeyRequest, SetRequest, TableRequest};

/// Async client for a GemDB server.
///
/// The client holds no session state: every method sends one request built
/// from its arguments and the immutable configuration. Any non-2xx answer is
/// returned as [`StoreError::RequestFailed`].
///
/// # Example
///
/// ```rust,no_run
/// use gemdb_client::StoreClient;
/// use serde_json::json;
///
/// # async fn run() -> Result<(), gemdb_client::StoreError> {
/// let client = StoreClient::new("http://localhost:8080", "my-api-key")?;
///
/// client.create_table("users").await?;
/// client.set("users", "alice", &json!({"age": 30})).await?;
///
/// let alice = client.get("users", "alice").await?;
/// assert_eq!(alice, json!({"age": 30}));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct StoreClient {
    http: HttpClient,
}

// Verify StoreClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StoreClient>();
};

impl StoreClient {
    /// Creates a client for the server at `base_url`, authenticating with `api_key`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the URL or key fails validation.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self::from_config(&StoreConfig::new(base_url, api_key)?))
    }

    /// Creates a client from an existing configuration.
    #[must_use]
    pub fn from_config(config: &StoreConfig) -> Self {
        Self {
            http: HttpClient::new(config),
        }
    }

    /// Creates a client from `GEMDB_URL` and `API_KEY` / `api.json`.
    ///
    /// # Errors
    ///
    /// See [`StoreConfig::from_env`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::from_config(&StoreConfig::from_env()?))
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http
    }

    /// Creates a table.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RequestFailed`] if the server rejects the
    /// request, e.g. because the table already exists.
    pub async fn create_table(&self, name: &str) -> Result<(), StoreError> {
        self.post("createTable", &TableRequest { name }).await
    }

    /// Deletes a table and everything stored in it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RequestFailed`] if the server rejects the request.
    pub async fn delete_table(&self, name: &str) -> Result<(), StoreError> {
        self.post("deleteTable", &TableRequest { name }).await
    }

    /// Stores `value` under `key` in `table`.
    ///
    /// The value is serialized to JSON and passed through untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Json`] if `value` cannot be serialized, or
    /// [`StoreError::RequestFailed`] if the server rejects the request.
    pub async fn set<V>(&self, table: &str, key: &str, value: &V) -> Result<(), StoreError>
    where
        V: Serialize + ?Sized,
    {
        let request = SetRequest {
            table_name: table,
            key,
            value: serde_json::to_value(value)?,
        };
        self.post("set", &request).await
    }

    /// Reads the value stored under `key` in `table`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RequestFailed`] if the server rejects the
    /// request (including a missing key), and [`StoreError::MissingField`]
    /// if the response has no `value` field.
    pub async fn get(&self, table: &str, key: &str) -> Result<Value, StoreError> {
        self.fetch("get", &[("table_name", table), ("key", key)], "value")
            .await
    }

    /// Reads the value stored under `key` in `table` and deserializes it into `T`.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get), plus [`StoreError::Json`] if the value
    /// does not match `T`.
    pub async fn get_as<T: DeserializeOwned>(&self, table: &str, key: &str) -> Result<T, StoreError> {
        let value = self.get(table, key).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Removes `key` from `table`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RequestFailed`] if the server rejects the request.
    pub async fn delete(&self, table: &str, key: &str) -> Result<(), StoreError> {
        self.post(
            "delete",
            &KeyRequest {
                table_name: table,
                key,
            },
        )
        .await
    }

    /// Asks the server to export the whole database to `filename`.
    ///
    /// The file is written on the server host. The call returns once the
    /// server acknowledges the export.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RequestFailed`] if the server rejects the request.
    pub async fn export_db(&self, filename: &str) -> Result<(), StoreError> {
        self.post("exportToFile", &ExportRequest { filename }).await
    }

    /// Lists the names of all tables.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RequestFailed`] if the server rejects the
    /// request, and [`StoreError::MissingField`] if the response has no
    /// `tables` field.
    pub async fn list_tables(&self) -> Result<Vec<String>, StoreError> {
        let tables = self.fetch("listTables", &[], "tables").await?;
        names_from(tables)
    }

    /// Lists the keys stored in `table`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RequestFailed`] if the server rejects the
    /// request, and [`StoreError::MissingField`] if the response has no
    /// `keys` field.
    pub async fn list_keys(&self, table: &str) -> Result<Vec<String>, StoreError> {
        let keys = self
            .fetch("listKeys", &[("table_name", table)], "keys")
            .await?;
        names_from(keys)
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<(), StoreError> {
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .body(serde_json::to_value(body)?)
            .build()?;
        self.http.request(request).await?;
        Ok(())
    }

    /// Sends a GET and pulls `field` out of the JSON object in the response.
    async fn fetch(
        &self,
        path: &str,
        query: &[(&str, &str)],
        field: &'static str,
    ) -> Result<Value, StoreError> {
        let request = query
            .iter()
            .fold(HttpRequest::builder(HttpMethod::Get, path), |builder, (k, v)| {
                builder.query_param(*k, *v)
            })
            .build()?;

        let response = self.http.request(request).await?;
        match response.json::<Value>()? {
            Value::Object(mut body) => body.remove(field).ok_or(StoreError::MissingField { field }),
            _ => Err(StoreError::MissingField { field }),
        }
    }
}

/// The server encodes an empty listing as `null`.
fn names_from(value: Value) -> Result<Vec<String>, StoreError> {
    if value.is_null() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_value(value)?)
}
