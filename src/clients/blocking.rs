//! Synchronous GemDB client.
//!
//! [`StoreClient`] wraps the async [`crate::StoreClient`] and a
//! single-threaded tokio runtime. Each method blocks the calling thread until
//! the response arrives or the transport fails.
//!
//! Do not call these methods from within an async runtime; use the async
//! client there instead.
//!
//! # Example
//!
//! ```rust,no_run
//! use gemdb_client::blocking::StoreClient;
//! use serde_json::json;
//!
//! let client = StoreClient::new("http://localhost:8080", "my-api-key")?;
//!
//! client.set("users", "alice", &json!({"age": 30}))?;
//! assert_eq!(client.get("users", "alice")?, json!({"age": 30}));
//! # Ok::<(), gemdb_client::StoreError>(())
//! ```

use std::future::Future;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::runtime::{Builder, Runtime};

use crate::clients::store_client;
use crate::config::StoreConfig;
use crate::error::StoreError;

/// Blocking client for a GemDB server.
///
/// Safe to reuse sequentially. The operations and their errors are those of
/// the async [`crate::StoreClient`].
#[derive(Debug)]
pub struct StoreClient {
    inner: store_client::StoreClient,
    runtime: Runtime,
}

impl StoreClient {
    /// Creates a client for the server at `base_url`, authenticating with `api_key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Config`] if the URL or key fails validation,
    /// or [`StoreError::Runtime`] if the runtime cannot be started.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, StoreError> {
        Self::from_config(&StoreConfig::new(base_url, api_key)?)
    }

    /// Creates a client from an existing configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Runtime`] if the runtime cannot be started.
    pub fn from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self {
            inner: store_client::StoreClient::from_config(config),
            runtime,
        })
    }

    /// Creates a client from `GEMDB_URL` and `API_KEY` / `api.json`.
    ///
    /// # Errors
    ///
    /// See [`StoreConfig::from_env`] and [`StoreClient::from_config`].
    pub fn from_env() -> Result<Self, StoreError> {
        Self::from_config(&StoreConfig::from_env()?)
    }

    /// Returns the async client this client drives.
    #[must_use]
    pub const fn async_client(&self) -> &store_client::StoreClient {
        &self.inner
    }

    fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Creates a table.
    ///
    /// # Errors
    ///
    /// See [`crate::StoreClient::create_table`].
    pub fn create_table(&self, name: &str) -> Result<(), StoreError> {
        self.block_on(self.inner.create_table(name))
    }

    /// Deletes a table.
    ///
    /// # Errors
    ///
    /// See [`crate::StoreClient::delete_table`].
    pub fn delete_table(&self, name: &str) -> Result<(), StoreError> {
        self.block_on(self.inner.delete_table(name))
    }

    /// Stores `value` under `key` in `table`.
    ///
    /// # Errors
    ///
    /// See [`crate::StoreClient::set`].
    pub fn set<V>(&self, table: &str, key: &str, value: &V) -> Result<(), StoreError>
    where
        V: Serialize + ?Sized,
    {
        self.block_on(self.inner.set(table, key, value))
    }

    /// Reads the value stored under `key` in `table`.
    ///
    /// # Errors
    ///
    /// See [`crate::StoreClient::get`].
    pub fn get(&self, table: &str, key: &str) -> Result<Value, StoreError> {
        self.block_on(self.inner.get(table, key))
    }

    /// Reads the value stored under `key` in `table` and deserializes it into `T`.
    ///
    /// # Errors
    ///
    /// See [`crate::StoreClient::get_as`].
    pub fn get_as<T: DeserializeOwned>(&self, table: &str, key: &str) -> Result<T, StoreError> {
        self.block_on(self.inner.get_as(table, key))
    }

    /// Removes `key` from `table`.
    ///
    /// # Errors
    ///
    /// See [`crate::StoreClient::delete`].
    pub fn delete(&self, table: &str, key: &str) -> Result<(), StoreError> {
        self.block_on(self.inner.delete(table, key))
    }

    /// Asks the server to export the whole database to `filename`.
    ///
    /// # Errors
    ///
    /// See [`crate::StoreClient::export_db`].
    pub fn export_db(&self, filename: &str) -> Result<(), StoreError> {
        self.block_on(self.inner.export_db(filename))
    }

    /// Lists the names of all tables.
    ///
    /// # Errors
    ///
    /// See [`crate::StoreClient::list_tables`].
    pub fn list_tables(&self) -> Result<Vec<String>, StoreError> {
        self.block_on(self.inner.list_tables())
    }

    /// Lists the keys stored in `table`.
    ///
    /// # Errors
    ///
    /// See [`crate::StoreClient::list_keys`].
    pub fn list_keys(&self, table: &str) -> Result<Vec<String>, StoreError> {
        self.block_on(self.inner.list_keys(table))
    }
}
