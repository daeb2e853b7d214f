//! # GemDB Client
//!
//! A Rust client for the GemDB key-value store HTTP API.
//!
//! ## Overview
//!
//! GemDB keeps JSON values under string keys, grouped into named tables.
//! This crate provides:
//! - Validated configuration via [`StoreConfig`], [`BaseUrl`] and [`ApiKey`]
//! - An async client, [`StoreClient`], built on reqwest and tokio
//! - A blocking client, [`blocking::StoreClient`], for synchronous callers
//! - A single error type, [`StoreError`], for every operation
//!
//! Every request carries the `X-API-Key` header. Each operation sends exactly
//! one HTTP request and fails with [`StoreError::RequestFailed`] on any
//! non-2xx answer.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gemdb_client::StoreClient;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), gemdb_client::StoreError> {
//!     let client = StoreClient::new("http://localhost:8080", "your-api-key")?;
//!
//!     client.create_table("users").await?;
//!     client.set("users", "alice", &json!({"age": 30})).await?;
//!
//!     let alice = client.get("users", "alice").await?;
//!     println!("alice = {alice}");
//!
//!     client.export_db("backup.json").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Blocking Usage
//!
//! ```rust,no_run
//! use gemdb_client::blocking::StoreClient;
//!
//! let client = StoreClient::from_env()?;
//! for table in client.list_tables()? {
//!     println!("{table}: {:?}", client.list_keys(&table)?);
//! }
//! # Ok::<(), gemdb_client::StoreError>(())
//! ```
//!
//! ## Configuration From the Environment
//!
//! [`StoreConfig::from_env`] reads the base URL from `GEMDB_URL` (default
//! `http://localhost:8080`) and the API key from `API_KEY`, falling back to
//! the `api.json` file the server writes on first start.
//!
//! ## Logging
//!
//! Requests are traced through the `tracing` crate: one `debug` event per
//! request and a `warn` event for every non-2xx response. Install a
//! subscriber in your application to see them.

pub mod clients;
pub mod config;
pub mod error;
pub mod types;

pub use clients::blocking;

// Re-export public types at crate root for convenience
pub use clients::{RequestFailedError, StoreClient};
pub use config::{ApiKey, BaseUrl, StoreConfig, StoreConfigBuilder};
pub use error::{ConfigError, StoreError};
