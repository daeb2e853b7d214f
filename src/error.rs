//! Error types for the GemDB client.
//!
//! This module contains the configuration errors raised while building a
//! client, and [`StoreError`], the error returned by every store operation.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use gemdb_client::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

use crate::clients::{HttpError, InvalidHttpRequestError, RequestFailedError};

/// Errors that can occur during client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid GemDB API key.")]
    EmptyApiKey,

    /// API key contains characters that cannot be sent in an HTTP header.
    #[error("Invalid API key. The key must not contain control characters such as newlines.")]
    InvalidApiKey,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Expected an http(s) URL with a host (e.g., 'http://localhost:8080').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// No API key was found in the environment or on disk.
    #[error("No API key found. Set the API_KEY environment variable or provide an api.json file.")]
    MissingApiKey,

    /// The API key file could not be read or parsed.
    #[error("Failed to load API key from '{path}': {reason}")]
    ApiKeyFile {
        /// Path of the key file.
        path: String,
        /// Why loading failed.
        reason: String,
    },
}

/// Errors returned by [`StoreClient`](crate::StoreClient) operations.
///
/// A failing operation never yields a partial result. Any non-2xx response
/// from the service surfaces as [`StoreError::RequestFailed`], whatever the
/// cause (authentication, missing table, server fault).
///
/// # Example
///
/// ```rust,ignore
/// use gemdb_client::{StoreClient, StoreError};
///
/// match client.get("users", "alice").await {
///     Ok(value) => println!("alice = {value}"),
///     Err(StoreError::RequestFailed(e)) => {
///         println!("GemDB answered {}: {}", e.code, e.body);
///     }
///     Err(other) => println!("request did not complete: {other}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum StoreError {
    /// The service answered with a non-2xx status.
    #[error(transparent)]
    RequestFailed(#[from] RequestFailedError),

    /// A successful response did not contain the expected field.
    #[error("Response from GemDB is missing the '{field}' field")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A value could not be serialized or a response could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The request was rejected before being sent.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The client configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The runtime backing the blocking client could not be started.
    #[error("Failed to start the blocking client runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

impl From<HttpError> for StoreError {
    fn from(error: HttpError) -> Self {
        match error {
            HttpError::Response(e) => Self::RequestFailed(e),
            HttpError::InvalidRequest(e) => Self::InvalidRequest(e),
            HttpError::Network(e) => Self::Network(e),
        }
    }
}

impl StoreError {
    /// Returns the HTTP status code when the service rejected the request.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed(e) => Some(e.code),
            _ => None,
        }
    }
}
