//! Configuration types for the GemDB client.
//!
//! This module provides the configuration used to point a client at a
//! GemDB server and authenticate against it.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`StoreConfig`]: The configuration struct holding the base URL and API key
//! - [`StoreConfigBuilder`]: A builder for constructing [`StoreConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`BaseUrl`]: A validated server base URL
//!
//! # Example
//!
//! ```rust
//! use gemdb_client::{StoreConfig, ApiKey, BaseUrl};
//!
//! let config = StoreConfig::builder()
//!     .base_url(BaseUrl::new("http://localhost:8080").unwrap())
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiKey, BaseUrl, API_KEY_ENV, API_KEY_FILE};

use crate::error::ConfigError;

/// Environment variable holding the server base URL.
pub const BASE_URL_ENV: &str = "GEMDB_URL";

/// Base URL used by [`StoreConfig::from_env`] when [`BASE_URL_ENV`] is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Configuration for a GemDB client.
///
/// Immutable once built. Each client owns its own copy.
///
/// # Example
///
/// ```rust
/// use gemdb_client::{StoreConfig, ApiKey, BaseUrl};
///
/// let config = StoreConfig::builder()
///     .base_url(BaseUrl::new("http://localhost:8080").unwrap())
///     .api_key(ApiKey::new("key").unwrap())
///     .user_agent_prefix("inventory-sync/2.1")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_url().as_ref(), "http://localhost:8080");
/// ```
#[derive(Clone, Debug)]
pub struct StoreConfig {
    base_url: BaseUrl,
    api_key: ApiKey,
    user_agent_prefix: Option<String>,
}

impl StoreConfig {
    /// Creates a new builder for constructing a `StoreConfig`.
    #[must_use]
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::new()
    }

    /// Validates a raw base URL and API key pair.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`], [`ConfigError::EmptyApiKey`]
    /// or [`ConfigError::InvalidApiKey`] if either value fails validation.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, ConfigError> {
        Self::builder()
            .base_url(BaseUrl::new(base_url)?)
            .api_key(ApiKey::new(api_key)?)
            .build()
    }

    /// Loads configuration from the environment.
    ///
    /// The base URL comes from `GEMDB_URL` (default `http://localhost:8080`).
    /// The API key is resolved by [`ApiKey::from_env`].
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the URL is invalid or no usable API key
    /// is found.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::builder()
            .base_url(resolve_base_url(std::env::var(BASE_URL_ENV).ok())?)
            .api_key(ApiKey::from_env()?)
            .build()
    }

    /// Returns the server base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

/// Picks the configured base URL, falling back to [`DEFAULT_BASE_URL`] when
/// the value is unset or blank.
fn resolve_base_url(env_value: Option<String>) -> Result<BaseUrl, ConfigError> {
    let url = env_value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    BaseUrl::new(url)
}

// Verify StoreConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StoreConfig>();
};

/// Builder for constructing [`StoreConfig`] instances.
///
/// `base_url` and `api_key` are required.
#[derive(Debug, Default)]
pub struct StoreConfigBuilder {
    base_url: Option<BaseUrl>,
    api_key: Option<ApiKey>,
    user_agent_prefix: Option<String>,
}

impl StoreConfigBuilder {
    /// Creates a new builder with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the server base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`StoreConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` or
    /// `api_key` are not set.
    pub fn build(self) -> Result<StoreConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(StoreConfig {
            base_url,
            api_key,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
