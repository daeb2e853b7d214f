//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use reqwest::header::HeaderValue;
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "API_KEY";

/// Key file consulted when [`API_KEY_ENV`] is unset, relative to the working directory.
pub const API_KEY_FILE: &str = "api.json";

/// A validated GemDB API key.
///
/// This newtype ensures the key is non-empty and can be sent as the
/// `X-API-Key` header value, and masks its value in debug output so it does
/// not leak into logs.
///
/// # Example
///
/// ```rust
/// use gemdb_client::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

#[derive(Deserialize)]
struct ApiKeyFile {
    api_key: String,
}

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty, and
    /// [`ConfigError::InvalidApiKey`] if it is not a valid header value.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        if HeaderValue::from_str(&key).is_err() {
            return Err(ConfigError::InvalidApiKey);
        }
        Ok(Self(key))
    }

    /// Reads the key from a JSON file of the form `{"api_key": "..."}`.
    ///
    /// This is the file the GemDB server writes next to itself on first start.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ApiKeyFile`] if the file cannot be read or
    /// parsed, and the error from [`ApiKey::new`] if the stored key is unusable.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file_error = |reason: String| ConfigError::ApiKeyFile {
            path: path.display().to_string(),
            reason,
        };

        let contents = std::fs::read_to_string(path).map_err(|e| file_error(e.to_string()))?;
        let parsed: ApiKeyFile =
            serde_json::from_str(&contents).map_err(|e| file_error(e.to_string()))?;

        Self::new(parsed.api_key)
    }

    /// Resolves the key the same way the server does: the `API_KEY`
    /// environment variable first, then `api.json` in the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] if neither source is present,
    /// or the error from [`ApiKey::from_file`] if the key file is unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(std::env::var(API_KEY_ENV).ok(), Path::new(API_KEY_FILE))
    }

    fn resolve(env_value: Option<String>, key_file: &Path) -> Result<Self, ConfigError> {
        if let Some(key) = env_value.filter(|k| !k.trim().is_empty()) {
            return Self::new(key);
        }
        if key_file.exists() {
            return Self::from_file(key_file);
        }
        Err(ConfigError::MissingApiKey)
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated base URL of a GemDB server.
///
/// The URL must use the `http` or `https` scheme and name a host. Trailing
/// slashes are removed so endpoint paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use gemdb_client::BaseUrl;
///
/// let url = BaseUrl::new("http://localhost:8080/").unwrap();
/// assert_eq!(url.as_ref(), "http://localhost:8080");
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), "localhost");
/// assert_eq!(url.join("createTable"), "http://localhost:8080/createTable");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidBaseUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(invalid());
        }

        // Host ends at port, path, query, or end of string. A bracketed
        // IPv6 literal ends at its closing bracket.
        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = if remainder.starts_with('[') {
            let close = remainder.find(']').ok_or_else(invalid)?;
            if !matches!(remainder.as_bytes().get(close + 1), None | Some(b':' | b'/')) {
                return Err(invalid());
            }
            host_start + close + 1
        } else {
            remainder
                .find([':', '/', '?', '#'])
                .map_or(url.len(), |i| host_start + i)
        };

        if host_end == host_start || url.contains(['?', '#']) {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "http").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Returns the full URL of an endpoint below this base.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.url, path.trim_start_matches('/'))
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
