//! HTTP client for GemDB server communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to a GemDB server.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::{HttpError, RequestFailedError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{BaseUrl, StoreConfig};

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Client version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to a GemDB server.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers including User-Agent and the `X-API-Key` credential
/// - Turning non-2xx responses into [`RequestFailedError`]
///
/// Each call to [`request`](Self::request) sends exactly one HTTP request.
/// There is no retry and no timeout beyond the transport default.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use gemdb_client::StoreConfig;
/// use gemdb_client::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let config = StoreConfig::new("http://localhost:8080", "api-key")?;
/// let client = HttpClient::new(&config);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "listTables")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
pub struct HttpClient {
    client: reqwest::Client,
    base_url: BaseUrl,
    default_headers: HashMap<String, String>,
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.default_headers.get("User-Agent"))
            .finish_non_exhaustive()
    }
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &StoreConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}gemdb-client v{CLIENT_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            API_KEY_HEADER.to_string(),
            config.api_key().as_ref().to_string(),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url().clone(),
            default_headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the GemDB server.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.base_url.join(&request.path);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.json(body);
        }

        tracing::debug!("Sending {} request to {}", request.http_method, url);

        let res = req_builder.send().await?;
        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        let response = HttpResponse::new(code, headers, body);

        if response.is_ok() {
            return Ok(response);
        }

        tracing::warn!(
            "GemDB request to /{} failed with status {}",
            request.path,
            code
        );

        Err(HttpError::Response(RequestFailedError {
            code,
            body: response.body,
        }))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
