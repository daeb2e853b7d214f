//! HTTP-specific error types for the GemDB client.
//!
//! - [`RequestFailedError`]: Non-2xx HTTP responses from the server
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use gemdb_client::clients::{HttpClient, HttpRequest, HttpMethod, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => {
//!         println!("GemDB error {}: {}", e.code, e.body);
//!     }
//!     Err(HttpError::InvalidRequest(e)) => {
//!         println!("Invalid request: {}", e);
//!     }
//!     Err(HttpError::Network(e)) => {
//!         println!("Network error: {}", e);
//!     }
//! }
//! ```

use thiserror::Error;

/// Error returned when the server answers with a non-2xx status.
///
/// The GemDB server reports failures as plain text (`http.Error`), so the
/// raw response body is kept as-is for diagnostics.
///
/// # Example
///
/// ```rust
/// use gemdb_client::clients::RequestFailedError;
///
/// let error = RequestFailedError {
///     code: 401,
///     body: "Unauthorized\n".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Request failed with status 401: Unauthorized");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Request failed with status {code}: {}", .body.trim())]
pub struct RequestFailedError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The response body.
    pub body: String,
}

/// Error returned when an HTTP request fails validation.
///
/// Every GemDB write endpoint expects a JSON body and every read endpoint
/// takes its arguments from the query string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET request was given a body.
    #[error("Cannot send a body with {method}.")]
    UnexpectedBody {
        /// The HTTP method that must not carry a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] RequestFailedError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
