//! HTTP client types for GemDB server communication.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`StoreClient`]: The async key-value client
//! - [`blocking::StoreClient`]: The synchronous key-value client
//! - [`HttpClient`]: The authenticated HTTP transport both clients use
//! - [`HttpRequest`]: A request to be sent to the server
//! - [`HttpResponse`]: A response from the server
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST)
//!
//! # Error Behavior
//!
//! Every request is sent exactly once. A response outside the 2xx range
//! becomes [`RequestFailedError`] carrying the status code and body; there
//! is no retry and no classification by cause.

pub mod blocking;
mod errors;
mod http_client;
mod http_request;
mod http_response;
mod store_client;

pub use errors::{HttpError, InvalidHttpRequestError, RequestFailedError};
pub use http_client::{HttpClient, API_KEY_HEADER, CLIENT_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use store_client::StoreClient;
