//! HTTP response type for the GemDB client.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// A response received from a GemDB server.
///
/// The body is kept as raw text: successful reads are JSON, while the
/// server reports errors as plain text.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn response(code: u16, body: &str) -> HttpResponse {
        HttpResponse::new(code, HashMap::new(), body.to_string())
    }

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        assert!(response(200, "").is_ok());
        assert!(response(201, "").is_ok());
        assert!(response(204, "").is_ok());
        assert!(response(299, "").is_ok());
    }

    #[test]
    fn test_is_ok_returns_false_for_other_codes() {
        assert!(!response(199, "").is_ok());
        assert!(!response(301, "").is_ok());
        assert!(!response(401, "Unauthorized").is_ok());
        assert!(!response(404, "").is_ok());
        assert!(!response(500, "").is_ok());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert(
            "content-type".to_string(),
            vec!["application/json".to_string()],
        );
        let response = HttpResponse::new(200, headers, "{}".to_string());

        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert_eq!(response.header("x-missing"), None);
    }

    #[test]
    fn test_json_parses_body() {
        let response = response(200, r#"{"value": {"age": 30}}"#);
        let body: Value = response.json().unwrap();
        assert_eq!(body, json!({"value": {"age": 30}}));
    }

    #[test]
    fn test_json_fails_on_plain_text() {
        let response = response(200, "OK");
        assert!(response.json::<Value>().is_err());
    }
}
