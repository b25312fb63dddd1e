//! HTTP client abstraction for testability

use std::collections::BTreeMap;
use thiserror::Error;

/// Errors raised by the HTTP transport layer.
///
/// These cover failures to reach the server at all. A completed exchange
/// with a non-success status code is *not* an `HttpError`; callers inspect
/// [`HttpResponse::status`] for that.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HttpError {
    /// Failed to construct the underlying HTTP client
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(String),

    /// Request could not be sent or the connection failed mid-flight
    #[error("Request failed: {0}")]
    Transport(String),

    /// Connection succeeded but the response body could not be read
    #[error("Failed to read response: {0}")]
    Body(String),
}

/// A completed HTTP exchange.
///
/// Headers are preserved because the Street View picture endpoint's
/// response headers are persisted as an artifact alongside the image.
/// A `BTreeMap` keeps header serialisation deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    /// HTTP status code (e.g. 200, 404)
    pub status: u16,
    /// Response headers, lowercased names as sent by the server
    pub headers: BTreeMap<String, String>,
    /// Raw response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Returns true for 2xx status codes.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for synchronous HTTP client operations.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling mock HTTP clients in tests.
pub trait HttpClient: Send + Sync {
    /// Performs an HTTP GET request with URL query parameters.
    ///
    /// # Arguments
    ///
    /// * `url` - The base URL to request, without a query string
    /// * `query` - Query parameters appended to the URL, percent-encoded
    ///
    /// # Returns
    ///
    /// The full response (status, headers, body) for any completed
    /// exchange, or an [`HttpError`] when the server could not be reached.
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse, HttpError>;
}

/// Real HTTP client implementation using reqwest.
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

/// Default User-Agent string for HTTP requests.
/// Some Google endpoints reject requests without a User-Agent.
const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

impl ReqwestClient {
    /// Creates a new ReqwestClient with default configuration.
    pub fn new() -> Result<Self, HttpError> {
        Self::with_timeout(30)
    }

    /// Creates a new ReqwestClient with custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, HttpError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|e| HttpError::ClientBuild(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new().expect("Failed to create default HTTP client")
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse, HttpError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(|e| HttpError::Transport(e.to_string()))?;

        let status = response.status().as_u16();

        let mut headers = BTreeMap::new();
        for (name, value) in response.headers() {
            headers.insert(
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).to_string(),
            );
        }

        // Read response body
        let body = response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| HttpError::Body(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::sync::Mutex;

    /// A GET request as seen by [`MockHttpClient`].
    #[derive(Debug, Clone, PartialEq)]
    pub struct RecordedRequest {
        pub url: String,
        pub query: Vec<(String, String)>,
    }

    /// Mock HTTP client for testing.
    ///
    /// Replays a canned response and records every request it receives so
    /// tests can assert on URLs and query parameters.
    pub struct MockHttpClient {
        pub response: Result<HttpResponse, HttpError>,
        pub requests: Mutex<Vec<RecordedRequest>>,
    }

    impl MockHttpClient {
        pub fn new(response: Result<HttpResponse, HttpError>) -> Self {
            Self {
                response,
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn recorded(&self) -> Vec<RecordedRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl HttpClient for MockHttpClient {
        fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse, HttpError> {
            self.requests.lock().unwrap().push(RecordedRequest {
                url: url.to_string(),
                query: query
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            });
            self.response.clone()
        }
    }

    /// Builds a response with the given status and body and no headers.
    pub fn response_with(status: u16, body: &[u8]) -> HttpResponse {
        HttpResponse {
            status,
            headers: BTreeMap::new(),
            body: body.to_vec(),
        }
    }

    #[test]
    fn test_mock_client_success() {
        let mock = MockHttpClient::new(Ok(response_with(200, &[1, 2, 3, 4])));

        let result = mock.get("http://example.com", &[]);
        assert!(result.is_ok());
        assert_eq!(result.unwrap().body, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_mock_client_error() {
        let mock = MockHttpClient::new(Err(HttpError::Transport("Test error".to_string())));

        let result = mock.get("http://example.com", &[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_mock_client_records_requests() {
        let mock = MockHttpClient::new(Ok(response_with(200, b"")));

        mock.get("http://example.com/a", &[("key", "v")]).unwrap();
        mock.get("http://example.com/b", &[]).unwrap();

        let recorded = mock.recorded();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0].url, "http://example.com/a");
        assert_eq!(
            recorded[0].query,
            vec![("key".to_string(), "v".to_string())]
        );
        assert_eq!(recorded[1].url, "http://example.com/b");
    }

    #[test]
    fn test_is_success_range() {
        assert!(response_with(200, b"").is_success());
        assert!(response_with(204, b"").is_success());
        assert!(!response_with(199, b"").is_success());
        assert!(!response_with(301, b"").is_success());
        assert!(!response_with(404, b"").is_success());
        assert!(!response_with(500, b"").is_success());
    }
}
