//! Mock setlist.fm server for testing the API client
//!
//! Provides a [`MockSetlistfmServer`] that serves canned responses for
//! setlist.fm endpoint paths, plus the failure modes a client must handle:
//! error statuses, malformed bodies, slow responses and redirect loops.

use std::time::Duration;

use serde_json::Value;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

/// Mock setlist.fm server
///
/// This struct wraps a [`wiremock::MockServer`]. Success mocks only match
/// requests carrying the expected `x-api-key` and `Accept` headers, so a
/// client that forgets either gets wiremock's default 404.
///
/// Paths are given the way the client's endpoint templates spell them,
/// without a leading slash (e.g. `"search/artists"`).
///
/// # Example
///
/// ```rust,ignore
/// use encore_test_utils::{fixtures, MockSetlistfmServer};
///
/// #[tokio::test]
/// async fn test_artist_lookup() {
///     let server = MockSetlistfmServer::start().await;
///     server
///         .mock_get(&format!("artist/{}", fixtures::ARTIST_MBID), fixtures::artist())
///         .await;
/// }
/// ```
pub struct MockSetlistfmServer {
    server: MockServer,
    api_key: String,
}

impl MockSetlistfmServer {
    /// Start a new mock server with default API key
    pub async fn start() -> Self {
        Self::start_with_api_key("test-api-key").await
    }

    /// Start a new mock server with custom API key
    pub async fn start_with_api_key(api_key: &str) -> Self {
        let server = MockServer::start().await;
        Self {
            server,
            api_key: api_key.to_string(),
        }
    }

    /// Get the server URL
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the underlying MockServer for custom mocks
    pub fn inner(&self) -> &MockServer {
        &self.server
    }

    /// Absolute URL of an endpoint path on this server
    pub fn endpoint_url(&self, endpoint_path: &str) -> String {
        format!("{}/{}", self.server.uri(), endpoint_path)
    }

    fn authorized_get(&self, endpoint_path: &str) -> MockBuilder {
        Mock::given(method("GET"))
            .and(path(format!("/{}", endpoint_path)))
            .and(header("x-api-key", self.api_key.as_str()))
            .and(header("accept", "application/json"))
    }

    /// Mount a 200 JSON response for any authorized GET of the path
    pub async fn mock_get(&self, endpoint_path: &str, body: Value) {
        self.authorized_get(endpoint_path)
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mount a 200 JSON response that only matches the given query string
    ///
    /// The mock expects exactly one matching request.
    pub async fn mock_get_with_query(
        &self,
        endpoint_path: &str,
        query: &[(&str, &str)],
        body: Value,
    ) {
        let mut builder = self.authorized_get(endpoint_path);
        for (key, value) in query {
            builder = builder.and(query_param(*key, *value));
        }

        builder
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mount an error status with a setlist.fm style error body
    pub async fn mock_status(&self, endpoint_path: &str, status: u16, message: &str) {
        let body = serde_json::json!({
            "code": status,
            "status": message,
            "message": message,
            "timestamp": "2024-01-01T00:00:00.000+0000"
        });

        Mock::given(method("GET"))
            .and(path(format!("/{}", endpoint_path)))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mount a 200 response whose body is not JSON
    pub async fn mock_malformed_body(&self, endpoint_path: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/{}", endpoint_path)))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_string("<html>Service Unavailable</html>"),
            )
            .mount(&self.server)
            .await;
    }

    /// Mount a JSON response that is only sent after `delay`
    pub async fn mock_slow(&self, endpoint_path: &str, delay: Duration, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/{}", endpoint_path)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(body)
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    /// Mount a redirect that points back at the same path forever
    pub async fn mock_redirect_loop(&self, endpoint_path: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/{}", endpoint_path)))
            .respond_with(
                ResponseTemplate::new(302)
                    .insert_header("location", self.endpoint_url(endpoint_path).as_str()),
            )
            .mount(&self.server)
            .await;
    }
}
