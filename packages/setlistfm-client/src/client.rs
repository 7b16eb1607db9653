//! setlist.fm API client implementation

use std::fmt;
use std::time::Duration;

use encore_shared_config::{ConfigError, SetlistfmConfig};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, instrument};
use url::Url;

use crate::endpoints::{self, EndpointKind, COUNTRIES_TEMPLATE};
use crate::error::{SetlistfmError, SetlistfmResult};

/// Header carrying the API key
const API_KEY_HEADER: &str = "x-api-key";

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Config field the base URL comes from
const URL_FIELD: &str = "SETLISTFM_URL";

/// Maximum error body size kept in [`SetlistfmError::HttpStatus`]
const MAX_ERROR_BODY_SIZE: usize = 1000;

/// setlist.fm API client
///
/// Every endpoint in [`endpoints::SEARCH`] and [`endpoints::RESOURCE`] is
/// available as a method of the same name, or by name through
/// [`SetlistfmClient::call`].
#[derive(Clone)]
pub struct SetlistfmClient {
    http_client: Client,
    base_url: Url,
    headers: HeaderMap,
}

impl fmt::Debug for SetlistfmClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SetlistfmClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl SetlistfmClient {
    /// Create a client for the public setlist.fm API
    ///
    /// # Errors
    /// Returns `SetlistfmError::MissingApiKey` if the API key is empty
    pub fn new(api_key: impl Into<String>) -> SetlistfmResult<Self> {
        Self::from_config(&SetlistfmConfig::new(api_key))
    }

    /// Create a client from configuration
    ///
    /// # Errors
    /// Returns `SetlistfmError::Config` if the timeout is zero or the URL
    /// cannot serve as an API root
    pub fn from_config(config: &SetlistfmConfig) -> SetlistfmResult<Self> {
        config.validate_timeout()?;

        // Idle connections are dropped as soon as a call completes
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .pool_max_idle_per_host(0)
            .user_agent(concat!("encore/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Self::with_client(config, http_client)
    }

    /// Create a client from environment variables
    ///
    /// See [`SetlistfmConfig::from_env`] for the variables read.
    pub fn from_env() -> SetlistfmResult<Self> {
        Self::from_config(&SetlistfmConfig::from_env()?)
    }

    /// Create a client with custom HTTP client (for testing)
    ///
    /// Timeouts, redirects and connection pooling are whatever `http_client`
    /// was built with; in particular idle connections are only dropped after
    /// each call if it was built with `pool_max_idle_per_host(0)`.
    pub fn with_client(config: &SetlistfmConfig, http_client: Client) -> SetlistfmResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(SetlistfmError::MissingApiKey);
        }

        let base_url = Url::parse(&config.url)
            .map_err(|e| ConfigError::InvalidUrl(URL_FIELD.to_string(), e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl(URL_FIELD.to_string(), config.url.clone()).into());
        }

        let mut api_key =
            HeaderValue::from_str(&config.api_key).map_err(|_| SetlistfmError::InvalidApiKey)?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, api_key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Ok(Self {
            http_client,
            base_url,
            headers,
        })
    }

    /// API root that endpoint paths are appended to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Call an endpoint by name
    ///
    /// # Errors
    /// - `SetlistfmError::UnknownEndpoint` - If no endpoint has this name
    /// - anything [`SetlistfmClient::resource`] returns
    pub async fn call(
        &self,
        name: &str,
        pk: Option<&str>,
        params: &[(&str, &str)],
    ) -> SetlistfmResult<Value> {
        let template = endpoints::resolve(name)
            .template()
            .ok_or_else(|| SetlistfmError::UnknownEndpoint(name.to_string()))?;

        self.resource(template, pk, params).await
    }

    /// Check that a request carries what its endpoint needs
    ///
    /// An empty identifier counts as missing.
    ///
    /// # Errors
    /// - `SetlistfmError::MissingSearchCriteria` - Search endpoint other than
    ///   `search/countries` without any parameter
    /// - `SetlistfmError::MissingPrimaryKey` - Resource endpoint without an identifier
    pub fn validate_request(
        template: &str,
        pk: Option<&str>,
        params: &[(&str, &str)],
    ) -> SetlistfmResult<()> {
        match endpoints::kind_of(template) {
            Some(EndpointKind::Search) if template != COUNTRIES_TEMPLATE && params.is_empty() => {
                Err(SetlistfmError::MissingSearchCriteria {
                    endpoint: template.to_string(),
                })
            }
            Some(EndpointKind::Resource) if pk.map_or(true, str::is_empty) => {
                Err(SetlistfmError::MissingPrimaryKey {
                    endpoint: template.to_string(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Resolve a path template against the API root
    fn build_url(&self, template: &str, pk: Option<&str>) -> SetlistfmResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ConfigError::InvalidUrl(URL_FIELD.to_string(), self.base_url.to_string()))?
            .pop_if_empty()
            .extend(endpoints::expand(template, pk));
        Ok(url)
    }

    /// Fetch an endpoint and decode its JSON body
    ///
    /// # Errors
    /// - validation errors from [`SetlistfmClient::validate_request`]
    /// - `SetlistfmError::Timeout` - If the request timed out
    /// - `SetlistfmError::TooManyRedirects` - If the redirect limit was hit
    /// - `SetlistfmError::HttpStatus` - If setlist.fm answered 4xx or 5xx
    /// - `SetlistfmError::InvalidResponseFormat` - If the body is not JSON
    /// - `SetlistfmError::Http` - Any other transport failure
    #[instrument(skip(self, params))]
    pub async fn resource(
        &self,
        template: &str,
        pk: Option<&str>,
        params: &[(&str, &str)],
    ) -> SetlistfmResult<Value> {
        Self::validate_request(template, pk, params)?;
        let url = self.build_url(template, pk)?;

        debug!(url = %url, params = params.len(), "Requesting setlist.fm endpoint");

        let response = self
            .http_client
            .get(url.clone())
            .headers(self.headers.clone())
            .query(params)
            .send()
            .await
            .map_err(|e| Self::transport_error(&url, e))?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let body = match response.text().await {
                Ok(body) => Self::truncate_error_body(body),
                Err(e) => {
                    debug!(url = %url, error = %e, "Failed to read error body");
                    String::new()
                }
            };
            error!(url = %url, status = status.as_u16(), body = %body, "HTTP exception");
            return Err(SetlistfmError::HttpStatus {
                status,
                url: url.to_string(),
                body,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| Self::transport_error(&url, e))?;

        let value: Value = serde_json::from_str(&text).map_err(|e| {
            error!(url = %url, error = %e, "Invalid response format");
            SetlistfmError::InvalidResponseFormat(e)
        })?;

        debug!(url = %url, status = status.as_u16(), "setlist.fm request succeeded");

        Ok(value)
    }

    /// Classify and log a transport failure
    fn transport_error(url: &Url, e: reqwest::Error) -> SetlistfmError {
        if e.is_timeout() {
            error!(url = %url, error = %e, "Request timed out");
            SetlistfmError::Timeout(e)
        } else if e.is_redirect() {
            error!(url = %url, error = %e, "Request had too many redirects");
            SetlistfmError::TooManyRedirects(e)
        } else {
            error!(url = %url, error = %e, "Request failed");
            SetlistfmError::Http(e)
        }
    }

    /// Truncate error body, respecting UTF-8 boundaries
    fn truncate_error_body(body: String) -> String {
        if body.len() <= MAX_ERROR_BODY_SIZE {
            return body;
        }

        let truncate_at = body
            .char_indices()
            .map(|(i, _)| i)
            .take_while(|i| *i <= MAX_ERROR_BODY_SIZE)
            .last()
            .unwrap_or(0);

        format!("{}... (truncated)", &body[..truncate_at])
    }
}
