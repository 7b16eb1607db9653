//! setlist.fm client error types

use encore_shared_config::ConfigError;
use reqwest::StatusCode;
use thiserror::Error;

/// setlist.fm API client errors
#[derive(Error, Debug)]
pub enum SetlistfmError {
    /// API key is missing or empty
    #[error("API key is required for setlist.fm API access")]
    MissingApiKey,

    /// API key cannot be sent as a header value
    #[error("API key contains characters that are not valid in an HTTP header")]
    InvalidApiKey,

    /// Name is in neither the search nor the resource table
    #[error("Unknown setlist.fm endpoint: {0}")]
    UnknownEndpoint(String),

    /// Search endpoint called without any filter
    #[error("Missing search criteria for {endpoint}")]
    MissingSearchCriteria { endpoint: String },

    /// Resource endpoint called without an identifier
    #[error("Missing primary key for {endpoint}")]
    MissingPrimaryKey { endpoint: String },

    /// Request timeout
    #[error("Request to setlist.fm timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// Redirect limit exceeded
    #[error("Too many redirects: {0}")]
    TooManyRedirects(#[source] reqwest::Error),

    /// setlist.fm answered with a 4xx or 5xx status
    #[error("setlist.fm returned {status} for {url}: {body}")]
    HttpStatus {
        status: StatusCode,
        url: String,
        body: String,
    },

    /// Response body is not valid JSON
    #[error("Invalid response format: {0}")]
    InvalidResponseFormat(#[from] serde_json::Error),

    /// Any other HTTP transport failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl SetlistfmError {
    /// Check if the request was rejected before anything was sent
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            SetlistfmError::UnknownEndpoint(_)
                | SetlistfmError::MissingSearchCriteria { .. }
                | SetlistfmError::MissingPrimaryKey { .. }
        )
    }

    /// HTTP status of the failed response, if the server answered
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SetlistfmError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for setlist.fm operations
pub type SetlistfmResult<T> = Result<T, SetlistfmError>;
