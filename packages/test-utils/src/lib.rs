//! Shared test utilities for the Encore workspace
//!
//! This crate provides a mock setlist.fm server and canned API responses
//! so client tests run without network access or a real API key.
//!
//! # Example
//!
//! ```rust,ignore
//! use encore_test_utils::{fixtures, MockSetlistfmServer};
//!
//! #[tokio::test]
//! async fn test_with_mock() {
//!     let server = MockSetlistfmServer::start().await;
//!     server.mock_get("search/artists", fixtures::artists()).await;
//!
//!     // Point your client at server.url() with server.api_key()
//! }
//! ```

pub mod fixtures;
mod setlistfm;

pub use setlistfm::MockSetlistfmServer;
