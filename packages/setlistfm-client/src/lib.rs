//! setlist.fm API client for Encore
//!
//! This crate maps the fixed set of setlist.fm REST endpoints to HTTP GET
//! requests and returns the decoded JSON body:
//! - *search* endpoints (`artists`, `cities`, `countries`, `setlists`,
//!   `venues`) take query parameters as filters
//! - *resource* endpoints (`artist`, `setlist`, `venue_setlists`, ...) take
//!   the identifier of the entity to fetch
//!
//! Requests are validated before anything is sent: a search without filters
//! (other than `countries`) and a resource lookup without an identifier are
//! rejected. Failures are never retried.
//!
//! # Example
//!
//! ```rust,no_run
//! use encore_setlistfm_client::SetlistfmClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SetlistfmClient::new("your_api_key")?;
//!
//! // Search with filters
//! let artists = client
//!     .artists(&[("artistName", "chain"), ("sort", "relevance")])
//!     .await?;
//! println!("{}", artists["total"]);
//!
//! // Fetch a single entity
//! let artist = client
//!     .artist("4bd95eea-b9f6-4d70-a36c-cfea77431553", &[])
//!     .await?;
//! println!("{}", artist["name"]);
//!
//! // Or dispatch by name
//! let setlists = client
//!     .call("artist_setlists", Some("4bd95eea-b9f6-4d70-a36c-cfea77431553"), &[("p", "2")])
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Environment Variables
//!
//! - `SETLISTFM_API_KEY`: API key for setlist.fm (required by `from_env`)
//! - `SETLISTFM_URL`: API root override
//! - `SETLISTFM_TIMEOUT`: request timeout in seconds

mod client;
pub mod endpoints;
mod error;

pub use client::SetlistfmClient;
pub use endpoints::{endpoint_names, resolve, EndpointKind, Resolution};
pub use error::{SetlistfmError, SetlistfmResult};
