//! Thin JSON-over-HTTP helpers.
//!
//! # Overview
//! `HttpClient` offers GET / POST / DELETE operations that build a URL with
//! query parameters, attach headers, encode a request body, perform one
//! round-trip through a [`Transport`], decode the response body, and surface
//! non-2xx statuses as errors. Connection handling, TLS, redirects and
//! timeouts belong to the transport (`reqwest::Client` by default).
//!
//! # Design
//! - `HttpClient` is stateless apart from its transport and logger handle.
//! - Per-call configuration lives in [`RequestOptions`].
//! - Key casing is applied on the JSON tree, independently for encoding and
//!   decoding ([`KeyEncodingStrategy`], [`KeyDecodingStrategy`]).
//! - Requests and responses are logged through `tracing`; failures are logged
//!   once and returned unchanged.
//!
//! ```no_run
//! use http_client::{HttpClient, RequestOptions};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct User {
//!     name: String,
//! }
//!
//! async fn example() -> Result<String, http_client::HttpError> {
//!     let client = HttpClient::new();
//!     let options = RequestOptions::new().query("id", "7");
//!     let user: User = client.get("https://api.example.com/user", &options).await?;
//!     Ok(user.name)
//! }
//! ```

pub mod client;
pub mod codec;
pub mod endpoint;
pub mod error;
pub mod format;
pub mod http;
pub mod log;
pub mod options;
pub mod transport;

pub use client::{delete, get, post, post_discarding, HttpClient};
pub use codec::{KeyDecodingStrategy, KeyEncodingStrategy};
pub use endpoint::build_url;
pub use error::{HttpError, TransportError};
pub use http::{CachePolicy, Headers, HttpMethod, HttpRequest, HttpResponse, QueryParams};
pub use log::HttpLogger;
pub use options::RequestOptions;
pub use transport::Transport;
