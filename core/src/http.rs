//! HTTP request and response types exchanged with a transport.
//!
//! # Design
//! Requests and responses are plain owned data. `HttpClient` assembles an
//! `HttpRequest`, hands it to a [`Transport`](crate::Transport), and inspects
//! the returned `HttpResponse`. Header and query maps are `BTreeMap`s so
//! every rendering of them (query strings, log lines) is sorted by key.

use std::collections::BTreeMap;
use std::fmt;

use url::Url;

use crate::error::HttpError;

/// Header names mapped to header values.
pub type Headers = BTreeMap<String, String>;

/// Query parameter names mapped to values.
pub type QueryParams = BTreeMap<String, String>;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directive to the transport about reusing cached responses.
///
/// The client passes it through untouched; only the transport gives it
/// meaning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CachePolicy {
    /// Let the transport follow the protocol's own caching rules.
    #[default]
    UseProtocolCachePolicy,
    /// Always go to the origin.
    ReloadIgnoringLocalCacheData,
    /// Accept a cached response of any age, loading only when nothing is cached.
    ReturnCacheDataElseLoad,
    /// Only accept a cached response.
    ReturnCacheDataDontLoad,
}

impl CachePolicy {
    /// The `Cache-Control` request directive equivalent to this policy, if any.
    pub fn cache_control(self) -> Option<&'static str> {
        match self {
            CachePolicy::UseProtocolCachePolicy => None,
            CachePolicy::ReloadIgnoringLocalCacheData => Some("no-cache"),
            CachePolicy::ReturnCacheDataElseLoad => Some("max-stale"),
            CachePolicy::ReturnCacheDataDontLoad => Some("only-if-cached"),
        }
    }
}

/// An outgoing request. Built once per call and never mutated after dispatch.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Headers,
    pub body: Option<Vec<u8>>,
    pub cache_policy: CachePolicy,
}

/// A response as reported by the transport.
///
/// `url` and `status` are optional because a transport may not be able to
/// supply them; such a response is logged as malformed and fails validation
/// with code `-1`.
#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    pub url: Option<Url>,
    pub status: Option<u16>,
    pub headers: Headers,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Numeric status code, or `-1` when the response has none.
    pub fn code(&self) -> i32 {
        self.status.map_or(-1, i32::from)
    }

    /// Whether the status is in the 2xx range, 200 through 299 inclusive.
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.code())
    }

    /// Fail with `HttpError::Status` unless the status is a success.
    pub fn check_validity(&self) -> Result<(), HttpError> {
        if self.is_success() {
            return Ok(());
        }
        Err(HttpError::Status { code: self.code() })
    }
}
