//! Per-call configuration.

use crate::codec::{KeyDecodingStrategy, KeyEncodingStrategy};
use crate::http::{CachePolicy, Headers, QueryParams};

/// Options shared by every `HttpClient` operation.
///
/// The defaults send no extra headers or query parameters, use serde's own
/// key names in both directions, leave caching to the transport, log every
/// call, and reject statuses outside 200..=299.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub headers: Headers,
    pub query: Option<QueryParams>,
    pub key_decoding: KeyDecodingStrategy,
    pub key_encoding: KeyEncodingStrategy,
    pub cache_policy: CachePolicy,
    pub logging: bool,
    /// When false, any status is accepted and the body is decoded as-is.
    pub validate_status: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            headers: Headers::new(),
            query: None,
            key_decoding: KeyDecodingStrategy::default(),
            key_encoding: KeyEncodingStrategy::default(),
            cache_policy: CachePolicy::default(),
            logging: true,
            validate_status: true,
        }
    }
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn headers(mut self, headers: Headers) -> Self {
        self.headers.extend(headers);
        self
    }

    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(QueryParams::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn query_params(mut self, params: QueryParams) -> Self {
        self.query.get_or_insert_with(QueryParams::new).extend(params);
        self
    }

    pub fn key_decoding(mut self, strategy: KeyDecodingStrategy) -> Self {
        self.key_decoding = strategy;
        self
    }

    pub fn key_encoding(mut self, strategy: KeyEncodingStrategy) -> Self {
        self.key_encoding = strategy;
        self
    }

    pub fn cache_policy(mut self, policy: CachePolicy) -> Self {
        self.cache_policy = policy;
        self
    }

    pub fn logging(mut self, enabled: bool) -> Self {
        self.logging = enabled;
        self
    }

    pub fn validate_status(mut self, enabled: bool) -> Self {
        self.validate_status = enabled;
        self
    }
}
