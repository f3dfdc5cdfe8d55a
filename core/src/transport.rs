//! The network boundary.
//!
//! # Design
//! `Transport` is the only I/O seam: one `perform` call per request, no
//! retries. TLS, redirects, pooling and timeouts belong to the implementation.
//! Non-2xx statuses are data, not errors; status interpretation happens in
//! the client. `reqwest::Client` is the default implementation.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::CACHE_CONTROL;

use crate::error::TransportError;
use crate::http::{Headers, HttpMethod, HttpRequest, HttpResponse};

/// Performs a single HTTP round-trip.
///
/// Implementations must be safe to share between concurrent calls.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn perform(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn perform(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).perform(request).await
    }
}

#[async_trait]
impl Transport for reqwest::Client {
    async fn perform(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.request(method, request.url.clone());
        if let Some(directive) = request.cache_policy.cache_control() {
            if !has_header(&request.headers, CACHE_CONTROL.as_str()) {
                builder = builder.header(CACHE_CONTROL, directive);
            }
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await?;
        let url = response.url().clone();
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                let value = value.to_str().ok()?;
                Some((name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse {
            url: Some(url),
            status: Some(status),
            headers,
            body,
        })
    }
}

/// Case-insensitive header lookup.
pub(crate) fn has_header(headers: &Headers, name: &str) -> bool {
    headers.keys().any(|key| key.eq_ignore_ascii_case(name))
}
