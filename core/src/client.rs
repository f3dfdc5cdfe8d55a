//! GET / POST / DELETE helpers over a [`Transport`].
//!
//! # Design
//! `HttpClient` holds a transport and a logger and nothing else; no state
//! survives between calls. Every operation runs the same pipeline: build the
//! URL, assemble an `HttpRequest`, log it, perform exactly one round-trip,
//! log the response, optionally validate the status, then decode or discard
//! the body. Any failure along the way is logged once and returned as-is.

use std::future::Future;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec;
use crate::endpoint::build_url;
use crate::error::HttpError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::log::HttpLogger;
use crate::options::RequestOptions;
use crate::transport::{has_header, Transport};

/// JSON-over-HTTP client generic over its transport.
#[derive(Debug, Clone)]
pub struct HttpClient<T = reqwest::Client> {
    transport: T,
    logger: HttpLogger,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    /// Client backed by a default `reqwest::Client`.
    pub fn new() -> Self {
        Self::with_transport(reqwest::Client::new())
    }
}

impl<T: Transport> HttpClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            logger: HttpLogger::default(),
        }
    }

    pub fn with_logger(mut self, logger: HttpLogger) -> Self {
        self.logger = logger;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn logger(&self) -> &HttpLogger {
        &self.logger
    }

    /// GET `url` and decode the response body into `R`.
    pub async fn get<R>(&self, url: &str, options: &RequestOptions) -> Result<R, HttpError>
    where
        R: DeserializeOwned,
    {
        self.logged(options, async {
            let response = self.round_trip(HttpMethod::Get, url, None, options).await?;
            codec::decode(&response.body, &options.key_decoding)
        })
        .await
    }

    /// POST `body` as JSON to `url` and decode the response body into `R`.
    pub async fn post<B, R>(&self, url: &str, body: &B, options: &RequestOptions) -> Result<R, HttpError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.logged(options, async {
            let body = codec::encode(body, &options.key_encoding)?;
            let response = self
                .round_trip(HttpMethod::Post, url, Some(body), options)
                .await?;
            codec::decode(&response.body, &options.key_decoding)
        })
        .await
    }

    /// POST `body` as JSON to `url`, ignoring whatever the server returns.
    pub async fn post_discarding<B>(
        &self,
        url: &str,
        body: &B,
        options: &RequestOptions,
    ) -> Result<(), HttpError>
    where
        B: Serialize + ?Sized,
    {
        self.logged(options, async {
            let body = codec::encode(body, &options.key_encoding)?;
            self.round_trip(HttpMethod::Post, url, Some(body), options)
                .await
                .map(drop)
        })
        .await
    }

    /// DELETE `url`. The response body is discarded.
    pub async fn delete(&self, url: &str, options: &RequestOptions) -> Result<(), HttpError> {
        self.logged(options, async {
            self.round_trip(HttpMethod::Delete, url, None, options)
                .await
                .map(drop)
        })
        .await
    }

    async fn logged<R>(
        &self,
        options: &RequestOptions,
        call: impl Future<Output = Result<R, HttpError>>,
    ) -> Result<R, HttpError> {
        call.await.inspect_err(|error| {
            if options.logging {
                self.logger.log_error(error);
            }
        })
    }

    async fn round_trip(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<Vec<u8>>,
        options: &RequestOptions,
    ) -> Result<HttpResponse, HttpError> {
        let url = build_url(url, options.query.as_ref())?;
        let mut headers = options.headers.clone();
        if body.is_some() && !has_header(&headers, "content-type") {
            headers.insert("content-type".to_string(), "application/json".to_string());
        }

        let request = HttpRequest {
            method,
            url,
            headers,
            body,
            cache_policy: options.cache_policy,
        };
        if options.logging {
            self.logger.log_request(&request);
        }

        let response = self
            .transport
            .perform(&request)
            .await
            .map_err(HttpError::Transport)?;
        if options.logging {
            self.logger.log_response(&response);
        }

        if options.validate_status {
            response.check_validity()?;
        }
        Ok(response)
    }
}

/// GET with a default client.
pub async fn get<R>(url: &str, options: &RequestOptions) -> Result<R, HttpError>
where
    R: DeserializeOwned,
{
    HttpClient::new().get(url, options).await
}

/// POST with a default client.
pub async fn post<B, R>(url: &str, body: &B, options: &RequestOptions) -> Result<R, HttpError>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    HttpClient::new().post(url, body, options).await
}

/// POST with a default client, discarding the response body.
pub async fn post_discarding<B>(url: &str, body: &B, options: &RequestOptions) -> Result<(), HttpError>
where
    B: Serialize + ?Sized,
{
    HttpClient::new().post_discarding(url, body, options).await
}

/// DELETE with a default client.
pub async fn delete(url: &str, options: &RequestOptions) -> Result<(), HttpError> {
    HttpClient::new().delete(url, options).await
}
