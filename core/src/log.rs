//! Request, response and error log lines.
//!
//! # Design
//! `HttpLogger` is a small handle carrying the subsystem/category pair that
//! tags every line. It is built once and injected into an `HttpClient`.
//! Output goes through `tracing` under [`LOG_TARGET`]; whatever subscriber
//! the host installed decides where lines end up, and a missing subscriber
//! simply drops them. Nothing here can fail or alter the call being logged.

use std::borrow::Cow;

use crate::format::{format_headers, pretty_json};
use crate::http::{Headers, HttpRequest, HttpResponse};

/// `tracing` target for every line emitted by this crate.
pub const LOG_TARGET: &str = "http_client";

const DEFAULT_SUBSYSTEM: &str = "http-client";
const DEFAULT_CATEGORY: &str = "http-client";

#[derive(Debug, Clone)]
pub struct HttpLogger {
    subsystem: Cow<'static, str>,
    category: Cow<'static, str>,
}

impl Default for HttpLogger {
    fn default() -> Self {
        Self::new(DEFAULT_SUBSYSTEM, DEFAULT_CATEGORY)
    }
}

impl HttpLogger {
    pub fn new(
        subsystem: impl Into<Cow<'static, str>>,
        category: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            subsystem: subsystem.into(),
            category: category.into(),
        }
    }

    pub fn subsystem(&self) -> &str {
        &self.subsystem
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn log_request(&self, request: &HttpRequest) {
        let body = request.body.as_deref().and_then(pretty_json);
        self.info(format!(
            "[Request Starting]:\nMethod: {}\nURL: {}\nHeaders: {}\nBody: {}",
            request.method,
            request.url,
            headers_or_none(&request.headers),
            body.as_deref().unwrap_or("None"),
        ));
    }

    pub fn log_response(&self, response: &HttpResponse) {
        let Some(status) = response.status else {
            self.error("Response is not an HTTP response");
            return;
        };
        let Some(url) = &response.url else {
            self.error("Response has no URL");
            return;
        };

        let body = pretty_json(&response.body);
        self.info(format!(
            "[Request Response]:\nURL: {url}\nStatus: {status}\nHeaders: {}\nData: {}",
            headers_or_none(&response.headers),
            body.as_deref().unwrap_or("None"),
        ));
    }

    pub fn log_error(&self, error: &dyn std::error::Error) {
        self.error(&format!("[Error]:\n{error}"));
    }

    fn info(&self, message: String) {
        tracing::info!(
            target: LOG_TARGET,
            subsystem = %self.subsystem,
            category = %self.category,
            "{message}"
        );
    }

    fn error(&self, message: &str) {
        tracing::error!(
            target: LOG_TARGET,
            subsystem = %self.subsystem,
            category = %self.category,
            "{message}"
        );
    }
}

fn headers_or_none(headers: &Headers) -> Cow<'static, str> {
    if headers.is_empty() {
        Cow::Borrowed("None")
    } else {
        Cow::Owned(format!("\n{}", format_headers(headers)))
    }
}
