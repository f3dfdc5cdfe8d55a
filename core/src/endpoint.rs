//! Target URL construction.

use url::Url;

use crate::error::HttpError;
use crate::http::QueryParams;

/// Parse `base` and append `query` to it.
///
/// `base` must be an absolute URL with a host. Query pairs are appended after
/// any query already present on `base`, form-urlencoded, in key order. An
/// empty map leaves the URL untouched.
pub fn build_url(base: &str, query: Option<&QueryParams>) -> Result<Url, HttpError> {
    let invalid = |reason: String| HttpError::InvalidUrl {
        url: base.to_string(),
        reason,
    };

    let mut url = Url::parse(base).map_err(|e| invalid(e.to_string()))?;
    if url.cannot_be_a_base() || url.host_str().map_or(true, str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }

    if let Some(params) = query.filter(|params| !params.is_empty()) {
        url.query_pairs_mut().extend_pairs(params.iter());
    }

    Ok(url)
}
