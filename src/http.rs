//! Shared HTTP plumbing for engine adapters.
//!
//! Provides a [`reqwest::Client`] configured with browser-like headers and
//! cookie support, and a fetch helper that classifies failures into
//! [`SearchError::Timeout`] and [`SearchError::Http`].

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::error::SearchError;
use crate::types::SearchEngine;

/// Build a [`reqwest::Client`] configured for search engine scraping.
///
/// The client has:
/// - Cookie store enabled (engines hand out session cookies on first visit)
/// - The given User-Agent and default headers
/// - Brotli and gzip decompression
/// - At most 10 redirects
///
/// Timeouts are set per request, since searches and suggestions differ.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if a header is invalid or the client
/// cannot be constructed.
pub fn build_client(
    user_agent: &str,
    headers: &[(&str, &str)],
) -> Result<reqwest::Client, SearchError> {
    let mut default_headers = HeaderMap::new();
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| SearchError::Config(format!("invalid header name `{name}`: {e}")))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|e| SearchError::Config(format!("invalid value for header `{name}`: {e}")))?;
        default_headers.insert(header_name, header_value);
    }

    reqwest::Client::builder()
        .cookie_store(true)
        .user_agent(user_agent)
        .default_headers(default_headers)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| SearchError::Config(format!("failed to build HTTP client: {e}")))
}

/// Send `request` and return the body decoded as UTF-8.
///
/// Invalid UTF-8 sequences are replaced rather than rejected. Error messages
/// carry no URL, so search terms stay out of logs.
pub async fn fetch_text(
    request: reqwest::RequestBuilder,
    engine: SearchEngine,
) -> Result<String, SearchError> {
    let response = request
        .send()
        .await
        .map_err(|e| classify(engine, "request", e))?
        .error_for_status()
        .map_err(|e| classify(engine, "request", e))?;

    let body = response
        .bytes()
        .await
        .map_err(|e| classify(engine, "response read", e))?;

    tracing::trace!(%engine, bytes = body.len(), "response received");
    Ok(String::from_utf8_lossy(&body).into_owned())
}

fn classify(engine: SearchEngine, stage: &str, err: reqwest::Error) -> SearchError {
    if err.is_timeout() {
        SearchError::Timeout(format!("{engine} {stage} timed out"))
    } else {
        SearchError::Http(format!("{engine} {stage} failed: {}", err.without_url()))
    }
}
