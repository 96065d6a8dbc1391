//! Error types for the shelf-search crate.
//!
//! All errors use stable string messages. Network and parse errors never
//! leave an engine adapter: they are logged and turned into empty output.
//! Only [`SearchError::Config`] reaches callers, and only at construction.

/// Errors that can occur while configuring or running a search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// A search engine request timed out.
    #[error("search timed out: {0}")]
    Timeout(String),

    /// An HTTP request failed or returned a non-success status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Failed to parse a response (HTML, JSON or JSONP).
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid search configuration. Fatal at startup.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for shelf-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
