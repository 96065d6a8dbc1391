//! Core types for search results and engine identification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum abstract length, in characters, before truncation.
pub const ABSTRACT_MAX_CHARS: usize = 200;

const ELLIPSIS: &str = "...";

/// A single search result surfaced to the directory application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The title of the result page.
    pub title: String,
    /// Absolute `http(s)` URL of the result.
    pub url: String,
    /// Short summary of the page, at most 200 characters plus `...`.
    #[serde(rename = "abstract")]
    pub snippet: String,
    /// Which engine produced this result.
    pub source: SearchEngine,
    /// Relevance score, assigned by the orchestrator's ranking pass.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<u32>,
    /// Whether the directory already stores a page with this title.
    #[serde(default)]
    pub exists: bool,
}

impl SearchResult {
    /// Build an unranked result, truncating the abstract to its length cap.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        snippet: &str,
        source: SearchEngine,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            snippet: truncate_abstract(snippet),
            source,
            relevance_score: None,
            exists: false,
        }
    }
}

/// Truncate `text` to [`ABSTRACT_MAX_CHARS`] characters, appending `...`
/// when anything was cut.
pub fn truncate_abstract(text: &str) -> String {
    match text.char_indices().nth(ABSTRACT_MAX_CHARS) {
        Some((byte_idx, _)) => format!("{}{ELLIPSIS}", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// Search backends the service can be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    /// Offline, deterministic engine for tests and demos.
    Mock,
    /// Baidu, primary engine for Chinese-language results.
    Baidu,
    /// DuckDuckGo HTML endpoint, a scraper-friendly fallback.
    #[serde(rename = "duckduckgo")]
    DuckDuckGo,
    /// Bing China, the default engine.
    Bing,
}

impl SearchEngine {
    /// Returns the human-readable name of this engine.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mock => "Mock",
            Self::Baidu => "Baidu",
            Self::DuckDuckGo => "DuckDuckGo",
            Self::Bing => "Bing",
        }
    }

    /// Returns all available engine variants.
    pub fn all() -> &'static [SearchEngine] {
        &[Self::Mock, Self::Baidu, Self::DuckDuckGo, Self::Bing]
    }
}

impl fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
