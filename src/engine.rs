//! The engine adapter contract and the static data describing each
//! scraped engine.
//!
//! Every backend (Baidu, DuckDuckGo, Bing, and the offline mock) implements
//! [`SearchEngineTrait`]. Scraped engines are fully described by an
//! [`EngineConfig`]; the shared [`crate::engines::ScrapedEngine`] turns that
//! description into requests and parsed results.

use std::future::Future;

use crate::error::SearchError;
use crate::extract::ExtractorStrategy;
use crate::suggest::SuggestFormat;
use crate::types::{SearchEngine, SearchResult};

/// `Accept` header sent with result-page requests.
pub const ACCEPT_HTML: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

/// Desktop Chrome on Windows, for engines that serve bots a reduced page.
pub const CHROME_WINDOWS_UA: &str = concat!(
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 ",
    "(KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
);

/// Desktop Chrome on macOS.
pub const CHROME_MAC_UA: &str = concat!(
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 ",
    "(KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
);

/// `Accept-Language` header preferring Simplified Chinese results.
pub const ACCEPT_LANGUAGE_ZH: &str = "zh-CN,zh;q=0.9,en;q=0.8";

/// A search backend behind a uniform search/suggest contract.
///
/// Neither operation fails: network errors, timeouts, non-2xx responses and
/// unparseable bodies are logged and reported as empty output, so a flaky
/// upstream never breaks the page that asked for results.
///
/// All implementations must be `Send + Sync` so one instance can serve
/// concurrent request handlers.
pub trait SearchEngineTrait: Send + Sync {
    /// Search for `query`, returning at most `limit` results in the order
    /// the engine ranked them.
    fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> impl Future<Output = Vec<SearchResult>> + Send;

    /// Autocomplete suggestions for `query`, at most
    /// [`crate::suggest::MAX_SUGGESTIONS`].
    fn get_suggestions(&self, query: &str) -> impl Future<Output = Vec<String>> + Send;

    /// Returns which [`SearchEngine`] variant this implementation represents.
    fn engine_type(&self) -> SearchEngine;
}

/// Builds the ordered extraction cascade for one engine.
pub type StrategyFactory = fn() -> Result<Vec<Box<dyn ExtractorStrategy>>, SearchError>;

/// Static description of a scraped search engine.
pub struct EngineConfig {
    /// Tag stamped on every result this engine produces.
    pub engine: SearchEngine,
    /// Result page endpoint.
    pub search_url: &'static str,
    /// Name of the query-string parameter carrying the search terms.
    pub query_param: &'static str,
    /// Parameter carrying the requested result count, if the engine has one.
    pub count_param: Option<&'static str>,
    /// Fixed parameters (locale, encoding, layout flags).
    pub extra_params: &'static [(&'static str, &'static str)],
    /// Browser User-Agent sent unless the config overrides it.
    pub user_agent: &'static str,
    /// Default headers; names must be lowercase.
    pub headers: &'static [(&'static str, &'static str)],
    /// Autocomplete endpoint and payload decoding.
    pub suggest: SuggestEndpoint,
    /// Domains blocked for this engine on top of the shared blocklist.
    pub extra_blocked_domains: &'static [&'static str],
    /// Rewrites result hrefs before validation; `None` drops the link.
    pub resolve_href: fn(&str) -> Option<String>,
    /// Extraction cascade, compiled once when the adapter is built.
    pub strategies: StrategyFactory,
}

/// An engine's autocomplete endpoint.
pub struct SuggestEndpoint {
    pub url: &'static str,
    pub query_param: &'static str,
    pub extra_params: &'static [(&'static str, &'static str)],
    pub format: SuggestFormat,
    /// Pulls suggestion strings out of the decoded JSON payload.
    pub extract: fn(&serde_json::Value) -> Vec<String>,
}
