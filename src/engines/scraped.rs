//! The shared adapter behind every scraped engine.

use std::time::Duration;

use crate::config::SearchConfig;
use crate::engine::{EngineConfig, SearchEngineTrait};
use crate::error::SearchError;
use crate::extract::{ExtractContext, Extractor};
use crate::filter::DomainFilter;
use crate::http;
use crate::suggest::{SuggestFormat, SuggestParser};
use crate::types::{SearchEngine, SearchResult};

/// A search engine scraped over HTTPS, driven by a static [`EngineConfig`].
///
/// Holds one pooled [`reqwest::Client`] and the compiled extraction cascade;
/// nothing else is mutable or cached between calls.
pub struct ScrapedEngine {
    config: &'static EngineConfig,
    client: reqwest::Client,
    search_url: String,
    suggest_url: String,
    search_timeout: Duration,
    suggest_timeout: Duration,
    filter: DomainFilter,
    extractor: Extractor,
    suggest_parser: SuggestParser,
}

impl ScrapedEngine {
    /// Build the adapter for `config`, applying timeouts and User-Agent
    /// override from `search`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if a selector, header or JSONP callback
    /// in `config` is invalid, or the HTTP client cannot be built.
    pub fn new(config: &'static EngineConfig, search: &SearchConfig) -> Result<Self, SearchError> {
        let user_agent = search.user_agent.as_deref().unwrap_or(config.user_agent);
        let extractor = Extractor::new(config.engine, (config.strategies)()?);
        tracing::debug!(
            engine = %config.engine,
            strategies = ?extractor.strategy_names(),
            "engine ready"
        );

        Ok(Self {
            config,
            client: http::build_client(user_agent, config.headers)?,
            search_url: config.search_url.to_string(),
            suggest_url: config.suggest.url.to_string(),
            search_timeout: Duration::from_secs(search.search_timeout_seconds),
            suggest_timeout: Duration::from_secs(search.suggest_timeout_seconds),
            filter: DomainFilter::for_engine(config.extra_blocked_domains),
            extractor,
            suggest_parser: SuggestParser::new(config.suggest.format, config.suggest.extract)?,
        })
    }

    /// Send requests to different endpoints, e.g. a regional mirror or a
    /// local test server. Parameters and parsing are unchanged.
    pub fn with_endpoints(
        mut self,
        search_url: impl Into<String>,
        suggest_url: impl Into<String>,
    ) -> Self {
        self.search_url = search_url.into();
        self.suggest_url = suggest_url.into();
        self
    }

    /// The static description this adapter was built from.
    pub fn config(&self) -> &'static EngineConfig {
        self.config
    }

    /// The blocklist applied to this engine's results.
    pub fn filter(&self) -> &DomainFilter {
        &self.filter
    }

    /// Run the extraction cascade over one fetched result page.
    pub fn parse_results(&self, html: &str, query: &str) -> Vec<SearchResult> {
        let ctx = ExtractContext {
            query,
            filter: &self.filter,
            resolve_href: self.config.resolve_href,
        };
        self.extractor.extract(html, &ctx)
    }

    /// Decode one autocomplete response body.
    pub fn parse_suggestions(&self, body: &str) -> Result<Vec<String>, SearchError> {
        self.suggest_parser.parse(body)
    }

    async fn try_search(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let mut params = vec![(self.config.query_param, query.to_string())];
        if let Some(count_param) = self.config.count_param {
            params.push((count_param, limit.to_string()));
        }
        params.extend(
            self.config
                .extra_params
                .iter()
                .map(|(key, value)| (*key, value.to_string())),
        );

        let request = self
            .client
            .get(&self.search_url)
            .query(&params)
            .header("accept", crate::engine::ACCEPT_HTML)
            .timeout(self.search_timeout);
        let html = http::fetch_text(request, self.config.engine).await?;

        let mut results = self.parse_results(&html, query);
        results.truncate(limit);
        Ok(results)
    }

    async fn try_suggestions(&self, query: &str) -> Result<Vec<String>, SearchError> {
        let endpoint = &self.config.suggest;
        let mut params: Vec<(&str, &str)> = vec![(endpoint.query_param, query)];
        for &(key, value) in endpoint.extra_params {
            params.push((key, value));
        }
        if let SuggestFormat::Jsonp { param, callback } = endpoint.format {
            params.push((param, callback));
        }

        let request = self
            .client
            .get(&self.suggest_url)
            .query(&params)
            .timeout(self.suggest_timeout);
        let body = http::fetch_text(request, self.config.engine).await?;

        self.parse_suggestions(&body)
    }
}

impl SearchEngineTrait for ScrapedEngine {
    async fn search(&self, query: &str, limit: usize) -> Vec<SearchResult> {
        if limit == 0 {
            return Vec::new();
        }
        tracing::trace!(query, engine = %self.config.engine, "search");

        match self.try_search(query, limit).await {
            Ok(results) => {
                tracing::debug!(
                    engine = %self.config.engine,
                    count = results.len(),
                    "search finished"
                );
                results
            }
            Err(err) => {
                tracing::warn!(
                    engine = %self.config.engine,
                    error = %err,
                    "search failed, returning no results"
                );
                Vec::new()
            }
        }
    }

    async fn get_suggestions(&self, query: &str) -> Vec<String> {
        tracing::trace!(query, engine = %self.config.engine, "suggestions");

        self.try_suggestions(query).await.unwrap_or_else(|err| {
            tracing::warn!(engine = %self.config.engine, error = %err, "suggestion lookup failed");
            Vec::new()
        })
    }

    fn engine_type(&self) -> SearchEngine {
        self.config.engine
    }
}
