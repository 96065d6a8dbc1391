//! The search service: optimise, dispatch, rank, truncate.

use crate::config::SearchConfig;
use crate::engine::SearchEngineTrait;
use crate::engines::ActiveEngine;
use crate::error::SearchError;
use crate::types::SearchResult;

use super::query::optimize_query;
use super::scoring::rank;

/// Finds learning pages for a category through one configured engine.
///
/// The engine is chosen once at construction. The service holds no mutable
/// state, so a single instance can be shared (e.g. behind an `Arc`) by
/// concurrent request handlers.
pub struct SearchService<E = ActiveEngine> {
    engine: E,
    config: SearchConfig,
}

impl SearchService<ActiveEngine> {
    /// Build a service for the engine named in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `config` is invalid or the engine
    /// adapter cannot be built.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        let engine = ActiveEngine::from_config(&config)?;
        tracing::debug!(engine = %config.engine, "search service ready");
        Ok(Self { engine, config })
    }
}

impl<E: SearchEngineTrait> SearchService<E> {
    /// Run the service over an already-built engine.
    pub fn with_engine(engine: E, config: SearchConfig) -> Self {
        Self { engine, config }
    }

    /// The engine every call is dispatched to.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Settings the service was built with.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search for pages about `query` within `category_context`.
    ///
    /// # Pipeline
    ///
    /// 1. Append the category's learning hint to the query
    /// 2. Ask the engine for up to `limit` results
    /// 3. Score titles against the original query and context, dropping
    ///    zero scores
    /// 4. Sort by score (descending, stable) and truncate to `limit`
    ///
    /// Engine failures surface as an empty list, never as an error.
    pub async fn search_pages(
        &self,
        query: &str,
        category_context: &str,
        limit: usize,
    ) -> Vec<SearchResult> {
        if limit == 0 {
            return Vec::new();
        }

        let optimized = optimize_query(query, category_context);
        tracing::trace!(query, optimized = %optimized, "searching pages");

        let results = self.engine.search(&optimized, limit).await;
        let fetched = results.len();

        let mut ranked = rank(results, query, category_context);
        ranked.truncate(limit);

        tracing::debug!(
            engine = %self.engine.engine_type(),
            fetched,
            kept = ranked.len(),
            "search pages finished"
        );
        ranked
    }

    /// [`Self::search_pages`] with the configured `max_results` as limit.
    pub async fn search_pages_default(
        &self,
        query: &str,
        category_context: &str,
    ) -> Vec<SearchResult> {
        self.search_pages(query, category_context, self.config.max_results)
            .await
    }

    /// Autocomplete suggestions from the engine, unchanged.
    pub async fn get_suggestions(&self, query: &str) -> Vec<String> {
        self.engine.get_suggestions(query).await
    }
}
