//! # shelf-search
//!
//! Finds learning pages for a knowledge category by scraping a public
//! search engine. No API keys and no external services are needed.
//!
//! ## Design
//!
//! - One engine per service (Baidu, DuckDuckGo, Bing, or an offline mock),
//!   chosen once from [`SearchConfig`]
//! - The user's query is biased towards tutorials and documentation for the
//!   category before it is sent
//! - Result pages go through an ordered cascade of extraction strategies,
//!   from the engine's known layout down to loose link scans
//! - Links to social, shopping and portal sites are filtered out
//! - Results are re-ranked by how well their titles match the query and
//!   category; irrelevant ones are dropped
//! - Graceful degradation: network errors, timeouts and markup changes give
//!   an empty list, never an error
//!
//! ## Security
//!
//! - No API keys or secrets to leak
//! - No network listeners; this is a library, not a server
//! - Search queries are logged only at trace level

pub mod config;
pub mod engine;
pub mod engines;
pub mod error;
pub mod extract;
pub mod filter;
pub mod http;
pub mod orchestrator;
pub mod suggest;
pub mod types;

pub use config::SearchConfig;
pub use engine::SearchEngineTrait;
pub use engines::{ActiveEngine, MockEngine, ScrapedEngine};
pub use error::{Result, SearchError};
pub use filter::DomainFilter;
pub use orchestrator::{annotate_existing, PageLookup, SearchService};
pub use types::{SearchEngine, SearchResult};

/// Search for learning pages about `query` in `category_context`.
///
/// Builds a one-off [`SearchService`] from `config` and returns up to
/// `config.max_results` ranked results. Long-running callers should build
/// the service once and reuse it instead.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if `config` is invalid. Engine failures
/// are logged and yield an empty list.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> shelf_search::Result<()> {
/// let config = shelf_search::SearchConfig::default();
/// let results = shelf_search::search_pages("装饰器", "Python", &config).await?;
/// for result in &results {
///     println!("{}: {}", result.title, result.url);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search_pages(
    query: &str,
    category_context: &str,
    config: &SearchConfig,
) -> Result<Vec<SearchResult>> {
    let service = SearchService::new(config.clone())?;
    Ok(service.search_pages_default(query, category_context).await)
}

/// Autocomplete suggestions for `query` from the configured engine.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if `config` is invalid.
pub async fn get_suggestions(query: &str, config: &SearchConfig) -> Result<Vec<String>> {
    let service = SearchService::new(config.clone())?;
    Ok(service.get_suggestions(query).await)
}
