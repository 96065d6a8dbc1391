//! Search engine implementations.
//!
//! Scraped engines are declared as static [`crate::engine::EngineConfig`]
//! values and share one adapter, [`ScrapedEngine`]. [`MockEngine`] serves
//! canned results offline. [`ActiveEngine`] is the single backend a service
//! runs with, chosen once from [`SearchConfig::engine`].

pub mod baidu;
pub mod bing;
pub mod duckduckgo;
pub mod mock;
pub mod scraped;

pub use mock::MockEngine;
pub use scraped::ScrapedEngine;

use crate::config::SearchConfig;
use crate::engine::{EngineConfig, SearchEngineTrait};
use crate::error::SearchError;
use crate::types::{SearchEngine, SearchResult};

/// Static description of a scraped engine, or `None` for [`SearchEngine::Mock`].
pub fn engine_config(engine: SearchEngine) -> Option<&'static EngineConfig> {
    match engine {
        SearchEngine::Mock => None,
        SearchEngine::Baidu => Some(&baidu::CONFIG),
        SearchEngine::DuckDuckGo => Some(&duckduckgo::CONFIG),
        SearchEngine::Bing => Some(&bing::CONFIG),
    }
}

/// The backend selected for a service.
pub enum ActiveEngine {
    Mock(MockEngine),
    Scraped(ScrapedEngine),
}

impl ActiveEngine {
    /// Build the backend named by `config.engine`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the scraped adapter cannot be built.
    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        match engine_config(config.engine) {
            None => Ok(Self::Mock(MockEngine::new())),
            Some(engine) => Ok(Self::Scraped(ScrapedEngine::new(engine, config)?)),
        }
    }
}

impl From<MockEngine> for ActiveEngine {
    fn from(engine: MockEngine) -> Self {
        Self::Mock(engine)
    }
}

impl From<ScrapedEngine> for ActiveEngine {
    fn from(engine: ScrapedEngine) -> Self {
        Self::Scraped(engine)
    }
}

impl SearchEngineTrait for ActiveEngine {
    async fn search(&self, query: &str, limit: usize) -> Vec<SearchResult> {
        match self {
            Self::Mock(engine) => engine.search(query, limit).await,
            Self::Scraped(engine) => engine.search(query, limit).await,
        }
    }

    async fn get_suggestions(&self, query: &str) -> Vec<String> {
        match self {
            Self::Mock(engine) => engine.get_suggestions(query).await,
            Self::Scraped(engine) => engine.get_suggestions(query).await,
        }
    }

    fn engine_type(&self) -> SearchEngine {
        match self {
            Self::Mock(engine) => engine.engine_type(),
            Self::Scraped(engine) => engine.engine_type(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_engine_is_constructible() {
        for &engine in SearchEngine::all() {
            let config = SearchConfig {
                engine,
                ..Default::default()
            };
            let active = ActiveEngine::from_config(&config).expect("engine builds");
            assert_eq!(active.engine_type(), engine);
        }
    }

    #[test]
    fn engine_config_matches_variant() {
        assert!(engine_config(SearchEngine::Mock).is_none());
        for engine in [
            SearchEngine::Baidu,
            SearchEngine::DuckDuckGo,
            SearchEngine::Bing,
        ] {
            let config = engine_config(engine).expect("scraped engine has a config");
            assert_eq!(config.engine, engine);
        }
    }

    #[test]
    fn is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ActiveEngine>();
    }

    #[tokio::test]
    async fn mock_dispatch() {
        let active = ActiveEngine::from(MockEngine::new());
        assert_eq!(active.search("python", 10).await.len(), 3);
        assert_eq!(active.get_suggestions("zz").await.len(), 4);
    }
}
