//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] selects the single active engine and controls timeouts
//! and request identity. It is built once at startup, either in code or from
//! a TOML file, and handed to [`crate::SearchService::new`].

use std::path::Path;

use serde::Deserialize;

use crate::error::SearchError;
use crate::types::SearchEngine;

/// Configuration for the search service.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// The one engine used for every request. Fixed for the process lifetime.
    pub engine: SearchEngine,
    /// Default number of results when the caller does not pass a limit.
    pub max_results: usize,
    /// HTTP timeout for result-page requests, in seconds.
    pub search_timeout_seconds: u64,
    /// HTTP timeout for autocomplete requests, in seconds.
    pub suggest_timeout_seconds: u64,
    /// Custom User-Agent string. If `None`, each engine sends its own
    /// browser-like User-Agent.
    pub user_agent: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            engine: SearchEngine::Bing,
            max_results: 10,
            search_timeout_seconds: 15,
            suggest_timeout_seconds: 5,
            user_agent: None,
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `max_results` must be greater than 0
    /// - `search_timeout_seconds` must be greater than 0
    /// - `suggest_timeout_seconds` must be greater than 0
    /// - `user_agent`, when set, must not be blank
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_results == 0 {
            return Err(SearchError::Config(
                "max_results must be greater than 0".into(),
            ));
        }
        if self.search_timeout_seconds == 0 {
            return Err(SearchError::Config(
                "search_timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.suggest_timeout_seconds == 0 {
            return Err(SearchError::Config(
                "suggest_timeout_seconds must be greater than 0".into(),
            ));
        }
        if matches!(self.user_agent.as_deref(), Some(ua) if ua.trim().is_empty()) {
            return Err(SearchError::Config("user_agent must not be blank".into()));
        }
        Ok(())
    }

    /// Parse and validate a configuration from TOML text.
    ///
    /// Missing keys take their default values. An unknown `engine` name is
    /// reported as [`SearchError::Config`].
    pub fn from_toml_str(text: &str) -> Result<Self, SearchError> {
        let config: Self = toml::from_str(text)
            .map_err(|e| SearchError::Config(format!("invalid search config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML configuration file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, SearchError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            SearchError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }
}
