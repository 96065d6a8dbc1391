//! Autocomplete response parsing.
//!
//! Engines answer either with plain JSON or with JSON wrapped in a named
//! callback (JSONP). The callback name is per-engine configuration.

use regex::Regex;
use serde_json::Value;

use crate::error::SearchError;

/// Maximum suggestions returned per lookup.
pub const MAX_SUGGESTIONS: usize = 5;

/// Wire format of an autocomplete response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestFormat {
    /// The body is the JSON document.
    Json,
    /// The body is `callback(<json>)`; `param` names the query-string
    /// parameter that sets the callback name.
    Jsonp {
        param: &'static str,
        callback: &'static str,
    },
}

/// Decodes an engine's autocomplete responses.
pub struct SuggestParser {
    jsonp: Option<Regex>,
    extract: fn(&Value) -> Vec<String>,
}

impl SuggestParser {
    /// Build a parser for `format` that hands the decoded payload to
    /// `extract`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the JSONP callback name cannot be
    /// compiled into a pattern.
    pub fn new(
        format: SuggestFormat,
        extract: fn(&Value) -> Vec<String>,
    ) -> Result<Self, SearchError> {
        let jsonp = match format {
            SuggestFormat::Json => None,
            SuggestFormat::Jsonp { callback, .. } => {
                let pattern = format!(r"(?s){}\((.*)\)", regex::escape(callback));
                let re = Regex::new(&pattern).map_err(|e| {
                    SearchError::Config(format!("invalid JSONP callback `{callback}`: {e}"))
                })?;
                Some(re)
            }
        };
        Ok(Self { jsonp, extract })
    }

    /// Parse a response body into at most [`MAX_SUGGESTIONS`] suggestions.
    pub fn parse(&self, body: &str) -> Result<Vec<String>, SearchError> {
        let payload = match &self.jsonp {
            Some(re) => re
                .captures(body)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str())
                .ok_or_else(|| {
                    SearchError::Parse("no JSONP payload in suggestion response".into())
                })?,
            None => body,
        };

        let value: Value = serde_json::from_str(payload)
            .map_err(|e| SearchError::Parse(format!("invalid suggestion JSON: {e}")))?;

        let mut suggestions = (self.extract)(&value);
        suggestions.truncate(MAX_SUGGESTIONS);
        Ok(suggestions)
    }
}

/// Non-empty string values of `key` across the objects of `items`.
///
/// Missing arrays, non-object items and non-string values are skipped.
pub fn strings_at(items: Option<&Value>, key: &str) -> Vec<String> {
    items
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|item| item.get(key)?.as_str())
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
        .collect()
}
