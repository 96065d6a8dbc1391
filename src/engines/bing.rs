//! Bing (cn.bing.com), the default engine.
//!
//! The Chinese mirror serves a stable `li.b_algo` layout and plain JSON
//! autocomplete, which makes it the most dependable live backend.

use serde_json::Value;

use crate::engine::{
    EngineConfig, SuggestEndpoint, ACCEPT_HTML, ACCEPT_LANGUAGE_ZH, CHROME_WINDOWS_UA,
};
use crate::error::SearchError;
use crate::extract::{
    direct_href, ExtractorStrategy, GenericStrategy, LooseLinkStrategy, PrimaryStrategy,
};
use crate::suggest::{strings_at, SuggestFormat};
use crate::types::SearchEngine;

pub static CONFIG: EngineConfig = EngineConfig {
    engine: SearchEngine::Bing,
    search_url: "https://cn.bing.com/search",
    query_param: "q",
    count_param: None,
    // ensearch=0 selects the domestic (Chinese) index
    extra_params: &[("ensearch", "0")],
    user_agent: CHROME_WINDOWS_UA,
    headers: &[
        ("accept", ACCEPT_HTML),
        ("accept-language", ACCEPT_LANGUAGE_ZH),
    ],
    suggest: SuggestEndpoint {
        url: "https://cn.bing.com/AS/Suggestions",
        query_param: "qry",
        extra_params: &[("cvid", "1"), ("IG", "1"), ("IID", "1"), ("type", "cb")],
        format: SuggestFormat::Json,
        extract: suggestions,
    },
    extra_blocked_domains: &[],
    resolve_href: direct_href,
    strategies,
};

fn strategies() -> Result<Vec<Box<dyn ExtractorStrategy>>, SearchError> {
    Ok(vec![
        Box::new(PrimaryStrategy::new("li.b_algo", "h2 a", ".b_caption p, .b_lineclamp2, p")?),
        Box::new(GenericStrategy::new(&[
            r#"li[class*="b_algo"]"#,
            r#"li[class*="result"]"#,
            r#"div[class*="result"]"#,
        ])?),
        Box::new(LooseLinkStrategy::new()?),
    ])
}

/// `{"Suggests": [{"Txt": "..."}, ...]}`
fn suggestions(value: &Value) -> Vec<String> {
    strings_at(value.get("Suggests"), "Txt")
}
