//! Baidu, the primary engine for Chinese-language results.
//!
//! Baidu reshuffles its result markup often, so this engine runs the full
//! extraction cascade: the current `div.result` layout, historical container
//! patterns, then progressively looser link scans.

use serde_json::Value;

use crate::engine::{
    EngineConfig, SuggestEndpoint, ACCEPT_HTML, ACCEPT_LANGUAGE_ZH, CHROME_WINDOWS_UA,
};
use crate::error::SearchError;
use crate::extract::{
    direct_href, BlockLinkStrategy, ContainerLinkStrategy, ExtractorStrategy, GenericStrategy,
    LooseLinkStrategy, PrimaryStrategy,
};
use crate::suggest::{strings_at, SuggestFormat};
use crate::types::SearchEngine;

/// Container class patterns used by past Baidu layouts, best first.
const CONTAINER_PATTERNS: &[&str] = &[
    r#"div[class*="result"]"#,
    r#"div[class*="c-container"]"#,
    r#"div[class*="result-op"]"#,
    r#"div[class*="c-result"]"#,
    r#"div[class*="result-item"]"#,
    r#"div[class*="search-result"]"#,
];

pub static CONFIG: EngineConfig = EngineConfig {
    engine: SearchEngine::Baidu,
    search_url: "https://www.baidu.com/s",
    query_param: "wd",
    count_param: Some("rn"),
    extra_params: &[
        ("ie", "utf-8"),
        ("tn", "baiduhome_pg"),
        ("rsv_idx", "2"),
        ("rsv_crq", "1"),
        ("rsv_enter", "1"),
    ],
    user_agent: CHROME_WINDOWS_UA,
    headers: &[
        ("accept", ACCEPT_HTML),
        ("accept-language", ACCEPT_LANGUAGE_ZH),
        ("upgrade-insecure-requests", "1"),
        ("sec-fetch-dest", "document"),
        ("sec-fetch-mode", "navigate"),
        ("sec-fetch-site", "none"),
        ("sec-fetch-user", "?1"),
        ("cache-control", "max-age=0"),
    ],
    suggest: SuggestEndpoint {
        url: "https://www.baidu.com/sugrec",
        query_param: "wd",
        extra_params: &[("prod", "pc")],
        format: SuggestFormat::Jsonp {
            param: "cb",
            callback: "callback",
        },
        extract: suggestions,
    },
    extra_blocked_domains: &["zhihu.com"],
    resolve_href: direct_href,
    strategies,
};

fn strategies() -> Result<Vec<Box<dyn ExtractorStrategy>>, SearchError> {
    Ok(vec![
        Box::new(PrimaryStrategy::new("div.result", "h3 a", "div.c-abstract")?),
        Box::new(GenericStrategy::new(CONTAINER_PATTERNS)?),
        Box::new(BlockLinkStrategy::new()?),
        Box::new(ContainerLinkStrategy::new()?),
        Box::new(LooseLinkStrategy::new()?),
    ])
}

/// `{"g": [{"q": "..."}, ...]}`
fn suggestions(value: &Value) -> Vec<String> {
    strings_at(value.get("g"), "q")
}
