//! DuckDuckGo: scraper-friendly fallback engine.
//!
//! Uses the HTML-only version at `https://html.duckduckgo.com/html/`,
//! which requires no JavaScript and is tolerant of automated requests.
//! Result links are wrapped in a DuckDuckGo redirect and must be unwrapped
//! before validation.

use serde_json::Value;
use url::Url;

use crate::engine::{
    EngineConfig, SuggestEndpoint, ACCEPT_HTML, ACCEPT_LANGUAGE_ZH, CHROME_MAC_UA,
};
use crate::error::SearchError;
use crate::extract::{ExtractorStrategy, GenericStrategy, LooseLinkStrategy, PrimaryStrategy};
use crate::suggest::{strings_at, SuggestFormat};
use crate::types::SearchEngine;

/// Organic results; sponsored entries carry `result--ad`.
const RESULT_CONTAINER: &str = concat!(
    ".result.results_links.results_links_deep:not(.result--ad), ",
    ".web-result:not(.result--ad)"
);

pub static CONFIG: EngineConfig = EngineConfig {
    engine: SearchEngine::DuckDuckGo,
    search_url: "https://html.duckduckgo.com/html/",
    query_param: "q",
    count_param: None,
    extra_params: &[("kl", "cn-zh")],
    user_agent: CHROME_MAC_UA,
    headers: &[
        ("accept", ACCEPT_HTML),
        ("accept-language", ACCEPT_LANGUAGE_ZH),
    ],
    suggest: SuggestEndpoint {
        url: "https://duckduckgo.com/ac/",
        query_param: "q",
        extra_params: &[("kl", "cn-zh")],
        format: SuggestFormat::Jsonp {
            param: "callback",
            callback: "callback",
        },
        extract: suggestions,
    },
    extra_blocked_domains: &[],
    resolve_href,
    strategies,
};

fn strategies() -> Result<Vec<Box<dyn ExtractorStrategy>>, SearchError> {
    Ok(vec![
        Box::new(PrimaryStrategy::new(RESULT_CONTAINER, "a.result__a", ".result__snippet")?),
        Box::new(GenericStrategy::new(&[
            r#"div[class*="web-result"]"#,
            r#"div[class*="result"]"#,
        ])?),
        Box::new(LooseLinkStrategy::new()?),
    ])
}

/// Extract the target URL from DuckDuckGo's redirect wrapper.
///
/// DDG wraps URLs like: `//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com&rut=...`
/// We parse out the `uddg` query parameter and URL-decode it. Direct links
/// pass through unchanged.
fn resolve_href(href: &str) -> Option<String> {
    let full_href = if href.starts_with("//") {
        format!("https:{href}")
    } else {
        href.to_string()
    };

    let parsed = Url::parse(&full_href).ok()?;

    let is_redirect = parsed
        .host_str()
        .is_some_and(|host| host == "duckduckgo.com" || host.ends_with(".duckduckgo.com"))
        && parsed.path().starts_with("/l/");
    if is_redirect {
        parsed
            .query_pairs()
            .find(|(key, _)| key == "uddg")
            .map(|(_, value)| value.into_owned())
    } else {
        Some(full_href)
    }
}

/// `[{"phrase": "..."}, ...]`
fn suggestions(value: &Value) -> Vec<String> {
    strings_at(Some(value), "phrase")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use crate::engine::SearchEngineTrait;
    use crate::engines::ScrapedEngine;

    fn engine() -> ScrapedEngine {
        ScrapedEngine::new(&CONFIG, &SearchConfig::default()).expect("duckduckgo engine builds")
    }

    const MOCK_DDG_HTML: &str = r#"<!DOCTYPE html>
<html>
<body>
<div class="result results_links results_links_deep web-result">
    <h2 class="result__title">
    <a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fwww.rust-lang.org%2F&amp;rut=abc123">
        Rust Programming Language
    </a>
    </h2>
    <a class="result__snippet" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fwww.rust-lang.org%2F">
        A language empowering everyone to build reliable and efficient software.
    </a>
</div>
<div class="result results_links results_links_deep result--ad">
    <a class="result__a" href="https://ads.example.com/">Sponsored Rust course (Ad)</a>
</div>
<div class="result results_links results_links_deep web-result">
    <a class="result__a" href="https://doc.rust-lang.org/book/">
        The Rust Programming Language Book
    </a>
    <div class="result__snippet">
        An introductory book about Rust.
    </div>
</div>
<div class="result results_links results_links_deep web-result">
    <a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fwww.youtube.com%2Fwatch%3Fv%3Drust&amp;rut=def456">
        Rust in 100 seconds
    </a>
</div>
</body>
</html>"#;

    #[test]
    fn resolve_href_unwraps_redirect() {
        let href = "//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com%2Fpage&rut=abc";
        assert_eq!(
            resolve_href(href),
            Some("https://example.com/page".to_string())
        );
    }

    #[test]
    fn resolve_href_passes_direct_link() {
        let href = "https://example.com/direct";
        assert_eq!(
            resolve_href(href),
            Some("https://example.com/direct".to_string())
        );
    }

    #[test]
    fn resolve_href_rejects_relative() {
        assert!(resolve_href("not-a-url").is_none());
    }

    #[test]
    fn resolve_href_redirect_without_target_is_dropped() {
        assert!(resolve_href("//duckduckgo.com/l/?rut=abc").is_none());
    }

    #[test]
    fn parse_mock_html_returns_results() {
        let results = engine().parse_results(MOCK_DDG_HTML, "rust");
        assert_eq!(results.len(), 2);

        assert_eq!(results[0].title, "Rust Programming Language");
        assert_eq!(results[0].url, "https://www.rust-lang.org/");
        assert!(results[0].snippet.contains("reliable and efficient"));
        assert_eq!(results[0].source, SearchEngine::DuckDuckGo);

        assert_eq!(results[1].url, "https://doc.rust-lang.org/book/");
        assert_eq!(results[1].snippet, "An introductory book about Rust.");
    }

    #[test]
    fn parse_excludes_ads_and_blocked_targets() {
        let results = engine().parse_results(MOCK_DDG_HTML, "rust");
        for r in &results {
            assert!(
                !r.title.contains("(Ad)"),
                "ad result should be excluded: {}",
                r.title
            );
            assert!(!r.url.contains("youtube.com"));
            assert!(
                !r.url.contains("duckduckgo.com/l/"),
                "URL still wrapped: {}",
                r.url
            );
        }
    }

    #[test]
    fn parse_empty_html_returns_empty() {
        assert!(engine()
            .parse_results("<html><body></body></html>", "rust")
            .is_empty());
    }

    #[test]
    fn parse_jsonp_suggestions() {
        let body = r#"callback([{"phrase":"rust 教程"},{"phrase":"rust book"},{"other":"x"}]);"#;
        let parsed = engine().parse_suggestions(body).expect("should parse");
        assert_eq!(parsed, vec!["rust 教程", "rust book"]);
    }

    #[test]
    fn engine_type_is_duckduckgo() {
        assert_eq!(engine().engine_type(), SearchEngine::DuckDuckGo);
    }

    #[tokio::test]
    #[ignore] // live network; run with `cargo test -- --ignored`
    async fn live_duckduckgo_search() {
        let results = engine().search("rust programming", 5).await;
        assert!(results.len() <= 5);
        for r in &results {
            assert!(r.url.starts_with("http"));
            assert!(!r.title.is_empty());
        }
    }
}
