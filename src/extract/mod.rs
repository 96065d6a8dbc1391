//! HTML result extraction: an ordered cascade of selector strategies.
//!
//! Result-page markup drifts, so each engine carries several ways of finding
//! results. The [`Extractor`] tries its strategies in order and keeps the
//! output of the first one that finds anything. Strategies never fail as a
//! whole: a container that does not yield a usable link is skipped.

mod generic;
mod links;
mod primary;

pub use generic::GenericStrategy;
pub use links::{BlockLinkStrategy, ContainerLinkStrategy, LooseLinkStrategy};
pub use primary::PrimaryStrategy;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::SearchError;
use crate::filter::DomainFilter;
use crate::types::{SearchEngine, SearchResult};

/// Hard cap on results produced by one extraction call.
pub const EXTRACTION_CAP: usize = 10;

/// Inclusive bounds, in characters, for anchor text accepted by link scans.
pub(crate) const LINK_TEXT_CHARS: std::ops::RangeInclusive<usize> = 10..=200;

/// One parsing algorithm for turning a result page into candidates.
pub trait ExtractorStrategy: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Extract at most [`EXTRACTION_CAP`] candidates, in document order.
    fn extract(&self, document: &Html, ctx: &ExtractContext<'_>) -> Vec<Candidate>;
}

/// A result found by a strategy, before abstract normalisation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub title: String,
    pub url: String,
    pub snippet: Option<String>,
}

/// Per-call inputs shared by every strategy.
pub struct ExtractContext<'a> {
    /// The query sent to the engine; used for loose matching and the
    /// synthesised default abstract.
    pub query: &'a str,
    pub filter: &'a DomainFilter,
    /// Engine-specific href rewriting, e.g. unwrapping redirect links.
    pub resolve_href: fn(&str) -> Option<String>,
}

impl ExtractContext<'_> {
    /// Validate a title/href pair, returning the resolved URL when the pair
    /// is acceptable: non-empty title, absolute http(s) URL, allowed domain.
    ///
    /// The returned URL is normalised, so its scheme and host are lowercase.
    pub fn accept(&self, title: &str, href: &str) -> Option<String> {
        if title.trim().is_empty() {
            return None;
        }
        let resolved = (self.resolve_href)(href.trim())?;
        let url = http_url(&resolved)?;
        if self.filter.is_disallowed(&url) {
            return None;
        }
        Some(url)
    }

    fn default_abstract(&self) -> String {
        format!("About {}", self.query)
    }
}

/// Identity href resolver for engines that link to results directly.
pub fn direct_href(href: &str) -> Option<String> {
    Some(href.to_string())
}

/// Runs a strategy cascade and converts the winning candidates to results.
pub struct Extractor {
    engine: SearchEngine,
    strategies: Vec<Box<dyn ExtractorStrategy>>,
}

impl Extractor {
    /// Build an extractor tagging its results with `engine`. Strategies run
    /// in the given order.
    pub fn new(engine: SearchEngine, strategies: Vec<Box<dyn ExtractorStrategy>>) -> Self {
        Self { engine, strategies }
    }

    /// Names of the configured strategies, in cascade order.
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Parse `html` and return the first non-empty strategy output.
    pub fn extract(&self, html: &str, ctx: &ExtractContext<'_>) -> Vec<SearchResult> {
        let document = Html::parse_document(html);

        for strategy in &self.strategies {
            let candidates = strategy.extract(&document, ctx);
            if candidates.is_empty() {
                tracing::trace!(
                    engine = %self.engine,
                    strategy = strategy.name(),
                    "strategy found nothing"
                );
                continue;
            }

            tracing::debug!(
                engine = %self.engine,
                strategy = strategy.name(),
                count = candidates.len(),
                "results extracted"
            );
            return candidates
                .into_iter()
                .take(EXTRACTION_CAP)
                .map(|c| {
                    let snippet = c.snippet.unwrap_or_else(|| ctx.default_abstract());
                    SearchResult::new(c.title, c.url, &snippet, self.engine)
                })
                .collect();
        }

        tracing::debug!(engine = %self.engine, "no extraction strategy matched");
        Vec::new()
    }
}

/// Parse `raw` as an absolute http(s) URL with a host, in normalised form.
pub(crate) fn http_url(raw: &str) -> Option<String> {
    let parsed = Url::parse(raw).ok()?;
    let is_http = matches!(parsed.scheme(), "http" | "https");
    (is_http && parsed.has_host()).then(|| parsed.into())
}

pub(crate) fn selector(css: &str) -> Result<Selector, SearchError> {
    Selector::parse(css)
        .map_err(|e| SearchError::Config(format!("invalid selector `{css}`: {e:?}")))
}

/// Visible text with whitespace runs collapsed to single spaces.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text of the first element matching `sel` under `scope`, if non-empty.
pub(crate) fn first_text(scope: ElementRef<'_>, sel: &Selector) -> Option<String> {
    scope
        .select(sel)
        .map(element_text)
        .find(|text| !text.is_empty())
}
