//! Last-resort strategies that scan raw anchors when no known layout matches.

use std::collections::HashSet;

use scraper::{Html, Selector};

use super::{
    element_text, first_text, selector, Candidate, ExtractContext, ExtractorStrategy,
    EXTRACTION_CAP, LINK_TEXT_CHARS,
};
use crate::error::SearchError;

const ANCHOR: &str = "a[href]";

/// Blocks scanned by [`BlockLinkStrategy`].
const BLOCK_SCAN: usize = 50;

/// Containers scanned by [`ContainerLinkStrategy`].
const CONTAINER_SCAN: usize = 20;

const BLOCK_SNIPPET: &[&str] = &[
    r#"div[class*="abstract"]"#,
    r#"div[class*="summary"]"#,
    r#"div[class*="desc"]"#,
    r#"div[class*="content"]"#,
    r#"p[class*="abstract"]"#,
    r#"p[class*="summary"]"#,
    r#"p[class*="desc"]"#,
    r#"p[class*="content"]"#,
    r#"span[class*="abstract"]"#,
    r#"span[class*="summary"]"#,
    r#"span[class*="desc"]"#,
    r#"span[class*="content"]"#,
];

const CONTAINER_SNIPPET: &[&str] = &[
    r#"div[class*="abstract"]"#,
    r#"div[class*="summary"]"#,
    r#"div[class*="desc"]"#,
    r#"p[class*="abstract"]"#,
    r#"p[class*="summary"]"#,
    r#"p[class*="desc"]"#,
];

const LINK_CONTAINERS: &[&str] = &[
    r#"div[class*="result"]"#,
    r#"div[class*="item"]"#,
    r#"li[class*="result"]"#,
    r#"li[class*="item"]"#,
];

fn link_text_in_range(title: &str) -> bool {
    LINK_TEXT_CHARS.contains(&title.chars().count())
}

/// Scans anchors inside the page's leading `div` blocks.
///
/// Accepts anchors whose text is 10 to 200 characters; the abstract comes from
/// a summary-like node inside the same block. A URL seen once is not
/// collected again from an enclosing block.
pub struct BlockLinkStrategy {
    block: Selector,
    anchor: Selector,
    snippet: Selector,
}

impl BlockLinkStrategy {
    /// Compile the block, anchor and abstract selectors.
    pub fn new() -> Result<Self, SearchError> {
        Ok(Self {
            block: selector("div")?,
            anchor: selector(ANCHOR)?,
            snippet: selector(&BLOCK_SNIPPET.join(", "))?,
        })
    }
}

impl ExtractorStrategy for BlockLinkStrategy {
    fn name(&self) -> &'static str {
        "block-links"
    }

    fn extract(&self, document: &Html, ctx: &ExtractContext<'_>) -> Vec<Candidate> {
        let mut candidates = Vec::new();
        let mut seen = HashSet::new();

        for block in document.select(&self.block).take(BLOCK_SCAN) {
            for link in block.select(&self.anchor) {
                let title = element_text(link);
                if !link_text_in_range(&title) {
                    continue;
                }
                let Some(href) = link.value().attr("href") else {
                    continue;
                };
                let Some(url) = ctx.accept(&title, href) else {
                    continue;
                };
                if !seen.insert(url.clone()) {
                    continue;
                }

                candidates.push(Candidate {
                    title,
                    url,
                    snippet: first_text(block, &self.snippet),
                });
                if candidates.len() >= EXTRACTION_CAP {
                    return candidates;
                }
            }
        }

        candidates
    }
}

/// Takes the first link of each result- or item-like `div`/`li` container.
pub struct ContainerLinkStrategy {
    container: Selector,
    anchor: Selector,
    snippet: Selector,
}

impl ContainerLinkStrategy {
    /// Titles must be longer than this many characters.
    const MIN_TITLE_CHARS: usize = 5;

    /// Compile the container, anchor and abstract selectors.
    pub fn new() -> Result<Self, SearchError> {
        Ok(Self {
            container: selector(&LINK_CONTAINERS.join(", "))?,
            anchor: selector(ANCHOR)?,
            snippet: selector(&CONTAINER_SNIPPET.join(", "))?,
        })
    }
}

impl ExtractorStrategy for ContainerLinkStrategy {
    fn name(&self) -> &'static str {
        "container-links"
    }

    fn extract(&self, document: &Html, ctx: &ExtractContext<'_>) -> Vec<Candidate> {
        let mut candidates = Vec::new();

        for container in document.select(&self.container).take(CONTAINER_SCAN) {
            let Some(link) = container.select(&self.anchor).next() else {
                continue;
            };
            let title = element_text(link);
            if title.chars().count() <= Self::MIN_TITLE_CHARS {
                continue;
            }
            let Some(href) = link.value().attr("href") else {
                continue;
            };
            let Some(url) = ctx.accept(&title, href) else {
                continue;
            };

            candidates.push(Candidate {
                title,
                url,
                snippet: first_text(container, &self.snippet),
            });
            if candidates.len() >= EXTRACTION_CAP {
                break;
            }
        }

        candidates
    }
}

/// Scans every anchor on the page, keeping those whose text mentions the
/// query (case-insensitive). The loosest strategy; abstracts are always
/// synthesised.
pub struct LooseLinkStrategy {
    anchor: Selector,
}

impl LooseLinkStrategy {
    /// Compile the page-wide anchor selector.
    pub fn new() -> Result<Self, SearchError> {
        Ok(Self {
            anchor: selector(ANCHOR)?,
        })
    }
}

impl ExtractorStrategy for LooseLinkStrategy {
    fn name(&self) -> &'static str {
        "loose-links"
    }

    fn extract(&self, document: &Html, ctx: &ExtractContext<'_>) -> Vec<Candidate> {
        let query = ctx.query.to_lowercase();
        let mut candidates = Vec::new();

        for link in document.select(&self.anchor) {
            let title = element_text(link);
            if !link_text_in_range(&title) || !title.to_lowercase().contains(&query) {
                continue;
            }
            let Some(href) = link.value().attr("href") else {
                continue;
            };
            let Some(url) = ctx.accept(&title, href) else {
                continue;
            };

            candidates.push(Candidate {
                title,
                url,
                snippet: None,
            });
            if candidates.len() >= EXTRACTION_CAP {
                break;
            }
        }

        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::direct_href;
    use crate::filter::DomainFilter;

    fn run(strategy: &dyn ExtractorStrategy, query: &str, html: &str) -> Vec<Candidate> {
        let filter = DomainFilter::for_engine(&[]);
        let ctx = ExtractContext {
            query,
            filter: &filter,
            resolve_href: direct_href,
        };
        strategy.extract(&Html::parse_document(html), &ctx)
    }

    const LINK_SOUP: &str = r#"<html><body>
<div id="wrapper">
  <div class="entry">
    <a href="https://www.rust-lang.org/learn">Learn Rust with the official guides</a>
    <span class="desc-text">Official learning resources.</span>
  </div>
  <div class="entry">
    <a href="https://short.org/">Short</a>
    <a href="/local/path">A local path that is long enough</a>
    <a href="https://www.baidu.com/more">More results on the engine itself</a>
  </div>
  <div class="entry">
    <a href="https://blog.example.org/post">Notes from a weekend writing Rust</a>
  </div>
</div>
</body></html>"#;

    #[test]
    fn block_links_respect_text_bounds_and_filter() {
        let strategy = BlockLinkStrategy::new().expect("valid");
        let candidates = run(&strategy, "anything", LINK_SOUP);

        let urls: Vec<_> = candidates.iter().map(|c| c.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://www.rust-lang.org/learn",
                "https://blog.example.org/post",
            ]
        );
    }

    #[test]
    fn block_links_take_abstract_from_block() {
        let strategy = BlockLinkStrategy::new().expect("valid");
        let candidates = run(&strategy, "anything", LINK_SOUP);
        assert_eq!(
            candidates[0].snippet.as_deref(),
            Some("Official learning resources.")
        );
    }

    #[test]
    fn block_links_reject_overlong_text() {
        let strategy = BlockLinkStrategy::new().expect("valid");
        let long = "x".repeat(201);
        let html = format!(r#"<div><a href="https://a.org/">{long}</a></div>"#);
        assert!(run(&strategy, "q", &html).is_empty());
    }

    #[test]
    fn container_links_use_first_anchor() {
        let strategy = ContainerLinkStrategy::new().expect("valid");
        let html = r#"<html><body><ul>
<li class="list-item">
  <a href="https://docs.docker.com/">Docker Docs</a>
  <a href="https://other.org/">Other link in same item</a>
  <p class="summary">Container platform docs.</p>
</li>
<li class="list-item"><a href="https://tiny.org/">Tiny</a></li>
<li class="plain"><a href="https://ignored.org/">Not a result container</a></li>
</ul></body></html>"#;
        let candidates = run(&strategy, "docker", html);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].url, "https://docs.docker.com/");
        assert_eq!(
            candidates[0].snippet.as_deref(),
            Some("Container platform docs.")
        );
    }

    #[test]
    fn loose_links_require_query_in_text() {
        let strategy = LooseLinkStrategy::new().expect("valid");
        let candidates = run(&strategy, "RUST", LINK_SOUP);
        assert_eq!(candidates.len(), 2);
        assert!(candidates
            .iter()
            .all(|c| c.title.to_lowercase().contains("rust")));
        assert!(candidates.iter().all(|c| c.snippet.is_none()));
    }

    #[test]
    fn loose_links_empty_when_query_absent() {
        let strategy = LooseLinkStrategy::new().expect("valid");
        assert!(run(&strategy, "kubernetes", LINK_SOUP).is_empty());
    }

    #[test]
    fn loose_links_are_capped() {
        let strategy = LooseLinkStrategy::new().expect("valid");
        let mut html = String::from("<html><body>");
        for i in 0..40 {
            html.push_str(&format!(
                r#"<a href="https://s{i}.org/">rust article number {i}</a>"#
            ));
        }
        html.push_str("</body></html>");
        assert_eq!(run(&strategy, "rust", &html).len(), EXTRACTION_CAP);
    }
}
