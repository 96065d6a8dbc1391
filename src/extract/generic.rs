use scraper::{ElementRef, Html, Selector};

use super::{
    element_text, first_text, selector, Candidate, ExtractContext, ExtractorStrategy,
    EXTRACTION_CAP,
};
use crate::error::SearchError;

/// Containers inspected per pattern.
const CONTAINER_SCAN: usize = 15;

/// Where a title link may sit inside a result container, most specific first.
const TITLE_LINKS: &[&str] = &[
    "h3 a",
    "h2 a",
    "h1 a",
    r#"a[class*="title"]"#,
    r#"a[class*="link"]"#,
];

const SNIPPETS: &[&str] = &[
    r#"div[class*="abstract"]"#,
    r#"div[class*="summary"]"#,
    r#"div[class*="desc"]"#,
    r#"div[class*="content"]"#,
    r#"p[class*="abstract"]"#,
    r#"p[class*="summary"]"#,
    r#"span[class*="abstract"]"#,
    r#"span[class*="summary"]"#,
];

/// Historical container class patterns, tried in rank order.
///
/// The first pattern whose containers produce at least one result wins;
/// later patterns are not consulted.
pub struct GenericStrategy {
    containers: Vec<Selector>,
    title_links: Vec<Selector>,
    snippets: Vec<Selector>,
}

impl GenericStrategy {
    /// Compile `container_patterns` in rank order alongside the shared
    /// title and abstract selectors.
    pub fn new(container_patterns: &[&str]) -> Result<Self, SearchError> {
        Ok(Self {
            containers: compile(container_patterns)?,
            title_links: compile(TITLE_LINKS)?,
            snippets: compile(SNIPPETS)?,
        })
    }

    fn extract_container(
        &self,
        container: ElementRef<'_>,
        ctx: &ExtractContext<'_>,
    ) -> Option<Candidate> {
        let link = self
            .title_links
            .iter()
            .find_map(|sel| container.select(sel).next())?;
        let title = element_text(link);
        let url = ctx.accept(&title, link.value().attr("href")?)?;

        let snippet = self
            .snippets
            .iter()
            .find_map(|sel| first_text(container, sel));

        Some(Candidate {
            title,
            url,
            snippet,
        })
    }
}

fn compile(patterns: &[&str]) -> Result<Vec<Selector>, SearchError> {
    patterns.iter().map(|css| selector(css)).collect()
}

impl ExtractorStrategy for GenericStrategy {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn extract(&self, document: &Html, ctx: &ExtractContext<'_>) -> Vec<Candidate> {
        for pattern in &self.containers {
            let mut candidates = Vec::new();

            for container in document.select(pattern).take(CONTAINER_SCAN) {
                if let Some(candidate) = self.extract_container(container, ctx) {
                    candidates.push(candidate);
                    if candidates.len() >= EXTRACTION_CAP {
                        break;
                    }
                }
            }

            if !candidates.is_empty() {
                return candidates;
            }
        }

        Vec::new()
    }
}
