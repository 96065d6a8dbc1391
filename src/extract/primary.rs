use scraper::{Html, Selector};

use super::{
    element_text, first_text, selector, Candidate, ExtractContext, ExtractorStrategy,
    EXTRACTION_CAP,
};
use crate::error::SearchError;

/// The engine's current, known result layout.
///
/// Each `container` holds one organic result; the title link is the first
/// `title_link` match inside it and the abstract the first `snippet` match.
pub struct PrimaryStrategy {
    container: Selector,
    title_link: Selector,
    snippet: Selector,
}

impl PrimaryStrategy {
    /// Compile the three selectors; any invalid one is a config error.
    pub fn new(container: &str, title_link: &str, snippet: &str) -> Result<Self, SearchError> {
        Ok(Self {
            container: selector(container)?,
            title_link: selector(title_link)?,
            snippet: selector(snippet)?,
        })
    }
}

impl ExtractorStrategy for PrimaryStrategy {
    fn name(&self) -> &'static str {
        "primary"
    }

    fn extract(&self, document: &Html, ctx: &ExtractContext<'_>) -> Vec<Candidate> {
        let mut candidates = Vec::new();

        for container in document.select(&self.container).take(EXTRACTION_CAP) {
            let Some(link) = container.select(&self.title_link).next() else {
                continue;
            };
            let Some(href) = link.value().attr("href") else {
                continue;
            };

            let title = element_text(link);
            let Some(url) = ctx.accept(&title, href) else {
                continue;
            };

            candidates.push(Candidate {
                title,
                url,
                snippet: first_text(container, &self.snippet),
            });
        }

        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::direct_href;
    use crate::filter::DomainFilter;

    const BAIDU_LIKE_HTML: &str = r#"<html><body>
<div class="result c-container">
  <h3 class="t"><a href="https://docs.python.org/3/tutorial/">Python 教程 - 官方文档</a></h3>
  <div class="c-abstract">Python 官方教程，适合初学者。</div>
</div>
<div class="result c-container">
  <h3 class="t"><a href="https://www.youtube.com/watch?v=abc">Python video</a></h3>
  <div class="c-abstract">blocked</div>
</div>
<div class="result c-container">
  <h3 class="t"><a href="/relative">Relative link</a></h3>
</div>
<div class="result c-container">
  <h3 class="t">No anchor here</h3>
</div>
<div class="result c-container">
  <h3 class="t"><a href="https://www.runoob.com/python3/">Python3 教程</a></h3>
</div>
</body></html>"#;

    fn strategy() -> PrimaryStrategy {
        PrimaryStrategy::new("div.result", "h3 a", "div.c-abstract").expect("valid selectors")
    }

    #[test]
    fn extracts_title_url_and_abstract() {
        let filter = DomainFilter::for_engine(&[]);
        let ctx = ExtractContext {
            query: "python",
            filter: &filter,
            resolve_href: direct_href,
        };
        let document = Html::parse_document(BAIDU_LIKE_HTML);
        let candidates = strategy().extract(&document, &ctx);

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].title, "Python 教程 - 官方文档");
        assert_eq!(candidates[0].url, "https://docs.python.org/3/tutorial/");
        assert_eq!(
            candidates[0].snippet.as_deref(),
            Some("Python 官方教程，适合初学者。")
        );
        assert_eq!(candidates[1].url, "https://www.runoob.com/python3/");
        assert!(candidates[1].snippet.is_none());
    }

    #[test]
    fn unmatched_layout_yields_nothing() {
        let filter = DomainFilter::new([]);
        let ctx = ExtractContext {
            query: "python",
            filter: &filter,
            resolve_href: direct_href,
        };
        let document = Html::parse_document("<html><body><p>captcha</p></body></html>");
        assert!(strategy().extract(&document, &ctx).is_empty());
    }

    #[test]
    fn only_first_ten_containers_are_read() {
        let mut html = String::from("<html><body>");
        for i in 0..25 {
            html.push_str(&format!(
                r#"<div class="result"><h3><a href="https://s{i}.org/">Result {i}</a></h3></div>"#
            ));
        }
        html.push_str("</body></html>");

        let filter = DomainFilter::new([]);
        let ctx = ExtractContext {
            query: "q",
            filter: &filter,
            resolve_href: direct_href,
        };
        let candidates = strategy().extract(&Html::parse_document(&html), &ctx);
        assert_eq!(candidates.len(), EXTRACTION_CAP);
    }
}
