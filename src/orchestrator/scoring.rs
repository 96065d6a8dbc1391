//! Relevance scoring for results returned by the engine.
//!
//! ```text
//! score = 3 if the (non-empty) query appears in the title
//!       + 2 if the (non-empty) category context appears in the title
//!       + 1 if the title carries an educational marker
//! ```
//!
//! All comparisons are case-insensitive. Results scoring zero are dropped;
//! the rest are ordered by descending score, keeping engine order among
//! equal scores.

use crate::types::SearchResult;

const QUERY_WEIGHT: u32 = 3;
const CONTEXT_WEIGHT: u32 = 2;
const MARKER_WEIGHT: u32 = 1;

/// Title words that suggest learning material. Matched as lowercase
/// substrings.
pub const EDUCATIONAL_MARKERS: &[&str] = &[
    "教程",
    "文档",
    "学习",
    "指南",
    "手册",
    "参考",
    "api",
    "开发",
    "入门",
    "基础",
    "tutorial",
    "docs",
    "documentation",
    "guide",
    "manual",
    "reference",
    "development",
    "introduction",
    "basics",
];

/// Score one title against the original query and category context.
pub fn relevance_score(title: &str, query: &str, category_context: &str) -> u32 {
    let title = title.to_lowercase();
    let mut score = 0;

    if mentions(&title, query) {
        score += QUERY_WEIGHT;
    }
    if mentions(&title, category_context) {
        score += CONTEXT_WEIGHT;
    }
    let has_marker = EDUCATIONAL_MARKERS.iter().any(|m| title.contains(m));
    if has_marker {
        score += MARKER_WEIGHT;
    }

    score
}

/// Blank needles match nothing.
fn mentions(lowercase_title: &str, needle: &str) -> bool {
    let needle = needle.trim();
    !needle.is_empty() && lowercase_title.contains(&needle.to_lowercase())
}

/// Score, filter and order `results`.
///
/// Each kept result carries its score in `relevance_score`.
pub fn rank(
    results: Vec<SearchResult>,
    query: &str,
    category_context: &str,
) -> Vec<SearchResult> {
    let mut ranked: Vec<SearchResult> = results
        .into_iter()
        .filter_map(|mut result| {
            let score = relevance_score(&result.title, query, category_context);
            if score == 0 {
                tracing::trace!(title = %result.title, "discarding irrelevant result");
                return None;
            }
            result.relevance_score = Some(score);
            Some(result)
        })
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SearchEngine;

    fn make_result(title: &str) -> SearchResult {
        SearchResult::new(title, "https://example.org/", "", SearchEngine::Mock)
    }

    #[test]
    fn query_in_title_scores_three_or_more() {
        assert!(relevance_score("Python Tutorial", "Python", "") >= 3);
        assert_eq!(relevance_score("Python Tutorial", "Python", ""), 4);
    }

    #[test]
    fn unrelated_title_scores_zero() {
        assert_eq!(relevance_score("Random Page", "Python", ""), 0);
    }

    #[test]
    fn weights_add_up() {
        assert_eq!(relevance_score("Django 入门教程", "django", "Django"), 6);
        assert_eq!(relevance_score("Web 框架", "django", "web"), 2);
        assert_eq!(relevance_score("官方文档", "django", "web"), 1);
    }

    #[test]
    fn comparisons_ignore_case() {
        assert_eq!(relevance_score("RUST REFERENCE", "rust", "Reference"), 6);
    }

    #[test]
    fn empty_context_never_matches() {
        assert_eq!(relevance_score("Anything", "zzz", ""), 0);
        assert_eq!(relevance_score("Anything", "zzz", "   "), 0);
        assert_eq!(relevance_score("Anything", "", ""), 0);
    }

    #[test]
    fn rank_drops_zero_and_sorts_descending() {
        let results = vec![
            make_result("Random Page"),
            make_result("Python 入门"),
            make_result("Python Tutorial for Python developers"),
            make_result("官方文档"),
        ];
        let ranked = rank(results, "python", "");
        let titles: Vec<_> = ranked.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Python 入门",
                "Python Tutorial for Python developers",
                "官方文档",
            ]
        );
        assert_eq!(ranked[0].relevance_score, Some(4));
        assert_eq!(ranked[2].relevance_score, Some(1));
    }

    #[test]
    fn equal_scores_keep_engine_order() {
        let results = vec![
            make_result("python a"),
            make_result("python b"),
            make_result("python c"),
        ];
        let ranked = rank(results, "python", "");
        let titles: Vec<_> = ranked.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["python a", "python b", "python c"]);
    }
}
