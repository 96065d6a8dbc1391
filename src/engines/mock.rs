//! Offline engine with canned results, for demos and tests.

use url::form_urlencoded::byte_serialize;

use crate::engine::SearchEngineTrait;
use crate::types::{SearchEngine, SearchResult};

/// `(title, url, abstract)`
type Entry = (&'static str, &'static str, &'static str);

/// Curated results per keyword. Matching is a case-insensitive substring
/// test; the first keyword found in the query wins.
const RESULTS: &[(&str, &[Entry])] = &[
    (
        "python",
        &[
            (
                "Python官方教程 - 官方文档",
                "https://docs.python.org/zh-cn/3/tutorial/",
                "Python官方教程，包含Python基础语法、数据结构、模块等完整学习指南。",
            ),
            (
                "Python入门教程 - 菜鸟教程",
                "https://www.runoob.com/python3/python3-tutorial.html",
                "Python3教程，从基础语法到高级特性，适合初学者学习。",
            ),
            (
                "Python学习笔记 - 廖雪峰",
                "https://www.liaoxuefeng.com/wiki/1016959663602400",
                "廖雪峰的Python教程，深入浅出地讲解Python编程。",
            ),
        ],
    ),
    (
        "django",
        &[
            (
                "Django官方文档",
                "https://docs.djangoproject.com/zh-hans/4.2/",
                "Django官方文档，包含完整的Web开发框架指南。",
            ),
            (
                "Django教程 - 菜鸟教程",
                "https://www.runoob.com/django/django-tutorial.html",
                "Django Web框架教程，从安装到部署的完整指南。",
            ),
        ],
    ),
    (
        "javascript",
        &[
            (
                "JavaScript教程 - MDN",
                "https://developer.mozilla.org/zh-CN/docs/Web/JavaScript",
                "MDN JavaScript教程，权威的JavaScript学习资源。",
            ),
            (
                "JavaScript基础教程",
                "https://www.w3school.com.cn/js/",
                "W3School JavaScript教程，适合初学者的基础教程。",
            ),
        ],
    ),
    (
        "html",
        &[
            (
                "HTML教程 - MDN",
                "https://developer.mozilla.org/zh-CN/docs/Web/HTML",
                "MDN HTML教程，学习HTML标记语言的基础知识。",
            ),
            (
                "HTML5教程",
                "https://www.w3school.com.cn/html5/",
                "W3School HTML5教程，现代Web开发必备技能。",
            ),
        ],
    ),
    (
        "css",
        &[
            (
                "CSS教程 - MDN",
                "https://developer.mozilla.org/zh-CN/docs/Web/CSS",
                "MDN CSS教程，学习网页样式设计。",
            ),
            (
                "CSS3教程",
                "https://www.w3school.com.cn/css3/",
                "W3School CSS3教程，现代CSS技术指南。",
            ),
        ],
    ),
    (
        "sql",
        &[
            (
                "SQL教程 - W3School",
                "https://www.w3school.com.cn/sql/",
                "W3School SQL教程，数据库查询语言学习指南。",
            ),
            (
                "MySQL教程",
                "https://www.runoob.com/mysql/mysql-tutorial.html",
                "MySQL数据库教程，从基础到高级的完整指南。",
            ),
        ],
    ),
    (
        "git",
        &[
            (
                "Git教程 - 廖雪峰",
                "https://www.liaoxuefeng.com/wiki/896043488029600",
                "廖雪峰的Git教程，深入浅出地讲解版本控制。",
            ),
            (
                "Git官方文档",
                "https://git-scm.com/doc",
                "Git官方文档，最权威的Git使用指南。",
            ),
        ],
    ),
    (
        "docker",
        &[
            (
                "Docker官方文档",
                "https://docs.docker.com/",
                "Docker官方文档，容器化技术学习指南。",
            ),
            (
                "Docker教程",
                "https://www.runoob.com/docker/docker-tutorial.html",
                "Docker容器教程，从入门到实践的完整指南。",
            ),
        ],
    ),
];

const SUGGESTIONS: &[(&str, &[&str])] = &[
    (
        "python",
        &[
            "python教程",
            "python安装",
            "python基础",
            "python进阶",
            "python实战",
        ],
    ),
    (
        "django",
        &[
            "django教程",
            "django安装",
            "django模型",
            "django视图",
            "django模板",
        ],
    ),
    (
        "javascript",
        &[
            "javascript教程",
            "javascript基础",
            "javascript进阶",
            "javascript实战",
        ],
    ),
    (
        "html",
        &["html教程", "html基础", "html5教程", "html标签", "html表单"],
    ),
    (
        "css",
        &["css教程", "css基础", "css3教程", "css布局", "css动画"],
    ),
    (
        "sql",
        &["sql教程", "sql基础", "mysql教程", "sql查询", "sql优化"],
    ),
    (
        "git",
        &["git教程", "git基础", "git命令", "git分支", "git合并"],
    ),
    (
        "docker",
        &[
            "docker教程",
            "docker基础",
            "docker安装",
            "docker镜像",
            "docker容器",
        ],
    ),
];

/// Deterministic engine that never touches the network.
///
/// Known technology keywords map to curated tutorial links; anything else
/// gets three templated results that echo the query.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockEngine;

impl MockEngine {
    /// The engine is stateless; this exists for symmetry with the scraped
    /// adapters.
    pub fn new() -> Self {
        Self
    }

    fn lookup<T: ?Sized>(table: &[(&str, &'static T)], query: &str) -> Option<&'static T> {
        let query = query.to_lowercase();
        table
            .iter()
            .find(|(keyword, _)| query.contains(keyword))
            .map(|(_, value)| *value)
    }

    fn results(query: &str) -> Vec<SearchResult> {
        if let Some(entries) = Self::lookup(RESULTS, query) {
            return entries
                .iter()
                .map(|(title, url, snippet)| {
                    SearchResult::new(*title, *url, snippet, SearchEngine::Mock)
                })
                .collect();
        }

        let lowered = query.to_lowercase();
        let slug: String = byte_serialize(lowered.as_bytes()).collect();
        vec![
            SearchResult::new(
                format!("{query} 入门教程"),
                format!("https://example.com/tutorial/{slug}"),
                &format!("{query}入门教程，适合初学者学习。"),
                SearchEngine::Mock,
            ),
            SearchResult::new(
                format!("{query} 官方文档"),
                format!("https://docs.example.com/{slug}"),
                &format!("{query}官方文档，包含完整的API参考和使用指南。"),
                SearchEngine::Mock,
            ),
            SearchResult::new(
                format!("{query} 学习指南"),
                format!("https://learn.example.com/{slug}"),
                &format!("{query}学习指南，从基础到高级的完整学习路径。"),
                SearchEngine::Mock,
            ),
        ]
    }
}

impl SearchEngineTrait for MockEngine {
    async fn search(&self, query: &str, limit: usize) -> Vec<SearchResult> {
        tracing::trace!(query, "mock search");
        let mut results = Self::results(query);
        results.truncate(limit);
        results
    }

    async fn get_suggestions(&self, query: &str) -> Vec<String> {
        match Self::lookup(SUGGESTIONS, query) {
            Some(list) => list.iter().map(|s| s.to_string()).collect(),
            None => ["教程", "基础", "入门", "实战"]
                .iter()
                .map(|suffix| format!("{query}{suffix}"))
                .collect(),
        }
    }

    fn engine_type(&self) -> SearchEngine {
        SearchEngine::Mock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn search_is_deterministic() {
        let engine = MockEngine::new();
        let first = engine.search("python", 10).await;
        let _ = engine.search("docker", 10).await;
        let second = engine.search("python", 10).await;
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
        assert!(first.iter().all(|r| r.source == SearchEngine::Mock));
    }

    #[tokio::test]
    async fn keyword_match_is_case_insensitive_substring() {
        let results = MockEngine.search("Learn DJANGO fast", 10).await;
        assert_eq!(results.len(), 2);
        assert_eq!(
            results[0].url,
            "https://docs.djangoproject.com/zh-hans/4.2/"
        );
    }

    #[tokio::test]
    async fn first_keyword_in_table_order_wins() {
        // "python" precedes "git" in the table
        let results = MockEngine.search("git hooks in python", 10).await;
        assert!(results[0].url.contains("python.org"));
    }

    #[tokio::test]
    async fn unknown_keyword_gets_three_templates() {
        let results = MockEngine.search("Zyxqlurm", 10).await;
        assert_eq!(results.len(), 3);
        for r in &results {
            assert!(r.title.contains("Zyxqlurm"), "title: {}", r.title);
            assert!(r.url.starts_with("https://"));
        }
        assert_eq!(results[0].url, "https://example.com/tutorial/zyxqlurm");
    }

    #[tokio::test]
    async fn template_urls_are_encoded() {
        let results = MockEngine.search("rust 所有权", 1).await;
        assert_eq!(results.len(), 1);
        let url = &results[0].url;
        assert!(!url.contains(' '));
        assert!(url.starts_with("https://example.com/tutorial/rust+"));
    }

    #[tokio::test]
    async fn limit_truncates() {
        assert_eq!(MockEngine.search("python", 2).await.len(), 2);
        assert!(MockEngine.search("python", 0).await.is_empty());
    }

    #[tokio::test]
    async fn suggestions_from_table_or_template() {
        let known = MockEngine.get_suggestions("Python").await;
        assert_eq!(known.len(), 5);
        assert_eq!(known[0], "python教程");

        let templated = MockEngine.get_suggestions("rust").await;
        assert_eq!(
            templated,
            vec!["rust教程", "rust基础", "rust入门", "rust实战"]
        );
    }
}
