//! Query optimisation: bias a user query towards learning material.

/// Category keywords and the phrase appended when the category context
/// mentions them. Checked in order; the first hit wins, so `java` shadows
/// `javascript`.
pub const CATEGORY_HINTS: &[(&str, &str)] = &[
    ("python", "python 教程 文档 学习"),
    ("java", "java 教程 文档 学习"),
    ("javascript", "javascript 教程 文档 学习"),
    ("html", "html 教程 文档 学习"),
    ("css", "css 教程 文档 学习"),
    ("sql", "sql 教程 文档 学习"),
    ("linux", "linux 教程 文档 学习"),
    ("git", "git 教程 文档 学习"),
    ("docker", "docker 教程 文档 学习"),
    ("kubernetes", "kubernetes 教程 文档 学习"),
];

/// Appended when no category keyword matches.
pub const GENERIC_HINT: &str = "教程 文档 学习 指南";

/// Append the hint for `category_context` to `query`.
///
/// The context is matched case-insensitively against [`CATEGORY_HINTS`].
pub fn optimize_query(query: &str, category_context: &str) -> String {
    let context = category_context.to_lowercase();
    let hint = CATEGORY_HINTS
        .iter()
        .find(|(keyword, _)| context.contains(keyword))
        .map_or(GENERIC_HINT, |(_, hint)| *hint);
    format!("{query} {hint}")
}
