//! Domain blocklist applied to every scraped result.

/// Platforms that never make useful directory entries: social networks,
/// video sites, e-commerce, webmail and news portals.
const PLATFORM_DOMAINS: &[&str] = &[
    "youtube.com",
    "facebook.com",
    "twitter.com",
    "instagram.com",
    "tiktok.com",
    "douyin.com",
    "weibo.com",
    "qq.com",
    "wechat.com",
    "taobao.com",
    "tmall.com",
    "jd.com",
    "amazon.com",
    "ebay.com",
    "sina.com",
    "sohu.com",
    "163.com",
    "126.com",
    "mail.qq.com",
    "mail.163.com",
];

/// Search engine hosts. Links back into any engine are navigation, not content.
const ENGINE_DOMAINS: &[&str] = &["baidu.com", "bing.com", "duckduckgo.com", "google.com"];

/// Substring blocklist over lower-cased URLs.
#[derive(Debug, Clone)]
pub struct DomainFilter {
    domains: Vec<&'static str>,
}

impl DomainFilter {
    /// A filter over exactly `domains`.
    pub fn new(domains: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            domains: domains.into_iter().collect(),
        }
    }

    /// The standard filter for a scraped engine: platforms, every engine
    /// host, plus the engine's own `extra` domains.
    pub fn for_engine(extra: &[&'static str]) -> Self {
        let shared = PLATFORM_DOMAINS.iter().chain(ENGINE_DOMAINS);
        Self::new(shared.chain(extra).copied())
    }

    /// Returns `true` if any blocked domain occurs anywhere in `url`.
    pub fn is_disallowed(&self, url: &str) -> bool {
        let url = url.to_lowercase();
        self.domains.iter().any(|domain| url.contains(domain))
    }

    /// The blocked domain substrings, in configuration order.
    pub fn domains(&self) -> &[&'static str] {
        &self.domains
    }
}
