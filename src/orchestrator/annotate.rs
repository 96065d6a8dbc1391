//! Marking results that already exist in the caller's page store.

use std::collections::HashSet;

use crate::types::SearchResult;

/// Answers whether a page with the given title is already stored.
pub trait PageLookup {
    /// Whether a page titled exactly `title` is stored.
    fn page_exists(&self, title: &str) -> bool;
}

impl PageLookup for HashSet<String> {
    fn page_exists(&self, title: &str) -> bool {
        self.contains(title)
    }
}

impl<F> PageLookup for F
where
    F: Fn(&str) -> bool,
{
    fn page_exists(&self, title: &str) -> bool {
        self(title)
    }
}

/// Set `exists` on every result whose title `lookup` knows.
pub fn annotate_existing(results: &mut [SearchResult], lookup: &impl PageLookup) {
    for result in results.iter_mut() {
        result.exists = lookup.page_exists(&result.title);
    }
}
