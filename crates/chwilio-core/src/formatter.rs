//! Result formatter — projects ranked entries to the public [`SearchResult`]
//! shape. Order is kept as received; the score is dropped.

use crate::types::{ScoredEntry, SearchResult};

pub fn format(scored: &[ScoredEntry<'_>]) -> Vec<SearchResult> {
    scored.iter().map(SearchResult::from).collect()
}

impl From<&ScoredEntry<'_>> for SearchResult {
    fn from(scored: &ScoredEntry<'_>) -> Self {
        let entry = scored.entry;
        SearchResult {
            title: entry.title.clone(),
            excerpt: entry.excerpt.clone(),
            url: entry.url.clone(),
            category: entry.category.clone(),
        }
    }
}
