//! Scorer — fixed-weight additive relevance for one entry against one query.
//!
//! # Weighting table
//!
//! | Signal | Default | Fires when |
//! |--------|---------|------------|
//! | `exact_title` | 100 | lowercased title equals the normalised query |
//! | `title_phrase` | 50 | lowercased title contains the normalised query |
//! | `title_word` | 20 | per query word found in the title |
//! | `excerpt_word` | 10 | per query word found in the excerpt |
//! | `keyword_word` | 15 | per query word found in the space-joined keywords |
//! | `category_word` | 0 | per query word found in the category |
//!
//! All rules are cumulative: an exact title match also fires `title_phrase`,
//! so it starts at 150 before per-word bonuses. Repeated query words are
//! counted once per occurrence. Matching is plain substring containment.

use crate::normalizer::NormalizedQuery;
use crate::types::IndexEntry;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Weights
// ---------------------------------------------------------------------------

/// Point values for each scoring signal. [`Weights::default`] is the
/// reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Weights {
    #[serde(default = "default_exact_title")]
    pub exact_title: u64,
    #[serde(default = "default_title_phrase")]
    pub title_phrase: u64,
    #[serde(default = "default_title_word")]
    pub title_word: u64,
    #[serde(default = "default_excerpt_word")]
    pub excerpt_word: u64,
    #[serde(default = "default_keyword_word")]
    pub keyword_word: u64,
    /// Not part of the reference table; zero keeps categories display-only.
    #[serde(default)]
    pub category_word: u64,
}

fn default_exact_title() -> u64 { 100 }
fn default_title_phrase() -> u64 { 50 }
fn default_title_word() -> u64 { 20 }
fn default_excerpt_word() -> u64 { 10 }
fn default_keyword_word() -> u64 { 15 }

impl Default for Weights {
    fn default() -> Self {
        Self {
            exact_title: default_exact_title(),
            title_phrase: default_title_phrase(),
            title_word: default_title_word(),
            excerpt_word: default_excerpt_word(),
            keyword_word: default_keyword_word(),
            category_word: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Haystack
// ---------------------------------------------------------------------------

/// Lowercased copies of an entry's searchable fields.
///
/// Built once per entry when the index is loaded so the per-query loop only
/// does substring tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Haystack {
    pub title: String,
    pub excerpt: String,
    /// Keywords joined with single spaces.
    pub keywords: String,
    pub category: String,
}

impl Haystack {
    pub fn from_entry(entry: &IndexEntry) -> Self {
        Self {
            title: entry.title.to_lowercase(),
            excerpt: entry.excerpt.to_lowercase(),
            keywords: entry.keywords.join(" ").to_lowercase(),
            category: entry.category.to_lowercase(),
        }
    }
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Score `entry` against `query`. Zero means no signal matched.
pub fn score(entry: &IndexEntry, query: &NormalizedQuery, weights: &Weights) -> u64 {
    score_haystack(&Haystack::from_entry(entry), query, weights)
}

/// Score pre-lowercased fields. Same result as [`score`] on the source entry.
pub fn score_haystack(hay: &Haystack, query: &NormalizedQuery, weights: &Weights) -> u64 {
    if query.is_empty() {
        return 0;
    }

    // Weights come from user config; saturate rather than wrap.
    let mut total = 0u64;

    if hay.title == query.normalized {
        total = total.saturating_add(weights.exact_title);
    }
    if hay.title.contains(query.normalized.as_str()) {
        total = total.saturating_add(weights.title_phrase);
    }

    for word in &query.words {
        let word = word.as_str();
        if hay.title.contains(word) {
            total = total.saturating_add(weights.title_word);
        }
        if hay.excerpt.contains(word) {
            total = total.saturating_add(weights.excerpt_word);
        }
        if hay.keywords.contains(word) {
            total = total.saturating_add(weights.keyword_word);
        }
        if weights.category_word > 0 && hay.category.contains(word) {
            total = total.saturating_add(weights.category_word);
        }
    }

    total
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
