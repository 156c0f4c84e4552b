//! Search layer — the public entry point composing locale selection,
//! normalisation, ranking and result formatting.
//!
//! ```text
//! (query, locale) ──► Catalogue::select ──► Ranker::rank ──► formatter::format
//! ```
//!
//! [`SearchEngine`] holds only immutable data, so a single instance can be
//! shared (behind an `Arc`) by any number of concurrent callers.

use crate::config::Config;
use crate::formatter;
use crate::locale::Catalogue;
use crate::ranker::{Ranker, Strategy, DEFAULT_LIMIT};
use crate::scorer::Weights;
use crate::types::{Locale, SearchResult};

/// Per-engine knobs. [`SearchOptions::default`] is the reference behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub limit: usize,
    pub strategy: Strategy,
    pub weights: Weights,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            strategy: Strategy::default(),
            weights: Weights::default(),
        }
    }
}

impl From<&Config> for SearchOptions {
    fn from(config: &Config) -> Self {
        Self {
            limit: config.search.limit,
            strategy: config.search.strategy,
            weights: config.weights,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchEngine {
    catalogue: Catalogue,
    options: SearchOptions,
}

impl SearchEngine {
    pub fn new(catalogue: Catalogue, options: SearchOptions) -> Self {
        Self { catalogue, options }
    }

    /// Build from configuration: catalogue overrides, limit, strategy, weights.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let catalogue = Catalogue::from_config(&config.index)?;
        Ok(Self::new(catalogue, SearchOptions::from(config)))
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Search the index for `locale` with the configured limit.
    pub fn search(&self, query: &str, locale: &str) -> Vec<SearchResult> {
        self.search_with_limit(query, locale, self.options.limit)
    }

    pub fn search_with_limit(&self, query: &str, locale: &str, limit: usize) -> Vec<SearchResult> {
        self.search_locale(query, Locale::resolve(locale), limit)
    }

    pub fn search_locale(&self, query: &str, locale: Locale, limit: usize) -> Vec<SearchResult> {
        let index = self.catalogue.select(locale);
        let ranker = Ranker::new(self.options.strategy, self.options.weights);
        let ranked = ranker.rank(index, query, limit);
        formatter::format(&ranked)
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(Catalogue::builtin(), SearchOptions::default())
    }
}

/// Search the built-in catalogue with reference options.
pub fn search(query: &str, locale: &str) -> Vec<SearchResult> {
    SearchEngine::default().search(query, locale)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
