//! Test builders — ergonomic constructors for `IndexEntry`, `ContentIndex`
//! and `SearchEngine`.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use chwilio::{Catalogue, ContentIndex, IndexEntry, SearchEngine, SearchOptions, Strategy};

// ---------------------------------------------------------------------------
// IndexEntryBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`IndexEntry`] test fixtures.
///
/// # Example
///
/// ```rust
/// let entry = IndexEntryBuilder::new("Sport in Schools")
///     .excerpt("Physical literacy for pupils")
///     .category("Education")
///     .keywords(["pe", "teachers"])
///     .build();
/// ```
pub struct IndexEntryBuilder {
    title: String,
    excerpt: String,
    url: String,
    category: String,
    keywords: Vec<String>,
}

impl IndexEntryBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        let slug = title
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        Self {
            title,
            excerpt: "Placeholder excerpt".to_string(),
            url: format!("/{slug}"),
            category: "General".to_string(),
            keywords: Vec::new(),
        }
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> IndexEntry {
        IndexEntry {
            title: self.title,
            excerpt: self.excerpt,
            url: self.url,
            category: self.category,
            keywords: self.keywords,
        }
    }
}

// ---------------------------------------------------------------------------
// Index / engine helpers
// ---------------------------------------------------------------------------

/// Build a validated index, panicking on malformed fixtures.
pub fn index_of(entries: Vec<IndexEntry>) -> ContentIndex {
    ContentIndex::new(entries).expect("fixture entries must validate")
}

/// Engine over the given English entries (Welsh index left empty) with the
/// reference options and the chosen strategy.
pub fn engine_with(entries: Vec<IndexEntry>, strategy: Strategy) -> SearchEngine {
    let catalogue = Catalogue::new(index_of(entries), ContentIndex::empty());
    SearchEngine::new(
        catalogue,
        SearchOptions {
            strategy,
            ..SearchOptions::default()
        },
    )
}

/// Engine over the built-in reference catalogue.
pub fn reference_engine(strategy: Strategy) -> SearchEngine {
    SearchEngine::new(
        Catalogue::builtin(),
        SearchOptions {
            strategy,
            ..SearchOptions::default()
        },
    )
}

/// Build `n` entries cycling through a small vocabulary so that most queries
/// hit several entries with tied scores.
pub fn build_corpus(n: usize) -> Vec<IndexEntry> {
    const TOPICS: &[&str] = &["clubs", "schools", "funding", "coaching", "facilities"];
    (0..n)
        .map(|i| {
            let topic = TOPICS[i % TOPICS.len()];
            let other = TOPICS[(i / TOPICS.len()) % TOPICS.len()];
            IndexEntryBuilder::new(format!("{topic} page {i}"))
                .excerpt(format!("About {other} in Wales"))
                .category(if i % 2 == 0 { "Community" } else { "Education" })
                .keywords([other, "sport"])
                .build()
        })
        .collect()
}
