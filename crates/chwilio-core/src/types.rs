//! Core types for chwilio-core.
//!
//! This module defines the data shared across every stage of a search: the
//! curated [`IndexEntry`], the ephemeral [`ScoredEntry`] produced by the
//! ranker, the public [`SearchResult`] handed to callers, and the [`Locale`]
//! discriminant used to pick a content index.

use serde::{Deserialize, Serialize};

/// One indexable page or topic in a locale's content index.
///
/// Entries are authored outside the engine (CMS export or static catalogue)
/// and validated once when the index is built; see
/// [`ContentIndex::new`](crate::index::ContentIndex::new).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Display name. Unique within a locale by convention only.
    pub title: String,
    /// Short summary shown alongside the result.
    pub excerpt: String,
    /// Relative path the entry links to. Opaque to scoring.
    pub url: String,
    /// Free-text grouping label used for display.
    pub category: String,
    /// Curated synonyms and related terms. May be empty.
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl IndexEntry {
    /// Entry with no keywords.
    pub fn new(
        title: impl Into<String>,
        excerpt: impl Into<String>,
        url: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            excerpt: excerpt.into(),
            url: url.into(),
            category: category.into(),
            keywords: Vec::new(),
        }
    }

    /// Builder: set the keyword list.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}

/// An entry paired with its relevance score for one query.
///
/// Lives only for the duration of a single ranking call and borrows the entry
/// from the index snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredEntry<'a> {
    pub entry: &'a IndexEntry,
    pub score: u64,
}

/// Public projection of a ranked entry. Field order is the display order.
///
/// Deliberately carries no score: the formula can change without changing
/// what renderers see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub excerpt: String,
    pub url: String,
    pub category: String,
}

/// Supported content locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English. Also the fallback for any unrecognised locale tag.
    #[default]
    En,
    /// Welsh (Cymraeg).
    Cy,
}

impl Locale {
    /// Resolve a locale tag. Only `"en"` and `"cy"` are recognised; every
    /// other value degrades to [`Locale::En`].
    pub fn resolve(tag: &str) -> Locale {
        match tag {
            "cy" => Locale::Cy,
            "en" => Locale::En,
            other => {
                tracing::debug!(requested = other, "unrecognised locale, falling back to en");
                Locale::En
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Cy => "cy",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
