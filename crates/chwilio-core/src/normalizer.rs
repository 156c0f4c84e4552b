//! Normalizer — turns a raw query string into the lowercased form and word
//! list the scorer matches against.
//!
//! No stemming, no deduplication: a repeated word is scored once per
//! occurrence.

/// A query after normalisation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedQuery {
    /// Lowercased, trimmed query.
    pub normalized: String,
    /// `normalized` split on runs of whitespace, in input order.
    pub words: Vec<String>,
}

impl NormalizedQuery {
    /// `true` when the query had no non-whitespace content.
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}

/// Normalise `raw`. Total over all inputs; whitespace-only input yields an
/// empty query with no words.
pub fn normalize(raw: &str) -> NormalizedQuery {
    let normalized = raw.to_lowercase().trim().to_string();
    if normalized.is_empty() {
        return NormalizedQuery::default();
    }

    let words = normalized.split_whitespace().map(str::to_string).collect();
    NormalizedQuery { normalized, words }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
