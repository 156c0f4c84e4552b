//! Ranker — scores a content index against a query, drops non-matches,
//! orders by descending score and truncates.
//!
//! Ordering is a stable sort: among equal scores the index's authored order
//! wins. Truncation always happens after sorting.

use crate::index::ContentIndex;
use crate::normalizer::normalize;
use crate::scorer::{score_haystack, Weights};
use crate::types::ScoredEntry;
use serde::Deserialize;

/// Result count used when the caller does not pick one.
pub const DEFAULT_LIMIT: usize = 10;

/// How candidate entries are enumerated before scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Score every entry in the index.
    #[default]
    Linear,
    /// Score only entries the term index reports as containing a query word.
    /// Always returns the same results as `Linear`.
    Inverted,
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(Strategy::Linear),
            "inverted" => Ok(Strategy::Inverted),
            other => Err(format!("unknown strategy: {other} (expected linear|inverted)")),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Linear => write!(f, "linear"),
            Strategy::Inverted => write!(f, "inverted"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ranker {
    pub strategy: Strategy,
    pub weights: Weights,
}

impl Ranker {
    pub fn new(strategy: Strategy, weights: Weights) -> Self {
        Self { strategy, weights }
    }

    /// Rank `index` against the raw `query`, returning at most `limit`
    /// entries with a positive score.
    pub fn rank<'a>(&self, index: &'a ContentIndex, query: &str, limit: usize) -> Vec<ScoredEntry<'a>> {
        let query = normalize(query);
        if query.is_empty() || limit == 0 {
            return Vec::new();
        }

        let entries = index.entries();
        let haystacks = index.haystacks();
        let weights = &self.weights;
        let score_at = |id: usize| {
            let score = score_haystack(&haystacks[id], &query, weights);
            tracing::trace!(title = %entries[id].title, score, "scored");
            (score > 0).then(|| ScoredEntry {
                entry: &entries[id],
                score,
            })
        };

        let mut scored: Vec<ScoredEntry<'a>> = match self.strategy {
            Strategy::Linear => (0..entries.len()).filter_map(score_at).collect(),
            Strategy::Inverted => index
                .terms()
                .candidates(&query.words)
                .into_iter()
                .filter_map(score_at)
                .collect(),
        };
        let matched = scored.len();

        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(limit);

        tracing::debug!(
            query = %query.normalized,
            words = query.words.len(),
            strategy = %self.strategy,
            matched,
            returned = scored.len(),
            "ranked"
        );
        scored
    }
}

/// Rank with the reference weights, linear scan.
pub fn rank<'a>(index: &'a ContentIndex, query: &str, limit: usize) -> Vec<ScoredEntry<'a>> {
    Ranker::default().rank(index, query, limit)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
