//! Term index — FST-backed candidate lookup for the inverted ranking strategy.
//!
//! Every whitespace-separated token of an entry's lowercased title, excerpt,
//! keywords and category is expanded into its suffixes, and each suffix maps to
//! the ids of the entries containing it. A query word (which never contains
//! whitespace) occurs in a field exactly when it is a prefix of one of that
//! field's token suffixes, so a prefix scan over the FST yields precisely the
//! entries able to score above zero.

use crate::error::IndexError;
use crate::scorer::Haystack;
use fst::automaton::{Automaton, Str};
use fst::{IntoStreamer, Map, Streamer};
use std::collections::{BTreeMap, BTreeSet};

pub struct TermIndex {
    /// Suffix → position in `postings`.
    map: Map<Vec<u8>>,
    /// Ascending entry ids per suffix.
    postings: Vec<Vec<u32>>,
}

impl TermIndex {
    pub fn build(haystacks: &[Haystack]) -> Result<Self, IndexError> {
        let mut suffixes: BTreeMap<&str, Vec<u32>> = BTreeMap::new();

        for (id, hay) in haystacks.iter().enumerate() {
            let id = id as u32;
            let fields = [
                hay.title.as_str(),
                hay.excerpt.as_str(),
                hay.keywords.as_str(),
                hay.category.as_str(),
            ];
            for token in fields.into_iter().flat_map(str::split_whitespace) {
                for (start, _) in token.char_indices() {
                    let ids = suffixes.entry(&token[start..]).or_default();
                    if ids.last() != Some(&id) {
                        ids.push(id);
                    }
                }
            }
        }

        let mut postings = Vec::with_capacity(suffixes.len());
        let mut keys = Vec::with_capacity(suffixes.len());
        for (suffix, ids) in suffixes {
            keys.push((suffix, postings.len() as u64));
            postings.push(ids);
        }
        let map = Map::from_iter(keys)?;

        tracing::debug!(
            entries = haystacks.len(),
            suffixes = postings.len(),
            "term index built"
        );
        Ok(Self { map, postings })
    }

    pub fn empty() -> Self {
        Self {
            map: Map::default(),
            postings: Vec::new(),
        }
    }

    /// Ids of entries whose fields contain at least one of `words`, ascending.
    pub fn candidates(&self, words: &[String]) -> Vec<usize> {
        let mut hits = BTreeSet::new();
        for word in words {
            let mut stream = self.map.search(Str::new(word).starts_with()).into_stream();
            while let Some((_, slot)) = stream.next() {
                hits.extend(self.postings[slot as usize].iter().map(|&id| id as usize));
            }
        }
        hits.into_iter().collect()
    }

    /// Number of distinct token suffixes.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

impl std::fmt::Debug for TermIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TermIndex")
            .field("suffixes", &self.postings.len())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
