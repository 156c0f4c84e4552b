//! Content index — an immutable, validated snapshot of one locale's entries.
//!
//! Entries are checked once on construction so the scorer can assume
//! well-formed input. The snapshot is shared behind an `Arc`; clones are cheap
//! and every search reads the same data.

use crate::error::IndexError;
use crate::scorer::Haystack;
use crate::term_index::TermIndex;
use crate::types::IndexEntry;
use regex::Regex;
use std::path::Path;
use std::sync::{Arc, LazyLock};

/// A rooted relative path: starts with a single `/`, no scheme, no whitespace.
static RELATIVE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/(?:[^/\s][^\s]*)?$").expect("relative url pattern"));

#[derive(Debug, Clone)]
pub struct ContentIndex {
    inner: Arc<Snapshot>,
}

#[derive(Debug)]
struct Snapshot {
    entries: Vec<IndexEntry>,
    haystacks: Vec<Haystack>,
    terms: TermIndex,
}

impl ContentIndex {
    /// Validate `entries` and build the snapshot. Fails on the first
    /// malformed entry, naming its position and title.
    pub fn new(entries: Vec<IndexEntry>) -> Result<Self, IndexError> {
        for (position, entry) in entries.iter().enumerate() {
            validate(position, entry)?;
        }

        let haystacks: Vec<Haystack> = entries.iter().map(Haystack::from_entry).collect();
        let terms = TermIndex::build(&haystacks)?;

        Ok(Self {
            inner: Arc::new(Snapshot {
                entries,
                haystacks,
                terms,
            }),
        })
    }

    /// An index with no entries. Every search against it returns nothing.
    pub fn empty() -> Self {
        Self {
            inner: Arc::new(Snapshot {
                entries: Vec::new(),
                haystacks: Vec::new(),
                terms: TermIndex::empty(),
            }),
        }
    }

    /// Parse a JSON array of entries.
    pub fn from_json_str(json: &str) -> Result<Self, IndexError> {
        let entries: Vec<IndexEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Read and parse a JSON index file.
    pub fn load(path: &Path) -> Result<Self, IndexError> {
        let json = std::fs::read_to_string(path).map_err(|source| IndexError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let index = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            entries = index.len(),
            suffixes = index.terms().len(),
            "content index loaded"
        );
        Ok(index)
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.inner.entries
    }

    pub fn len(&self) -> usize {
        self.inner.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.entries.is_empty()
    }

    pub(crate) fn haystacks(&self) -> &[Haystack] {
        &self.inner.haystacks
    }

    pub(crate) fn terms(&self) -> &TermIndex {
        &self.inner.terms
    }
}

fn validate(position: usize, entry: &IndexEntry) -> Result<(), IndexError> {
    let required = [
        ("title", &entry.title),
        ("excerpt", &entry.excerpt),
        ("category", &entry.category),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(IndexError::EmptyField {
                position,
                title: entry.title.clone(),
                field,
            });
        }
    }

    if !RELATIVE_URL.is_match(&entry.url) {
        return Err(IndexError::InvalidUrl {
            position,
            title: entry.title.clone(),
            url: entry.url.clone(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
