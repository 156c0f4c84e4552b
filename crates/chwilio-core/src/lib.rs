//! chwilio-core — content index, scoring and ranking for chwilio.
//!
//! This crate exposes each stage of the search pipeline as a public module,
//! plus the shared types passed between them.
//!
//! # Architecture
//!
//! ```text
//! Locale ──► Normalizer ──► Ranker ──► Formatter
//!                             │
//!                           Scorer
//! ```
//!
//! Every stage is synchronous and side-effect free. Content indices are
//! immutable snapshots injected into a [`SearchEngine`]; nothing is global
//! except the built-in reference catalogue.

pub mod config;
pub mod error;
pub mod formatter;
pub mod index;
pub mod locale;
pub mod normalizer;
pub mod ranker;
pub mod scorer;
pub mod search;
pub mod term_index;
pub mod types;

pub use error::IndexError;
pub use index::ContentIndex;
pub use locale::Catalogue;
pub use ranker::{Ranker, Strategy, DEFAULT_LIMIT};
pub use scorer::Weights;
pub use search::{search, SearchEngine, SearchOptions};
pub use types::{IndexEntry, Locale, ScoredEntry, SearchResult};
