//! chwilio — bilingual (English/Welsh) search over curated site content.
//!
//! The search pipeline lives in [`chwilio_core`] and is re-exported here so
//! integration tests and embedders need a single dependency. This crate adds
//! the HTTP request/response wrapper in [`server`].
//!
//! # Architecture
//!
//! ```text
//! CLI / HTTP ──► SearchEngine ──► Catalogue ──► Ranker ──► Formatter
//! ```

pub mod server;

pub use chwilio_core::*;
