//! Error types for index loading.
//!
//! Searching itself never fails; everything that can go wrong happens while a
//! content index is read and validated.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("failed to read index file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("index is not a valid JSON entry list: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("entry {position} ({title:?}): field `{field}` must not be empty")]
    EmptyField {
        position: usize,
        title: String,
        field: &'static str,
    },

    #[error("entry {position} ({title:?}): url {url:?} is not a relative path")]
    InvalidUrl {
        position: usize,
        title: String,
        url: String,
    },

    #[error("failed to build term index: {0}")]
    TermIndex(#[from] fst::Error),
}
