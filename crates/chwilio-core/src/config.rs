//! Configuration types for chwilio.
//!
//! [`Config::load`] reads `~/.config/chwilio/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::load_from`] reads an
//! explicit file instead. Both layer `CHWILIO_*` environment variables on top
//! (e.g. `CHWILIO_SEARCH__LIMIT=5`). [`Config::defaults`] returns the built-in
//! defaults without touching the filesystem (useful in tests).

use crate::ranker::{Strategy, DEFAULT_LIMIT};
use crate::scorer::Weights;
use crate::types::Locale;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[search]
limit          = 10
default_locale = "en"
strategy       = "linear"

[weights]
exact_title   = 100
title_phrase  = 50
title_word    = 20
excerpt_word  = 10
keyword_word  = 15
category_word = 0

# Replace the built-in catalogue for a locale with a JSON index file.
[index]
# en = "/srv/chwilio/en.json"
# cy = "/srv/chwilio/cy.json"

[server]
bind = "127.0.0.1:8080"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub weights: Weights,
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// `[search]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Maximum results per search.
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Locale tag used when a caller supplies none. Unrecognised tags
    /// resolve to `en`, same as at search time.
    #[serde(default = "default_locale")]
    pub default_locale: String,
    #[serde(default)]
    pub strategy: Strategy,
}

fn default_limit() -> usize { DEFAULT_LIMIT }
fn default_locale() -> String { "en".to_string() }

impl SearchConfig {
    pub fn locale(&self) -> Locale {
        Locale::resolve(&self.default_locale)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            default_locale: default_locale(),
            strategy: Strategy::default(),
        }
    }
}

/// `[index]` section: optional per-locale JSON index files.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndexConfig {
    pub en: Option<PathBuf>,
    pub cy: Option<PathBuf>,
}

impl IndexConfig {
    pub fn path(&self, locale: Locale) -> Option<&Path> {
        match locale {
            Locale::En => self.en.as_deref(),
            Locale::Cy => self.cy.as_deref(),
        }
    }
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String { "127.0.0.1:8080".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/chwilio/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::layered(&path, false)
    }

    /// Load an explicit config file, layered on top of the built-in defaults.
    /// The file must exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        Self::layered(path, true)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    fn layered(path: &Path, required: bool) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(required))
            .add_source(
                config::Environment::with_prefix("CHWILIO")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("chwilio")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
