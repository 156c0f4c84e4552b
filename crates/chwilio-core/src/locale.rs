//! Locale selector — one content index per supported locale.
//!
//! The English and Welsh indices are authored independently, so coverage and
//! keywords differ between them; a query that hits in one locale may miss in
//! the other.

use crate::config::IndexConfig;
use crate::index::ContentIndex;
use crate::types::Locale;
use anyhow::Context;
use std::sync::LazyLock;

const BUILTIN_EN: &str = include_str!("../data/en.json");
const BUILTIN_CY: &str = include_str!("../data/cy.json");

static BUILTIN: LazyLock<Catalogue> = LazyLock::new(|| Catalogue {
    en: ContentIndex::from_json_str(BUILTIN_EN).expect("built-in en index must be valid"),
    cy: ContentIndex::from_json_str(BUILTIN_CY).expect("built-in cy index must be valid"),
});

#[derive(Debug, Clone)]
pub struct Catalogue {
    en: ContentIndex,
    cy: ContentIndex,
}

impl Catalogue {
    pub fn new(en: ContentIndex, cy: ContentIndex) -> Self {
        Self { en, cy }
    }

    /// The reference catalogue shipped with the crate.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Start from the built-in catalogue and replace every locale that has an
    /// index path configured.
    pub fn from_config(config: &IndexConfig) -> anyhow::Result<Self> {
        let mut catalogue = Self::builtin();
        for locale in [Locale::En, Locale::Cy] {
            if let Some(path) = config.path(locale) {
                let index = ContentIndex::load(path)
                    .with_context(|| format!("loading {locale} index from {}", path.display()))?;
                catalogue = catalogue.with_index(locale, index);
            }
        }
        Ok(catalogue)
    }

    /// Replace one locale's index.
    pub fn with_index(mut self, locale: Locale, index: ContentIndex) -> Self {
        match locale {
            Locale::En => self.en = index,
            Locale::Cy => self.cy = index,
        }
        self
    }

    pub fn select(&self, locale: Locale) -> &ContentIndex {
        match locale {
            Locale::En => &self.en,
            Locale::Cy => &self.cy,
        }
    }

    /// Select by raw locale tag; anything other than `"en"`/`"cy"` gets the
    /// English index.
    pub fn select_tag(&self, tag: &str) -> &ContentIndex {
        self.select(Locale::resolve(tag))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
