//! In-memory locale store.

use std::collections::HashMap;
use std::convert::Infallible;

use lexi_i18n::{LocaleData, LocaleStore};
use tracing::trace;

/// Locales kept in memory, keyed by identifier.
///
/// Loading never fails: an unknown locale yields empty data, which makes
/// every translation fall back to its key.
#[derive(Debug, Clone, Default)]
pub struct MapStore {
    locales: HashMap<String, LocaleData>,
}

impl MapStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a locale.
    pub fn insert(&mut self, locale: impl Into<String>, data: LocaleData) {
        self.locales.insert(locale.into(), data);
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>, data: LocaleData) -> Self {
        self.insert(locale, data);
        self
    }
}

impl<K: Into<String>> FromIterator<(K, LocaleData)> for MapStore {
    fn from_iter<I: IntoIterator<Item = (K, LocaleData)>>(iter: I) -> Self {
        Self {
            locales: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl LocaleStore for MapStore {
    type Error = Infallible;

    fn load(&self, locale: &str) -> Result<LocaleData, Self::Error> {
        match self.locales.get(locale) {
            Some(data) => Ok(data.clone()),
            None => {
                trace!(locale, "locale not in map store, loading empty data");
                Ok(LocaleData::new())
            }
        }
    }
}
