//! Locale store capability.
//!
//! The core never reads files or embeds data itself; it asks a
//! [`LocaleStore`] for one locale's [`LocaleData`] at construction time.
//! Backends live in the `lexi-store` crate.

use crate::value::LocaleData;

/// Loads the nested data for one locale.
pub trait LocaleStore {
    /// Error produced when the locale cannot be loaded.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the data for `locale` (e.g. `"en"`, `"pt"`).
    fn load(&self, locale: &str) -> Result<LocaleData, Self::Error>;
}

impl<S: LocaleStore + ?Sized> LocaleStore for &S {
    type Error = S::Error;

    fn load(&self, locale: &str) -> Result<LocaleData, Self::Error> {
        (**self).load(locale)
    }
}

impl<S: LocaleStore + ?Sized> LocaleStore for Box<S> {
    type Error = S::Error;

    fn load(&self, locale: &str) -> Result<LocaleData, Self::Error> {
        (**self).load(locale)
    }
}
