//! Locale-bound facade over translation and date/time formatting.
//!
//! # Invariants
//!
//! 1. **Loaded once**: the store is consulted exactly once, in
//!    [`I18n::new`]. There is no reload and no locale switching.
//! 2. **Immutable snapshot**: all operations read the same data, so repeated
//!    calls with the same arguments return the same result.
//! 3. **Thread safety**: `I18n` is `Send + Sync`.

use core::fmt;

use chrono::{DateTime, TimeZone};
use tracing::debug;

use crate::datetime::{self, FormatOptions};
use crate::error::{I18nError, Result};
use crate::store::LocaleStore;
use crate::translate::{self, TranslateOptions};
use crate::value::LocaleData;

/// Translations and formats for a single locale.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use lexi_i18n::{FormatOptions, I18n, LocaleData, TranslateOptions, Value};
///
/// let data: LocaleData = [
///     (
///         "translations".to_owned(),
///         Value::mapping([(
///             "new_message",
///             Value::mapping([
///                 ("1", "you have a new message"),
///                 ("2..", "you have {{.count}} new messages"),
///                 ("other", "no messages"),
///             ]),
///         )]),
///     ),
///     (
///         "formats".to_owned(),
///         Value::mapping([(
///             "date",
///             Value::mapping([(
///                 "formats",
///                 Value::mapping([("default", "%Y-%m-%d"), ("no-day", "%Y-%m")]),
///             )]),
///         )]),
///     ),
/// ]
/// .into_iter()
/// .collect();
///
/// let i18n = I18n::from_data("en", data);
///
/// assert_eq!(i18n.translate("new_message"), "no messages");
/// assert_eq!(
///     i18n.translate_with("new_message", &TranslateOptions::new().with_count(4)),
///     "you have 4 new messages"
/// );
/// assert_eq!(i18n.translate("unknown.key"), "unknown.key");
///
/// let at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
/// assert_eq!(i18n.date(&at).unwrap(), "2026-01-01");
/// assert_eq!(
///     i18n.date_with(&at, &FormatOptions::new().with_format("no-day")).unwrap(),
///     "2026-01"
/// );
/// assert!(i18n.time(&at).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct I18n {
    locale: String,
    data: LocaleData,
}

impl I18n {
    /// Load `locale` from `store`.
    ///
    /// Store failures are wrapped in [`I18nError::Load`] and keep the
    /// store's message.
    pub fn new<S: LocaleStore>(store: &S, locale: &str) -> Result<Self> {
        match store.load(locale) {
            Ok(data) => {
                debug!(locale, keys = data.len(), "locale loaded");
                Ok(Self::from_data(locale, data))
            }
            Err(err) => {
                debug!(locale, error = %err, "locale load failed");
                Err(I18nError::load(locale, err))
            }
        }
    }

    /// Bind already-loaded data to a locale identifier.
    #[must_use]
    pub fn from_data(locale: impl Into<String>, data: LocaleData) -> Self {
        Self {
            locale: locale.into(),
            data,
        }
    }

    /// The locale identifier this instance was built for.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The loaded locale data.
    #[must_use]
    pub fn data(&self) -> &LocaleData {
        &self.data
    }

    /// Translate `key` with a count of 0.
    #[must_use]
    pub fn translate(&self, key: &str) -> String {
        self.translate_with(key, &TranslateOptions::default())
    }

    /// Translate `key` with explicit options.
    #[must_use]
    pub fn translate_with(&self, key: &str, options: &TranslateOptions) -> String {
        translate::translate(&self.data, key, options)
    }

    /// Format the date part of `at` with the `default` date format.
    pub fn date<Tz>(&self, at: &DateTime<Tz>) -> Result<String>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        self.date_with(at, &FormatOptions::default())
    }

    /// Format `at` with a named date format.
    pub fn date_with<Tz>(&self, at: &DateTime<Tz>, options: &FormatOptions) -> Result<String>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        datetime::format_date(&self.data, at, options)
    }

    /// Format the time part of `at` with the `default` time format.
    pub fn time<Tz>(&self, at: &DateTime<Tz>) -> Result<String>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        self.time_with(at, &FormatOptions::default())
    }

    /// Format `at` with a named time format.
    pub fn time_with<Tz>(&self, at: &DateTime<Tz>, options: &FormatOptions) -> Result<String>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        datetime::format_time(&self.data, at, options)
    }
}
