//! Localized date and time formatting.
//!
//! Formats live under `formats.date` and `formats.time`:
//!
//! ```yaml
//! formats:
//!   date:
//!     abbr_day_names: [sun, mon, tue, wed, thu, fri, sat]
//!     day_names: [sunday, monday, ...]
//!     abbr_month_names: [jan, feb, ...]
//!     month_names: [january, february, ...]
//!     formats:
//!       default: '%Y-%m-%d'
//!       long: '%A, %d of %B %Y'
//!   time:
//!     formats:
//!       default: '%H:%M:%S'
//! ```
//!
//! Date patterns first have their name placeholders (`%a`, `%A`, `%b`,
//! `%B`) replaced from the locale's name tables; whatever remains is
//! expanded by chrono's strftime implementation. Time patterns go straight
//! to strftime.
//!
//! # Failure Modes
//!
//! | Failure | Behavior |
//! |---------|----------|
//! | `formats` missing or not a mapping | [`I18nError::MissingFormatsRoot`] |
//! | `formats.<kind>` missing or not a mapping | [`I18nError::MissingTypeFormats`] |
//! | `formats.<kind>.formats` missing or not a mapping | [`I18nError::MissingFormatTable`] |
//! | Format name absent or not a string | [`I18nError::UnknownFormatName`] |
//! | Name table missing, short, or not a sequence | Placeholder kept as literal text |
//! | Name entry is itself a sequence or mapping | Rendered textually (`[a b]`, `map[k:v]`) |
//! | Unknown strftime directive | [`I18nError::Strftime`] |

use std::borrow::Cow;
use std::fmt::{self, Write as _};
use std::sync::LazyLock;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Datelike, TimeZone};
use regex_lite::{Captures, Regex};
use tracing::debug;

use crate::error::{FormatKind, I18nError, Result};
use crate::value::{LocaleData, Mapping, Value};

/// Root key holding all format tables.
pub const FORMATS_KEY: &str = "formats";

/// Format name used when none is requested.
pub const DEFAULT_FORMAT: &str = "default";

/// Every two-character directive, so `%%` is consumed as a unit and never
/// starts a placeholder.
static DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)%.").expect("directive regex"));

/// Options for a date/time formatting call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Name of the pattern in the format table. Defaults to `"default"`.
    pub format: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_owned(),
        }
    }
}

impl FormatOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_format(mut self, name: impl Into<String>) -> Self {
        self.format = name.into();
        self
    }
}

/// A name placeholder and the table that resolves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placeholder {
    AbbrDay,
    Day,
    AbbrMonth,
    Month,
}

impl Placeholder {
    fn from_directive(directive: &str) -> Option<Self> {
        match directive {
            "%a" => Some(Self::AbbrDay),
            "%A" => Some(Self::Day),
            "%b" => Some(Self::AbbrMonth),
            "%B" => Some(Self::Month),
            _ => None,
        }
    }

    fn table(self) -> &'static str {
        match self {
            Self::AbbrDay => "abbr_day_names",
            Self::Day => "day_names",
            Self::AbbrMonth => "abbr_month_names",
            Self::Month => "month_names",
        }
    }

    /// Weekday from Sunday = 0, or month from January = 0.
    fn index<Tz: TimeZone>(self, at: &DateTime<Tz>) -> usize {
        match self {
            Self::AbbrDay | Self::Day => at.weekday().num_days_from_sunday() as usize,
            Self::AbbrMonth | Self::Month => at.month0() as usize,
        }
    }
}

/// Format `at` with the locale's named date pattern.
pub fn format_date<Tz>(
    data: &LocaleData,
    at: &DateTime<Tz>,
    options: &FormatOptions,
) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let kind = FormatKind::Date;
    let (date_formats, pattern) = lookup(data, kind, &options.format)?;
    let pattern = substitute_names(pattern, date_formats, at);
    strftime(kind, &pattern, at)
}

/// Format `at` with the locale's named time pattern.
pub fn format_time<Tz>(
    data: &LocaleData,
    at: &DateTime<Tz>,
    options: &FormatOptions,
) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let kind = FormatKind::Time;
    let (_, pattern) = lookup(data, kind, &options.format)?;
    strftime(kind, pattern, at)
}

/// Resolve `formats.<kind>` and the named pattern inside its table.
fn lookup<'a>(
    data: &'a LocaleData,
    kind: FormatKind,
    name: &str,
) -> Result<(&'a Mapping, &'a str)> {
    let formats = data
        .get(FORMATS_KEY)
        .and_then(Value::as_mapping)
        .ok_or(I18nError::MissingFormatsRoot { kind })?;

    let type_formats = formats
        .get(kind.key())
        .and_then(Value::as_mapping)
        .ok_or(I18nError::MissingTypeFormats { kind })?;

    let table = type_formats
        .get(FORMATS_KEY)
        .and_then(Value::as_mapping)
        .ok_or(I18nError::MissingFormatTable { kind })?;

    let pattern = table
        .get(name)
        .and_then(Value::as_str)
        .ok_or_else(|| I18nError::UnknownFormatName {
            kind,
            name: name.to_owned(),
        })?;

    Ok((type_formats, pattern))
}

/// Replace `%a %A %b %B` from the name tables in `date_formats`.
///
/// An unresolved placeholder is re-escaped as `%%a` so strftime emits the
/// literal `%a`.
fn substitute_names<'p, Tz: TimeZone>(
    pattern: &'p str,
    date_formats: &Mapping,
    at: &DateTime<Tz>,
) -> Cow<'p, str> {
    DIRECTIVE.replace_all(pattern, |caps: &Captures<'_>| {
        let directive = &caps[0];
        let Some(placeholder) = Placeholder::from_directive(directive) else {
            return directive.to_owned();
        };

        let index = placeholder.index(at);
        let name = date_formats
            .get(placeholder.table())
            .and_then(Value::as_sequence)
            .and_then(|names| names.get(index))
            .map(Value::to_string);

        match name {
            Some(name) => escape_percent(&name),
            None => {
                debug!(
                    placeholder = directive,
                    table = placeholder.table(),
                    index,
                    "date name unavailable, keeping placeholder"
                );
                format!("%{directive}")
            }
        }
    })
}

/// Names are literal text; a `%` inside one must not reach strftime as a
/// directive.
fn escape_percent(name: &str) -> String {
    name.replace('%', "%%")
}

fn strftime<Tz>(kind: FormatKind, pattern: &str, at: &DateTime<Tz>) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let invalid = || I18nError::Strftime {
        kind,
        format: pattern.to_owned(),
    };

    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(invalid());
    }

    let mut out = String::with_capacity(pattern.len() + 16);
    write!(out, "{}", at.format_with_items(items.iter())).map_err(|_| invalid())?;
    Ok(out)
}
