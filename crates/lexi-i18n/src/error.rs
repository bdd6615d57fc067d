use core::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, I18nError>;

/// Which format table a date/time operation reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    Date,
    Time,
}

impl FormatKind {
    /// Key of this kind's subtree under `formats`.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Time => "time",
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Errors from loading a locale or formatting a date/time.
///
/// Translation lookups never fail; they fall back to the requested key.
#[derive(Debug, Error)]
pub enum I18nError {
    /// The locale store could not produce the locale's data.
    #[error("{source}")]
    Load {
        locale: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// No `formats` mapping at the root of the locale data.
    #[error("failed to format {kind}: could not read formats definition")]
    MissingFormatsRoot { kind: FormatKind },

    /// `formats.<kind>` is missing or not a mapping.
    #[error("failed to format {kind}: could not read '{kind}' formats")]
    MissingTypeFormats { kind: FormatKind },

    /// `formats.<kind>.formats` is missing or not a mapping.
    #[error("failed to format {kind}: could not read '{kind}' format table")]
    MissingFormatTable { kind: FormatKind },

    /// The requested format name has no string entry in the table.
    #[error("failed to format {kind}: failed to read format '{name}'")]
    UnknownFormatName { kind: FormatKind, name: String },

    /// The strftime expansion rejected the format string or timestamp.
    #[error("failed to format {kind}: invalid format string '{format}'")]
    Strftime { kind: FormatKind, format: String },
}

impl I18nError {
    #[must_use]
    pub fn load(
        locale: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        Self::Load {
            locale: locale.into(),
            source: source.into(),
        }
    }
}
