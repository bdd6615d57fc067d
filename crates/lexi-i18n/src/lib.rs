#![forbid(unsafe_code)]

//! Locale-aware translation lookup and date/time formatting.
//!
//! A locale is a nested key-value tree ([`LocaleData`]) produced by a
//! [`LocaleStore`]. On top of it this crate provides:
//!
//! - key-based translation with count selectors (`"1"`, `"2..5"`, `"6.."`,
//!   `"other"`) and `{{.count}}` interpolation,
//! - date and time formatting from named strftime patterns, with month and
//!   weekday names taken from the locale.
//!
//! # How it fits in the workspace
//! `lexi-i18n` owns the data model and resolution rules only. Concrete
//! stores (in-memory map, YAML files) live in `lexi-store`, so the core
//! never touches the filesystem.

pub mod datetime;
pub mod error;
pub mod i18n;
pub mod plural;
pub mod store;
pub mod template;
pub mod translate;
pub mod value;

pub use datetime::{DEFAULT_FORMAT, FormatOptions, format_date, format_time};
pub use error::{FormatKind, I18nError, Result};
pub use i18n::I18n;
pub use plural::{Selection, Selector};
pub use store::LocaleStore;
pub use template::TemplateError;
pub use translate::{TranslateOptions, translate};
pub use value::{LocaleData, Mapping, Value};
