//! Translation lookup with plural selection and interpolation.
//!
//! Entries live under the `translations` mapping of a locale:
//!
//! ```yaml
//! translations:
//!   hello: world
//!   new_message:
//!     '1': you have a new message
//!     '2..': you have {{.count}} new messages
//!     other: no messages
//! ```
//!
//! # Invariants
//!
//! 1. **Never fails**: every lookup returns a displayable string. Missing
//!    data degrades to the requested key.
//! 2. **Plain strings are verbatim**: only a selected plural form is run
//!    through the template engine.
//! 3. **Pure**: the result depends only on the locale data, the key and the
//!    options.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | No `translations` mapping | Locale has no strings | Returns key |
//! | Missing key | Key not in `translations` | Returns key |
//! | `count <= 0`, no `other` form | Plural entry without fallback | Returns key |
//! | `count > 0`, no selector matches | Selectors exhausted | Returns key, even if `other` exists |
//! | Template parse error | Malformed `{{ }}` in selected form | Returns `""` |
//!
//! The two plural fallbacks are asymmetric: `other` only covers
//! non-positive counts.

use tracing::{debug, trace};

use crate::plural::{self, Selection};
use crate::template;
use crate::value::{LocaleData, Value};

/// Root key holding translation entries.
pub const TRANSLATIONS_KEY: &str = "translations";

/// Variable name bound to the count during interpolation.
pub const COUNT_VAR: &str = "count";

/// Options for a translation lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslateOptions {
    /// Count used for plural selection and `{{.count}}`. Defaults to 0.
    pub count: i64,
}

impl TranslateOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }
}

/// Resolve `key` against `data`.
#[must_use]
pub fn translate(data: &LocaleData, key: &str, options: &TranslateOptions) -> String {
    let Some(entry) = data
        .get(TRANSLATIONS_KEY)
        .and_then(Value::as_mapping)
        .and_then(|translations| translations.get(key))
    else {
        trace!(key, "translation missing, falling back to key");
        return key.to_owned();
    };

    match entry {
        Value::String(text) => text.clone(),
        Value::Mapping(forms) => match plural::select(forms, options.count) {
            Selection::Other(value) => value.to_string(),
            Selection::Matched(value) => interpolate(key, &value.to_string(), options.count),
            Selection::Unmatched => {
                trace!(key, count = options.count, "no plural form matched");
                key.to_owned()
            }
        },
        Value::Sequence(_) => {
            trace!(key, "translation entry is a sequence, falling back to key");
            key.to_owned()
        }
    }
}

/// Render a selected form. Template errors produce an empty string.
fn interpolate(key: &str, form: &str, count: i64) -> String {
    let count = count.to_string();
    template::render(form, &[(COUNT_VAR, count.as_str())]).unwrap_or_else(|err| {
        debug!(key, error = %err, "translation template failed, rendering empty string");
        String::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(translations: Value) -> LocaleData {
        [(TRANSLATIONS_KEY.to_owned(), translations)]
            .into_iter()
            .collect()
    }

    fn english() -> LocaleData {
        data(Value::mapping([
            ("hello", Value::from("world")),
            ("braces", Value::from("literal {{.count}}")),
            (
                "new_message",
                Value::mapping([
                    ("1", "you have a new message"),
                    ("2..", "you have {{.count}} new messages"),
                    ("other", "no messages"),
                ]),
            ),
            ("range_only", Value::mapping([("1..2", "{{.count}} few")])),
            (
                "range_with_other",
                Value::mapping([("1..2", "{{.count}} few"), ("other", "none")]),
            ),
            ("broken", Value::mapping([("1..", "oops {{.count")])),
            ("list", Value::sequence(["a", "b"])),
        ]))
    }

    fn t(data: &LocaleData, key: &str, count: i64) -> String {
        translate(data, key, &TranslateOptions::new().with_count(count))
    }

    // ── Plain lookup ────────────────────────────────────────────────

    #[test]
    fn empty_data_returns_key() {
        let empty = LocaleData::new();
        assert_eq!(t(&empty, "hello", 0), "hello");
        assert_eq!(t(&empty, "", 3), "");
    }

    #[test]
    fn translations_not_a_mapping_returns_key() {
        let data = data(Value::from("oops"));
        assert_eq!(t(&data, "hello", 0), "hello");
    }

    #[test]
    fn missing_key_returns_key() {
        assert_eq!(t(&english(), "nonexistent", 0), "nonexistent");
    }

    #[test]
    fn plain_string_is_verbatim() {
        let data = english();
        assert_eq!(t(&data, "hello", 0), "world");
        assert_eq!(t(&data, "hello", 5), "world");
        assert_eq!(t(&data, "braces", 5), "literal {{.count}}");
    }

    #[test]
    fn sequence_entry_returns_key() {
        assert_eq!(t(&english(), "list", 1), "list");
    }

    #[test]
    fn default_options_use_zero_count() {
        assert_eq!(
            translate(&english(), "new_message", &TranslateOptions::default()),
            "no messages"
        );
    }

    // ── Plural selection ────────────────────────────────────────────

    #[test]
    fn plural_exact_and_open_range() {
        let data = english();
        assert_eq!(t(&data, "new_message", 0), "no messages");
        assert_eq!(t(&data, "new_message", 1), "you have a new message");
        assert_eq!(t(&data, "new_message", 3), "you have 3 new messages");
        assert_eq!(t(&data, "new_message", 1000), "you have 1000 new messages");
    }

    #[test]
    fn negative_count_uses_other() {
        assert_eq!(t(&english(), "new_message", -4), "no messages");
    }

    #[test]
    fn closed_range_bounds() {
        let data = english();
        assert_eq!(t(&data, "range_only", 1), "1 few");
        assert_eq!(t(&data, "range_only", 2), "2 few");
        assert_eq!(t(&data, "range_only", 3), "range_only");
    }

    #[test]
    fn zero_count_without_other_returns_key() {
        assert_eq!(t(&english(), "range_only", 0), "range_only");
    }

    #[test]
    fn positive_count_past_selectors_ignores_other() {
        let data = english();
        assert_eq!(t(&data, "range_with_other", 0), "none");
        assert_eq!(t(&data, "range_with_other", 3), "range_with_other");
    }

    #[test]
    fn other_form_is_not_interpolated() {
        let data = data(Value::mapping([(
            "k",
            Value::mapping([("other", "{{.count}} things")]),
        )]));
        assert_eq!(t(&data, "k", 0), "{{.count}} things");
    }

    #[test]
    fn nested_form_renders_textually() {
        let data = data(Value::mapping([(
            "k",
            Value::mapping([("1", Value::sequence(["x", "y"]))]),
        )]));
        assert_eq!(t(&data, "k", 1), "[x y]");
    }

    // ── Interpolation ───────────────────────────────────────────────

    #[test]
    fn template_error_renders_empty() {
        assert_eq!(t(&english(), "broken", 2), "");
    }

    #[test]
    fn mixed_selectors_with_other() {
        let data = data(Value::mapping([(
            "k",
            Value::mapping([("1", "a"), ("2..", "b ({{.count}})"), ("other", "c")]),
        )]));
        assert_eq!(t(&data, "k", 0), "c");
        assert_eq!(t(&data, "k", 1), "a");
        assert_eq!(t(&data, "k", 5), "b (5)");
    }
}
