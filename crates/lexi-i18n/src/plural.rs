//! Count selectors for plural translation entries.
//!
//! A plural entry is a mapping whose keys are selectors:
//!
//! | Selector | Matches |
//! |----------|---------|
//! | `"3"` | count == 3 (no leading zeros) |
//! | `"2..4"` | 2 <= count <= 4 |
//! | `"5.."` | count >= 5 |
//! | `"other"` | only consulted when count <= 0 |
//!
//! Any other key is inert and never matches.
//!
//! # Invariants
//!
//! 1. Selectors are tried in the mapping's insertion order; the first match
//!    wins.
//! 2. `other` is the fallback for `count <= 0` only. A positive count that
//!    matches nothing selects nothing, even when `other` exists.
//! 3. Selection is a pure function of the entry and the count.

use core::fmt;

use crate::value::{Mapping, Value};

/// Reserved selector for the non-positive count fallback.
pub const OTHER: &str = "other";

/// A parsed selector key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    /// The reserved `other` key.
    Other,
    /// An exact count.
    Exact(u64),
    /// An inclusive range; `end == None` is open-ended.
    Range { start: u64, end: Option<u64> },
}

impl Selector {
    /// Parse a selector key. Returns `None` for keys that are not selectors.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        if key == OTHER {
            return Some(Self::Other);
        }

        if let Some((start, end)) = key.split_once("..") {
            let start = parse_digits(start)?;
            let end = if end.is_empty() {
                None
            } else {
                Some(parse_digits(end)?)
            };
            return Some(Self::Range { start, end });
        }

        // Exact selectors match the count's decimal text, so `"01"` is inert.
        if key.len() > 1 && key.starts_with('0') {
            return None;
        }
        parse_digits(key).map(Self::Exact)
    }

    /// Whether `count` satisfies this selector. `Other` never matches.
    #[must_use]
    pub fn matches(self, count: i64) -> bool {
        let Ok(count) = u64::try_from(count) else {
            return false;
        };
        match self {
            Self::Other => false,
            Self::Exact(n) => count == n,
            Self::Range { start, end } => count >= start && end.is_none_or(|end| count <= end),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Other => f.write_str(OTHER),
            Self::Exact(n) => write!(f, "{n}"),
            Self::Range { start, end: None } => write!(f, "{start}.."),
            Self::Range {
                start,
                end: Some(end),
            } => write!(f, "{start}..{end}"),
        }
    }
}

/// Outcome of choosing a form from a plural entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    /// `count <= 0` and the entry has an `other` form.
    Other(&'a Value),
    /// A selector matched a positive count.
    Matched(&'a Value),
    /// Nothing applies; callers fall back to the translation key.
    Unmatched,
}

/// Choose the form of a plural entry for `count`.
#[must_use]
pub fn select(forms: &Mapping, count: i64) -> Selection<'_> {
    if count <= 0 {
        return forms.get(OTHER).map_or(Selection::Unmatched, Selection::Other);
    }

    forms
        .iter()
        .filter(|(key, _)| key.as_str() != OTHER)
        .find(|(key, _)| Selector::parse(key).is_some_and(|sel| sel.matches(count)))
        .map_or(Selection::Unmatched, |(_, value)| Selection::Matched(value))
}

fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forms() -> Mapping {
        [
            ("1", Value::from("a")),
            ("2..", Value::from("b ({{.count}})")),
            ("other", Value::from("c")),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v))
        .collect()
    }

    // ── Parsing ─────────────────────────────────────────────────────

    #[test]
    fn parse_exact() {
        assert_eq!(Selector::parse("1"), Some(Selector::Exact(1)));
        assert_eq!(Selector::parse("0"), Some(Selector::Exact(0)));
    }

    #[test]
    fn zero_padded_exact_is_inert() {
        assert_eq!(Selector::parse("042"), None);
        assert_eq!(Selector::parse("00"), None);
        // Range bounds compare numerically.
        assert_eq!(
            Selector::parse("01..03"),
            Some(Selector::Range {
                start: 1,
                end: Some(3)
            })
        );
    }

    #[test]
    fn parse_ranges() {
        assert_eq!(
            Selector::parse("1..2"),
            Some(Selector::Range {
                start: 1,
                end: Some(2)
            })
        );
        assert_eq!(
            Selector::parse("2.."),
            Some(Selector::Range {
                start: 2,
                end: None
            })
        );
    }

    #[test]
    fn parse_other() {
        assert_eq!(Selector::parse("other"), Some(Selector::Other));
    }

    #[test]
    fn parse_rejects_non_selectors() {
        for key in ["", "..", "..3", "one", "-1", "1...", "1..x", "1-5", " 1", "1.5"] {
            assert_eq!(Selector::parse(key), None, "{key:?} should not parse");
        }
    }

    #[test]
    fn parse_rejects_overflow() {
        assert_eq!(Selector::parse("99999999999999999999999"), None);
    }

    #[test]
    fn display_round_trips_canonical_forms() {
        for key in ["other", "7", "1..2", "3.."] {
            assert_eq!(Selector::parse(key).unwrap().to_string(), key);
        }
    }

    // ── Matching ────────────────────────────────────────────────────

    #[test]
    fn exact_matches_only_its_count() {
        let sel = Selector::Exact(3);
        assert!(sel.matches(3));
        assert!(!sel.matches(2));
        assert!(!sel.matches(4));
    }

    #[test]
    fn closed_range_is_inclusive() {
        let sel = Selector::parse("1..2").unwrap();
        assert!(!sel.matches(0));
        assert!(sel.matches(1));
        assert!(sel.matches(2));
        assert!(!sel.matches(3));
    }

    #[test]
    fn open_range_has_no_upper_bound() {
        let sel = Selector::parse("2..").unwrap();
        assert!(!sel.matches(1));
        assert!(sel.matches(2));
        assert!(sel.matches(i64::MAX));
    }

    #[test]
    fn negative_counts_never_match() {
        assert!(!Selector::parse("0..").unwrap().matches(-1));
        assert!(!Selector::Other.matches(-1));
    }

    // ── Selection ───────────────────────────────────────────────────

    #[test]
    fn non_positive_count_selects_other() {
        let forms = forms();
        assert_eq!(select(&forms, 0), Selection::Other(&Value::from("c")));
        assert_eq!(select(&forms, -5), Selection::Other(&Value::from("c")));
    }

    #[test]
    fn non_positive_count_without_other_is_unmatched() {
        let forms: Mapping = [("1".to_owned(), Value::from("a"))].into_iter().collect();
        assert_eq!(select(&forms, 0), Selection::Unmatched);
    }

    #[test]
    fn positive_count_scans_in_order() {
        let forms = forms();
        assert_eq!(select(&forms, 1), Selection::Matched(&Value::from("a")));
        assert_eq!(
            select(&forms, 5),
            Selection::Matched(&Value::from("b ({{.count}})"))
        );
    }

    #[test]
    fn first_matching_selector_wins() {
        let forms: Mapping = [("1..10", "wide"), ("3", "narrow")]
            .into_iter()
            .map(|(k, v)| (k.to_owned(), Value::from(v)))
            .collect();
        assert_eq!(select(&forms, 3), Selection::Matched(&Value::from("wide")));
    }

    #[test]
    fn zero_padded_key_never_selected() {
        let forms: Mapping = [("01", "padded"), ("1", "plain")]
            .into_iter()
            .map(|(k, v)| (k.to_owned(), Value::from(v)))
            .collect();
        assert_eq!(select(&forms, 1), Selection::Matched(&Value::from("plain")));
    }

    #[test]
    fn exhausted_selectors_ignore_other() {
        let forms: Mapping = [("1..2", "few"), ("other", "many")]
            .into_iter()
            .map(|(k, v)| (k.to_owned(), Value::from(v)))
            .collect();
        assert_eq!(select(&forms, 3), Selection::Unmatched);
    }
}
