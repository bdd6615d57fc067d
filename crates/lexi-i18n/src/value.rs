//! Nested locale data.
//!
//! A locale is a tree of [`Value`]s rooted at a [`LocaleData`] mapping.
//! Mappings preserve insertion order, which is significant for plural
//! selectors (the first matching selector wins).
//!
//! # Invariants
//!
//! 1. **Three shapes only**: every node is a string, a mapping, or a
//!    sequence. Scalars from structured text (numbers, booleans, null) are
//!    converted to strings when the data is built.
//! 2. **Checked access**: the `as_*` accessors return `None` on a shape
//!    mismatch; callers decide whether that is a fallback or an error.

use core::fmt;

use indexmap::IndexMap;

/// Insertion-ordered mapping from string keys to values.
pub type Mapping = IndexMap<String, Value>;

/// The root of one locale's data.
pub type LocaleData = Mapping;

/// A node in a locale's data tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A leaf string.
    String(String),
    /// A nested, insertion-ordered mapping.
    Mapping(Mapping),
    /// An ordered list (used for month and day name tables).
    Sequence(Vec<Value>),
}

impl Value {
    /// The string content, if this is a leaf.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The nested mapping, if this is a mapping.
    #[must_use]
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(m) => Some(m),
            _ => None,
        }
    }

    /// The items, if this is a sequence.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Build a mapping value from `(key, value)` pairs, keeping their order.
    pub fn mapping<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Mapping(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build a sequence value.
    pub fn sequence<V: Into<Value>>(items: impl IntoIterator<Item = V>) -> Self {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }
}

/// Renders leaves verbatim, sequences as `[a b]` and mappings as
/// `map[k:v k2:v2]` in insertion order.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Mapping(map) => {
                f.write_str("map[")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{key}:{value}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Mapping> for Value {
    fn from(m: Mapping) -> Self {
        Self::Mapping(m)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Sequence(items)
    }
}

// ── Deserialization ─────────────────────────────────────────────────

#[cfg(feature = "serde")]
mod de {
    use core::fmt;

    use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

    use super::{Mapping, Value};

    impl<'de> Deserialize<'de> for Value {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(ValueVisitor)
        }
    }

    struct ValueVisitor;

    impl<'de> Visitor<'de> for ValueVisitor {
        type Value = Value;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string, scalar, sequence or mapping")
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
            Ok(Value::String(v.to_string()))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
            Ok(Value::String(v.to_string()))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
            Ok(Value::String(v.to_string()))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
            Ok(Value::String(v.to_string()))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
            Ok(Value::String(v.to_owned()))
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
            Ok(Value::String(v))
        }

        // Null leaves become empty strings.
        fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
            Ok(Value::String(String::new()))
        }

        fn visit_none<E: de::Error>(self) -> Result<Value, E> {
            Ok(Value::String(String::new()))
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
            Value::deserialize(deserializer)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
            let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(item) = seq.next_element::<Value>()? {
                items.push(item);
            }
            Ok(Value::Sequence(items))
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
            let mut entries = Mapping::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(Key(key)) = map.next_key::<Key>()? {
                let value = map.next_value::<Value>()?;
                entries.insert(key, value);
            }
            Ok(Value::Mapping(entries))
        }
    }

    /// A mapping key; scalar keys such as `1` are read as their text.
    struct Key(String);

    impl<'de> Deserialize<'de> for Key {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(KeyVisitor)
        }
    }

    struct KeyVisitor;

    impl Visitor<'_> for KeyVisitor {
        type Value = Key;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a scalar mapping key")
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<Key, E> {
            Ok(Key(v.to_string()))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Key, E> {
            Ok(Key(v.to_string()))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Key, E> {
            Ok(Key(v.to_string()))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Key, E> {
            Ok(Key(v.to_string()))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Key, E> {
            Ok(Key(v.to_owned()))
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<Key, E> {
            Ok(Key(v))
        }

        fn visit_unit<E: de::Error>(self) -> Result<Key, E> {
            Ok(Key("null".to_owned()))
        }
    }
}
