use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt::{self, Write as _};

/// One attribute value of a country record.
///
/// Records are schema-less, so a value is one of a handful of shapes. A list of
/// strings (e.g. spoken languages) is a [`Value::List`] of [`Value::Text`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Number(f64),
    Bool(bool),
    List(Vec<Value>),
    Nested(BTreeMap<String, Value>),
}

impl Value {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_nested(&self) -> Option<&BTreeMap<String, Self>> {
        match self {
            Self::Nested(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up `key` when this value is a nested record.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_nested().and_then(|map| map.get(key))
    }

    /// Non-empty text, list or record, a non-zero number, or `true`.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Text(text) => !text.is_empty(),
            Self::Number(n) => *n != 0.0,
            Self::Bool(b) => *b,
            Self::List(items) => !items.is_empty(),
            Self::Nested(map) => !map.is_empty(),
        }
    }

    /// The text form used for display and case-insensitive comparison.
    #[must_use]
    pub fn text_form(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text),
            other => Cow::Owned(other.to_string()),
        }
    }
}

/// Labels follow the conventional text form of the record data: `True` and
/// `False` for booleans, lists joined with `, `, and nested records written as
/// `{'key': 'value'}` literals.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            },
            Self::Nested(_) => write!(f, "{}", Literal(self)),
        }
    }
}

/// A value written as a literal: quoted text, bracketed lists, braced records.
struct Literal<'a>(&'a Value);

impl fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Text(text) => write_quoted(f, text),
            Value::Number(_) | Value::Bool(_) => write!(f, "{}", self.0),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", Literal(item))?;
                }
                f.write_str("]")
            },
            Value::Nested(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write_quoted(f, key)?;
                    write!(f, ": {}", Literal(value))?;
                }
                f.write_str("}")
            },
        }
    }
}

/// Single quotes unless the text holds a `'` and no `"`.
fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    let quote = if text.contains('\'') && !text.contains('"') { '"' } else { '\'' };
    f.write_char(quote)?;
    for c in text.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => {
                f.write_char('\\')?;
                f.write_char(c)?;
            },
            c => f.write_char(c)?,
        }
    }
    f.write_char(quote)
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self::Nested(map)
    }
}

// Nulls inside lists and records are dropped so that "absent" has exactly one
// representation: the key (or element) is simply not there.
impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number, boolean, list or map")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        Ok(Value::Number(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Number(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::Text(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::Text(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or_default());
        while let Some(item) = seq.next_element::<Option<Value>>()? {
            items.extend(item);
        }
        Ok(Value::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Value, A::Error> {
        let mut map = BTreeMap::new();
        while let Some((key, value)) = access.next_entry::<String, Option<Value>>()? {
            if let Some(value) = value {
                map.insert(key, value);
            }
        }
        Ok(Value::Nested(map))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_form_of_scalars_and_lists() {
        assert_eq!(Value::from("Rue").text_form(), "Rue");
        assert_eq!(Value::from(12_i64).text_form(), "12");
        assert_eq!(Value::from(7.5).text_form(), "7.5");
        assert_eq!(Value::from(vec!["Spanish", "English"]).text_form(), "Spanish, English");
    }

    #[test]
    fn text_form_of_booleans_and_records() {
        assert_eq!(Value::from(true).text_form(), "True");
        assert_eq!(Value::from(false).text_form(), "False");

        let record: Value =
            serde_json::from_str(r#"{"colour": "red", "stripes": 3, "plain": false, "tags": ["a", "it's"]}"#)
                .expect("valid record");
        assert_eq!(
            record.to_string(),
            r#"{'colour': 'red', 'plain': False, 'stripes': 3, 'tags': ['a', "it's"]}"#
        );
        assert_eq!(Value::Nested(BTreeMap::new()).to_string(), "{}");
    }

    #[test]
    fn truthiness_follows_emptiness() {
        assert!(!Value::from("").is_truthy());
        assert!(!Value::List(Vec::new()).is_truthy());
        assert!(!Value::Nested(BTreeMap::new()).is_truthy());
        assert!(!Value::from(0.0).is_truthy());
        assert!(Value::from(vec!["tip"]).is_truthy());
    }
}
