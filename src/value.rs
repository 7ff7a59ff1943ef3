//! Renderable values and argument mappings.
//!
//! A [`Value`] is anything a writer can put on a line: plain text, scalars,
//! ordered collections, and string-keyed mappings (used as template
//! arguments). Values deserialize from YAML/JSON without tags so program
//! files can spell them naturally.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Mapping from placeholder name to value, passed to templates.
pub type Args = BTreeMap<String, Value>;

/// A value the writer knows how to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum Value {
    /// Absent value; renders as an empty string.
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Text, written verbatim.
    Text(String),
    /// Ordered collection; written as a joined, quoted line.
    List(Vec<Value>),
    /// Argument mapping.
    Map(Args),
}

impl Value {
    /// Borrow the text if this is a [`Value::Text`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Non-negative integer view, used for widths and counts.
    pub fn as_usize(&self) -> Option<usize> {
        match self {
            Value::Int(n) => usize::try_from(*n).ok(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Args> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            // Whole numbers keep a trailing ".0" so floats stay distinct from ints.
            Value::Float(x) if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e16 => {
                write!(f, "{:.1}", x)
            }
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(s) => f.write_str(s),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Map(map) => {
                f.write_str("{")?;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, item)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Text(s.clone())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! int_into_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Int(n as i64)
                }
            }
        )*
    };
}

int_into_value!(i8, i16, i32, i64, u8, u16, u32);

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Int(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(items: &[T]) -> Self {
        Value::List(items.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<Args> for Value {
    fn from(map: Args) -> Self {
        Value::Map(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Null)
    }
}

/// Build an argument mapping from key-value pairs.
///
/// ```
/// use fancy_writer::{args, Value};
///
/// let a = args([("module", "mime_module"), ("file", "mod_mime")]);
/// assert_eq!(a.get("file"), Some(&Value::from("mod_mime")));
/// ```
pub fn args<I, K, V>(pairs: I) -> Args
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_renders_empty() {
        assert_eq!(Value::Null.to_string(), "");
    }

    #[test]
    fn scalars_render_with_display() {
        assert_eq!(Value::from(42).to_string(), "42");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from(2.5).to_string(), "2.5");
        assert_eq!(Value::from("text").to_string(), "text");
    }

    #[test]
    fn whole_floats_keep_their_fraction() {
        assert_eq!(Value::from(1.0).to_string(), "1.0");
        assert_eq!(Value::from(-3.0).to_string(), "-3.0");
        assert_eq!(Value::from(0.1).to_string(), "0.1");
    }

    #[test]
    fn nested_collections_render_bracketed() {
        let v = Value::from(vec![Value::from(1), Value::from(vec!["a", "b"])]);
        assert_eq!(v.to_string(), "[1, [a, b]]");

        let m = Value::from(args([("x", 4), ("y", 2)]));
        assert_eq!(m.to_string(), "{x: 4, y: 2}");
    }

    #[test]
    fn accessors_only_match_their_variant() {
        assert_eq!(Value::from(4).as_usize(), Some(4));
        assert_eq!(Value::from(-4).as_usize(), None);
        assert_eq!(Value::from("4").as_usize(), None);
        assert_eq!(Value::from(false).as_bool(), Some(false));
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert!(Value::from(args([("a", 1)])).as_map().is_some());
        assert!(Value::from(None::<&str>).is_null());
    }

    #[test]
    fn deserializes_untagged_from_yaml() {
        let yaml = "[1, 2.5, text, true, null, [a, b], {name: Heidi}]";
        let values: Vec<Value> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            values,
            vec![
                Value::Int(1),
                Value::Float(2.5),
                Value::from("text"),
                Value::Bool(true),
                Value::Null,
                Value::from(vec!["a", "b"]),
                Value::Map(args([("name", "Heidi")])),
            ]
        );
    }

    #[test]
    fn deserializes_untagged_from_json() {
        let values: Vec<Value> = serde_json::from_str(r#"[{"x": 4}, "y"]"#).unwrap();
        assert_eq!(values[0], Value::Map(args([("x", 4)])));
        assert_eq!(values[1], Value::from("y"));
    }
}
