//! Input values for the matcher.
//!
//! The value universe mirrors the pattern universe, plus [`Value::Absent`]:
//! the designated "no value here" marker, distinct from [`Value::Null`].
//! `Null` is a present value (wildcards and variables accept it), while
//! `Absent` is rejected by the engine's absence guard. Coordinate lookups
//! ([`Value::field`], [`Value::index`]) are total and return `Absent` on
//! any miss, including lookups on values that are not records or lists at
//! all; this is what lets the record rule run against values of any shape.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::heap::Heap;

static ABSENT: Value = Value::Absent;

/// A runtime value presented to the matcher.
#[derive(Clone, Debug)]
pub enum Value {
    /// Explicit null. Present, and therefore matchable.
    Null,
    /// The no-value marker. Never matched by anything.
    Absent,
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Boolean value.
    Bool(bool),
    /// String value.
    Str(Heap<String>),
    /// Ordered sequence of values.
    List(Heap<Vec<Value>>),
    /// Keyed mapping from field names to values.
    Record(Heap<FxHashMap<String, Value>>),
}

// Factory methods (the only way to build heap-backed values)

impl Value {
    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create a list value.
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// Create a record value from key/value entries.
    ///
    /// Later entries overwrite earlier ones at the same key.
    pub fn record<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let map: FxHashMap<String, Value> = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value))
            .collect();
        Value::Record(Heap::new(map))
    }

    /// Whether this is the no-value marker.
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Look up a field by name.
    ///
    /// Total: returns [`Value::Absent`] for a missing key and for any
    /// receiver that is not a record.
    pub fn field(&self, key: &str) -> &Value {
        match self {
            Value::Record(fields) => fields.get(key).unwrap_or(&ABSENT),
            _ => &ABSENT,
        }
    }

    /// Look up a list element by position.
    ///
    /// Total: returns [`Value::Absent`] past the end and for any receiver
    /// that is not a list.
    pub fn index(&self, i: usize) -> &Value {
        match self {
            Value::List(items) => items.get(i).unwrap_or(&ABSENT),
            _ => &ABSENT,
        }
    }

    /// Short category name for logs and error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Absent => "absent",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Record(_) => "record",
        }
    }
}

/// Structural term equality.
///
/// NaN compares equal to itself here so outcome trees containing NaN
/// bindings are comparable. This is *term* equality, not the matcher's
/// primitive-equality rule; that rule lives in the engine and keeps IEEE
/// semantics, with its own NaN case dispatched first.
impl PartialEq for Value {
    #[expect(clippy::float_cmp, reason = "term equality is exact, with NaN handled explicitly")]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) | (Value::Absent, Value::Absent) => true,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => **a == **b,
            (Value::Record(a), Value::Record(b)) => **a == **b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Absent => write!(f, "undefined"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::List(items) => {
                let inner: Vec<_> = items.iter().map(Value::to_string).collect();
                write!(f, "[{}]", inner.join(", "))
            }
            Value::Record(fields) => {
                let mut keys: Vec<_> = fields.keys().collect();
                keys.sort();
                let inner: Vec<_> = keys
                    .into_iter()
                    .map(|key| format!("{key}: {}", fields[key]))
                    .collect();
                write!(f, "{{{}}}", inner.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests;
