//! Pattern terms.
//!
//! A `Pattern` is the template side of a match: an immutable tree built
//! from primitives, wildcards, named variables, regular expressions, lists
//! and records. Construction is the only fallible operation (regex
//! compilation); once built, a pattern is inert data for the engine to
//! dispatch on.
//!
//! Heap-backed variants (`Variable`, `Str`, `List`, `Record`) are created
//! through factory methods so every allocation goes through [`Heap`].

use std::fmt;

use regex::Regex;
use rustc_hash::FxHashMap;

use crate::errors::PatternError;
use crate::heap::Heap;

/// The pre-built wildcard pattern.
///
/// This is the `_` of the matching notation (`_` itself is not a legal
/// Rust identifier). It matches any present value and binds nothing.
pub const WILDCARD: Pattern = Pattern::Wildcard;

/// A structural pattern.
#[derive(Clone, Debug)]
pub enum Pattern {
    /// Matches any present value, capturing nothing.
    Wildcard,
    /// Always matches a present value, binding it to the held name.
    Variable(Heap<String>),
    /// The null/undefined pattern. Never accepted by the engine: it fails
    /// the absence guard before any shape rule applies.
    Null,
    /// Integer literal.
    Int(i64),
    /// Floating-point literal. A NaN literal matches a NaN value even
    /// though NaN is never `==`-equal to itself.
    Float(f64),
    /// Boolean literal.
    Bool(bool),
    /// String literal.
    Str(Heap<String>),
    /// Compiled regular expression; matches strings, propagating captures.
    Regex(Regex),
    /// Ordered sequence of sub-patterns, matched positionally.
    List(Heap<Vec<Pattern>>),
    /// Keyed sub-patterns, matched by field lookup on the value.
    Record(Heap<FxHashMap<String, Pattern>>),
}

// Factory methods (the only way to build heap-backed patterns)

impl Pattern {
    /// Create a variable pattern bound to `name`.
    #[inline]
    pub fn variable(name: impl Into<String>) -> Self {
        Pattern::Variable(Heap::new(name.into()))
    }

    /// Create a string-literal pattern.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Pattern::Str(Heap::new(s.into()))
    }

    /// Compile `pattern` into a regex pattern.
    pub fn regex(pattern: &str) -> Result<Self, PatternError> {
        match Regex::new(pattern) {
            Ok(re) => Ok(Pattern::Regex(re)),
            Err(source) => Err(PatternError::InvalidRegex {
                pattern: pattern.to_string(),
                source,
            }),
        }
    }

    /// Create a list pattern.
    #[inline]
    pub fn list(items: Vec<Pattern>) -> Self {
        Pattern::List(Heap::new(items))
    }

    /// Create a record pattern from key/sub-pattern entries.
    ///
    /// Later entries overwrite earlier ones at the same key.
    pub fn record<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Pattern)>,
    {
        let map: FxHashMap<String, Pattern> = entries
            .into_iter()
            .map(|(key, pattern)| (key.into(), pattern))
            .collect();
        Pattern::Record(Heap::new(map))
    }

    /// Short category name for logs and error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Pattern::Wildcard => "wildcard",
            Pattern::Variable(_) => "variable",
            Pattern::Null => "null",
            Pattern::Int(_) => "int",
            Pattern::Float(_) => "float",
            Pattern::Bool(_) => "bool",
            Pattern::Str(_) => "str",
            Pattern::Regex(_) => "regex",
            Pattern::List(_) => "list",
            Pattern::Record(_) => "record",
        }
    }
}

/// Structural term equality.
///
/// Regexes compare by source text; NaN literals compare equal to each
/// other so a pattern always equals a clone of itself.
impl PartialEq for Pattern {
    #[expect(clippy::float_cmp, reason = "term equality is exact, with NaN handled explicitly")]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Pattern::Wildcard, Pattern::Wildcard) | (Pattern::Null, Pattern::Null) => true,
            (Pattern::Variable(a), Pattern::Variable(b)) => a == b,
            (Pattern::Int(a), Pattern::Int(b)) => a == b,
            (Pattern::Float(a), Pattern::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Pattern::Bool(a), Pattern::Bool(b)) => a == b,
            (Pattern::Str(a), Pattern::Str(b)) => a == b,
            (Pattern::Regex(a), Pattern::Regex(b)) => a.as_str() == b.as_str(),
            (Pattern::List(a), Pattern::List(b)) => **a == **b,
            (Pattern::Record(a), Pattern::Record(b)) => **a == **b,
            _ => false,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Wildcard => write!(f, "_"),
            Pattern::Variable(name) => write!(f, "${name}"),
            Pattern::Null => write!(f, "null"),
            Pattern::Int(n) => write!(f, "{n}"),
            Pattern::Float(x) => write!(f, "{x}"),
            Pattern::Bool(b) => write!(f, "{b}"),
            Pattern::Str(s) => write!(f, "\"{s}\""),
            Pattern::Regex(re) => write!(f, "/{}/", re.as_str()),
            Pattern::List(items) => {
                let inner: Vec<_> = items.iter().map(Pattern::to_string).collect();
                write!(f, "[{}]", inner.join(", "))
            }
            Pattern::Record(fields) => {
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
