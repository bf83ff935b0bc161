//! The outcome algebra: bindings trees and failure sentinels.
//!
//! A match outcome is a [`MatchResult`]: either a [`Bindings`] tree whose
//! shape mirrors the pattern, or a [`MatchFailure`]. Composite patterns
//! (lists, records) succeed *at their own level* and embed a further
//! `MatchResult` per coordinate, so a partial mismatch is recorded where it
//! happened instead of aborting the enclosing match. Use
//! [`Bindings::is_complete`] or [`Bindings::first_failure`] to interrogate
//! a composite outcome for embedded failures.

use std::fmt;

use rustc_hash::FxHashMap;
use weft_ir::Value;

/// Why a match failed.
///
/// Exactly two kinds, and never a Rust error: mismatches are an expected,
/// first-class result of matching. The `Display` forms are the canonical
/// sentinel tokens, stable for logs and diagnostics.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MatchFailure {
    /// The pattern was null, or the value was the no-value marker.
    /// Signals a usage/input-shape problem rather than a semantic mismatch.
    NullOrUndefined,
    /// Pattern and value are both present but structurally or by-value
    /// incompatible.
    NoMatch,
}

impl fmt::Display for MatchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchFailure::NullOrUndefined => write!(f, "NULL_OR_UNDEFINED"),
            MatchFailure::NoMatch => write!(f, "NO_MATCH"),
        }
    }
}

/// Outcome of one `match_value` call.
pub type MatchResult = Result<Bindings, MatchFailure>;

/// The success half of an outcome: what each pattern sub-part matched.
#[derive(Clone, Debug, PartialEq)]
pub enum Bindings {
    /// A wildcard matched; nothing was captured.
    Empty,
    /// A primitive matched; the binding is the matched value itself, so
    /// composite outcomes can report which scalar matched at each
    /// coordinate.
    Value(Value),
    /// A variable bound the whole value to a name, the one-entry mapping
    /// `{name: value}`.
    Bound {
        /// The variable's name.
        name: String,
        /// The value it captured.
        value: Value,
    },
    /// Regex captures: the full match at index 0, then one entry per
    /// capture group (`None` for groups that did not participate).
    Captures(Vec<Option<String>>),
    /// Per-index outcomes of a list match, one per pattern element.
    List(Vec<MatchResult>),
    /// Per-key outcomes of a record match, keyed by the pattern's keys.
    Record(FxHashMap<String, MatchResult>),
}

impl Bindings {
    /// Deep success test: true iff no failure is embedded anywhere in the
    /// tree.
    pub fn is_complete(&self) -> bool {
        match self {
            Bindings::Empty
            | Bindings::Value(_)
            | Bindings::Bound { .. }
            | Bindings::Captures(_) => true,
            Bindings::List(items) => items
                .iter()
                .all(|result| matches!(result, Ok(b) if b.is_complete())),
            Bindings::Record(entries) => entries
                .values()
                .all(|result| matches!(result, Ok(b) if b.is_complete())),
        }
    }

    /// The first embedded failure in document order, if any.
    ///
    /// Document order is list entries by index, record entries by sorted
    /// key. Returns `None` exactly when [`Bindings::is_complete`] is true.
    pub fn first_failure(&self) -> Option<MatchFailure> {
        match self {
            Bindings::Empty
            | Bindings::Value(_)
            | Bindings::Bound { .. }
            | Bindings::Captures(_) => None,
            Bindings::List(items) => items.iter().find_map(result_failure),
            Bindings::Record(entries) => {
                let mut keys: Vec<_> = entries.keys().collect();
                keys.sort();
                keys.into_iter().find_map(|key| result_failure(&entries[key]))
            }
        }
    }

    /// Collect every variable binding in the tree into a flat map.
    ///
    /// Sharp edge: the engine never unifies repeated variable names, so a
    /// name bound at several coordinates is last-write-wins here, in
    /// document order (list entries by index, record entries by sorted
    /// key). Failed coordinates contribute nothing.
    pub fn flatten(&self) -> FxHashMap<String, Value> {
        let mut out = FxHashMap::default();
        self.collect_into(&mut out);
        out
    }

    fn collect_into(&self, out: &mut FxHashMap<String, Value>) {
        match self {
            Bindings::Empty | Bindings::Value(_) | Bindings::Captures(_) => {}
            Bindings::Bound { name, value } => {
                out.insert(name.clone(), value.clone());
            }
            Bindings::List(items) => {
                for bindings in items.iter().flatten() {
                    bindings.collect_into(out);
                }
            }
            Bindings::Record(entries) => {
                let mut keys: Vec<_> = entries.keys().collect();
                keys.sort();
                for key in keys {
                    if let Ok(bindings) = &entries[key] {
                        bindings.collect_into(out);
                    }
                }
            }
        }
    }
}

fn result_failure(result: &MatchResult) -> Option<MatchFailure> {
    match result {
        Ok(bindings) => bindings.first_failure(),
        Err(failure) => Some(*failure),
    }
}

fn fmt_result(result: &MatchResult) -> String {
    match result {
        Ok(bindings) => bindings.to_string(),
        Err(failure) => failure.to_string(),
    }
}

impl fmt::Display for Bindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bindings::Empty => write!(f, "{{}}"),
            Bindings::Value(value) => write!(f, "{value}"),
            Bindings::Bound { name, value } => write!(f, "{{{name}: {value}}}"),
            Bindings::Captures(groups) => {
                let inner: Vec<_> = groups
                    .iter()
                    .map(|group| group.as_deref().unwrap_or("undefined").to_string())
                    .collect();
                write!(f, "[{}]", inner.join(", "))
            }
            Bindings::List(items) => {
                let inner: Vec<_> = items.iter().map(fmt_result).collect();
                write!(f, "[{}]", inner.join(", "))
            }
            Bindings::Record(entries) => {
                let mut keys: Vec<_> = entries.keys().collect();
                keys.sort();
                let inner: Vec<_> = keys
                    .into_iter()
                    .map(|key| format!("{key}: {}", fmt_result(&entries[key])))
                    .collect();
                write!(f, "{{{}}}", inner.join(", "))
            }
        }
    }
}
