//! The matcher: one recursive dispatch over the pattern tag.
//!
//! Rule order matters because the categories overlap (NaN is also a
//! float): absence guard, wildcard, variable, NaN, primitive equality,
//! regex, list, record, fallback. First matching rule wins.
//!
//! Outcomes are flat and eager: [`match_value`] resolves immediately, and
//! only a *top-level* mismatch is returned as `Err`. A mismatch inside a
//! list or record rides along as a failed entry of an otherwise-successful
//! composite bindings tree.

use weft_ir::{Pattern, Value};

use crate::bindings::{Bindings, MatchFailure, MatchResult};

/// Match `pattern` against `value`.
///
/// Pure and side-effect free: both inputs are borrowed immutably and every
/// call produces a fresh outcome. Element matches inside lists and records
/// are independent of one another, so their evaluation order never changes
/// the result.
///
/// Recursion depth equals pattern nesting depth; guarding against
/// pathological nesting is the caller's responsibility.
#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(pattern = pattern.kind_name(), value = value.type_name())
)]
pub fn match_value(pattern: &Pattern, value: &Value) -> MatchResult {
    match pattern {
        // Absence guard: a null pattern or an absent value is rejected
        // before any shape rule, wildcard and variable included. A null
        // *value* passes; only the no-value marker is disallowed.
        Pattern::Null => Err(MatchFailure::NullOrUndefined),
        _ if value.is_absent() => Err(MatchFailure::NullOrUndefined),

        Pattern::Wildcard => Ok(Bindings::Empty),

        Pattern::Variable(name) => Ok(Bindings::Bound {
            name: name.to_string(),
            value: value.clone(),
        }),

        Pattern::Int(_) | Pattern::Float(_) | Pattern::Bool(_) | Pattern::Str(_) => {
            match_primitive(pattern, value)
        }

        Pattern::Regex(re) => match value {
            Value::Str(s) => match re.captures(s) {
                Some(captures) => Ok(Bindings::Captures(
                    captures
                        .iter()
                        .map(|group| group.map(|m| m.as_str().to_string()))
                        .collect(),
                )),
                None => Err(MatchFailure::NoMatch),
            },
            // With closed tags the regex rule owns its variant: a regex
            // against a non-string is a plain mismatch, never a record.
            _ => Err(MatchFailure::NoMatch),
        },

        // Both sides must be lists. One outcome per *pattern* index:
        // missing value entries match against Absent and embed their
        // failure; extra value entries are ignored. The list-level call
        // itself always succeeds.
        Pattern::List(patterns) => match value {
            Value::List(_) => Ok(Bindings::List(
                patterns
                    .iter()
                    .enumerate()
                    .map(|(i, sub)| match_value(sub, value.index(i)))
                    .collect(),
            )),
            _ => Err(MatchFailure::NoMatch),
        },

        // The record rule fires on the pattern tag alone: field lookup is
        // total and yields Absent on a non-record value or a missing key,
        // so each entry carries its own guard failure. Value keys outside
        // the pattern's key set are ignored.
        Pattern::Record(fields) => Ok(Bindings::Record(
            fields
                .iter()
                .map(|(key, sub)| (key.clone(), match_value(sub, value.field(key))))
                .collect(),
        )),
    }
}

/// Primitive equality over the dynamic categories number, string, boolean.
///
/// The number category spans both `Int` and `Float`; the two halves
/// compare numerically. A matched primitive binds the *value* itself.
#[expect(
    clippy::cast_precision_loss,
    clippy::float_cmp,
    reason = "exact IEEE comparison across the single number category is the contract"
)]
fn match_primitive(pattern: &Pattern, value: &Value) -> MatchResult {
    let matched = match (pattern, value) {
        // NaN matches NaN, the one exception to IEEE equality.
        (Pattern::Float(p), Value::Float(v)) if p.is_nan() && v.is_nan() => true,
        (Pattern::Int(p), Value::Int(v)) => p == v,
        (Pattern::Float(p), Value::Float(v)) => p == v,
        (Pattern::Int(p), Value::Float(v)) => (*p as f64) == *v,
        (Pattern::Float(p), Value::Int(v)) => *p == (*v as f64),
        (Pattern::Bool(p), Value::Bool(v)) => p == v,
        (Pattern::Str(p), Value::Str(v)) => p == v,
        _ => false,
    };
    if matched {
        Ok(Bindings::Value(value.clone()))
    } else {
        Err(MatchFailure::NoMatch)
    }
}
