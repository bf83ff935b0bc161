//! Weft Match - structural matching engine.
//!
//! Matches a [`Pattern`] against a [`Value`], producing either a
//! [`Bindings`] tree (success) or a [`MatchFailure`] (no match / invalid
//! input). The single entry point is [`match_value`].
//!
//! # Outcome model: flat and eager
//!
//! `match_value` resolves immediately; there is nothing deferred to
//! await. Composite patterns (lists, records) succeed at their own level
//! and embed one [`MatchResult`] per coordinate, so a nested mismatch is
//! recorded *where it happened* and never aborts the enclosing match; only
//! a top-level mismatch comes back as `Err`. Interrogate composites with
//! [`Bindings::is_complete`] and [`Bindings::first_failure`].
//!
//! # What this is not
//!
//! Not a unification engine: a variable name appearing at several
//! coordinates produces independent bindings that are never cross-checked,
//! and matching never backtracks. [`Bindings::flatten`] collapses repeated
//! names last-write-wins, a documented sharp edge.
//!
//! # Example
//!
//! ```
//! use weft_match::{match_value, Bindings, Pattern, Value, WILDCARD};
//!
//! let pattern = Pattern::record([
//!     ("x", Pattern::variable("x")),
//!     ("tag", Pattern::string("point")),
//!     ("rest", WILDCARD),
//! ]);
//! let value = Value::record([
//!     ("x", Value::Int(3)),
//!     ("tag", Value::string("point")),
//!     ("rest", Value::Null),
//!     ("ignored", Value::Bool(true)),
//! ]);
//!
//! let outcome = match_value(&pattern, &value)?;
//! assert!(outcome.is_complete());
//! assert_eq!(outcome.flatten()["x"], Value::Int(3));
//! # Ok::<(), weft_match::MatchFailure>(())
//! ```

mod bindings;
mod engine;

pub use bindings::{Bindings, MatchFailure, MatchResult};
pub use engine::match_value;

// Re-export the term model so callers need only one crate.
pub use weft_ir::{Heap, Pattern, PatternError, Value, WILDCARD};
