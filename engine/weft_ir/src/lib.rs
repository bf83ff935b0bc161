//! Weft IR - term model for the weft structural matcher.
//!
//! This crate provides the two term universes the engine dispatches over:
//! - [`Pattern`]: wildcard, variable, null, primitives, regex, list, record
//! - [`Value`]: the same shapes, plus the [`Value::Absent`] no-value marker
//!
//! # Design
//!
//! - **Closed tagged unions**: dispatch is an exhaustive `match` over the
//!   tag, never runtime type inspection. The wildcard is a payload-less
//!   variant, so "is this the wildcard?" is a tag comparison rather than a
//!   singleton identity check.
//! - **Enforced shared allocation**: heap-backed payloads are built only
//!   through factory methods (`Pattern::string`, `Value::record`, ...),
//!   which allocate via the [`Heap`] wrapper. Cloning a term bumps a
//!   reference count.
//! - **Null is not absent**: `Value::Null` is a present value the engine
//!   will happily match; `Value::Absent` marks a coordinate that does not
//!   exist and fails the engine's absence guard.
//!
//! No matching logic lives here; see the `weft_match` crate.

mod errors;
mod heap;
mod pattern;
mod value;

pub use errors::PatternError;
pub use heap::Heap;
pub use pattern::{Pattern, WILDCARD};
pub use value::Value;
