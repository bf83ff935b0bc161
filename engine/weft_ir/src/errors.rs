//! Pattern construction errors.
//!
//! Matching never raises a `PatternError`: mismatches are an expected,
//! first-class outcome reported through the engine's result algebra. The
//! only fallible step in this crate is compiling a regular expression.

use thiserror::Error;

/// Error raised while building a pattern.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The supplied regular expression failed to compile.
    #[error("invalid regular expression `{pattern}`: {source}")]
    InvalidRegex {
        /// The rejected expression, verbatim.
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
