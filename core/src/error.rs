//! Core error types for tracegraph.
//!
//! Every fallible operation in the crate returns [`Error`]. Construction
//! errors (bad source text, bad hidden-path patterns) surface immediately;
//! malformed event streams are reported when the offending event arrives and
//! leave the trace tree untouched.

use thiserror::Error;

use crate::event::EventKind;

/// Core tracegraph error type.
#[derive(Error, Debug)]
pub enum Error {
    /// The source text handed to the quoter cannot be quoted.
    #[error("invalid source: {0}")]
    InvalidSource(SourceIssue),

    /// A hidden-path fragment did not compile to a regular expression.
    #[error("invalid hidden path pattern `{pattern}`")]
    InvalidHiddenPath {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A match or fail event arrived while no rule was pending.
    ///
    /// Resolving the root of the trace tree is never valid; a well-formed
    /// stream always pairs each resolution with an earlier enter.
    #[error("`{kind}` event for `{rule}` has no pending rule to resolve")]
    UnbalancedEvent { kind: EventKind, rule: String },

    /// A match or fail event named a different rule than the pending one.
    #[error("`{kind}` event for `{found}` does not resolve pending rule `{expected}`")]
    RuleMismatch {
        kind: EventKind,
        expected: String,
        found: String,
    },

    /// Writing the live trace log failed.
    ///
    /// Unlike the stream errors above, the event that triggered the write
    /// was already forwarded and applied, so the tree is consistent and
    /// the stream may carry on.
    #[error("failed to write live trace: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a source text was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceIssue {
    /// No source text was supplied.
    #[error("missing source text")]
    Missing,

    /// A vertical whitespace character other than `\n` survived
    /// line-ending normalization.
    #[error("unsupported line break {character:?} on line {line}; line breaks must be '\\n'")]
    UnsupportedLineBreak {
        /// One-based line number on which the character appears.
        line: usize,
        character: char,
    },
}

impl From<SourceIssue> for Error {
    fn from(issue: SourceIssue) -> Self {
        Error::InvalidSource(issue)
    }
}
