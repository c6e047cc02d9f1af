//! Trace events emitted by a recursive-descent parser.
//!
//! A parser reports each rule attempt as an `enter` event followed, once the
//! attempt completes, by exactly one `match` or `fail` event for the same
//! rule. Locations use the one-based line/column convention of parser
//! location records.

use core::fmt;

/// A single point in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct Position {
    /// Zero-based character offset.
    pub offset: usize,
    /// One-based line number.
    pub line: usize,
    /// One-based column number.
    pub column: usize,
}

impl Position {
    #[inline]
    pub const fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

/// A source range covered by a rule attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct Location {
    pub start: Position,
    pub end: Position,
}

impl Location {
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Location of a range that lies on the first line of the source, with
    /// offsets equal to zero-based columns.
    #[inline]
    pub const fn on_first_line(start: usize, end: usize) -> Self {
        Self {
            start: Position::new(start, 1, start + 1),
            end: Position::new(end, 1, end + 1),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-{}:{}",
            self.start.line, self.start.column, self.end.line, self.end.column
        )
    }
}

/// The kind of a trace event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum EventKind {
    #[cfg_attr(feature = "serde", serde(rename = "rule.enter"))]
    Enter,
    #[cfg_attr(feature = "serde", serde(rename = "rule.match"))]
    Match,
    #[cfg_attr(feature = "serde", serde(rename = "rule.fail"))]
    Fail,
}

impl EventKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            EventKind::Enter => "enter",
            EventKind::Match => "match",
            EventKind::Fail => "fail",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a parser's trace stream.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct TraceEvent {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: EventKind,
    pub rule: String,
    pub location: Location,
}

impl TraceEvent {
    pub fn new(kind: EventKind, rule: impl Into<String>, location: Location) -> Self {
        Self {
            kind,
            rule: rule.into(),
            location,
        }
    }

    pub fn enter(rule: impl Into<String>, location: Location) -> Self {
        Self::new(EventKind::Enter, rule, location)
    }

    pub fn matched(rule: impl Into<String>, location: Location) -> Self {
        Self::new(EventKind::Match, rule, location)
    }

    pub fn failed(rule: impl Into<String>, location: Location) -> Self {
        Self::new(EventKind::Fail, rule, location)
    }
}
