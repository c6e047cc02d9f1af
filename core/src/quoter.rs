//! Source excerpts with highlighted ranges and underline markers.
//!
//! # Example
//!
//! ```ignore
//! let quoter = SourceQuoter::new("2+(3/4)", Styler::plain())?;
//! let lines = quoter.quote("> ", 0, 2, 0, 5, 6);
//! assert_eq!(lines, ["> 2+(3/4)", ">   ^^^"]);
//! ```

use crate::error::{Error, SourceIssue};
use crate::event::Location;
use crate::style::{Color, Style, Styler};
use crate::text;

/// The smallest number of source lines an excerpt may be cut down to.
pub const MIN_QUOTED_LINES: usize = 3;

/// Marker inserted where an excerpt elides lines.
pub const ELISION: &str = "...";

/// Quotes ranges of a fixed source text.
#[derive(Debug, Clone)]
pub struct SourceQuoter {
    lines: Vec<String>,
    styler: Styler,
    highlight: Style,
}

impl SourceQuoter {
    /// Normalizes and splits `source` into lines.
    ///
    /// CRLF and CR line endings become `\n` and tabs become single spaces.
    /// Fails when `source` is `None` or when a vertical tab or form feed
    /// remains after normalization.
    pub fn new<'a>(source: impl Into<Option<&'a str>>, styler: Styler) -> Result<Self, Error> {
        let source = source.into().ok_or(SourceIssue::Missing)?;
        let normalized = source
            .replace('\t', " ")
            .replace("\r\n", "\n")
            .replace('\r', "\n");

        let lines: Vec<String> = normalized.split('\n').map(str::to_string).collect();
        for (idx, line) in lines.iter().enumerate() {
            if let Some(character) = line.chars().find(|c| matches!(c, '\u{b}' | '\u{c}')) {
                return Err(SourceIssue::UnsupportedLineBreak {
                    line: idx + 1,
                    character,
                }
                .into());
            }
        }

        Ok(Self {
            lines,
            styler,
            highlight: Style::fg(Color::Cyan),
        })
    }

    /// Replaces the style used for highlighted ranges and underline rows.
    #[must_use]
    pub fn with_highlight(mut self, style: Style) -> Self {
        self.highlight = style;
        self
    }

    /// Number of lines in the normalized source.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn styler(&self) -> Styler {
        self.styler
    }

    fn line(&self, idx: usize) -> &str {
        self.lines.get(idx).map_or("", String::as_str)
    }

    fn marker_row(&self, start: usize, length: usize, ch: char) -> String {
        self.styler
            .paint(&text::hline(start, length, ch), self.highlight)
    }

    /// Quotes the zero-based range `(start_line, start_col)` to
    /// `(end_line, end_col)`, prefixing every returned line with `prefix`.
    ///
    /// Ranges longer than `max_lines` (at least [`MIN_QUOTED_LINES`]) keep
    /// their head and tail with an [`ELISION`] line in between. An inverted
    /// range quotes as the empty range at its start, and columns past the
    /// end of their line are pulled back to it.
    pub fn quote(
        &self,
        prefix: &str,
        start_line: usize,
        start_col: usize,
        end_line: usize,
        end_col: usize,
        max_lines: usize,
    ) -> Vec<String> {
        let (end_line, end_col) = if (end_line, end_col) < (start_line, start_col) {
            (start_line, start_col)
        } else {
            (end_line, end_col)
        };
        // A column may sit one past the last char, never further.
        let start_col = start_col.min(text::char_len(self.line(start_line)));
        let end_col = end_col.min(text::char_len(self.line(end_line)));
        let max_lines = max_lines.max(MIN_QUOTED_LINES);
        let styler = &self.styler;
        let style = self.highlight;

        let row = |idx: usize| {
            let line = self.line(idx);
            if idx == start_line {
                styler.paint_range(line, style, start_col, None)
            } else if idx == end_line {
                styler.paint_range(line, style, 0, Some(end_col.saturating_add(1)))
            } else {
                styler.paint(line, style)
            }
        };

        let mut lines: Vec<String> = if start_line == end_line {
            let line = self.line(start_line);
            if start_col < end_col {
                vec![styler.paint_range(line, style, start_col, Some(end_col))]
            } else {
                vec![line.to_string()]
            }
        } else if end_line - start_line >= max_lines {
            // Only the kept head and tail rows are built.
            let head = max_lines.div_ceil(2);
            let tail = max_lines / 2;
            (start_line..start_line + head)
                .map(row)
                .chain(std::iter::once(ELISION.to_string()))
                .chain((end_line - (tail - 1)..=end_line).map(row))
                .collect()
        } else {
            (start_line..=end_line).map(row).collect()
        };

        if start_line == end_line {
            let width = (end_col - start_col).max(1);
            lines.push(self.marker_row(start_col, width, '^'));
        } else {
            let first_len = text::char_len(self.line(start_line));
            lines.insert(
                0,
                self.marker_row(start_col, first_len.saturating_sub(start_col), '_'),
            );
            lines.push(self.marker_row(0, end_col, '^'));
        }

        lines
            .into_iter()
            .map(|line| format!("{prefix}{line}"))
            .collect()
    }

    /// [`quote`](Self::quote) joined with newlines.
    pub fn quote_text(
        &self,
        prefix: &str,
        start_line: usize,
        start_col: usize,
        end_line: usize,
        end_col: usize,
        max_lines: usize,
    ) -> String {
        self.quote(prefix, start_line, start_col, end_line, end_col, max_lines)
            .join("\n")
    }

    /// Quotes a one-based event location.
    pub fn quote_location(&self, prefix: &str, location: &Location, max_lines: usize) -> Vec<String> {
        let Location { start, end } = location;
        self.quote(
            prefix,
            start.line.saturating_sub(1),
            start.column.saturating_sub(1),
            end.line.saturating_sub(1),
            end.column.saturating_sub(1),
            max_lines,
        )
    }
}
