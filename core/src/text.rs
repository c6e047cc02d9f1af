//! Small text helpers shared by the quoter, the graph renderer and the tracer.
//!
//! Columns everywhere in this crate count Unicode scalar values, so every
//! slicing helper here takes char indices and clamps them to the text.

/// Returns `width` spaces.
#[inline]
pub fn indent(width: usize) -> String {
    " ".repeat(width)
}

/// Returns `start` spaces followed by `length` copies of `ch`.
pub fn hline(start: usize, length: usize, ch: char) -> String {
    let mut out = String::with_capacity(start + length);
    out.extend(std::iter::repeat_n(' ', start));
    out.extend(std::iter::repeat_n(ch, length));
    out
}

/// Truncates `text` from the front so it fits in `max_len` chars, marking the
/// cut with a leading `...`.
///
/// A `max_len` of zero disables truncation.
pub fn truncate_front(text: &str, max_len: usize) -> String {
    let len = char_len(text);
    if max_len == 0 || len <= max_len {
        return text.to_string();
    }
    let cut = (len + 3).saturating_sub(max_len);
    let mut out = String::from("...");
    out.push_str(&text[byte_index(text, cut)..]);
    out
}

/// Number of chars in `text`.
#[inline]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte index of the char at `index`, or `text.len()` past the end.
pub fn byte_index(text: &str, index: usize) -> usize {
    text.char_indices()
        .nth(index)
        .map_or(text.len(), |(byte, _)| byte)
}

/// Splits `text` into the chars before `start`, the chars in `[start, end)`
/// and the chars from `end` on. Both bounds are clamped.
pub fn split3(text: &str, start: usize, end: usize) -> (&str, &str, &str) {
    let start = byte_index(text, start);
    let end = byte_index(text, end).max(start);
    (&text[..start], &text[start..end], &text[end..])
}
