//! Char-indexed string helpers
//!
//! Every position in the rich-text model counts `char`s, not bytes. These
//! helpers are the only place that maps between the two.

use std::ops::Range;

/// Length of `text` in chars
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Convert a char offset to a byte offset, saturating at the end of the text
pub fn char_to_byte(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Slice `text` by char indices. Out-of-range bounds are clamped to the text.
pub fn char_slice(text: &str, range: Range<usize>) -> &str {
    let start = char_to_byte(text, range.start);
    let end = char_to_byte(text, range.end.max(range.start));
    &text[start..end]
}

/// Check if `a` and `b` hold the same chars in `start..end`.
///
/// Both strings are expected to have the same char length.
pub fn equals_in_range(a: &str, b: &str, start: usize, end: usize) -> bool {
    if end <= start {
        return true;
    }
    a.chars()
        .skip(start)
        .take(end - start)
        .eq(b.chars().skip(start).take(end - start))
}
