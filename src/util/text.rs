//! Char-indexed string helpers
//!
//! Offsets across the crate count Unicode scalar values, not bytes. These
//! helpers do the byte translation in one place.

use std::ops::Range;

/// Number of characters in a string
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Convert char offset to byte offset, clamped to the end of the string
pub fn char_to_byte(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Get a slice of text by character indices (clamped)
pub fn slice_chars(text: &str, range: Range<usize>) -> &str {
    let start = char_to_byte(text, range.start);
    let end = char_to_byte(text, range.end.max(range.start));
    &text[start..end]
}

/// Replace the characters in `range` with `replacement`.
///
/// Splicing is purely positional: identical text elsewhere in `text` is never
/// touched.
pub fn splice_chars(text: &str, range: Range<usize>, replacement: &str) -> String {
    let start = char_to_byte(text, range.start);
    let end = char_to_byte(text, range.end.max(range.start));
    let mut out = String::with_capacity(text.len() - (end - start) + replacement.len());
    out.push_str(&text[..start]);
    out.push_str(replacement);
    out.push_str(&text[end..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_to_byte_utf8() {
        assert_eq!(char_to_byte("héllo", 2), 3); // é is 2 bytes
        assert_eq!(char_to_byte("안녕", 1), 3);
        assert_eq!(char_to_byte("abc", 10), 3);
    }

    #[test]
    fn test_slice_chars() {
        assert_eq!(slice_chars("hello world", 6..11), "world");
        assert_eq!(slice_chars("안녕하세요", 1..3), "녕하");
        assert_eq!(slice_chars("abc", 2..9), "c");
    }

    #[test]
    fn test_splice_is_positional() {
        assert_eq!(splice_chars("foo foo", 4..7, "bar"), "foo bar");
        assert_eq!(splice_chars("foo foo", 0..3, "bar"), "bar foo");
    }

    #[test]
    fn test_splice_length_change() {
        assert_eq!(splice_chars("hello WORLD", 6..11, "xyz"), "hello xyz");
        assert_eq!(splice_chars("ab", 1..1, "XYZ"), "aXYZb");
        assert_eq!(splice_chars("gks rmf", 0..3, "한"), "한 rmf");
    }
}
