//! Splits text into contiguous pieces of at most `max_units` UTF-16 code units.
//!
//! Telegram measures message length in UTF-16 code units, so a character outside the Basic
//! Multilingual Plane (most emoji) counts as two.

/// Hard per-message limit of the Bot API, in UTF-16 code units.
pub const TELEGRAM_MESSAGE_LIMIT: usize = 4096;

/// Default chunk size; leaves room under [`TELEGRAM_MESSAGE_LIMIT`] for markup.
pub const DEFAULT_CHUNK_SIZE: usize = 3800;

/// Length of `text` as Telegram counts it.
pub fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

/// Splits `text` into pieces of at most `max_units` UTF-16 code units.
///
/// Pieces are borrowed slices in original order; concatenating them yields `text`. Splits land on
/// char boundaries but may fall mid-word. Empty input gives no pieces. Every piece holds at least
/// one char, so with `max_units < 2` a two-unit char still gets a piece of its own.
pub fn chunk_text(text: &str, max_units: usize) -> Vec<&str> {
    let max_units = max_units.max(1);
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut units = 0;
    for (idx, c) in text.char_indices() {
        let width = c.len_utf16();
        if units + width > max_units && idx > start {
            chunks.push(&text[start..idx]);
            start = idx;
            units = 0;
        }
        units += width;
    }
    if start < text.len() {
        chunks.push(&text[start..]);
    }
    chunks
}

/// Cuts `text` to at most `max_units` UTF-16 code units, appending `…` when anything was dropped.
pub fn truncate_text(text: &str, max_units: usize) -> String {
    if utf16_len(text) <= max_units {
        return text.to_string();
    }
    let head = chunk_text(text, max_units.saturating_sub(1))
        .into_iter()
        .next()
        .unwrap_or("");
    format!("{}…", head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_single_chunk() {
        assert_eq!(chunk_text("hello", 10), vec!["hello"]);
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_empty_chunk() {
        assert_eq!(chunk_text("abcdef", 3), vec!["abc", "def"]);
    }

    #[test]
    fn test_multibyte_chars_split_on_char_boundary() {
        let chunks = chunk_text("héllo wörld", 4);
        assert_eq!(chunks, vec!["héll", "o wö", "rld"]);
    }

    #[test]
    fn test_astral_chars_count_as_two_units() {
        assert_eq!(chunk_text("a😀b😀", 3), vec!["a😀", "b😀"]);
        assert_eq!(chunk_text("😀😀", 3), vec!["😀", "😀"]);
    }

    #[test]
    fn test_zero_size_behaves_as_one() {
        assert_eq!(chunk_text("ab", 0), vec!["a", "b"]);
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("abcdefgh", 5), "abcd…");
        assert_eq!(utf16_len(&truncate_text(&"😀".repeat(10), 5)), 5);
    }
}
