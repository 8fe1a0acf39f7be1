//! # Emoji Filtering
//!
//! Removes emoji from clipboard content before it is written to disk. Only
//! sequences in the Unicode emoji list are removed; text symbols such as
//! `✓` or `♪` are content and stay.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

/// Longest emoji sequence in code points (kiss with two skin tones).
const MAX_SEQUENCE_CHARS: usize = 10;

/// Presentation selectors left dangling after a matched emoji.
const TRAILING_SELECTORS: &[char] = &['\u{FE0E}', '\u{FE0F}'];

/// Returns `text` with every emoji sequence removed.
pub fn strip_emoji(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        if let Some(len) = emoji_prefix_len(rest) {
            rest = rest[len..].trim_start_matches(TRAILING_SELECTORS);
        } else {
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    out
}

/// Byte length of the longest emoji at the start of `text`.
fn emoji_prefix_len(text: &str) -> Option<usize> {
    let ends: Vec<usize> = text
        .char_indices()
        .skip(1)
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .take(MAX_SEQUENCE_CHARS)
        .collect();

    ends.into_iter()
        .rev()
        .find(|&end| emojis::get(&text[..end]).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        let text = "Line one\nLine two, with punctuation: ok?";
        assert_eq!(strip_emoji(text), text);
    }

    #[test]
    fn test_removes_pictographs() {
        assert_eq!(strip_emoji("ship it 🚀 now"), "ship it  now");
    }

    #[test]
    fn test_removes_joined_sequences() {
        assert_eq!(strip_emoji("family 👨‍👩‍👧 photo"), "family  photo");
        assert_eq!(strip_emoji("hot ☕️"), "hot ");
    }

    #[test]
    fn test_removes_flags() {
        assert_eq!(strip_emoji("trip 🇫🇷 2025"), "trip  2025");
    }

    #[test]
    fn test_keeps_accented_letters() {
        assert_eq!(strip_emoji("café ✨"), "café ");
    }

    #[test]
    fn test_keeps_text_symbols() {
        let text = "Done ✓ ♪ ☐ task";
        assert_eq!(strip_emoji(text), text);
    }

    #[test]
    fn test_only_emoji() {
        assert_eq!(strip_emoji("🎉🎉"), "");
    }
}
