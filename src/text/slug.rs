//! # Description Normalization
//!
//! Converts free text into URL-style, filesystem-friendly tokens. Used for the
//! description part of capture filenames and for lookup nicknames.
//!
//! ## Rules
//! 1. Every non-alphanumeric character becomes a separator
//! 2. Leading and trailing separators are dropped
//! 3. Runs of separators collapse into a single hyphen
//! 4. Letters are lowercased
//!
//! The rules are applied repeatedly until the text stops changing.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

/// Normalizes free text into a hyphenated lowercase token.
///
/// Idempotent: `normalize(&normalize(x)) == normalize(x)`. Returns an empty
/// string when nothing alphanumeric remains.
///
/// # Example
/// ```
/// use clipfile::text::slug::normalize;
/// assert_eq!(normalize("My  Trip--to   Paris."), "my-trip-to-paris");
/// ```
pub fn normalize(text: &str) -> String {
    let mut current = text.trim().to_string();

    loop {
        let next = step(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// One normalization pass.
fn step(text: &str) -> String {
    let spaced: String = text
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    spaced
        .trim()
        .replace("  ", " ")
        .replace(' ', "-")
        .replace("--", "-")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_description() {
        assert_eq!(normalize("Meeting notes"), "meeting-notes");
    }

    #[test]
    fn test_collapses_hyphens_and_spaces() {
        assert_eq!(normalize("My  Trip--to   Paris."), "my-trip-to-paris");
    }

    #[test]
    fn test_dots_become_hyphens() {
        assert_eq!(normalize("release v2.0.1"), "release-v2-0-1");
    }

    #[test]
    fn test_underscores() {
        assert_eq!(normalize("1e_textfiles"), "1e-textfiles");
    }

    #[test]
    fn test_leading_trailing() {
        assert_eq!(normalize("  --Title--  "), "title");
    }

    #[test]
    fn test_unicode_letters_kept() {
        assert_eq!(normalize("Café Résumé"), "café-résumé");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_only_punctuation() {
        assert_eq!(normalize("!@#$%^&*()...---"), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "   ",
            "!!!",
            "My  Trip--to   Paris.",
            "  a\tb\nc  ",
            "İstanbul Trip",
            "already-normal",
            "Mixed_CASE and.dots",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
        }
    }
}
