//! # UI Utilities
//!
//! Shared output helpers for operator-facing messages.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::Path;

use owo_colors::OwoColorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Prints a success message with a path.
///
/// Format: `✓ {verb}: {path}`
pub fn print_success(verb: &str, path: &Path) {
    println!("{} {}: {}", "✓".green(), verb, path.display());
}

/// Prints a progress notice on stderr, keeping stdout clean for scripting.
pub fn print_notice(message: &str) {
    eprintln!("{} {}", "✓".green(), message);
}

/// Prints a warning with yellow prefix.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "warning:".yellow(), message);
}

// =============================================================================
// String Utilities
// =============================================================================

/// Truncates a string to the specified display width, adding ellipsis if truncated.
pub fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

/// Pads a string with spaces to the given display width.
pub fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short() {
        assert_eq!(truncate("txt", 10), "txt");
    }

    #[test]
    fn test_truncate_long() {
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
    }

    #[test]
    fn test_pad_wide_chars() {
        assert_eq!(pad("日本", 6), "日本  ");
        assert_eq!(pad("toolong", 3), "toolong");
    }
}
