//! # Filename Sanitization
//!
//! Rules for names that must be legal on the strictest supported filesystem
//! (Windows rules are applied on every platform).
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

/// Characters that are illegal inside a single path component.
pub const INVALID_CHARS: &[char] = &['<', '>', ':', '"', '|', '?', '*', '\0'];

/// Device names reserved regardless of extension.
const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Returns true if `c` may not appear in a path component.
pub fn is_invalid_char(c: char) -> bool {
    INVALID_CHARS.contains(&c) || c.is_control()
}

/// Returns true if `component` is a reserved device name (`CON`, `nul.txt`, ...).
pub fn is_reserved_name(component: &str) -> bool {
    let stem = component.split('.').next().unwrap_or(component).trim_end();
    RESERVED_NAMES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(stem))
}

/// Strips characters that are illegal in a filename.
///
/// Separators are removed along with the illegal characters, trailing dots and
/// spaces are trimmed, and reserved device names get a leading underscore.
pub fn sanitize_filename(name: &str) -> String {
    let mut sanitized: String = name
        .chars()
        .filter(|&c| !is_invalid_char(c) && c != '/' && c != '\\')
        .collect();

    let trimmed_len = sanitized.trim_end_matches(['.', ' ']).len();
    sanitized.truncate(trimmed_len);

    if is_reserved_name(&sanitized) {
        sanitized.insert(0, '_');
    }

    sanitized
}
