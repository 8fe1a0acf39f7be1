//! # Path Resolution
//!
//! Turns a raw path string typed or pasted by the operator into an absolute
//! destination directory below the home directory.
//!
//! Operators often paste a native absolute path where a home-relative one was
//! expected. Resolution strips the duplicated home prefix in three shapes:
//!
//! - `/home/me/notes`  absolute path already below home
//! - `/notes`          absolute path outside home, re-rooted at home
//! - `me/notes`        relative path echoing the tail of the home path
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::{
    error::CaptureError,
    text::filename::{is_invalid_char, is_reserved_name},
};

/// Checks that `raw` is a legal path on the strictest supported filesystem.
pub fn validate(raw: &str) -> Result<(), CaptureError> {
    let invalid = |reason: String| CaptureError::InvalidPath {
        path: raw.to_string(),
        reason,
    };

    if raw.trim().is_empty() {
        return Err(invalid("path is empty".to_string()));
    }

    if let Some(c) = raw.chars().find(|&c| is_invalid_char(c)) {
        return Err(invalid(format!("contains illegal character {c:?}")));
    }

    for component in raw.split(['/', '\\']) {
        if component.is_empty() || component == "." || component == ".." || component == "~" {
            continue;
        }
        if is_reserved_name(component) {
            return Err(invalid(format!("'{component}' is a reserved name")));
        }
        if component.ends_with(' ') || component.ends_with('.') {
            return Err(invalid(format!(
                "'{component}' may not end with a space or a dot"
            )));
        }
    }

    Ok(())
}

/// Resolves `raw` to an absolute directory below `home`.
pub fn resolve(raw: &str, home: &Path) -> Result<PathBuf, CaptureError> {
    let raw = raw.trim();
    validate(raw)?;

    let home_parts = normal_parts(home);

    let parts = if let Some(rest) = strip_tilde(raw) {
        normal_parts(Path::new(rest))
    } else {
        let path = Path::new(raw);
        match path.strip_prefix(home) {
            Ok(rest) if path.is_absolute() => normal_parts(rest),
            _ => strip_home_echo(normal_parts(path), &home_parts),
        }
    };

    let resolved = parts.iter().fold(home.to_path_buf(), |acc, part| acc.join(part));
    debug!(raw, resolved = %resolved.display(), "resolved path");
    Ok(resolved)
}

/// Returns the remainder after a leading `~` or `~/`.
fn strip_tilde(raw: &str) -> Option<&str> {
    if raw == "~" {
        return Some("");
    }
    raw.strip_prefix("~/").or_else(|| raw.strip_prefix("~\\"))
}

/// Collects normal components, dropping `.` and applying `..` lexically.
fn normal_parts(path: &Path) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::ParentDir => {
                parts.pop();
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    parts
}

/// Drops leading components that repeat a trailing run of the home path.
///
/// The longest echo wins. At least one component is always kept so that a
/// directory named like the home directory itself stays addressable.
fn strip_home_echo(parts: Vec<String>, home_parts: &[String]) -> Vec<String> {
    let max = home_parts.len().min(parts.len().saturating_sub(1));
    for len in (1..=max).rev() {
        if parts[..len] == home_parts[home_parts.len() - len..] {
            return parts[len..].to_vec();
        }
    }
    parts
}
