//! # Errors
//!
//! Typed failures that end an invocation. Everything else travels as
//! `anyhow::Error` with context attached.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use thiserror::Error;

/// Terminal failures of a capture run.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// Missing or conflicting command-line arguments
    #[error("{0}")]
    Usage(String),

    /// Path string that is not legal on the strictest supported filesystem
    #[error("invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("nothing in the clipboard to paste")]
    EmptyClipboard,

    #[error("description '{0}' contains no usable characters for a filename")]
    EmptyDescription(String),

    /// Target file already exists; clipfile never overwrites
    #[error("a file named '{}' already exists", .0.display())]
    Collision(PathBuf),

    /// Recorded directory is gone and the operator declined to recreate it
    #[error("directory '{}' for nickname '{nickname}' is missing and was not recreated", .path.display())]
    MissingDirectory { nickname: String, path: PathBuf },

    #[error("'{}' exists but is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// Operator declined a required prompt
    #[error("aborted: {0}")]
    Aborted(String),
}

impl CaptureError {
    /// Process exit code for this failure.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 2,
            _ => 1,
        }
    }
}

/// Finds the exit code for an error chain, defaulting to 1.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<CaptureError>())
        .map_or(1, CaptureError::exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_usage_exit_code() {
        assert_eq!(CaptureError::Usage("x".to_string()).exit_code(), 2);
        assert_eq!(CaptureError::EmptyClipboard.exit_code(), 1);
    }

    #[test]
    fn test_exit_code_through_context() {
        let err: anyhow::Error = Err::<(), _>(CaptureError::Usage("missing".to_string()))
            .context("while parsing")
            .unwrap_err();
        assert_eq!(exit_code_for(&err), 2);
    }

    #[test]
    fn test_exit_code_untyped() {
        let err = anyhow::anyhow!("disk on fire");
        assert_eq!(exit_code_for(&err), 1);
    }
}
