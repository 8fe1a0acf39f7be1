//! # Capture Command
//!
//! Saves the clipboard into a new dated file inside a nicknamed directory.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use super::Session;
use crate::{
    clipboard::Clipboard, error::CaptureError, lookup::Reconciler, prompt::Prompter,
    text::strip_emoji, ui,
};

/// Arguments for the capture command
#[derive(Debug, Clone)]
pub struct CaptureArgs {
    /// Nickname, or a path to register
    pub nickname: String,
    pub description: String,
}

/// Executes the capture command, returning the path of the new file.
pub fn execute<P: Prompter, C: Clipboard>(
    args: &CaptureArgs,
    session: &mut Session<P, C>,
) -> Result<PathBuf> {
    if args.description.trim().is_empty() {
        return Err(CaptureError::Usage("No description entered".to_string()).into());
    }

    // Reject unusable input before anything is prompted or persisted
    let filename = session.writer.filename(&args.description)?;
    let content = session.clipboard.text()?;
    if strip_emoji(&content).is_empty() {
        return Err(CaptureError::EmptyClipboard.into());
    }
    debug!(%filename, bytes = content.len(), "capture requested");

    let mut config = session.store.load()?;
    let dir = Reconciler::new(
        &mut config,
        &session.store,
        &mut session.prompter,
        &session.home,
    )
    .resolve(&args.nickname)?;

    let path = session
        .writer
        .write(&dir, &args.description, &content, &mut session.clipboard)?;

    ui::print_success("Created", &path);
    Ok(path)
}
