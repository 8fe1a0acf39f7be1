//! # Commands
//!
//! CLI command implementations for clipfile.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod capture;
pub mod list;

use std::path::PathBuf;

use anyhow::Result;

pub use self::{
    capture::{execute as capture, CaptureArgs},
    list::execute as list,
};
use crate::{
    clipboard::{Clipboard, SystemClipboard},
    config::{self, ConfigStore},
    prompt::{Prompter, TerminalPrompter},
    writer::FileWriter,
};

/// Everything a capture needs from the outside world.
pub struct Session<P: Prompter, C: Clipboard> {
    pub store: ConfigStore,
    /// Base for relative destination paths
    pub home: PathBuf,
    pub writer: FileWriter,
    pub prompter: P,
    pub clipboard: C,
}

impl Session<TerminalPrompter, SystemClipboard> {
    /// Session wired to the terminal, the system clipboard, and today's date.
    pub fn system(store: ConfigStore) -> Result<Self> {
        Ok(Self {
            store,
            home: config::home_dir()?,
            writer: FileWriter::today(),
            prompter: TerminalPrompter,
            clipboard: SystemClipboard::new()?,
        })
    }
}
