//! # clipfile
//!
//! Saves the clipboard into a dated text file inside a nicknamed directory.
//!
//! Destinations are registered once under a short nickname and looked up on
//! every later capture. The lookup table repairs itself when directories go
//! missing, are referenced by path, or collide by name.
//!
//! ## Features
//!
//! - **Nicknames**: Persisted nickname to directory table in `~/.config/clipfile`
//! - **Self-healing**: Stale, relocated, and colliding entries are reconciled
//! - **Safe writes**: Existing files are never overwritten
//! - **Legacy configs**: Older config shapes are upgraded in place
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod clipboard;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod lookup;
pub mod paths;
pub mod prompt;
pub mod text;
pub mod ui;
pub mod writer;

pub use clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
pub use config::{set_home_override, Config, ConfigStore, Defaults};
pub use error::CaptureError;
pub use prompt::{Prompter, ScriptedPrompter, TerminalPrompter};
pub use writer::FileWriter;
