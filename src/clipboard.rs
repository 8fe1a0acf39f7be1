//! # Clipboard
//!
//! Plain-text access to the system clipboard.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};

/// Get/set access to clipboard text.
pub trait Clipboard {
    /// Returns the current clipboard text, or an empty string if there is none.
    fn text(&mut self) -> Result<String>;

    /// Empties the clipboard.
    fn clear(&mut self) -> Result<()>;
}

/// The system clipboard via `arboard`.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let inner = arboard::Clipboard::new().context("Failed to access system clipboard")?;
        Ok(Self { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn text(&mut self) -> Result<String> {
        match self.inner.get_text() {
            Ok(text) => Ok(text),
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(err) => Err(err).context("Failed to read clipboard"),
        }
    }

    fn clear(&mut self) -> Result<()> {
        self.inner
            .set_text(String::new())
            .context("Failed to clear clipboard")
    }
}

/// In-memory clipboard used by tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    content: String,
}

impl MemoryClipboard {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            content: text.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Clipboard for MemoryClipboard {
    fn text(&mut self) -> Result<String> {
        Ok(self.content.clone())
    }

    fn clear(&mut self) -> Result<()> {
        self.content.clear();
        Ok(())
    }
}
