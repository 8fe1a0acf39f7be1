//! # Text Processing
//!
//! String filters applied to descriptions, filenames, and clipboard content.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod emoji;
pub mod filename;
pub mod slug;

pub use self::{emoji::strip_emoji, filename::sanitize_filename, slug::normalize};
