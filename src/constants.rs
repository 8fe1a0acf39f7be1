//! # Constants
//!
//! Centralized constants for magic values used throughout clipfile.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Capture Format
// =============================================================================

/// File extension for captured clipboard files.
pub const CAPTURE_FILE_EXTENSION: &str = "txt";

/// Date stamp format used as the filename prefix (8 digits).
pub const DATE_STAMP_FORMAT: &str = "%Y%m%d";

/// Maximum number of description characters used for the filename.
pub const MAX_DESCRIPTION_LENGTH: usize = 71;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration directory name (inside `~/.config`).
pub const CONFIG_DIR: &str = "clipfile";

/// Configuration file name (inside `CONFIG_DIR`).
pub const CONFIG_FILENAME: &str = "config.toml";

/// Suffix appended to an unreadable config file before it is replaced.
pub const CONFIG_BACKUP_SUFFIX: &str = "bak";

/// Header written above the serialized config.
pub const CONFIG_HEADER: &str =
    "# Generated by clipfile. Do not edit while clipfile is running; changes may be overwritten.";

/// Table holding the nickname to directory mapping.
pub const LOOKUP_KEY: &str = "lookup";

/// Table holding the boolean default flags.
pub const DEFAULTS_KEY: &str = "defaults";

/// Default flag: create missing directories without asking.
pub const FORCE_CREATION_KEY: &str = "force-creation-of-new-directories";

/// Default flag: register new directories under their derived nickname.
pub const USE_DEFAULT_NAME_KEY: &str = "use-default-lookup-name";

// =============================================================================
// Logging
// =============================================================================

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV_VAR: &str = "CLIPFILE_LOG";

// =============================================================================
// UI Display
// =============================================================================

/// Maximum width of the nickname column in `--list` output.
pub const UI_NICKNAME_COL_MAX: usize = 24;
