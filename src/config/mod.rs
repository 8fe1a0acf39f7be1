//! # Configuration
//!
//! The nickname lookup table and default flags, persisted as TOML at
//! `~/.config/clipfile/config.toml`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod migrate;

use std::{
    cell::RefCell,
    collections::BTreeMap,
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::constants::{CONFIG_BACKUP_SUFFIX, CONFIG_DIR, CONFIG_FILENAME, CONFIG_HEADER};

pub use self::migrate::Shape;

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by integration tests to redirect config and destinations to a
    /// temp directory without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// Returns the home directory, honoring the test override.
pub fn home_dir() -> Result<PathBuf> {
    get_home_override()
        .or_else(dirs::home_dir)
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))
}

/// Boolean switches stored under `[defaults]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Defaults {
    /// Create missing directories without asking
    pub force_creation_of_new_directories: bool,

    /// Register new directories under their derived nickname without asking
    pub use_default_lookup_name: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            force_creation_of_new_directories: false,
            use_default_lookup_name: true,
        }
    }
}

/// Nickname lookup table plus default flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Config {
    pub defaults: Defaults,

    /// Nickname to absolute directory, kept sorted by nickname
    pub lookup: BTreeMap<String, PathBuf>,
}

impl Config {
    /// Returns the directory recorded for `nickname`.
    pub fn get(&self, nickname: &str) -> Option<&Path> {
        self.lookup.get(nickname).map(PathBuf::as_path)
    }

    /// Finds the nickname whose recorded directory equals `dir`.
    ///
    /// Values are not guaranteed unique; the first nickname in sorted order wins.
    pub fn find_by_path(&self, dir: &Path) -> Option<&str> {
        self.lookup
            .iter()
            .find(|(_, path)| path.as_path() == dir)
            .map(|(nickname, _)| nickname.as_str())
    }

    pub fn contains(&self, nickname: &str) -> bool {
        self.lookup.contains_key(nickname)
    }

    /// Inserts or replaces a lookup entry.
    pub fn insert(&mut self, nickname: impl Into<String>, dir: impl Into<PathBuf>) {
        self.lookup.insert(nickname.into(), dir.into());
    }

    /// Removes a lookup entry, returning its directory.
    pub fn remove(&mut self, nickname: &str) -> Option<PathBuf> {
        self.lookup.remove(nickname)
    }
}

/// Loads and persists the config file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store backed by an explicit file.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `~/.config/clipfile/config.toml`.
    ///
    /// Uses `$HOME/.config` on every platform (not `dirs::config_dir`, which varies by OS).
    pub fn default_location() -> Result<Self> {
        let home = home_dir()?;
        Ok(Self::at(
            home.join(".config").join(CONFIG_DIR).join(CONFIG_FILENAME),
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the config, creating or upgrading the file as needed.
    ///
    /// - Missing, empty, or unparseable file: a fresh config is written
    /// - Legacy shapes: upgraded and written back immediately
    /// - Current shape: returned as-is, file untouched
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "config not found, creating");
            return self.save_fresh();
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read config: {}", self.path.display()))?;

        if content.trim().is_empty() {
            warn!(path = %self.path.display(), "config is empty, starting fresh");
            return self.save_fresh();
        }

        let table: toml::Table = match toml::from_str(&content) {
            Ok(table) => table,
            Err(err) => {
                let backup = self.backup()?;
                warn!(
                    path = %self.path.display(),
                    backup = %backup.display(),
                    "config could not be parsed, starting fresh: {err}"
                );
                return self.save_fresh();
            }
        };

        let upgrade = migrate::upgrade(table);
        debug!(shape = ?upgrade.shape, entries = upgrade.config.lookup.len(), "config loaded");

        for entry in &upgrade.dropped {
            warn!("dropped config entry '{entry}'");
        }
        for (old, new) in &upgrade.renamed {
            info!("renamed nickname '{old}' to '{new}'");
        }

        if upgrade.needs_save() {
            info!(shape = ?upgrade.shape, "upgrading config file");
            self.save(&upgrade.config)?;
        }

        Ok(upgrade.config)
    }

    /// Writes the config with its generated header.
    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let body = toml::to_string_pretty(config).context("Failed to serialize config")?;
        let content = format!("{CONFIG_HEADER}\n\n{body}");

        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write config: {}", self.path.display()))?;
        debug!(path = %self.path.display(), "config saved");
        Ok(())
    }

    fn save_fresh(&self) -> Result<Config> {
        let config = Config::default();
        self.save(&config)?;
        Ok(config)
    }

    /// Copies the current file next to itself with a `.bak` suffix.
    fn backup(&self) -> Result<PathBuf> {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".");
        name.push(CONFIG_BACKUP_SUFFIX);
        let backup = PathBuf::from(name);

        fs::copy(&self.path, &backup)
            .with_context(|| format!("Failed to back up config: {}", backup.display()))?;
        Ok(backup)
    }
}
