//! # Lookup Reconciliation
//!
//! Resolves a nickname (or a raw path) to a destination directory, keeping the
//! lookup table consistent with the filesystem along the way.
//!
//! ## Resolution order
//! 1. Nickname is a key: use its directory, recreating it if it went missing.
//!    Only plain nicknames qualify; anything that normalizes to a different
//!    string (separators, `~`, dots, spaces) is a path.
//! 2. Otherwise treat the argument as a path and search the table by value
//! 3. Otherwise register the path as a new directory under a derived nickname
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::{
    config::{Config, ConfigStore},
    error::CaptureError,
    paths,
    prompt::Prompter,
    text::normalize,
    ui,
};

/// Resolves nicknames against a loaded config.
///
/// The config is mutated in place and saved through `store` whenever an entry
/// is added or evicted.
pub struct Reconciler<'a> {
    config: &'a mut Config,
    store: &'a ConfigStore,
    prompter: &'a mut dyn Prompter,
    home: &'a Path,
}

impl<'a> Reconciler<'a> {
    pub fn new(
        config: &'a mut Config,
        store: &'a ConfigStore,
        prompter: &'a mut dyn Prompter,
        home: &'a Path,
    ) -> Self {
        Self {
            config,
            store,
            prompter,
            home,
        }
    }

    /// Resolves `nickname` to an existing absolute directory.
    pub fn resolve(&mut self, nickname: &str) -> Result<PathBuf> {
        if let Some(key) = as_key(nickname) {
            if let Some(dir) = self.config.get(&key).map(Path::to_path_buf) {
                debug!(nickname = %key, dir = %dir.display(), "nickname found");
                return self.repair_if_stale(&key, dir);
            }
        }

        let dir = paths::resolve(nickname, self.home)?;

        if let Some(existing) = self.config.find_by_path(&dir).map(str::to_string) {
            debug!(nickname = %existing, dir = %dir.display(), "found by directory");
            return self.repair_if_stale(&existing, dir);
        }

        self.register(dir)
    }

    /// Recreates a recorded directory that no longer exists.
    ///
    /// Keys are normalized when the config is loaded, so the entry keeps its
    /// nickname.
    fn repair_if_stale(&mut self, nickname: &str, dir: PathBuf) -> Result<PathBuf> {
        if dir.is_dir() {
            return Ok(dir);
        }
        if dir.exists() {
            return Err(CaptureError::NotADirectory(dir).into());
        }

        info!(nickname, dir = %dir.display(), "stale lookup entry");
        let question = format!(
            "Directory for '{nickname}' no longer exists: {}. Recreate it?",
            dir.display()
        );
        if !self.create_directory(&dir, &question)? {
            return Err(CaptureError::MissingDirectory {
                nickname: nickname.to_string(),
                path: dir,
            }
            .into());
        }

        Ok(dir)
    }

    /// Registers a directory that has no entry yet.
    fn register(&mut self, dir: PathBuf) -> Result<PathBuf> {
        if dir.exists() && !dir.is_dir() {
            return Err(CaptureError::NotADirectory(dir).into());
        }

        if !dir.exists() {
            let question = format!("Directory {} does not exist. Create it?", dir.display());
            if !self.create_directory(&dir, &question)? {
                return Err(CaptureError::Aborted(format!(
                    "directory {} was not created",
                    dir.display()
                ))
                .into());
            }
        }

        let derived = dir
            .file_name()
            .map(|name| normalize(&name.to_string_lossy()))
            .unwrap_or_default();

        let collides = self.config.get(&derived).is_some_and(|path| path != dir);

        let nickname = if collides {
            if let Some(evicted) = self.config.remove(&derived) {
                info!(nickname = %derived, dir = %evicted.display(), "evicting colliding entry");
                ui::print_warning(&format!(
                    "nickname '{derived}' pointed to {}; that entry was removed",
                    evicted.display()
                ));
            }
            self.ask_nickname(&dir, None, Some(&derived))?
        } else if derived.is_empty() {
            self.ask_nickname(&dir, None, None)?
        } else if self.config.defaults.use_default_lookup_name {
            derived
        } else {
            self.ask_nickname(&dir, Some(&derived), None)?
        };

        self.config.insert(nickname.clone(), dir.clone());
        self.store.save(self.config)?;
        info!(nickname = %nickname, dir = %dir.display(), "registered directory");
        ui::print_notice(&format!(
            "Registered nickname '{nickname}' for {}",
            dir.display()
        ));

        Ok(dir)
    }

    /// Creates `dir` if allowed. Returns false if the operator declined.
    fn create_directory(&mut self, dir: &Path, question: &str) -> Result<bool> {
        if let Some(blocker) = dir.ancestors().find(|p| p.exists() && !p.is_dir()) {
            return Err(CaptureError::NotADirectory(blocker.to_path_buf()).into());
        }

        let allowed = self.config.defaults.force_creation_of_new_directories
            || self.prompter.confirm(question, true)?;
        if !allowed {
            return Ok(false);
        }

        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        ui::print_notice(&format!("Created directory {}", dir.display()));
        Ok(true)
    }

    /// Asks for a unique nickname until one is confirmed.
    ///
    /// Empty input selects `default` when there is one. `forbidden` is refused
    /// even though it is no longer in the table.
    fn ask_nickname(
        &mut self,
        dir: &Path,
        default: Option<&str>,
        forbidden: Option<&str>,
    ) -> Result<String> {
        let prompt = default.map_or_else(
            || format!("Nickname for {}:", dir.display()),
            |name| format!("Nickname for {} [{name}]:", dir.display()),
        );

        loop {
            let Some(input) = self.prompter.ask(&prompt)? else {
                return Err(CaptureError::Aborted("no nickname given".to_string()).into());
            };

            let nickname = match (input.trim().is_empty(), default) {
                (true, Some(name)) => name.to_string(),
                _ => normalize(&input),
            };

            if nickname.is_empty() {
                ui::print_warning("a nickname is required");
                continue;
            }
            if self.config.contains(&nickname) || forbidden == Some(nickname.as_str()) {
                ui::print_warning(&format!("nickname '{nickname}' is already in use"));
                continue;
            }

            let question = format!("Use '{nickname}' for {}?", dir.display());
            if self.prompter.confirm(&question, true)? {
                return Ok(nickname);
            }
        }
    }
}

/// Returns the lookup key for `argument` when it is a plain nickname.
///
/// Matching ignores case only. Arguments that `normalize` would otherwise
/// rewrite are paths and never hit a key.
fn as_key(argument: &str) -> Option<String> {
    let folded = argument.trim().to_lowercase();
    (!folded.is_empty() && normalize(&folded) == folded).then_some(folded)
}
