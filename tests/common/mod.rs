//! # Test Harness
//!
//! Provides utilities for integration testing clipfile without affecting the
//! user's configuration. The home directory is redirected through a
//! thread-local override instead of environment variables.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use clipfile::{
    commands::Session, set_home_override, ConfigStore, FileWriter, MemoryClipboard,
    ScriptedPrompter,
};
use tempfile::TempDir;

/// Date every test session is stamped with.
pub const TEST_DATE: (i32, u32, u32) = (2025, 3, 7);

/// Filename prefix matching `TEST_DATE`.
pub const TEST_STAMP: &str = "20250307";

/// Test environment with a temporary home directory.
pub struct TestEnv {
    /// Temporary directory simulating the user's home
    pub home_dir: TempDir,
}

impl TestEnv {
    /// Creates a new test environment and points the home override at it.
    pub fn new() -> Self {
        let home_dir = TempDir::new().expect("Failed to create temp home dir");
        set_home_override(Some(home_dir.path().to_path_buf()));
        Self { home_dir }
    }

    pub fn home(&self) -> &Path {
        self.home_dir.path()
    }

    /// Returns the path where the config is stored.
    pub fn config_path(&self) -> PathBuf {
        self.home()
            .join(".config")
            .join("clipfile")
            .join("config.toml")
    }

    /// Writes the config file with the given content.
    pub fn write_config(&self, content: &str) {
        let path = self.config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create config directory");
        }
        fs::write(path, content).expect("Failed to write config");
    }

    /// Reads the config file content.
    pub fn read_config(&self) -> String {
        fs::read_to_string(self.config_path()).unwrap_or_default()
    }

    /// Creates a directory below home and returns its path.
    pub fn mkdir(&self, relative: &str) -> PathBuf {
        let path = self.home().join(relative);
        fs::create_dir_all(&path).expect("Failed to create directory");
        path
    }

    /// Lists file names in a directory, sorted.
    pub fn files_in(&self, dir: &Path) -> Vec<String> {
        if !dir.exists() {
            return Vec::new();
        }
        let mut names: Vec<String> = fs::read_dir(dir)
            .expect("Failed to read directory")
            .filter_map(Result::ok)
            .filter(|e| e.path().is_file())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Builds a session with scripted answers and the given clipboard text.
    pub fn session<I, S>(
        &self,
        answers: I,
        clipboard: &str,
    ) -> Session<ScriptedPrompter, MemoryClipboard>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let (year, month, day) = TEST_DATE;
        Session {
            store: ConfigStore::default_location().expect("home override is set"),
            home: self.home().to_path_buf(),
            writer: FileWriter::new(NaiveDate::from_ymd_opt(year, month, day).unwrap()),
            prompter: ScriptedPrompter::new(answers),
            clipboard: MemoryClipboard::with_text(clipboard),
        }
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        set_home_override(None);
    }
}

/// Shorthand for a config file in the current shape.
pub fn current_config(force: bool, use_default: bool, entries: &[(&str, &Path)]) -> String {
    let mut out = format!(
        "[defaults]\nforce-creation-of-new-directories = {force}\nuse-default-lookup-name = {use_default}\n\n[lookup]\n"
    );
    for (nickname, dir) in entries {
        out.push_str(&format!("{nickname} = {:?}\n", dir.display().to_string()));
    }
    out
}
