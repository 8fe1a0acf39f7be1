//! # List Command
//!
//! Prints every registered nickname with its directory.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;
use owo_colors::OwoColorize;
use unicode_width::UnicodeWidthStr;

use crate::{
    config::{Config, ConfigStore},
    constants::UI_NICKNAME_COL_MAX,
    ui,
};

/// One row of `--list` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub nickname: String,
    pub dir: PathBuf,
    /// Recorded directory no longer exists
    pub missing: bool,
}

/// Collects list rows in nickname order.
pub fn entries(config: &Config) -> Vec<ListEntry> {
    config
        .lookup
        .iter()
        .map(|(nickname, dir)| ListEntry {
            nickname: nickname.clone(),
            dir: dir.clone(),
            missing: !dir.is_dir(),
        })
        .collect()
}

/// Executes the list command.
pub fn execute(store: &ConfigStore) -> Result<()> {
    let config = store.load()?;
    let rows = entries(&config);

    if rows.is_empty() {
        println!("{}", "No nicknames registered yet.".dimmed());
        println!(
            "Run {} to register a directory.",
            "clipfile <path> <description>".green()
        );
        return Ok(());
    }

    let width = rows
        .iter()
        .map(|row| row.nickname.width())
        .max()
        .unwrap_or(0)
        .min(UI_NICKNAME_COL_MAX);

    for row in &rows {
        let name = ui::pad(&ui::truncate(&row.nickname, width), width);
        if row.missing {
            println!(
                "{}  {} {}",
                name.bold(),
                row.dir.display(),
                "(missing)".yellow()
            );
        } else {
            println!("{}  {}", name.bold(), row.dir.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_entries_sorted_and_flag_missing() {
        let temp = tempdir().unwrap();
        let present = temp.path().join("present");
        fs::create_dir(&present).unwrap();

        let mut config = Config::default();
        config.insert("zz", temp.path().join("gone"));
        config.insert("aa", &present);

        let rows = entries(&config);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].nickname, "aa");
        assert!(!rows[0].missing);
        assert_eq!(rows[1].nickname, "zz");
        assert!(rows[1].missing);
    }
}
