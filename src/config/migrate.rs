//! # Config Migration
//!
//! Detects which schema a parsed config file uses and upgrades it to the
//! current `[defaults]` + `[lookup]` shape.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{collections::BTreeMap, path::PathBuf};

use toml::{Table, Value};

use super::{Config, Defaults};
use crate::{
    constants::{DEFAULTS_KEY, FORCE_CREATION_KEY, LOOKUP_KEY, USE_DEFAULT_NAME_KEY},
    text::normalize,
};

/// Default flag names in the current schema.
const DEFAULT_FLAGS: &[&str] = &[FORCE_CREATION_KEY, USE_DEFAULT_NAME_KEY];

/// Schema of a parsed config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Nothing but comments or whitespace
    Empty,
    /// Bare `nickname = "path"` pairs with no wrapper tables
    Flat,
    /// Wrapper tables present but `defaults` (or `lookup`) has the wrong shape
    Outdated,
    /// Matches the current schema exactly
    Current,
}

/// Result of upgrading a parsed config.
#[derive(Debug)]
pub struct Upgrade {
    pub config: Config,
    pub shape: Shape,
    /// Entries that could not be carried over
    pub dropped: Vec<String>,
    /// Lookup keys rewritten into normalized form (`old`, `new`)
    pub renamed: Vec<(String, String)>,
}

impl Upgrade {
    /// Returns true if the upgraded config differs from what is on disk.
    pub fn needs_save(&self) -> bool {
        self.shape != Shape::Current || !self.dropped.is_empty() || !self.renamed.is_empty()
    }
}

/// Detects the schema of a parsed config table.
pub fn detect_shape(table: &Table) -> Shape {
    if table.is_empty() {
        return Shape::Empty;
    }

    let lookup = table.get(LOOKUP_KEY);
    let defaults = table.get(DEFAULTS_KEY);

    if lookup.is_none() && defaults.is_none() {
        return Shape::Flat;
    }

    let only_known_keys = table
        .keys()
        .all(|key| key == LOOKUP_KEY || key == DEFAULTS_KEY);

    let lookup_ok = lookup.map_or(true, is_string_table);

    if only_known_keys && lookup_ok && defaults.is_some_and(is_current_defaults) {
        Shape::Current
    } else {
        Shape::Outdated
    }
}

fn is_current_defaults(value: &Value) -> bool {
    value.as_table().is_some_and(|defaults| {
        defaults.len() == DEFAULT_FLAGS.len()
            && DEFAULT_FLAGS
                .iter()
                .all(|flag| defaults.get(*flag).is_some_and(Value::is_bool))
    })
}

fn is_string_table(value: &Value) -> bool {
    value
        .as_table()
        .is_some_and(|table| table.values().all(Value::is_str))
}

/// Upgrades a parsed config table of any known shape.
pub fn upgrade(table: Table) -> Upgrade {
    let shape = detect_shape(&table);
    let mut dropped = Vec::new();

    let (defaults, raw_lookup) = match shape {
        Shape::Empty => (Defaults::default(), Table::new()),
        Shape::Flat => (Defaults::default(), table),
        Shape::Outdated | Shape::Current => merge_wrapped(table, &mut dropped),
    };

    let mut lookup = BTreeMap::new();
    for (key, value) in raw_lookup {
        match value {
            Value::String(path) => {
                lookup.insert(key, PathBuf::from(path));
            }
            _ => dropped.push(format!("{LOOKUP_KEY}.{key}")),
        }
    }

    let renamed = normalize_keys(&mut lookup, &mut dropped);

    Upgrade {
        config: Config { defaults, lookup },
        shape,
        dropped,
        renamed,
    }
}

/// Splits a wrapped config into its defaults and raw lookup table.
///
/// Known flags with boolean values are kept; anything else is reported as dropped.
fn merge_wrapped(table: Table, dropped: &mut Vec<String>) -> (Defaults, Table) {
    let mut defaults = Defaults::default();
    let mut raw_lookup = Table::new();

    for (key, value) in table {
        match (key.as_str(), value) {
            (LOOKUP_KEY, Value::Table(entries)) => raw_lookup = entries,
            (DEFAULTS_KEY, Value::Table(flags)) => {
                for (flag, value) in flags {
                    match (flag.as_str(), value.as_bool()) {
                        (FORCE_CREATION_KEY, Some(on)) => {
                            defaults.force_creation_of_new_directories = on;
                        }
                        (USE_DEFAULT_NAME_KEY, Some(on)) => defaults.use_default_lookup_name = on,
                        _ => dropped.push(format!("{DEFAULTS_KEY}.{flag}")),
                    }
                }
            }
            (other, _) => dropped.push(other.to_string()),
        }
    }

    (defaults, raw_lookup)
}

/// Rewrites lookup keys into normalized form.
///
/// On a collision the key that sorts first keeps the slot.
fn normalize_keys(
    lookup: &mut BTreeMap<String, PathBuf>,
    dropped: &mut Vec<String>,
) -> Vec<(String, String)> {
    let mut renamed = Vec::new();
    let mut normalized = BTreeMap::new();

    for (key, path) in std::mem::take(lookup) {
        let new_key = normalize(&key);
        if new_key.is_empty() || normalized.contains_key(&new_key) {
            dropped.push(format!("{LOOKUP_KEY}.{key}"));
            continue;
        }
        if new_key != key {
            renamed.push((key, new_key.clone()));
        }
        normalized.insert(new_key, path);
    }

    *lookup = normalized;
    renamed
}
