//! Key-value entries and per-file mappings

use serde::Serialize;
use std::collections::hash_map;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A single key-value pair read from a description file.
///
/// Keys are already lower-cased by the parser. Values keep their case and may
/// contain embedded newlines when they came from a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    key: String,
    value: String,
    source: PathBuf,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            source: source.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Description file this entry was read from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn is_multiline(&self) -> bool {
        self.value.contains('\n')
    }
}

/// Key to entry map for one description file, or the merged view of several.
///
/// Iteration order is unspecified. Callers that need a stable order sort.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    entries: HashMap<String, Entry>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing any entry already stored under its key.
    pub fn insert(&mut self, entry: Entry) -> Option<Entry> {
        self.entries.insert(entry.key.clone(), entry)
    }

    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// Value stored under `key`, if any.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(Entry::value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> hash_map::Values<'_, String, Entry> {
        self.entries.values()
    }

    /// Entries sorted by key.
    pub fn sorted(&self) -> Vec<&Entry> {
        let mut entries: Vec<&Entry> = self.entries.values().collect();
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        entries
    }
}

impl IntoIterator for Mapping {
    type Item = Entry;
    type IntoIter = hash_map::IntoValues<String, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values()
    }
}

impl FromIterator<Entry> for Mapping {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        let mut mapping = Mapping::new();
        for entry in iter {
            mapping.insert(entry);
        }
        mapping
    }
}
