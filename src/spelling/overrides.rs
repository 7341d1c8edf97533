//! Fixed substitutions for commonly confused words.
//!
//! These run before any dictionary lookup: a token whose clean key is in the
//! table is always replaced, even when the key is itself a known word.

use std::collections::BTreeMap;

use ahash::AHashMap;

use crate::spelling::dictionary::normalize_word;

/// Lookup table from a confused word to the word that should replace it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideTable {
    entries: AHashMap<String, String>,
}

impl OverrideTable {
    /// Create an empty table (no overrides).
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table of commonly misused words.
    pub fn common_misused() -> Self {
        Self::from_pairs([("see", "he"), ("goof", "good"), ("bay", "boy")])
    }

    /// Build a table from `(from, to)` pairs. Both sides are normalized.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut table = Self::new();
        for (from, to) in pairs {
            table.insert(from.as_ref(), to.as_ref());
        }
        table
    }

    /// Add or replace an override.
    pub fn insert(&mut self, from: &str, to: &str) {
        self.entries.insert(normalize_word(from), normalize_word(to));
    }

    /// Replacement for a lowercase clean key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of overrides.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by key.
    pub fn to_sorted(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|(from, to)| (from.clone(), to.clone()))
            .collect()
    }
}

impl From<BTreeMap<String, String>> for OverrideTable {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self::from_pairs(map)
    }
}
