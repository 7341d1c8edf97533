//! Named raw word lists that vocabularies are built from.
//!
//! A source exposes only two things: the names of the lists it has, and the raw
//! lines of each list. Raw entries may carry a decoration after a separator
//! (`colour/MS`, `word/123`), which [`clean_entry`] strips before indexing.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::spelling::dictionary::normalize_word;

/// Default separator between a word and its decoration.
pub const DEFAULT_SEPARATOR: char = '/';

/// File extensions picked up by [`WordLists::load_dir`].
pub const WORD_LIST_EXTENSIONS: &[&str] = &["txt", "dic"];

/// Supplies raw word lists by name.
pub trait VocabularySource {
    /// Names of all available lists, in a stable order.
    fn names(&self) -> Vec<String>;

    /// Raw lines of the named list, or `None` if no such list exists.
    fn lines(&self, name: &str) -> Option<&[String]>;

    /// Whether a list with this name exists.
    fn has(&self, name: &str) -> bool {
        self.lines(name).is_some()
    }
}

/// Strip the decoration after `separator`, trim and lowercase.
/// Returns `None` for entries that hold no word.
pub fn clean_entry(raw: &str, separator: char) -> Option<String> {
    let word = raw.split(separator).next().unwrap_or_default();
    let normalized = normalize_word(word);
    (!normalized.is_empty()).then_some(normalized)
}

/// In-memory word lists keyed by name.
#[derive(Debug, Clone, Default)]
pub struct WordLists {
    lists: BTreeMap<String, Vec<String>>,
}

impl WordLists {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a list.
    pub fn insert<N, I, S>(&mut self, name: N, lines: I)
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lists
            .insert(name.into(), lines.into_iter().map(Into::into).collect());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_list<N, I, S>(mut self, name: N, lines: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(name, lines);
        self
    }

    /// Load a list from a text file with one entry per line.
    pub fn load_file<N: Into<String>, P: AsRef<Path>>(&mut self, name: N, path: P) -> Result<()> {
        let name = name.into();
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);

        let mut lines = Vec::new();
        for line in reader.lines() {
            lines.push(line?);
        }

        debug!(
            "loaded word list '{}' from {} ({} lines)",
            name,
            path.as_ref().display(),
            lines.len()
        );
        self.lists.insert(name, lines);
        Ok(())
    }

    /// Load every word list file in a directory, naming each list after its file stem.
    /// Returns the number of lists loaded.
    pub fn load_dir<P: AsRef<Path>>(&mut self, dir: P) -> Result<usize> {
        let mut loaded = 0;

        for entry in fs::read_dir(dir.as_ref())? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }

            let is_word_list = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| WORD_LIST_EXTENSIONS.contains(&ext));
            if !is_word_list {
                continue;
            }

            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                self.load_file(stem.to_string(), &path)?;
                loaded += 1;
            }
        }

        Ok(loaded)
    }

    /// Number of lists.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Whether there are no lists at all.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

impl VocabularySource for WordLists {
    fn names(&self) -> Vec<String> {
        self.lists.keys().cloned().collect()
    }

    fn lines(&self, name: &str) -> Option<&[String]> {
        self.lists.get(name).map(Vec::as_slice)
    }
}
