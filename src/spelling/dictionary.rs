//! Active vocabulary: the dictionary set plus its length index.

use std::collections::BTreeMap;

use ahash::AHashSet;

/// Normalize a word for insertion or lookup: trim surrounding whitespace and lowercase.
pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Number of characters in a word, the unit used by the length index.
pub fn word_len(word: &str) -> usize {
    word.chars().count()
}

/// A merged, read-only set of known words partitioned by length.
///
/// A word of length `L` is stored in bucket `L` exactly when it is in the
/// dictionary. The index is built once and never mutated afterwards; changing
/// the selection of word lists builds a new `Vocabulary`.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Set of all words for fast lookup
    words: AHashSet<String>,
    /// Words grouped by character count, in first-seen order
    length_index: BTreeMap<usize, Vec<String>>,
    /// Names of the word lists merged into this vocabulary
    languages: Vec<String>,
}

impl Vocabulary {
    /// Create a new empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vocabulary from raw words. Words are normalized and deduplicated;
    /// entries that are empty after trimming are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = VocabularyBuilder::new();
        builder.extend(words);
        builder.build()
    }

    /// Check if a word exists in the vocabulary (case-insensitive).
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Dictionary words of exactly `len` characters.
    pub fn bucket(&self, len: usize) -> &[String] {
        self.length_index
            .get(&len)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Words whose length lies within `max_dist` of `len`, bucket by bucket.
    ///
    /// Lengths below zero are never looked up; absent buckets are skipped.
    pub fn candidates(&self, len: usize, max_dist: usize) -> impl Iterator<Item = &str> + '_ {
        let lower = len.saturating_sub(max_dist);
        let upper = len.saturating_add(max_dist);
        self.length_index
            .range(lower..=upper)
            .flat_map(|(_, bucket)| bucket.iter().map(String::as_str))
    }

    /// Get the total number of unique words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the vocabulary holds no words at all.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Names of the merged word lists, in selection order.
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Lengths that have a non-empty bucket, ascending.
    pub fn bucket_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.length_index.keys().copied()
    }

    /// All words, sorted.
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

/// Accumulates normalized words before freezing them into a [`Vocabulary`].
#[derive(Debug, Default)]
pub struct VocabularyBuilder {
    vocabulary: Vocabulary,
}

impl VocabularyBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the name of a word list merged into the vocabulary.
    pub fn language(&mut self, name: impl Into<String>) -> &mut Self {
        self.vocabulary.languages.push(name.into());
        self
    }

    /// Add a word. Returns `true` if it was not present yet.
    pub fn insert(&mut self, word: &str) -> bool {
        let normalized = normalize_word(word);
        if normalized.is_empty() || self.vocabulary.words.contains(&normalized) {
            return false;
        }

        self.vocabulary
            .length_index
            .entry(word_len(&normalized))
            .or_default()
            .push(normalized.clone());
        self.vocabulary.words.insert(normalized);
        true
    }

    /// Add many words, returning how many were new.
    pub fn extend<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .filter(|word| self.insert(word.as_ref()))
            .count()
    }

    /// Number of unique words collected so far.
    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Whether nothing has been collected yet.
    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }

    /// Freeze the collected words.
    pub fn build(self) -> Vocabulary {
        self.vocabulary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_basic_operations() {
        let vocab = Vocabulary::from_words(["cat", "dog"]);

        assert!(vocab.contains("CAT"));
        assert!(vocab.contains("dog"));
        assert!(!vocab.contains("bird"));
        assert_eq!(vocab.len(), 2);
        assert!(!vocab.is_empty());
    }

    #[test]
    fn test_vocabulary_normalizes_entries() {
        let vocab = Vocabulary::from_words(["  Hello\n", "WORLD", "hello", "", "   "]);

        assert_eq!(vocab.len(), 2);
        assert!(vocab.contains("hello"));
        assert!(vocab.contains("World"));
        assert!(!vocab.contains(""));
        assert_eq!(vocab.words(), vec!["hello", "world"]);
    }

    #[test]
    fn test_length_index_matches_dictionary() {
        let vocab = Vocabulary::from_words(["a", "ac", "cat", "cats", "dog", "cat"]);

        assert_eq!(vocab.bucket(1), ["a"]);
        assert_eq!(vocab.bucket(2), ["ac"]);
        assert_eq!(vocab.bucket(3), ["cat", "dog"]);
        assert_eq!(vocab.bucket(4), ["cats"]);
        assert!(vocab.bucket(5).is_empty());
        assert_eq!(vocab.bucket_lengths().collect::<Vec<_>>(), vec![1, 2, 3, 4]);

        let indexed: usize = vocab.bucket_lengths().map(|len| vocab.bucket(len).len()).sum();
        assert_eq!(indexed, vocab.len());
        for len in vocab.bucket_lengths() {
            for word in vocab.bucket(len) {
                assert!(vocab.contains(word));
                assert_eq!(word_len(word), len);
            }
        }
    }

    #[test]
    fn test_length_index_counts_characters() {
        let vocab = Vocabulary::from_words(["café"]);
        assert_eq!(vocab.bucket(4), ["café"]);
        assert!(vocab.bucket(5).is_empty());
    }

    #[test]
    fn test_candidates_range() {
        let vocab = Vocabulary::from_words(["a", "ac", "cat", "cats", "kitten"]);

        let near: Vec<&str> = vocab.candidates(2, 1).collect();
        assert_eq!(near, vec!["a", "ac", "cat"]);

        // Lower bound saturates instead of going negative.
        let short: Vec<&str> = vocab.candidates(0, 2).collect();
        assert_eq!(short, vec!["a", "ac"]);

        let exact: Vec<&str> = vocab.candidates(6, 0).collect();
        assert_eq!(exact, vec!["kitten"]);
    }

    #[test]
    fn test_builder_tracks_languages() {
        let mut builder = VocabularyBuilder::new();
        builder.language("en").language("de");
        assert_eq!(builder.extend(["haus", "house", "House"]), 2);
        assert!(builder.insert("maus"));
        assert!(!builder.insert("MAUS"));
        assert_eq!(builder.len(), 3);

        let vocab = builder.build();
        assert_eq!(vocab.languages(), ["en".to_string(), "de".to_string()]);
        assert!(vocab.contains("Maus"));
    }

    #[test]
    fn test_empty_vocabulary() {
        let vocab = Vocabulary::new();
        assert!(vocab.is_empty());
        assert_eq!(vocab.candidates(3, 2).count(), 0);
        assert!(!vocab.contains("anything"));
    }
}
