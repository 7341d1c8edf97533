//! Ranked spelling suggestions over the length index.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};

use crate::spelling::dictionary::Vocabulary;
use crate::spelling::levenshtein::LevenshteinMatcher;

/// Default maximum edit distance for suggestions.
pub const DEFAULT_MAX_DISTANCE: usize = 2;

/// Default maximum number of suggestions returned.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// A dictionary word within the edit distance threshold of a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Edit distance from the original word.
    pub distance: usize,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(word: impl Into<String>, distance: usize) -> Self {
        Suggestion {
            word: word.into(),
            distance,
        }
    }
}

impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        // Closest first, ties broken alphabetically
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Configuration for spelling suggestion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionConfig {
    /// Maximum edit distance to consider.
    pub max_distance: usize,
    /// Maximum number of suggestions to return.
    pub max_suggestions: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        SuggestionConfig {
            max_distance: DEFAULT_MAX_DISTANCE,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

/// Suggestion engine borrowing an immutable vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionEngine<'a> {
    vocabulary: &'a Vocabulary,
    config: SuggestionConfig,
}

impl<'a> SuggestionEngine<'a> {
    /// Create a new suggestion engine with the default configuration.
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        SuggestionEngine {
            vocabulary,
            config: SuggestionConfig::default(),
        }
    }

    /// Create a new suggestion engine with custom configuration.
    pub fn with_config(vocabulary: &'a Vocabulary, config: SuggestionConfig) -> Self {
        SuggestionEngine { vocabulary, config }
    }

    /// The engine's configuration.
    pub fn config(&self) -> SuggestionConfig {
        self.config
    }

    /// Suggestions for `word` using the configured limits.
    pub fn suggest(&self, word: &str) -> Vec<Suggestion> {
        self.suggest_with(word, self.config.max_distance, self.config.max_suggestions)
    }

    /// Suggestions for `word` within `max_distance`, at most `max_suggestions` of them.
    ///
    /// Only buckets whose length is within `max_distance` of the query's are
    /// scanned. A known word is returned as its own distance-0 suggestion; an
    /// empty result is not an error.
    pub fn suggest_with(
        &self,
        word: &str,
        max_distance: usize,
        max_suggestions: usize,
    ) -> Vec<Suggestion> {
        if max_suggestions == 0 {
            return Vec::new();
        }

        let matcher = LevenshteinMatcher::new(word.to_lowercase());

        // Max-heap holding the best `max_suggestions` seen so far.
        let capacity = max_suggestions.min(self.vocabulary.len());
        let mut best: BinaryHeap<Suggestion> = BinaryHeap::with_capacity(capacity);

        for candidate in self
            .vocabulary
            .candidates(matcher.query_len(), max_distance)
        {
            let Some(distance) = matcher.distance_within(candidate, max_distance) else {
                continue;
            };

            let suggestion = Suggestion::new(candidate, distance);
            if best.len() < max_suggestions {
                best.push(suggestion);
            } else if best.peek().is_some_and(|worst| suggestion < *worst) {
                best.pop();
                best.push(suggestion);
            }
        }

        best.into_sorted_vec()
    }

    /// Suggested words only, best first.
    pub fn suggest_words(
        &self,
        word: &str,
        max_distance: usize,
        max_suggestions: usize,
    ) -> Vec<String> {
        self.suggest_with(word, max_distance, max_suggestions)
            .into_iter()
            .map(|suggestion| suggestion.word)
            .collect()
    }

    /// The single best suggestion, if any.
    pub fn best(&self, word: &str, max_distance: usize) -> Option<String> {
        self.suggest_with(word, max_distance, 1)
            .into_iter()
            .next()
            .map(|suggestion| suggestion.word)
    }

    /// Check if a word exists in the vocabulary.
    pub fn is_correct(&self, word: &str) -> bool {
        self.vocabulary.contains(word)
    }
}
