//! Word-by-word correction of free-form text.
//!
//! Text is split on whitespace and re-joined with single spaces, so the
//! original spacing between tokens is not reproduced. Each token is resolved
//! by its clean key (edge punctuation stripped, lowercased):
//!
//! 1. a key found in the [`OverrideTable`] is replaced by its target;
//! 2. a key found in the vocabulary keeps the token exactly as written;
//! 3. otherwise the closest suggestion replaces it, if there is one.
//!
//! A token made only of punctuation has an empty key and goes through step 3
//! like any other unknown token. Replacements keep the token's surrounding
//! punctuation and, when the token started with an uppercase character, get
//! their first character uppercased.

use serde::{Deserialize, Serialize};

use crate::spelling::dictionary::Vocabulary;
use crate::spelling::overrides::OverrideTable;
use crate::spelling::suggest::{DEFAULT_MAX_DISTANCE, SuggestionEngine};

/// Characters stripped from both ends of a token to obtain its clean key.
pub const TRIM_PUNCTUATION: &[char] = &['.', ',', '!', '?', '"', '\''];

/// Configuration for the spelling corrector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectorConfig {
    /// Maximum edit distance for replacement suggestions.
    pub max_distance: usize,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig {
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}

/// Why a token was replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrectionKind {
    /// Fixed substitution from the override table.
    Override,
    /// Closest dictionary word.
    Suggestion,
}

/// A single replaced token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    /// The token as it appeared in the input.
    pub original: String,
    /// The token written to the output.
    pub replacement: String,
    /// Which rule produced the replacement.
    pub kind: CorrectionKind,
}

/// Result of correcting a piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionResult {
    /// Input text.
    pub original: String,
    /// Corrected tokens joined with single spaces.
    pub corrected: String,
    /// Number of tokens whose clean key is a known word.
    pub known_words: usize,
    /// Replaced tokens, in input order.
    pub corrections: Vec<Correction>,
}

impl CorrectionResult {
    /// Check if any token was replaced.
    pub fn has_corrections(&self) -> bool {
        !self.corrections.is_empty()
    }
}

/// A token split into leading punctuation, clean core and trailing punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenParts<'t> {
    pub prefix: &'t str,
    pub core: &'t str,
    pub suffix: &'t str,
}

impl<'t> TokenParts<'t> {
    /// Split `token` around its [`TRIM_PUNCTUATION`]-free core.
    pub fn split(token: &'t str) -> Self {
        let start_trimmed = token.trim_start_matches(TRIM_PUNCTUATION);
        let prefix = &token[..token.len() - start_trimmed.len()];
        let core = start_trimmed.trim_end_matches(TRIM_PUNCTUATION);
        let suffix = &start_trimmed[core.len()..];

        TokenParts {
            prefix,
            core,
            suffix,
        }
    }

    /// Lowercased core used for lookups.
    pub fn key(&self) -> String {
        self.core.to_lowercase()
    }
}

/// Clean comparison key of a token.
pub fn clean_key(token: &str) -> String {
    TokenParts::split(token).key()
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn starts_uppercase(token: &str) -> bool {
    token.chars().next().is_some_and(char::is_uppercase)
}

/// Count tokens of `text` whose clean key is in the vocabulary.
pub fn count_known(vocabulary: &Vocabulary, text: &str) -> usize {
    text.split_whitespace()
        .map(clean_key)
        .filter(|key| !key.is_empty() && vocabulary.contains(key))
        .count()
}

/// Applies overrides and suggestions across text.
#[derive(Debug, Clone)]
pub struct SpellingCorrector {
    overrides: OverrideTable,
    config: CorrectorConfig,
}

impl SpellingCorrector {
    /// Create a corrector with the built-in override table.
    pub fn new() -> Self {
        Self::with_overrides(OverrideTable::common_misused())
    }

    /// Create a corrector with a custom override table.
    pub fn with_overrides(overrides: OverrideTable) -> Self {
        Self::with_config(overrides, CorrectorConfig::default())
    }

    /// Create a corrector with custom overrides and configuration.
    pub fn with_config(overrides: OverrideTable, config: CorrectorConfig) -> Self {
        SpellingCorrector { overrides, config }
    }

    /// The override table in use.
    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }

    /// The corrector configuration.
    pub fn config(&self) -> CorrectorConfig {
        self.config
    }

    /// Correct `text` with the configured maximum distance.
    pub fn correct(&self, vocabulary: &Vocabulary, text: &str) -> CorrectionResult {
        self.correct_with(vocabulary, text, self.config.max_distance)
    }

    /// Correct `text`, looking for replacements within `max_distance`.
    pub fn correct_with(
        &self,
        vocabulary: &Vocabulary,
        text: &str,
        max_distance: usize,
    ) -> CorrectionResult {
        let engine = SuggestionEngine::new(vocabulary);
        let mut tokens = Vec::new();
        let mut corrections = Vec::new();
        let mut known_words = 0;

        for token in text.split_whitespace() {
            let parts = TokenParts::split(token);
            let key = parts.key();

            let known = vocabulary.contains(&key);
            if known {
                known_words += 1;
            }

            let replacement = if let Some(target) = self.overrides.get(&key) {
                Some((target.to_string(), CorrectionKind::Override))
            } else if known {
                None
            } else {
                engine
                    .best(&key, max_distance)
                    .map(|word| (word, CorrectionKind::Suggestion))
            };

            match replacement {
                Some((word, kind)) => {
                    let word = if starts_uppercase(token) {
                        capitalize_first(&word)
                    } else {
                        word
                    };
                    let replaced = format!("{}{}{}", parts.prefix, word, parts.suffix);

                    corrections.push(Correction {
                        original: token.to_string(),
                        replacement: replaced.clone(),
                        kind,
                    });
                    tokens.push(replaced);
                }
                None => tokens.push(token.to_string()),
            }
        }

        CorrectionResult {
            original: text.to_string(),
            corrected: tokens.join(" "),
            known_words,
            corrections,
        }
    }

    /// Corrected text only.
    pub fn correct_text(&self, vocabulary: &Vocabulary, text: &str) -> String {
        self.correct(vocabulary, text).corrected
    }

    /// Corrected text only, with an explicit maximum distance.
    pub fn correct_text_with(
        &self,
        vocabulary: &Vocabulary,
        text: &str,
        max_distance: usize,
    ) -> String {
        self.correct_with(vocabulary, text, max_distance).corrected
    }
}

impl Default for SpellingCorrector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_vocabulary() -> Vocabulary {
        Vocabulary::from_words(["good", "he", "boy", "i", "a"])
    }

    #[test]
    fn test_token_parts() {
        let parts = TokenParts::split("\"Bay.\"");
        assert_eq!(parts.prefix, "\"");
        assert_eq!(parts.core, "Bay");
        assert_eq!(parts.suffix, ".\"");
        assert_eq!(parts.key(), "bay");

        let parts = TokenParts::split("...");
        assert_eq!(parts.prefix, "...");
        assert_eq!(parts.core, "");
        assert_eq!(parts.suffix, "");

        assert_eq!(clean_key("Hello,"), "hello");
        assert_eq!(clean_key("don't"), "don't");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("boy"), "Boy");
        assert_eq!(capitalize_first("éclair"), "Éclair");
        assert_eq!(capitalize_first("mcDonald"), "McDonald");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_override_scenario() {
        let vocab = scenario_vocabulary();
        let corrector = SpellingCorrector::new();

        let result = corrector.correct(&vocab, "I see a goof Bay.");
        assert_eq!(result.corrected, "I he a good Boy.");
        assert_eq!(result.known_words, 2);
        assert_eq!(result.corrections.len(), 3);
        assert!(
            result
                .corrections
                .iter()
                .all(|c| c.kind == CorrectionKind::Override)
        );
        assert_eq!(result.corrections[2].original, "Bay.");
        assert_eq!(result.corrections[2].replacement, "Boy.");
    }

    #[test]
    fn test_unknown_single_letter_goes_through_suggest() {
        let vocab = Vocabulary::from_words(["good", "he", "boy"]);
        let corrector = SpellingCorrector::new();

        // "i" is unknown; "he" is the only word within distance 2.
        assert_eq!(corrector.correct_text(&vocab, "I see"), "He he");
    }

    #[test]
    fn test_override_wins_over_known_word() {
        let vocab = Vocabulary::from_words(["see", "he"]);
        let corrector = SpellingCorrector::new();

        assert_eq!(corrector.correct_text(&vocab, "see"), "he");
        assert_eq!(count_known(&vocab, "see"), 1);
    }

    #[test]
    fn test_suggestion_replacement() {
        let vocab = Vocabulary::from_words(["hello", "world", "help"]);
        let corrector = SpellingCorrector::with_overrides(OverrideTable::new());

        let result = corrector.correct(&vocab, "Helo wrld!");
        assert_eq!(result.corrected, "Hello world!");
        assert_eq!(result.known_words, 0);
        assert_eq!(
            result.corrections,
            vec![
                Correction {
                    original: "Helo".to_string(),
                    replacement: "Hello".to_string(),
                    kind: CorrectionKind::Suggestion,
                },
                Correction {
                    original: "wrld!".to_string(),
                    replacement: "world!".to_string(),
                    kind: CorrectionKind::Suggestion,
                },
            ]
        );
    }

    #[test]
    fn test_known_tokens_unchanged() {
        let vocab = Vocabulary::from_words(["hello", "world"]);
        let corrector = SpellingCorrector::with_overrides(OverrideTable::new());

        // Known tokens keep their original casing, even mid-word.
        assert_eq!(
            corrector.correct_text(&vocab, "HeLLo, WORLD!"),
            "HeLLo, WORLD!"
        );
    }

    #[test]
    fn test_no_suggestion_keeps_token() {
        let vocab = Vocabulary::from_words(["hello"]);
        let corrector = SpellingCorrector::with_overrides(OverrideTable::new());

        let result = corrector.correct(&vocab, "Xyzzy...");
        assert_eq!(result.corrected, "Xyzzy...");
        assert!(!result.has_corrections());
    }

    #[test]
    fn test_whitespace_is_collapsed() {
        let vocab = Vocabulary::from_words(["one", "two"]);
        let corrector = SpellingCorrector::new();

        assert_eq!(corrector.correct_text(&vocab, "  one \t\n two  "), "one two");
        assert_eq!(corrector.correct_text(&vocab, ""), "");
        assert_eq!(corrector.correct_text(&vocab, "   "), "");
    }

    #[test]
    fn test_punctuation_only_tokens_go_through_suggest() {
        let vocab = Vocabulary::from_words(["a", "he"]);
        let corrector = SpellingCorrector::new();

        // The empty key is within distance 1 of "a" and 2 of "he".
        let result = corrector.correct(&vocab, "he ... he");
        assert_eq!(result.corrected, "he ...a he");
        assert_eq!(result.known_words, 2);
        assert_eq!(result.corrections[0].original, "...");
        assert_eq!(result.corrections[0].kind, CorrectionKind::Suggestion);

        // Nothing short enough: the token stays as it is.
        let vocab = Vocabulary::from_words(["hello"]);
        assert_eq!(corrector.correct_text(&vocab, "hello !?"), "hello !?");
    }

    #[test]
    fn test_only_basic_punctuation_is_trimmed() {
        let vocab = Vocabulary::from_words(["word", "words"]);
        let corrector = SpellingCorrector::with_overrides(OverrideTable::new());

        assert_eq!(clean_key("word;"), "word;");
        assert_eq!(clean_key("(word)"), "(word)");
        assert_eq!(count_known(&vocab, "word;"), 0);
        assert_eq!(corrector.correct_text(&vocab, "word;"), "word");
        assert_eq!(corrector.correct_text(&vocab, "\"Word!\""), "\"Word!\"");
    }

    #[test]
    fn test_max_distance_limits_replacements() {
        let vocab = Vocabulary::from_words(["hello"]);
        let corrector = SpellingCorrector::with_overrides(OverrideTable::new());

        assert_eq!(corrector.correct_text_with(&vocab, "hxllx", 1), "hxllx");
        assert_eq!(corrector.correct_text_with(&vocab, "hxllx", 2), "hello");
    }

    #[test]
    fn test_idempotent_on_correct_text() {
        let vocab = Vocabulary::from_words(["the", "quick", "brown", "fox"]);
        let corrector = SpellingCorrector::new();

        let text = "The quick, brown fox!";
        let once = corrector.correct_text(&vocab, text);
        let twice = corrector.correct_text(&vocab, &once);
        assert_eq!(once, text);
        assert_eq!(twice, text);
    }

    #[test]
    fn test_count_known() {
        let vocab = Vocabulary::from_words(["good", "boy"]);

        assert_eq!(count_known(&vocab, "Good boy, goof boy!"), 3);
        assert_eq!(count_known(&vocab, ""), 0);
        assert_eq!(count_known(&vocab, "... !!"), 0);
    }
}
