//! Language selection and the active vocabulary.
//!
//! [`build_vocabulary`] merges up to `max_selected` named word lists into a
//! fresh [`Vocabulary`]. [`SpellChecker`] keeps the active one behind an
//! `Arc` and replaces it wholesale on every successful selection, so queries
//! always run against a complete snapshot and a failed selection leaves the
//! previous vocabulary in effect.

use std::sync::Arc;

use ahash::AHashSet;
use log::{debug, info, warn};
use parking_lot::RwLock;

use crate::config::{DEFAULT_MAX_SELECTED, SpellConfig};
use crate::error::{Result, SpellError};
use crate::spelling::corrector::{CorrectionResult, SpellingCorrector, count_known};
use crate::spelling::dictionary::{Vocabulary, VocabularyBuilder};
use crate::spelling::source::{DEFAULT_SEPARATOR, VocabularySource, WordLists, clean_entry};
use crate::spelling::suggest::{Suggestion, SuggestionConfig, SuggestionEngine};

/// Merge the named lists of `source` into a new vocabulary.
///
/// Fails with a configuration error, before reading any list, when more than
/// `max_selected` names are requested, a name is repeated, or a name is not
/// provided by the source.
pub fn build_vocabulary<S, N>(
    source: &S,
    names: &[N],
    max_selected: usize,
    separator: char,
) -> Result<Vocabulary>
where
    S: VocabularySource + ?Sized,
    N: AsRef<str>,
{
    if names.len() > max_selected {
        return Err(SpellError::configuration(format!(
            "{} word lists requested but at most {} can be selected",
            names.len(),
            max_selected
        )));
    }

    let mut seen = AHashSet::new();
    let mut lists = Vec::with_capacity(names.len());
    for name in names {
        let name = name.as_ref();
        if !seen.insert(name) {
            return Err(SpellError::configuration(format!(
                "word list '{name}' selected more than once"
            )));
        }
        let lines = source.lines(name).ok_or_else(|| {
            SpellError::not_found(format!(
                "word list '{}' (available: {})",
                name,
                source.names().join(", ")
            ))
        })?;
        lists.push((name, lines));
    }

    let mut builder = VocabularyBuilder::new();
    for (name, lines) in lists {
        builder.language(name);
        let added = builder.extend(lines.iter().filter_map(|line| clean_entry(line, separator)));
        if added == 0 {
            warn!("word list '{name}' contributed no new words");
        }
        debug!("merged word list '{}': {} new words", name, added);
    }

    let vocabulary = builder.build();
    debug!(
        "built vocabulary [{}]: {} words in {} length buckets",
        vocabulary.languages().join(", "),
        vocabulary.len(),
        vocabulary.bucket_lengths().count()
    );
    Ok(vocabulary)
}

/// Spell checker over a set of word lists, with one active selection at a time.
pub struct SpellChecker<S: VocabularySource = WordLists> {
    source: S,
    max_selected: usize,
    separator: char,
    suggestion_config: SuggestionConfig,
    corrector: SpellingCorrector,
    active: RwLock<Arc<Vocabulary>>,
}

impl<S: VocabularySource> SpellChecker<S> {
    /// Create a checker with default settings and an empty active vocabulary.
    pub fn new(source: S) -> Self {
        SpellChecker {
            source,
            max_selected: DEFAULT_MAX_SELECTED,
            separator: DEFAULT_SEPARATOR,
            suggestion_config: SuggestionConfig::default(),
            corrector: SpellingCorrector::new(),
            active: RwLock::new(Arc::new(Vocabulary::new())),
        }
    }

    /// Create a checker using `config`, without activating any list.
    pub fn with_config(source: S, config: &SpellConfig) -> Self {
        SpellChecker {
            source,
            max_selected: config.max_selected,
            separator: config.separator,
            suggestion_config: config.suggestion_config(),
            corrector: SpellingCorrector::with_config(
                config.override_table(),
                config.corrector_config(),
            ),
            active: RwLock::new(Arc::new(Vocabulary::new())),
        }
    }

    /// Create a checker using `config` and activate its languages, or the
    /// default selection when it names none.
    pub fn from_config(source: S, config: &SpellConfig) -> Result<Self> {
        config.validate()?;
        let checker = Self::with_config(source, config);

        if config.languages.is_empty() {
            checker.set_languages(&checker.default_selection())?;
        } else {
            checker.set_languages(&config.languages)?;
        }
        Ok(checker)
    }

    /// Replace the override table used by text correction.
    pub fn with_corrector(mut self, corrector: SpellingCorrector) -> Self {
        self.corrector = corrector;
        self
    }

    /// Names of all available word lists.
    pub fn available(&self) -> Vec<String> {
        self.source.names()
    }

    /// The first `max_selected` available lists, by name.
    pub fn default_selection(&self) -> Vec<String> {
        let mut names = self.source.names();
        names.truncate(self.max_selected);
        names
    }

    /// Maximum number of lists that can be active at once.
    pub fn max_selected(&self) -> usize {
        self.max_selected
    }

    /// Suggestion limits used by [`suggest`](Self::suggest).
    pub fn suggestion_config(&self) -> SuggestionConfig {
        self.suggestion_config
    }

    /// The text corrector.
    pub fn corrector(&self) -> &SpellingCorrector {
        &self.corrector
    }

    /// Build a vocabulary from `names` and make it the active one.
    ///
    /// On error the previously active vocabulary stays in effect.
    pub fn set_languages<N: AsRef<str>>(&self, names: &[N]) -> Result<Arc<Vocabulary>> {
        let vocabulary = Arc::new(build_vocabulary(
            &self.source,
            names,
            self.max_selected,
            self.separator,
        )?);

        *self.active.write() = Arc::clone(&vocabulary);
        info!(
            "active vocabulary: [{}] ({} words)",
            vocabulary.languages().join(", "),
            vocabulary.len()
        );
        Ok(vocabulary)
    }

    /// Snapshot of the active vocabulary.
    pub fn vocabulary(&self) -> Arc<Vocabulary> {
        Arc::clone(&self.active.read())
    }

    /// Names of the active lists.
    pub fn languages(&self) -> Vec<String> {
        self.vocabulary().languages().to_vec()
    }

    /// Check if a word is in the active vocabulary.
    pub fn contains(&self, word: &str) -> bool {
        self.vocabulary().contains(word)
    }

    /// Ranked suggestions with the configured limits.
    pub fn suggest(&self, word: &str) -> Vec<Suggestion> {
        let vocabulary = self.vocabulary();
        SuggestionEngine::with_config(&vocabulary, self.suggestion_config).suggest(word)
    }

    /// Ranked suggestions with explicit limits.
    pub fn suggest_with(
        &self,
        word: &str,
        max_distance: usize,
        max_suggestions: usize,
    ) -> Vec<Suggestion> {
        let vocabulary = self.vocabulary();
        SuggestionEngine::new(&vocabulary).suggest_with(word, max_distance, max_suggestions)
    }

    /// Correct text against the active vocabulary.
    pub fn correct(&self, text: &str) -> CorrectionResult {
        self.corrector.correct(&self.vocabulary(), text)
    }

    /// Corrected text only.
    pub fn correct_text(&self, text: &str) -> String {
        self.correct(text).corrected
    }

    /// Count tokens of `text` that are already known words.
    pub fn count_known(&self, text: &str) -> usize {
        count_known(&self.vocabulary(), text)
    }
}
